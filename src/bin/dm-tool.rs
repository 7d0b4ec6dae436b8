use anyhow::Result;
use clap::Parser;
use dm_tool::{
    cli::{Cli, Command},
    dm::{self, BusType, DmTool},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dm_tool::tracing_subscriber::init(cli.debug);

    let bus = if cli.session_bus {
        BusType::Session
    } else {
        BusType::System
    };
    let dm = DmTool::new(dm::connect(bus).await?);

    match cli.command {
        Command::SwitchToGreeter => dm.switch_to_greeter().await?,
        Command::SwitchToUser { username, session } => {
            dm.switch_to_user(&username, session.as_deref()).await?;
        }
        Command::SwitchToGuest { session } => dm.switch_to_guest(session.as_deref()).await?,
        Command::Lock => dm.lock().await?,
        Command::ListSeats => {
            for seat in dm.list_seats().await? {
                println!("{seat}");
            }
        }
        Command::AddNestedSeat { xephyr_args } => {
            println!("{}", dm.add_nested_seat(&xephyr_args).await?);
        }
        Command::AddLocalXSeat { display_number } => {
            println!("{}", dm.add_local_x_seat(display_number).await?);
        }
        Command::AddSeat {
            seat_type,
            properties,
        } => {
            println!("{}", dm.add_seat(&seat_type, &properties).await?);
        }
    }

    Ok(())
}

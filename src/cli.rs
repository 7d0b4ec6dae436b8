use clap::{ArgAction, Parser, Subcommand};

use crate::seat::SeatProperty;

/// Display Manager tool.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show release version.
    #[arg(
        short = 'v',
        long,
        action = ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    version: Option<bool>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Use the session D-Bus instead of the system one.
    #[arg(long)]
    pub session_bus: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The eight operations the display manager exposes to us, with their exact
/// argument counts. clap owns the usage errors, so a malformed invocation
/// never reaches the bus.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Switch to the greeter.
    SwitchToGreeter,

    /// Switch to a user session.
    SwitchToUser {
        username: String,
        session: Option<String>,
    },

    /// Switch to a guest session.
    SwitchToGuest { session: Option<String> },

    /// Lock the current seat.
    Lock,

    /// List the active seats.
    ListSeats,

    /// Start a nested display.
    AddNestedSeat {
        /// Extra arguments for the nested X server.
        #[arg(
            value_name = "XEPHYR_ARGS",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        xephyr_args: Vec<String>,
    },

    /// Add a local X seat.
    AddLocalXSeat { display_number: i32 },

    /// Add a dynamic seat.
    AddSeat {
        #[arg(value_name = "TYPE")]
        seat_type: String,

        #[arg(value_name = "KEY=VALUE")]
        properties: Vec<SeatProperty>,
    },
}

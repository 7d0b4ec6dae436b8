use anyhow::Result;
use tracing::debug;
use zbus::{zvariant::OwnedObjectPath, Connection};

use crate::{
    proxies::{DisplayManagerProxy, SeatProxy},
    seat::{self, SeatProperty},
};

/// Which message bus the display manager is reached on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BusType {
    #[default]
    System,
    Session,
}

/// Open the one bus connection used for the lifetime of the process.
pub async fn connect(bus: BusType) -> Result<Connection> {
    let connection = match bus {
        BusType::System => Connection::system().await?,
        BusType::Session => Connection::session().await?,
    };
    debug!("Connected to the {bus:?} bus.");

    Ok(connection)
}

/// Façade over the display manager's D-Bus interface.
///
/// One method per command; every method performs exactly one remote call
/// and surfaces the daemon's reply (or error) unmodified.
#[derive(Debug)]
pub struct DmTool {
    connection: Connection,
}

impl DmTool {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    pub async fn switch_to_greeter(&self) -> Result<()> {
        self.seat().await?.switch_to_greeter().await?;

        Ok(())
    }

    /// An omitted session means the user's default session.
    pub async fn switch_to_user(&self, username: &str, session: Option<&str>) -> Result<()> {
        self.seat()
            .await?
            .switch_to_user(username, session.unwrap_or(""))
            .await?;

        Ok(())
    }

    pub async fn switch_to_guest(&self, session: Option<&str>) -> Result<()> {
        self.seat()
            .await?
            .switch_to_guest(session.unwrap_or(""))
            .await?;

        Ok(())
    }

    pub async fn lock(&self) -> Result<()> {
        self.seat().await?.lock().await?;

        Ok(())
    }

    /// Seat object paths known to the daemon, in reply order.
    pub async fn list_seats(&self) -> Result<Vec<OwnedObjectPath>> {
        let seats = self.display_manager().await?.list_seats().await?;

        Ok(seats)
    }

    /// Ask the daemon for a nested display.
    ///
    /// The daemon launches the nested X server itself; the arguments are
    /// handed over as a single space-joined property.
    pub async fn add_nested_seat(&self, xephyr_args: &[String]) -> Result<OwnedObjectPath> {
        let args = xephyr_args.join(" ");
        let path = self
            .display_manager()
            .await?
            .add_seat("xephyr", &[("xephyr-args", args.as_str())])
            .await?;

        Ok(path)
    }

    pub async fn add_local_x_seat(&self, display_number: i32) -> Result<OwnedObjectPath> {
        let path = self
            .display_manager()
            .await?
            .add_local_x_seat(display_number)
            .await?;

        Ok(path)
    }

    /// Add a dynamic seat of the given type. Properties go through verbatim
    /// and in order; the daemon is the authority on their meaning.
    pub async fn add_seat(
        &self,
        seat_type: &str,
        properties: &[SeatProperty],
    ) -> Result<OwnedObjectPath> {
        let properties: Vec<(&str, &str)> = properties
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        let path = self
            .display_manager()
            .await?
            .add_seat(seat_type, &properties)
            .await?;

        Ok(path)
    }

    async fn display_manager(&self) -> Result<DisplayManagerProxy<'static>> {
        DisplayManagerProxy::new(&self.connection)
            .await
            .map_err(Into::into)
    }

    async fn seat(&self) -> Result<SeatProxy<'static>> {
        let path = seat::current_seat_path()?;
        debug!("Using seat `{path}`.");

        SeatProxy::builder(&self.connection)
            .path(path)?
            .build()
            .await
            .map_err(Into::into)
    }
}

//! Client-side declarations of the display manager's D-Bus interfaces.

use zbus::{proxy, zvariant::OwnedObjectPath};

#[proxy(
    interface = "org.freedesktop.DisplayManager",
    default_service = "org.freedesktop.DisplayManager",
    default_path = "/org/freedesktop/DisplayManager",
    gen_blocking = false
)]
pub trait DisplayManager {
    /// Seat object paths, in the order the daemon reports them.
    fn list_seats(&self) -> zbus::Result<Vec<OwnedObjectPath>>;

    fn add_local_x_seat(&self, display_number: i32) -> zbus::Result<OwnedObjectPath>;

    /// `properties` is passed through verbatim, preserving order.
    fn add_seat(
        &self,
        seat_type: &str,
        properties: &[(&str, &str)],
    ) -> zbus::Result<OwnedObjectPath>;
}

#[proxy(
    interface = "org.freedesktop.DisplayManager.Seat",
    default_service = "org.freedesktop.DisplayManager",
    gen_blocking = false
)]
pub trait Seat {
    fn switch_to_greeter(&self) -> zbus::Result<()>;

    /// An empty `session_name` means the user's default session.
    fn switch_to_user(&self, username: &str, session_name: &str) -> zbus::Result<()>;

    fn switch_to_guest(&self, session_name: &str) -> zbus::Result<()>;

    fn lock(&self) -> zbus::Result<()>;
}

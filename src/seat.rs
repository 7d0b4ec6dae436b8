use std::{env, str::FromStr};

use anyhow::{bail, Result};
use zbus::zvariant::OwnedObjectPath;

/// Object-path prefix under which the display manager exposes its seats.
pub const SEAT_PATH_PREFIX: &str = "/org/freedesktop/DisplayManager/Seat";

/// The seat the calling process runs under.
///
/// The display manager hands the seat's object path to sessions it spawns
/// through `XDG_SEAT_PATH`. Values outside the display manager's seat
/// namespace are rejected.
pub fn current_seat_path() -> Result<OwnedObjectPath> {
    let path = match env::var("XDG_SEAT_PATH") {
        Ok(path) if path.starts_with(SEAT_PATH_PREFIX) => path,
        _ => bail!("Not running inside a display manager: XDG_SEAT_PATH is unset or invalid"),
    };

    OwnedObjectPath::try_from(path).map_err(Into::into)
}

/// A single `KEY=VALUE` seat property, as accepted by `AddSeat`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatProperty {
    pub key: String,
    pub value: String,
}

impl FromStr for SeatProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the first `=` separates: values are free to contain more.
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(format!("`{s}` is not a KEY=VALUE property")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_splits_on_first_equals() {
        let prop: SeatProperty = "xserver-command=X -core".parse().unwrap();
        assert_eq!(prop.key, "xserver-command");
        assert_eq!(prop.value, "X -core");

        let prop: SeatProperty = "greeter-wrapper=env FOO=bar greeter".parse().unwrap();
        assert_eq!(prop.key, "greeter-wrapper");
        assert_eq!(prop.value, "env FOO=bar greeter");
    }

    #[test]
    fn property_value_may_be_empty() {
        let prop: SeatProperty = "autologin-user=".parse().unwrap();
        assert_eq!(prop.key, "autologin-user");
        assert_eq!(prop.value, "");
    }

    #[test]
    fn malformed_property_is_rejected() {
        assert!("autologin-user".parse::<SeatProperty>().is_err());
        assert!("=guest".parse::<SeatProperty>().is_err());
    }

    // Single test for all `XDG_SEAT_PATH` cases: the variable is process
    // global, so the checks have to run sequentially.
    #[test]
    fn seat_path_comes_from_environment() {
        env::set_var("XDG_SEAT_PATH", "/org/freedesktop/DisplayManager/Seat0");
        assert_eq!(
            current_seat_path().unwrap().as_str(),
            "/org/freedesktop/DisplayManager/Seat0"
        );

        env::set_var("XDG_SEAT_PATH", "/org/example/NotASeat");
        assert!(current_seat_path().is_err());

        env::remove_var("XDG_SEAT_PATH");
        assert!(current_seat_path().is_err());
    }
}

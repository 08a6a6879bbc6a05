//! ACPI device power states.

use core::fmt;

/// A device power state, from fully on (`D0`) to fully off (`D3cold`).
///
/// Ordering follows power consumption: `D0 < D1 < D2 < D3hot < D3cold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum DevicePowerState {
    /// Fully on.
    D0 = 0,
    /// Light sleep, device-class defined.
    D1 = 1,
    /// Deeper sleep, device-class defined.
    D2 = 2,
    /// Off, but auxiliary power remains so the device can be re-enumerated.
    D3Hot = 3,
    /// Off with main power removed.
    D3Cold = 4,
}

impl DevicePowerState {
    /// Returns the name used by the ACPI specification.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::D0 => "D0",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3Hot => "D3hot",
            Self::D3Cold => "D3cold",
        }
    }

    /// Returns `true` for the two `D3` states.
    #[must_use]
    pub const fn is_off(self) -> bool {
        matches!(self, Self::D3Hot | Self::D3Cold)
    }
}

impl fmt::Display for DevicePowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

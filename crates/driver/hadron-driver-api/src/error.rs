//! Driver error types.

use core::fmt;

use hadron_acpi::AcpiError;

/// Errors that can occur during driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The device is absent, not described by firmware, or not supported
    /// by this driver.
    DeviceNotFound,
    /// Memory for per-device state could not be allocated.
    OutOfMemory,
    /// Driver initialization failed.
    InitFailed,
    /// A hardware operation timed out.
    Timeout,
    /// The requested operation is not supported by this driver.
    Unsupported,
    /// An I/O error occurred during a hardware operation.
    IoError,
    /// The driver is not in a valid state for this operation.
    InvalidState,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotFound => f.write_str("no such device"),
            Self::OutOfMemory => f.write_str("out of memory"),
            Self::InitFailed => f.write_str("driver initialization failed"),
            Self::Timeout => f.write_str("hardware operation timed out"),
            Self::Unsupported => f.write_str("operation not supported"),
            Self::IoError => f.write_str("I/O error"),
            Self::InvalidState => f.write_str("invalid driver state"),
        }
    }
}

/// Firmware failures all mean the device cannot be driven as described.
impl From<AcpiError> for DriverError {
    fn from(_: AcpiError) -> Self {
        Self::DeviceNotFound
    }
}

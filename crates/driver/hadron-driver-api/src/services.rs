//! Kernel service contracts for drivers.
//!
//! Drivers use [`DriverServices`] to reach kernel infrastructure (the ACPI
//! runtime, shared protocol cores) without depending on the kernel crate
//! directly.

use hadron_acpi::AcpiRuntime;

use crate::hid::I2cHidCore;

/// Trait providing kernel services to drivers.
///
/// Implemented by the kernel and passed to every driver callback.
pub trait DriverServices: Send + Sync {
    /// Returns the ACPI runtime.
    fn acpi(&self) -> &dyn AcpiRuntime;

    /// Returns the HID-over-I2C core driver.
    fn i2c_hid_core(&self) -> &dyn I2cHidCore;
}

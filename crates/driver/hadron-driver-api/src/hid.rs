//! HID-over-I2C core driver contract.
//!
//! The transport-agnostic HID-over-I2C protocol (descriptor fetch, report
//! I/O, reset and power commands) lives in a core driver. Firmware-specific
//! front ends (ACPI, device tree) find the HID descriptor register, handle
//! platform power quirks, then hand the device to the core through
//! [`I2cHidCore`]. The core calls back into the front end through the
//! [`I2cHidSubclass`] object it receives at probe time.

use alloc::sync::Arc;

use crate::error::DriverError;
use crate::i2c::I2cClient;

/// Platform hooks a firmware front end provides to the core driver.
pub trait I2cHidSubclass: Send + Sync {
    /// Makes sure the device is powered before the core talks to it.
    ///
    /// Called on every power-on path, so it must be cheap once the device
    /// is up.
    fn power_up_device(&self) -> Result<(), DriverError>;

    /// Lets the platform cut power after the core has put the device to sleep.
    fn power_down_device(&self) {}
}

/// Entry points of the HID-over-I2C core driver.
pub trait I2cHidCore: Send + Sync {
    /// Binds the core to `client`.
    ///
    /// `hid_descriptor_address` is the register holding the HID descriptor.
    /// The core keeps `subclass` for as long as it drives the device.
    fn probe(
        &self,
        client: &Arc<I2cClient>,
        subclass: Arc<dyn I2cHidSubclass>,
        hid_descriptor_address: u16,
    ) -> Result<(), DriverError>;

    /// Unbinds the core from `client`.
    fn remove(&self, client: &I2cClient) -> Result<(), DriverError>;

    /// Quiesces the device for system power-off.
    fn shutdown(&self, client: &I2cClient) -> Result<(), DriverError>;

    /// Puts the device to sleep for system suspend.
    fn suspend(&self, client: &I2cClient) -> Result<(), DriverError>;

    /// Restores the device after system resume.
    fn resume(&self, client: &I2cClient) -> Result<(), DriverError>;
}

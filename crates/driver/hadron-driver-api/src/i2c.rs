//! I2C client handles and device ID tables.
//!
//! The I2C bus framework creates one [`I2cClient`] per enumerated slave and
//! hands it to the matched driver. The client outlives every driver callback;
//! per-device driver state is attached to it as a device-managed resource and
//! dropped when the framework releases the client's resources on unbind.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use hadron_acpi::AcpiHandle;
use spin::Mutex;

use crate::error::DriverError;

/// Entry in a driver's I2C device ID table.
///
/// Matched against the client name assigned by board code or enumeration
/// (e.g. `"hid"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cDeviceId {
    /// Device name to match.
    pub name: &'static str,
}

impl I2cDeviceId {
    /// Creates a table entry.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Finds the first entry in `table` named exactly `name`.
#[must_use]
pub fn match_id<'t>(table: &'t [I2cDeviceId], name: &str) -> Option<&'t I2cDeviceId> {
    table.iter().find(|id| id.name == name)
}

/// A device-managed resource, kept alive until the client's resources are released.
pub type DevRes = Arc<dyn Any + Send + Sync>;

/// An I2C slave device as seen by its driver.
pub struct I2cClient {
    name: String,
    addr: u16,
    acpi_companion: Option<AcpiHandle>,
    wakeup_capable: AtomicBool,
    wakeup_enabled: AtomicBool,
    devres: Mutex<Vec<DevRes>>,
}

impl I2cClient {
    /// Creates a client with no firmware description.
    pub fn new(name: impl Into<String>, addr: u16) -> Self {
        Self {
            name: name.into(),
            addr,
            acpi_companion: None,
            wakeup_capable: AtomicBool::new(false),
            wakeup_enabled: AtomicBool::new(false),
            devres: Mutex::new(Vec::new()),
        }
    }

    /// Associates the ACPI namespace node describing this device.
    #[must_use]
    pub fn with_acpi_companion(mut self, handle: AcpiHandle) -> Self {
        self.acpi_companion = Some(handle);
        self
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 7-bit slave address.
    #[must_use]
    pub fn addr(&self) -> u16 {
        self.addr
    }

    /// Returns the ACPI companion node, if firmware describes this device.
    #[must_use]
    pub fn acpi_companion(&self) -> Option<AcpiHandle> {
        self.acpi_companion
    }

    // ── Wakeup ───────────────────────────────────────────────────────

    /// Declares whether the device can wake the system.
    ///
    /// Clearing the capability also disables wakeup.
    pub fn set_wakeup_capable(&self, capable: bool) {
        self.wakeup_capable.store(capable, Ordering::Release);
        if !capable {
            self.wakeup_enabled.store(false, Ordering::Release);
        }
    }

    /// Enables or disables wakeup for the device.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::InvalidState`] when enabling wakeup on a
    /// device that is not wake-capable.
    pub fn set_wakeup_enable(&self, enable: bool) -> Result<(), DriverError> {
        if enable && !self.wakeup_capable() {
            return Err(DriverError::InvalidState);
        }
        self.wakeup_enabled.store(enable, Ordering::Release);
        Ok(())
    }

    /// Returns `true` if the device may wake the system.
    #[must_use]
    pub fn wakeup_capable(&self) -> bool {
        self.wakeup_capable.load(Ordering::Acquire)
    }

    /// Returns `true` if wakeup is currently enabled.
    #[must_use]
    pub fn wakeup_enabled(&self) -> bool {
        self.wakeup_enabled.load(Ordering::Acquire)
    }

    // ── Device-managed resources ─────────────────────────────────────

    /// Reserves room for one more device-managed resource.
    ///
    /// After a successful reservation the next [`devres_add`](Self::devres_add)
    /// does not allocate.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::OutOfMemory`] if the resource list cannot grow.
    pub fn devres_reserve(&self) -> Result<(), DriverError> {
        self.devres
            .lock()
            .try_reserve(1)
            .map_err(|_| DriverError::OutOfMemory)
    }

    /// Ties `res` to this client until its resources are released.
    pub fn devres_add(&self, res: DevRes) {
        self.devres.lock().push(res);
    }

    /// Returns the number of live device-managed resources.
    #[must_use]
    pub fn devres_count(&self) -> usize {
        self.devres.lock().len()
    }

    /// Drops every device-managed resource, newest first.
    ///
    /// Called by the bus framework after `remove` or a failed `probe`.
    pub fn devres_release_all(&self) {
        let mut released = core::mem::take(&mut *self.devres.lock());
        // Drop outside the lock: a resource's destructor may touch the client.
        while let Some(res) = released.pop() {
            drop(res);
        }
    }
}

impl fmt::Display for I2cClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for I2cClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I2cClient")
            .field("name", &self.name)
            .field("addr", &format_args!("{:#04x}", self.addr))
            .field("acpi_companion", &self.acpi_companion)
            .field("wakeup_capable", &self.wakeup_capable())
            .field("wakeup_enabled", &self.wakeup_enabled())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Weak;

    #[test]
    fn match_id_exact_first_wins() {
        let table = [I2cDeviceId::new("hid"), I2cDeviceId::new("hid-over-i2c")];
        assert_eq!(match_id(&table, "hid-over-i2c"), Some(&table[1]));
        assert_eq!(match_id(&table, "hid"), Some(&table[0]));
        assert_eq!(match_id(&table, "hid-"), None);
    }

    #[test]
    fn wakeup_requires_capability() {
        let client = I2cClient::new("i2c-ELAN0001:00", 0x15);
        assert_eq!(client.set_wakeup_enable(true), Err(DriverError::InvalidState));

        client.set_wakeup_capable(true);
        assert!(client.wakeup_capable());
        assert!(!client.wakeup_enabled());
        client.set_wakeup_enable(true).unwrap();
        assert!(client.wakeup_enabled());

        client.set_wakeup_capable(false);
        assert!(!client.wakeup_enabled());
    }

    #[test]
    fn devres_lives_until_release() {
        let client = I2cClient::new("i2c-ELAN0001:00", 0x15);
        let res: Arc<u32> = Arc::new(7);
        let weak: Weak<u32> = Arc::downgrade(&res);

        client.devres_reserve().unwrap();
        client.devres_add(res);
        assert_eq!(client.devres_count(), 1);
        assert!(weak.upgrade().is_some());

        client.devres_release_all();
        assert_eq!(client.devres_count(), 0);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn display_is_name() {
        let client = I2cClient::new("i2c-SYNA7813:00", 0x20)
            .with_acpi_companion(AcpiHandle::new(3));
        assert_eq!(client.to_string(), "i2c-SYNA7813:00");
        assert_eq!(client.acpi_companion(), Some(AcpiHandle::new(3)));
        assert_eq!(client.addr(), 0x20);
    }
}

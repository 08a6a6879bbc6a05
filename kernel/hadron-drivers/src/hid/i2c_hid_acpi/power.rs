//! Per-device ACPI context handed to the HID-over-I2C core.

use alloc::sync::{Arc, Weak};
use core::sync::atomic::{AtomicBool, Ordering};

use hadron_acpi::AcpiRuntime;
use hadron_core::dev_dbg;
use hadron_driver_api::{DriverError, I2cClient, I2cHidSubclass};

/// ACPI front-end state for one bound client.
///
/// Owned by the client's device-managed resources and shared with the core
/// driver, which calls back through [`I2cHidSubclass`]. The context only
/// observes the client, it never keeps it alive.
pub struct I2cHidAcpi {
    client: Weak<I2cClient>,
    acpi: &'static dyn AcpiRuntime,
    power_fixed: AtomicBool,
}

impl I2cHidAcpi {
    /// Creates the context for `client`.
    #[must_use]
    pub fn new(client: &Arc<I2cClient>, acpi: &'static dyn AcpiRuntime) -> Self {
        Self {
            client: Arc::downgrade(client),
            acpi,
            power_fixed: AtomicBool::new(false),
        }
    }

    /// Returns `true` once the first power-up has run.
    #[must_use]
    pub fn power_fixed(&self) -> bool {
        self.power_fixed.load(Ordering::Acquire)
    }
}

impl I2cHidSubclass for I2cHidAcpi {
    /// Syncs the companion's recorded power state with the hardware on the
    /// first power-up; later calls return immediately.
    ///
    /// Some firmware leaves the device in D3 at boot while reporting D0, so
    /// the first transition the core requests would otherwise be skipped.
    fn power_up_device(&self) -> Result<(), DriverError> {
        if self.power_fixed.load(Ordering::Acquire) {
            return Ok(());
        }
        // The flag is claimed before the fix-up runs: a power-up re-entered
        // from inside the fix-up, or racing on another CPU, sees it set.
        if self.power_fixed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let Some(client) = self.client.upgrade() else {
            return Ok(());
        };
        if let Some(handle) = client.acpi_companion() {
            self.acpi.fix_up_power(handle);
            dev_dbg!(client, "ACPI power state fixed up");
        }
        Ok(())
    }
}

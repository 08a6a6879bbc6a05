//! Linker-section-based driver registration types and macros.
//!
//! Driver crates use [`i2c_driver_entry!`] to place a static
//! [`I2cDriverEntry`] into the `.hadron_i2c_drivers` linker section. The I2C
//! bus framework iterates that section when a client appears, matches the
//! client against each entry's tables and invokes the entry's callbacks --
//! no runtime registry needed.

use alloc::sync::Arc;

use hadron_acpi::id::match_device_ids;
use hadron_acpi::{AcpiMatchId, AcpiRuntime};

use crate::error::DriverError;
use crate::i2c::{match_id, I2cClient, I2cDeviceId};
use crate::services::DriverServices;

/// How the bus framework schedules a driver's probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeType {
    /// Probe synchronously during enumeration.
    Synchronous,
    /// Probe may be deferred to a worker so enumeration is not held up.
    PreferAsynchronous,
}

/// Per-device callback signature used by [`I2cDriverEntry`] and [`DevPmOps`].
pub type I2cCallback = fn(&I2cClient, &'static dyn DriverServices) -> Result<(), DriverError>;

/// System sleep callbacks.
pub struct DevPmOps {
    /// Called before the system enters a sleep state.
    pub suspend: I2cCallback,
    /// Called after the system leaves a sleep state.
    pub resume: I2cCallback,
}

/// Why a client was bound to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cMatch {
    /// The client's ACPI companion reported a listed `_HID` / `_CID`.
    Acpi(&'static AcpiMatchId),
    /// The client's name is listed in the I2C ID table.
    Id(&'static I2cDeviceId),
}

/// I2C driver entry placed in the `.hadron_i2c_drivers` linker section.
#[repr(C)]
pub struct I2cDriverEntry {
    /// Driver name (for logging).
    pub name: &'static str,
    /// Probe scheduling preference.
    pub probe_type: ProbeType,
    /// ACPI identities this driver binds to.
    pub acpi_match_table: &'static [AcpiMatchId],
    /// I2C device names this driver binds to.
    pub id_table: &'static [I2cDeviceId],
    /// Called when a matching client is found.
    ///
    /// `id` is the matched I2C ID table entry, `None` for firmware matches.
    pub probe: fn(
        &Arc<I2cClient>,
        Option<&'static I2cDeviceId>,
        &'static dyn DriverServices,
    ) -> Result<(), DriverError>,
    /// Called when the client is unbound.
    pub remove: I2cCallback,
    /// Called at system power-off.
    pub shutdown: Option<fn(&I2cClient, &'static dyn DriverServices)>,
    /// System sleep callbacks.
    pub pm: Option<&'static DevPmOps>,
}

impl I2cDriverEntry {
    /// Decides whether this driver handles `client`.
    ///
    /// A client with an ACPI companion is matched by the companion's
    /// identities; the name-based ID table is the fallback for clients
    /// firmware does not describe or whose identities are not listed.
    #[must_use]
    pub fn match_client(&self, client: &I2cClient, acpi: &dyn AcpiRuntime) -> Option<I2cMatch> {
        let acpi_match = client
            .acpi_companion()
            .and_then(|handle| acpi.device_ids(handle).ok())
            .and_then(|ids| match_device_ids(self.acpi_match_table, &ids));
        if let Some(id) = acpi_match {
            return Some(I2cMatch::Acpi(id));
        }

        match_id(self.id_table, client.name()).map(I2cMatch::Id)
    }
}

/// Register an I2C driver entry in the `.hadron_i2c_drivers` linker section.
///
/// # Example
///
/// ```ignore
/// hadron_driver_api::i2c_driver_entry!(MY_DRIVER, I2cDriverEntry {
///     name: "my_i2c_driver",
///     probe_type: ProbeType::Synchronous,
///     acpi_match_table: &[AcpiMatchId::new("ABCD0001")],
///     id_table: &[I2cDeviceId::new("my-device")],
///     probe: my_probe_fn,
///     remove: my_remove_fn,
///     shutdown: None,
///     pm: None,
/// });
/// ```
#[macro_export]
macro_rules! i2c_driver_entry {
    ($name:ident, $entry:expr) => {
        #[used]
        #[unsafe(link_section = ".hadron_i2c_drivers")]
        pub static $name: $crate::registration::I2cDriverEntry = $entry;
    };
}

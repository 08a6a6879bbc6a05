//! HID over I2C ACPI driver.
//!
//! Binds I2C clients that ACPI describes as HID-over-I2C devices (`_CID`
//! `PNP0C50` / `ACPI0C50`). The driver itself speaks no HID: it reads the
//! HID descriptor register from the device's `_DSM`, negotiates low-power
//! S0 wakeup, supplies the ACPI power fix-up, and hands the device to the
//! HID-over-I2C core. Every later lifecycle event is forwarded to the core.

pub mod blacklist;
pub mod descriptor;
pub mod power;

use alloc::sync::Arc;

use hadron_acpi::{AcpiMatchId, DevicePowerState, FadtFlags};
use hadron_core::{dev_dbg, dev_warn};
use hadron_driver_api::{
    DevPmOps, DriverError, DriverServices, I2cClient, I2cDeviceId, I2cDriverEntry, ProbeType,
};

pub use self::power::I2cHidAcpi;

/// Driver name.
pub const DRIVER_NAME: &str = "i2c_hid_acpi";

/// One-line driver description.
pub const DRIVER_DESCRIPTION: &str = "HID over I2C ACPI driver";

/// ACPI identities of HID-over-I2C devices.
pub static I2C_HID_ACPI_MATCH: &[AcpiMatchId] =
    &[AcpiMatchId::new("ACPI0C50"), AcpiMatchId::new("PNP0C50")];

/// Client names bound when firmware does not identify the device.
pub static I2C_HID_ACPI_ID_TABLE: &[I2cDeviceId] =
    &[I2cDeviceId::new("hid"), I2cDeviceId::new("hid-over-i2c")];

// ── Lifecycle ───────────────────────────────────────────────────────────

/// Binds `client`.
///
/// The context is attached to the client's device-managed resources only
/// once the descriptor address is known, so a failed lookup leaves nothing
/// behind. Errors from the core driver are returned unchanged.
///
/// # Errors
///
/// Returns [`DriverError::OutOfMemory`] if per-device state cannot be
/// allocated, [`DriverError::DeviceNotFound`] if the descriptor address
/// cannot be determined, or whatever the core's probe returns.
pub fn probe(
    client: &Arc<I2cClient>,
    _id: Option<&'static I2cDeviceId>,
    services: &'static dyn DriverServices,
) -> Result<(), DriverError> {
    let acpi = services.acpi();

    client.devres_reserve()?;
    let ihid_acpi = Arc::new(I2cHidAcpi::new(client, acpi));

    let hid_descriptor_address = descriptor::get_descriptor(client, acpi)?;

    if acpi.fadt_flags().contains(FadtFlags::LOW_POWER_S0) {
        // Low-power S0 idle: the device may wake the system, but wakeup
        // stays off until userspace asks for it.
        client.set_wakeup_capable(true);
        client.set_wakeup_enable(false)?;
        dev_dbg!(client, "low-power S0 platform, wakeup capable");
    }

    client.devres_add(ihid_acpi.clone());
    services
        .i2c_hid_core()
        .probe(client, ihid_acpi, hid_descriptor_address)?;
    dev_dbg!(client, "bound to HID-over-I2C core");
    Ok(())
}

/// Unbinds `client`.
///
/// # Errors
///
/// Returns the core driver's error unchanged.
pub fn remove(client: &I2cClient, services: &'static dyn DriverServices) -> Result<(), DriverError> {
    services.i2c_hid_core().remove(client)
}

/// Quiesces `client` and cuts its power for system power-off.
///
/// Failures are logged and otherwise ignored: power-off proceeds regardless.
pub fn shutdown(client: &I2cClient, services: &'static dyn DriverServices) {
    if let Err(err) = services.i2c_hid_core().shutdown(client) {
        dev_warn!(client, "core shutdown failed: {}", err);
    }

    let Some(handle) = client.acpi_companion() else {
        return;
    };
    let state = DevicePowerState::D3Cold;
    if let Err(err) = services.acpi().set_power(handle, state) {
        dev_warn!(client, "could not enter {}: {}", state, err);
    }
}

/// Forwards system suspend to the core driver.
///
/// # Errors
///
/// Returns the core driver's error unchanged.
pub fn suspend(client: &I2cClient, services: &'static dyn DriverServices) -> Result<(), DriverError> {
    services.i2c_hid_core().suspend(client)
}

/// Forwards system resume to the core driver.
///
/// # Errors
///
/// Returns the core driver's error unchanged.
pub fn resume(client: &I2cClient, services: &'static dyn DriverServices) -> Result<(), DriverError> {
    services.i2c_hid_core().resume(client)
}

// ── Registration ────────────────────────────────────────────────────────

/// System sleep callbacks, shared with the core driver.
pub static I2C_HID_ACPI_PM: DevPmOps = DevPmOps { suspend, resume };

hadron_driver_api::i2c_driver_entry!(
    I2C_HID_ACPI_DRIVER,
    I2cDriverEntry {
        name: DRIVER_NAME,
        probe_type: ProbeType::PreferAsynchronous,
        acpi_match_table: I2C_HID_ACPI_MATCH,
        id_table: I2C_HID_ACPI_ID_TABLE,
        probe,
        remove,
        shutdown: Some(shutdown),
        pm: Some(&I2C_HID_ACPI_PM),
    }
);

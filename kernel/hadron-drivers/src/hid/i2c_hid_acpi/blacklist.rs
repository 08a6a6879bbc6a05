//! Devices that advertise HID-over-I2C compatibility but must not be bound.

use hadron_acpi::id::match_device_ids;
use hadron_acpi::{AcpiMatchId, HardwareId};

/// ACPI identities rejected before any firmware method runs.
pub static I2C_HID_ACPI_BLACKLIST: &[AcpiMatchId] = &[
    // Chipone ICN8505 touchscreen: lists PNP0C50 as _CID but needs its own driver.
    AcpiMatchId::new("CHPN0001"),
];

/// Returns the blacklist entry hit by any of `ids`, if one is.
#[must_use]
pub fn blocked_by(ids: &[HardwareId]) -> Option<&'static AcpiMatchId> {
    match_device_ids(I2C_HID_ACPI_BLACKLIST, ids)
}

/// Returns `true` if any of `ids` is blacklisted.
#[must_use]
pub fn is_blocked(ids: &[HardwareId]) -> bool {
    blocked_by(ids).is_some()
}

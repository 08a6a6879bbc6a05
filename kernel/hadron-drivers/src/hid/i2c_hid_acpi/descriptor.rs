//! HID descriptor register lookup through the device's `_DSM`.
//!
//! The HID-over-I2C protocol specification reserves a `_DSM` function that
//! returns the register address of the HID descriptor. The address is the
//! only thing the core driver needs from firmware to start talking to the
//! device.

use hadron_acpi::dsm::{evaluate_dsm_typed, DsmRequest};
use hadron_acpi::{AcpiError, AcpiRuntime, Guid, ObjectType};
use hadron_core::{dev_dbg, dev_err};
use hadron_driver_api::{DriverError, I2cClient};

use super::blacklist;

/// `_DSM` UUID for HID over I2C: `3CDFF6F7-4267-4555-AD05-B30A3D8938DE`.
pub const I2C_HID_DSM_GUID: Guid = Guid::new(
    0x3CDF_F6F7,
    0x4267,
    0x4555,
    [0xAD, 0x05, 0xB3, 0x0A, 0x3D, 0x89, 0x38, 0xDE],
);

/// `_DSM` revision implemented by HID-over-I2C firmware.
pub const I2C_HID_DSM_REVISION: u64 = 1;

/// `_DSM` function index returning the HID descriptor address.
pub const I2C_HID_DSM_HID_DESCRIPTOR: u64 = 1;

/// Finds the HID descriptor register of `client`.
///
/// Blacklisted devices are turned away before `_DSM` runs. Firmware returns
/// a full integer; only the low 16 bits form the register address.
///
/// # Errors
///
/// Returns [`DriverError::DeviceNotFound`] if the client has no usable ACPI
/// companion, is blacklisted, or `_DSM` fails or does not return an integer.
pub fn get_descriptor(client: &I2cClient, acpi: &dyn AcpiRuntime) -> Result<u16, DriverError> {
    let companion = client
        .acpi_companion()
        .ok_or(AcpiError::InvalidHandle)
        .and_then(|handle| Ok((handle, acpi.device_ids(handle)?)));
    let (handle, ids) = match companion {
        Ok(found) => found,
        Err(err) => {
            dev_err!(client, "could not get ACPI device: {}", err);
            return Err(DriverError::DeviceNotFound);
        }
    };

    if let Some(entry) = blacklist::blocked_by(&ids) {
        dev_dbg!(client, "{} is blacklisted, not binding", entry.id);
        return Err(DriverError::DeviceNotFound);
    }

    let request = DsmRequest::new(
        &I2C_HID_DSM_GUID,
        I2C_HID_DSM_REVISION,
        I2C_HID_DSM_HID_DESCRIPTOR,
    );
    let object = evaluate_dsm_typed(acpi, handle, &request, ObjectType::Integer).map_err(|err| {
        dev_err!(client, "_DSM call to get HID descriptor address failed: {}", err);
        DriverError::from(err)
    })?;
    let value = object.integer().ok_or(DriverError::DeviceNotFound)?;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the descriptor register is 16 bits wide"
    )]
    let address = value as u16;
    dev_dbg!(client, "HID descriptor at register {:#06x}", address);
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{bare_client, client, MockServices, COMPANION};
    use hadron_acpi::{AcpiObject, HardwareId};
    use std::string::String;
    use std::vec;

    #[test]
    fn dsm_guid_bytes() {
        assert_eq!(
            I2C_HID_DSM_GUID.to_bytes(),
            [
                0xF7, 0xF6, 0xDF, 0x3C, 0x67, 0x42, 0x55, 0x45, 0xAD, 0x05, 0xB3, 0x0A, 0x3D,
                0x89, 0x38, 0xDE
            ]
        );
    }

    #[test]
    fn returns_address_and_releases_result() {
        let services = MockServices::new().dsm(Ok(Some(AcpiObject::Integer(0x0020)))).leak();
        let client = client();

        assert_eq!(get_descriptor(&client, &services.acpi), Ok(0x0020));
        assert_eq!(services.acpi.outstanding(), 0);
        assert_eq!(services.acpi.freed(), 1);
    }

    #[test]
    fn sends_hid_over_i2c_request() {
        let services = MockServices::new().leak();
        get_descriptor(&client(), &services.acpi).unwrap();

        let seen = services.acpi.last_dsm().unwrap();
        assert_eq!(seen.handle, COMPANION);
        assert_eq!(seen.guid, I2C_HID_DSM_GUID);
        assert_eq!(seen.revision, 1);
        assert_eq!(seen.function, 1);
        assert!(!seen.has_args);
    }

    #[test]
    fn wide_values_are_narrowed_to_16_bits() {
        let services = MockServices::new()
            .dsm(Ok(Some(AcpiObject::Integer(0x0001_2345))))
            .leak();
        assert_eq!(get_descriptor(&client(), &services.acpi), Ok(0x2345));
    }

    #[test]
    fn non_integer_result_is_rejected_and_released() {
        let services = MockServices::new()
            .dsm(Ok(Some(AcpiObject::Buffer(vec![0x01, 0x00]))))
            .leak();
        assert_eq!(
            get_descriptor(&client(), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert_eq!(services.acpi.outstanding(), 0);

        let services = MockServices::new()
            .dsm(Ok(Some(AcpiObject::String(String::from("0x20")))))
            .leak();
        assert_eq!(
            get_descriptor(&client(), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert_eq!(services.acpi.outstanding(), 0);
    }

    #[test]
    fn missing_dsm_fails() {
        let services = MockServices::new().dsm(Err(AcpiError::NotFound)).leak();
        assert_eq!(
            get_descriptor(&client(), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert_eq!(services.acpi.dsm_calls(), 1);
        assert_eq!(services.acpi.freed(), 0);
    }

    #[test]
    fn empty_dsm_result_fails() {
        let services = MockServices::new().dsm(Ok(None)).leak();
        assert_eq!(
            get_descriptor(&client(), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
    }

    #[test]
    fn blacklisted_device_never_reaches_dsm() {
        let services = MockServices::new()
            .ids(Ok(vec![HardwareId::string("CHPN0001"), HardwareId::eisa("PNP0C50")]))
            .leak();
        assert_eq!(
            get_descriptor(&client(), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert_eq!(services.acpi.dsm_calls(), 0);
    }

    #[test]
    fn client_without_companion_fails() {
        let services = MockServices::new().leak();
        assert_eq!(
            get_descriptor(&bare_client("hid"), &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert!(services.journal().is_empty());
    }

    #[test]
    fn unresolvable_companion_fails() {
        let services = MockServices::new().leak();
        let client = I2cClient::new("i2c-ELAN0001:00", 0x15)
            .with_acpi_companion(hadron_acpi::AcpiHandle::new(0xdead));
        assert_eq!(
            get_descriptor(&client, &services.acpi),
            Err(DriverError::DeviceNotFound)
        );
        assert_eq!(services.acpi.dsm_calls(), 0);
    }
}

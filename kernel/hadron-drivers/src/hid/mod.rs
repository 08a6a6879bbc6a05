//! HID transport drivers.

pub mod i2c_hid_acpi;

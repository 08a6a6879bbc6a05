//! Driver API types and traits for Hadron OS.
//!
//! This crate defines the contract between the kernel's bus frameworks and
//! the drivers bound by them:
//!
//! - [`error`] -- the [`DriverError`] every driver callback reports.
//! - [`i2c`] -- the I2C client handle handed to drivers and its device ID table type.
//! - [`hid`] -- the HID-over-I2C core driver and the subclass hooks it calls back into.
//! - [`services`] -- kernel services reachable from driver callbacks.
//! - [`registration`] -- linker-section driver registration.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod hid;
pub mod i2c;
pub mod registration;
pub mod services;

// Re-export all public types at the crate root for ergonomic imports.
pub use error::DriverError;
pub use hid::{I2cHidCore, I2cHidSubclass};
pub use i2c::{I2cClient, I2cDeviceId};
pub use registration::{DevPmOps, I2cDriverEntry, I2cMatch, ProbeType};
pub use services::DriverServices;

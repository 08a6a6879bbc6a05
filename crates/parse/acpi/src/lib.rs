//! `hadron-acpi` --- ACPI types shared between the firmware runtime and drivers.
//!
//! The kernel's ACPI runtime owns the namespace and the AML interpreter; this
//! crate only defines the contract drivers program against:
//!
//! - [`id`] -- `_HID` / `_CID` values and static match tables.
//! - [`guid`] -- 128-bit identifiers used to name `_DSM` interfaces.
//! - [`object`] -- values returned by evaluated control methods.
//! - [`dsm`] -- typed `_DSM` evaluation with guaranteed release of the result.
//! - [`power`] -- device power states (`D0` .. `D3cold`).
//! - [`fadt`] -- FADT fixed feature flags.
//! - [`runtime`] -- the [`AcpiRuntime`] trait implemented by the kernel.
//!
//! # Usage
//!
//! ```ignore
//! let request = DsmRequest::new(&MY_GUID, 1, 1);
//! let result = dsm::evaluate_dsm_typed(runtime, handle, &request, ObjectType::Integer)?;
//! let value = result.integer();
//! // `result` hands the object back to the runtime when dropped.
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use core::fmt;

pub mod dsm;
pub mod fadt;
pub mod guid;
pub mod id;
pub mod object;
pub mod power;
pub mod runtime;

// Re-export key types at crate root for convenience.
pub use dsm::{DsmRequest, FirmwareObject};
pub use fadt::FadtFlags;
pub use guid::Guid;
pub use id::{AcpiMatchId, EisaId, HardwareId, InlineString};
pub use object::{AcpiObject, ObjectType};
pub use power::DevicePowerState;
pub use runtime::AcpiRuntime;

/// Opaque reference to a node in the ACPI namespace.
///
/// Handles are minted by the [`AcpiRuntime`] and are only meaningful to the
/// runtime that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcpiHandle(u64);

impl AcpiHandle {
    /// Wraps a runtime-specific node reference.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the runtime-specific node reference.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Errors reported by ACPI table parsing and namespace evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcpiError {
    /// The checksum of a table did not validate (sum != 0).
    InvalidChecksum,
    /// The table signature did not match the expected value.
    InvalidSignature,
    /// A table or structure was too short to contain the expected data.
    TruncatedData,
    /// The handle does not refer to a device node in the namespace.
    InvalidHandle,
    /// The requested object or control method does not exist.
    NotFound,
    /// The control method ran but did not return a value.
    NoValue,
    /// The returned object did not have the requested type.
    TypeMismatch {
        /// Type the caller asked for.
        expected: ObjectType,
        /// Type the firmware actually returned.
        found: ObjectType,
    },
    /// The AML interpreter failed while executing the method.
    EvaluationFailed,
}

impl fmt::Display for AcpiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChecksum => f.write_str("invalid table checksum"),
            Self::InvalidSignature => f.write_str("unexpected table signature"),
            Self::TruncatedData => f.write_str("truncated table data"),
            Self::InvalidHandle => f.write_str("handle is not a namespace device"),
            Self::NotFound => f.write_str("object not found"),
            Self::NoValue => f.write_str("method returned no value"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected} object, found {found}")
            }
            Self::EvaluationFailed => f.write_str("AML evaluation failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_roundtrips_raw_value() {
        let handle = AcpiHandle::new(0xdead_beef);
        assert_eq!(handle.raw(), 0xdead_beef);
    }

    #[test]
    fn type_mismatch_display_names_both_types() {
        let err = AcpiError::TypeMismatch {
            expected: ObjectType::Integer,
            found: ObjectType::Buffer,
        };
        assert_eq!(format!("{err}"), "expected Integer object, found Buffer");
    }
}

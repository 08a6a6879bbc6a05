//! The ACPI runtime contract.
//!
//! The kernel owns the namespace and the AML interpreter and exposes them to
//! drivers through [`AcpiRuntime`]. Drivers never see interpreter internals,
//! only handles, identities and returned objects.

use alloc::vec::Vec;

use crate::dsm::DsmRequest;
use crate::fadt::FadtFlags;
use crate::id::HardwareId;
use crate::object::AcpiObject;
use crate::power::DevicePowerState;
use crate::{AcpiError, AcpiHandle};

/// Services provided by the kernel's ACPI runtime.
///
/// Implementations must be callable from any thread that runs driver
/// probe, remove or power-management callbacks.
pub trait AcpiRuntime: Send + Sync {
    /// Returns the identities of the device node behind `handle`: `_HID`
    /// first, followed by each `_CID` in firmware order.
    ///
    /// Returns [`AcpiError::InvalidHandle`] if `handle` does not resolve to
    /// a device node.
    fn device_ids(&self, handle: AcpiHandle) -> Result<Vec<HardwareId>, AcpiError>;

    /// Evaluates `_DSM` under `handle`.
    ///
    /// Returns `Ok(None)` if the method ran without returning a value. A
    /// returned object must be handed back with [`free_object`](Self::free_object).
    fn evaluate_dsm(
        &self,
        handle: AcpiHandle,
        request: &DsmRequest<'_>,
    ) -> Result<Option<AcpiObject>, AcpiError>;

    /// Releases an object previously returned by this runtime.
    fn free_object(&self, object: AcpiObject);

    /// Brings the node's recorded power state in line with the hardware
    /// (evaluating `_PSC` / `_STA` and the power resources as needed).
    ///
    /// Errors are absorbed by the runtime.
    fn fix_up_power(&self, handle: AcpiHandle);

    /// Transitions the node to `state` through `_PSx` and its power resources.
    fn set_power(&self, handle: AcpiHandle, state: DevicePowerState) -> Result<(), AcpiError>;

    /// Returns the feature flags of the FADT in use.
    fn fadt_flags(&self) -> FadtFlags;
}

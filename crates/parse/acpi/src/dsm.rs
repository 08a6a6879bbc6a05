//! Device Specific Method (`_DSM`) evaluation.
//!
//! A `_DSM` call is addressed by a UUID, a revision and a function index.
//! [`evaluate_dsm_typed`] performs the call through the [`AcpiRuntime`],
//! checks the result type and wraps the result in a [`FirmwareObject`], which
//! hands the object back to the runtime when it goes out of scope. Every
//! object the runtime produces is therefore released exactly once, whether
//! the caller succeeds, bails out with `?`, or the type check fails.

use core::mem::ManuallyDrop;
use core::ops::Deref;

use crate::guid::Guid;
use crate::object::{AcpiObject, ObjectType};
use crate::runtime::AcpiRuntime;
use crate::{AcpiError, AcpiHandle};

/// Arguments of a single `_DSM` invocation.
#[derive(Debug, Clone, Copy)]
pub struct DsmRequest<'a> {
    /// Interface UUID (`Arg0`).
    pub guid: &'a Guid,
    /// Interface revision (`Arg1`).
    pub revision: u64,
    /// Function index (`Arg2`).
    pub function: u64,
    /// Function-specific package (`Arg3`), `None` for an empty package.
    pub args: Option<&'a AcpiObject>,
}

impl<'a> DsmRequest<'a> {
    /// Creates a request with no function arguments.
    #[must_use]
    pub const fn new(guid: &'a Guid, revision: u64, function: u64) -> Self {
        Self {
            guid,
            revision,
            function,
            args: None,
        }
    }

    /// Attaches a function-specific argument package.
    #[must_use]
    pub const fn with_args(mut self, args: &'a AcpiObject) -> Self {
        self.args = Some(args);
        self
    }
}

/// An object returned by the runtime, released back to it on drop.
pub struct FirmwareObject<'r> {
    object: ManuallyDrop<AcpiObject>,
    runtime: &'r dyn AcpiRuntime,
}

impl<'r> FirmwareObject<'r> {
    /// Takes ownership of `object` on behalf of `runtime`.
    pub fn new(runtime: &'r dyn AcpiRuntime, object: AcpiObject) -> Self {
        Self {
            object: ManuallyDrop::new(object),
            runtime,
        }
    }

    /// Returns the value if the object is an integer.
    #[must_use]
    pub fn integer(&self) -> Option<u64> {
        self.object.as_integer()
    }
}

impl Deref for FirmwareObject<'_> {
    type Target = AcpiObject;

    fn deref(&self) -> &AcpiObject {
        &self.object
    }
}

impl Drop for FirmwareObject<'_> {
    fn drop(&mut self) {
        // SAFETY: `object` is never touched again after this point.
        let object = unsafe { ManuallyDrop::take(&mut self.object) };
        self.runtime.free_object(object);
    }
}

impl core::fmt::Debug for FirmwareObject<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FirmwareObject").field(&*self.object).finish()
    }
}

/// Evaluates `_DSM` under `handle` and requires the result to be of type `expected`.
///
/// # Errors
///
/// Propagates lookup and evaluation errors from the runtime, returns
/// [`AcpiError::NoValue`] if the method returned nothing and
/// [`AcpiError::TypeMismatch`] if the result has the wrong type. In the
/// mismatch case the object has already been released when this returns.
pub fn evaluate_dsm_typed<'r>(
    runtime: &'r dyn AcpiRuntime,
    handle: AcpiHandle,
    request: &DsmRequest<'_>,
    expected: ObjectType,
) -> Result<FirmwareObject<'r>, AcpiError> {
    let object = runtime
        .evaluate_dsm(handle, request)?
        .ok_or(AcpiError::NoValue)?;
    let object = FirmwareObject::new(runtime, object);

    if !object.is_type(expected) {
        return Err(AcpiError::TypeMismatch {
            expected,
            found: object.object_type(),
        });
    }

    Ok(object)
}

//! Values returned by evaluated control methods.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::AcpiHandle;

/// The type tag of an [`AcpiObject`], used to request typed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    /// Accept any returned type.
    Any,
    /// 64-bit integer.
    Integer,
    /// ASCII string.
    String,
    /// Raw byte buffer.
    Buffer,
    /// Ordered list of objects.
    Package,
    /// Reference to another namespace node.
    Reference,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "Any",
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Buffer => "Buffer",
            Self::Package => "Package",
            Self::Reference => "Reference",
        })
    }
}

/// A data object produced by the AML interpreter.
///
/// Objects handed out by [`AcpiRuntime`](crate::AcpiRuntime) belong to the
/// runtime until returned with
/// [`free_object`](crate::AcpiRuntime::free_object); see
/// [`FirmwareObject`](crate::FirmwareObject) for the guard that does this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcpiObject {
    /// 64-bit integer.
    Integer(u64),
    /// ASCII string.
    String(String),
    /// Raw byte buffer.
    Buffer(Vec<u8>),
    /// Ordered list of objects.
    Package(Vec<AcpiObject>),
    /// Reference to another namespace node.
    Reference(AcpiHandle),
}

impl AcpiObject {
    /// Returns the type tag of this object.
    #[must_use]
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::String(_) => ObjectType::String,
            Self::Buffer(_) => ObjectType::Buffer,
            Self::Package(_) => ObjectType::Package,
            Self::Reference(_) => ObjectType::Reference,
        }
    }

    /// Returns the value if this is an integer object.
    #[must_use]
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns `true` if this object satisfies a request for `ty`.
    #[must_use]
    pub fn is_type(&self, ty: ObjectType) -> bool {
        ty == ObjectType::Any || self.object_type() == ty
    }
}

//! 128-bit identifiers naming `_DSM` interfaces.
//!
//! A `_DSM` method multiplexes vendor- and class-specific functions behind a
//! UUID. The AML side receives the UUID as a 16-byte buffer in the mixed-endian
//! layout produced by ASL's `ToUUID()`; [`Guid::to_bytes`] produces exactly that.

use core::fmt;

/// A globally unique identifier in `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    /// The first 32 bits of the GUID.
    pub data1: u32,
    /// The next 16 bits of the GUID.
    pub data2: u16,
    /// The next 16 bits of the GUID.
    pub data3: u16,
    /// The remaining 64 bits of the GUID.
    pub data4: [u8; 8],
}

impl Guid {
    /// Creates a new GUID from its component parts.
    #[must_use]
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Returns the 16-byte buffer passed as `Arg0` to `_DSM`.
    ///
    /// The first three fields are little-endian, `data4` is copied as-is.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 16] {
        let d1 = self.data1.to_le_bytes();
        let d2 = self.data2.to_le_bytes();
        let d3 = self.data3.to_le_bytes();
        let d4 = self.data4;
        [
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ]
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7],
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({self})")
    }
}

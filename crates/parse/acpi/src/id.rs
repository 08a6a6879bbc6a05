//! ACPI hardware identifiers and static match tables.
//!
//! Firmware reports a device's identity through `_HID` and zero or more
//! `_CID` values, each either a string (`"ACPI0C50"`) or a compressed EISA
//! integer (`EisaId("PNP0C50")` in ASL). Drivers declare the identities they
//! accept as [`AcpiMatchId`] tables. Both encodings compare through their
//! canonical string spelling.

/// Maximum length of an inline string in a [`HardwareId`].
const INLINE_STRING_CAP: usize = 16;

/// An inline string with a fixed maximum capacity.
///
/// Sufficient for `_HID` strings like `"ACPI0C50"` and EISA IDs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct InlineString {
    buf: [u8; INLINE_STRING_CAP],
    len: u8,
}

impl InlineString {
    /// Creates a new `InlineString` from a byte slice.
    ///
    /// Truncates to [`INLINE_STRING_CAP`] bytes if the input is longer.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len().min(INLINE_STRING_CAP);
        let mut buf = [0u8; INLINE_STRING_CAP];
        buf[..len].copy_from_slice(&bytes[..len]);
        Self {
            buf,
            len: len as u8,
        }
    }

    /// Returns the string as a UTF-8 `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }
}

impl core::fmt::Debug for InlineString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

/// A compressed EISA/PnP device identifier.
///
/// The 3-letter manufacturer code is packed into the upper 16 bits and the
/// product ID into the lower 16, then the whole value is byte-swapped as it
/// appears in AML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EisaId {
    /// The raw 32-bit EISA ID value (byte-swapped from AML encoding).
    pub raw: u32,
}

impl EisaId {
    /// Encodes a 7-character EISA ID string (e.g., `"PNP0C50"`) at const time.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const context) if `id` is not
    /// three uppercase letters followed by four hex digits.
    #[must_use]
    pub const fn encode(id: &str) -> Self {
        let bytes = id.as_bytes();
        assert!(bytes.len() == 7, "EISA ID must be exactly 7 characters");

        let c1 = (bytes[0] - b'@') as u16;
        let c2 = (bytes[1] - b'@') as u16;
        let c3 = (bytes[2] - b'@') as u16;
        let manufacturer = (c1 << 10) | (c2 << 5) | c3;

        let d0 = hex_digit(bytes[3]) as u16;
        let d1 = hex_digit(bytes[4]) as u16;
        let d2 = hex_digit(bytes[5]) as u16;
        let d3 = hex_digit(bytes[6]) as u16;
        let product = (d0 << 12) | (d1 << 8) | (d2 << 4) | d3;

        let native = ((manufacturer as u32) << 16) | (product as u32);
        Self {
            raw: native.swap_bytes(),
        }
    }

    /// Decodes the EISA ID into its 7-character ASCII spelling (e.g., `"PNP0C50"`).
    #[must_use]
    pub fn decode(&self) -> [u8; 7] {
        // After byte-swapping to native order:
        //   Bits 30-26: first char - 'A' + 1
        //   Bits 25-21: second char - 'A' + 1
        //   Bits 20-16: third char - 'A' + 1
        //   Bits 15-0:  product ID as 4 hex digits
        let swapped = self.raw.swap_bytes();
        let letter = |shift: u32| (((swapped >> shift) & 0x1F) as u8) + b'@';
        let product = swapped as u16;
        let nibble = |shift: u16| {
            let n = ((product >> shift) & 0xF) as u8;
            if n < 10 { b'0' + n } else { b'A' + n - 10 }
        };

        [
            letter(26),
            letter(21),
            letter(16),
            nibble(12),
            nibble(8),
            nibble(4),
            nibble(0),
        ]
    }
}

/// Decode a hex digit at const time.
const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => panic!("invalid hex digit in EISA ID"),
    }
}

/// A single `_HID` or `_CID` value reported by firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareId {
    /// A compressed EISA/PnP identifier.
    Eisa(EisaId),
    /// A string identifier.
    String(InlineString),
}

impl HardwareId {
    /// Creates a string hardware ID.
    #[must_use]
    pub fn string(id: &str) -> Self {
        Self::String(InlineString::from_bytes(id.as_bytes()))
    }

    /// Creates an EISA hardware ID from its 7-character spelling.
    #[must_use]
    pub const fn eisa(id: &str) -> Self {
        Self::Eisa(EisaId::encode(id))
    }

    /// Returns `true` if this ID is spelled exactly `id`.
    #[must_use]
    pub fn is(&self, id: &str) -> bool {
        match self {
            Self::String(s) => s.as_str() == id,
            Self::Eisa(e) => e.decode().as_slice() == id.as_bytes(),
        }
    }
}

impl core::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s.as_str()),
            Self::Eisa(e) => {
                let spelled = e.decode();
                f.write_str(core::str::from_utf8(&spelled).unwrap_or("???????"))
            }
        }
    }
}

/// Match table entry for ACPI ID matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcpiMatchId {
    /// The identity to match, in its canonical string spelling.
    pub id: &'static str,
}

impl AcpiMatchId {
    /// Creates a match entry (e.g., `AcpiMatchId::new("PNP0C50")`).
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id }
    }

    /// Checks if this entry matches a device's `_HID` or `_CID`.
    #[must_use]
    pub fn matches(&self, id: &HardwareId) -> bool {
        id.is(self.id)
    }
}

/// Finds the first table entry matching any of a device's IDs.
///
/// The table is walked in order, so earlier entries take precedence.
#[must_use]
pub fn match_device_ids<'t>(table: &'t [AcpiMatchId], ids: &[HardwareId]) -> Option<&'t AcpiMatchId> {
    table
        .iter()
        .find(|entry| ids.iter().any(|id| entry.matches(id)))
}

//! Fixed ACPI Description Table (FADT) feature flags.
//!
//! Drivers only consume the FADT's fixed feature flag word, most notably
//! [`FadtFlags::LOW_POWER_S0`], which tells them whether the platform idles
//! in S0 instead of entering S3 and so needs devices to be able to wake it.

use bitflags::bitflags;

use crate::AcpiError;

/// FADT table signature.
pub const FADT_SIGNATURE: &[u8; 4] = b"FACP";

/// Byte offset of `flags` within the FADT.
const FLAGS_OFFSET: usize = 112;

/// Size of the standard SDT header that precedes every table.
const SDT_HEADER_SIZE: usize = 36;

bitflags! {
    /// FADT fixed feature flags (`Flags` field, offset 112).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FadtFlags: u32 {
        /// `WBINVD` is supported.
        const WBINVD                  = 1 << 0;
        /// `WBINVD` flushes all caches and keeps memory coherent.
        const WBINVD_FLUSH            = 1 << 1;
        /// C1 is supported on all processors.
        const PROC_C1                 = 1 << 2;
        /// C2 works on multiprocessor systems.
        const P_LVL2_UP               = 1 << 3;
        /// Power button is a control method device.
        const PWR_BUTTON              = 1 << 4;
        /// Sleep button is a control method device.
        const SLP_BUTTON              = 1 << 5;
        /// RTC wake status is not in the fixed register space.
        const FIX_RTC                 = 1 << 6;
        /// RTC can wake the system from S4.
        const RTC_S4                  = 1 << 7;
        /// PM timer is 32 bits wide.
        const TMR_VAL_EXT             = 1 << 8;
        /// System supports docking.
        const DCK_CAP                 = 1 << 9;
        /// `RESET_REG` is supported.
        const RESET_REG_SUP           = 1 << 10;
        /// No internal expansion capabilities.
        const SEALED_CASE             = 1 << 11;
        /// No local input or output devices.
        const HEADLESS                = 1 << 12;
        /// A native instruction must follow writing `SLP_TYP`.
        const CPU_SW_SLP              = 1 << 13;
        /// PCIe wake events are supported.
        const PCI_EXP_WAK             = 1 << 14;
        /// OSPM should use the platform clock.
        const USE_PLATFORM_CLOCK      = 1 << 15;
        /// `RTC_STS` is valid after S4 wake.
        const S4_RTC_STS_VALID        = 1 << 16;
        /// Remote power-on is supported.
        const REMOTE_POWER_ON_CAPABLE = 1 << 17;
        /// APIC cluster destination model must be used.
        const FORCE_APIC_CLUSTER_MODEL = 1 << 18;
        /// APIC physical destination mode must be used.
        const FORCE_APIC_PHYSICAL_DESTINATION_MODE = 1 << 19;
        /// Hardware-reduced ACPI platform.
        const HW_REDUCED_ACPI         = 1 << 20;
        /// Low-power S0 idle is at least as efficient as S3.
        const LOW_POWER_S0            = 1 << 21;
    }
}

impl FadtFlags {
    /// Reads the flags word out of a mapped FADT.
    ///
    /// Tables predating the flags field report no flags rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`AcpiError::TruncatedData`] if `table` is shorter than its
    /// header claims, [`AcpiError::InvalidSignature`] if it is not a FADT and
    /// [`AcpiError::InvalidChecksum`] if the bytes do not sum to zero.
    pub fn from_table(table: &[u8]) -> Result<Self, AcpiError> {
        if table.len() < SDT_HEADER_SIZE {
            return Err(AcpiError::TruncatedData);
        }
        if &table[0..4] != FADT_SIGNATURE {
            return Err(AcpiError::InvalidSignature);
        }

        let length = u32::from_le_bytes([table[4], table[5], table[6], table[7]]) as usize;
        let data = table.get(..length).ok_or(AcpiError::TruncatedData)?;
        if !validate_checksum(data) {
            return Err(AcpiError::InvalidChecksum);
        }

        let raw = data
            .get(FLAGS_OFFSET..FLAGS_OFFSET + 4)
            .map_or(0, |b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]));
        Ok(Self::from_bits_retain(raw))
    }
}

/// ACPI tables sum to zero (mod 256) over their full length.
fn validate_checksum(data: &[u8]) -> bool {
    data.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)) == 0
}

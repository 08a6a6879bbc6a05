//! Hardware drivers for Hadron OS.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// ── Subsystem modules ───────────────────────────────────────────────────

pub mod hid;

#[cfg(test)]
mod mock;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use self::hid::i2c_hid_acpi;

/// Anchor symbol referenced by the linker script's `EXTERN()` directive
/// to force inclusion of this crate's driver registration entries.
#[cfg(target_os = "none")]
#[used]
#[unsafe(no_mangle)]
pub static __HADRON_DRIVERS_ANCHOR: u8 = 0;

//! Mach message header bits (`msgh_bits`)
//!
//! The first field of every Mach message header packs the port-right
//! dispositions for the remote, local, and voucher ports into a single
//! `u32`, together with the complex-message flag. The kernel headers
//! expose that layout only through function-like C macros
//! (`MACH_MSGH_BITS` and friends), which bindings in other languages
//! cannot expand. This crate provides the same operations as ordinary
//! const functions, plus a typed wrapper for callers that prefer not to
//! juggle raw dispositions.
//!
//! # Layout
//!
//! ```text
//!  31       24 23      16 15       8 7        0
//! +-----------+----------+----------+----------+
//! |  other    | voucher  |  local   |  remote  |
//! +-----------+----------+----------+----------+
//!   bit 31: MACH_MSGH_BITS_COMPLEX
//! ```
//!
//! # Features
//!
//! - `serde`: Enable serialization support
//!
//! # Example
//!
//! ```
//! use msgh_bits::{msgh_bits, Disposition, MsgBits};
//!
//! // Raw layer: exactly remote | (local << 8)
//! assert_eq!(msgh_bits(19, 21), 0x1513);
//!
//! // Typed layer
//! let bits = MsgBits::new(Disposition::CopySend, Disposition::MakeSendOnce);
//! assert_eq!(bits.as_raw(), 0x1513);
//! assert_eq!(bits.remote(), Disposition::CopySend);
//! assert_eq!(bits.local(), Disposition::MakeSendOnce);
//! ```

pub mod bits;
pub mod disposition;
pub mod error;

// Re-export commonly used items
pub use bits::{
    msgh_bits, msgh_bits_has_local, msgh_bits_has_remote, msgh_bits_has_voucher,
    msgh_bits_is_complex, msgh_bits_local, msgh_bits_other, msgh_bits_ports, msgh_bits_remote,
    msgh_bits_set, msgh_bits_set_ports, msgh_bits_voucher, MsgBits, MACH_MSGH_BITS_COMPLEX,
    MACH_MSGH_BITS_LOCAL_MASK, MACH_MSGH_BITS_PORTS_MASK, MACH_MSGH_BITS_REMOTE_MASK,
    MACH_MSGH_BITS_USER, MACH_MSGH_BITS_VOUCHER_MASK, MACH_MSGH_BITS_ZERO,
};
pub use disposition::Disposition;
pub use error::{Result, UnknownDisposition};

//! The raw header-bits layer: masks, composer, and field extractors.
//!
//! These are const-fn renditions of the `MACH_MSGH_BITS*` macro family
//! from the Mach kernel headers. All of them are pure and total: there
//! is no validation, no error path, and no state. Dispositions are
//! conventionally byte-sized; the composer does not enforce that, so a
//! `local` value wider than 8 bits bleeds into the voucher byte (and
//! past bit 31 is discarded by the shift).

use crate::disposition::Disposition;

// ════════════════════════════════════════════════════════════
// Masks and Well-Known Words
// ════════════════════════════════════════════════════════════

/// Mask for the remote port disposition (bits 0-7)
pub const MACH_MSGH_BITS_REMOTE_MASK: u32 = 0x0000_00ff;

/// Mask for the local port disposition (bits 8-15)
pub const MACH_MSGH_BITS_LOCAL_MASK: u32 = 0x0000_ff00;

/// Mask for the voucher port disposition (bits 16-23)
pub const MACH_MSGH_BITS_VOUCHER_MASK: u32 = 0x00ff_0000;

/// Mask covering all three port disposition fields
pub const MACH_MSGH_BITS_PORTS_MASK: u32 =
    MACH_MSGH_BITS_REMOTE_MASK | MACH_MSGH_BITS_LOCAL_MASK | MACH_MSGH_BITS_VOUCHER_MASK;

/// Complex message flag (message body carries descriptors)
pub const MACH_MSGH_BITS_COMPLEX: u32 = 0x8000_0000;

/// Bits a user-constructed header may legally carry
pub const MACH_MSGH_BITS_USER: u32 = MACH_MSGH_BITS_PORTS_MASK | MACH_MSGH_BITS_COMPLEX;

/// The empty bits word (no dispositions, not complex)
pub const MACH_MSGH_BITS_ZERO: u32 = 0;

// ════════════════════════════════════════════════════════════
// Composers
// ════════════════════════════════════════════════════════════

/// Compose header bits from the remote and local port dispositions.
///
/// Exactly `remote | (local << 8)`, the expansion of `MACH_MSGH_BITS`.
/// Both arguments are expected to be byte-sized `MACH_MSG_TYPE_*`
/// values; nothing checks that, matching the macro.
#[inline]
pub const fn msgh_bits(remote: u32, local: u32) -> u32 {
    remote | (local << 8)
}

/// Compose the three port-disposition fields, masking each into place.
#[inline]
pub const fn msgh_bits_set_ports(remote: u32, local: u32, voucher: u32) -> u32 {
    (remote & MACH_MSGH_BITS_REMOTE_MASK)
        | ((local << 8) & MACH_MSGH_BITS_LOCAL_MASK)
        | ((voucher << 16) & MACH_MSGH_BITS_VOUCHER_MASK)
}

/// Compose a full bits word: port dispositions plus the non-port bits
/// of `other` (the complex flag lives there).
#[inline]
pub const fn msgh_bits_set(remote: u32, local: u32, voucher: u32, other: u32) -> u32 {
    msgh_bits_set_ports(remote, local, voucher) | (other & !MACH_MSGH_BITS_PORTS_MASK)
}

// ════════════════════════════════════════════════════════════
// Extractors
// ════════════════════════════════════════════════════════════

/// Extract the remote port disposition from a bits word.
#[inline]
pub const fn msgh_bits_remote(bits: u32) -> u32 {
    bits & MACH_MSGH_BITS_REMOTE_MASK
}

/// Extract the local port disposition from a bits word.
#[inline]
pub const fn msgh_bits_local(bits: u32) -> u32 {
    (bits & MACH_MSGH_BITS_LOCAL_MASK) >> 8
}

/// Extract the voucher port disposition from a bits word.
#[inline]
pub const fn msgh_bits_voucher(bits: u32) -> u32 {
    (bits & MACH_MSGH_BITS_VOUCHER_MASK) >> 16
}

/// All three port-disposition fields, still in place.
#[inline]
pub const fn msgh_bits_ports(bits: u32) -> u32 {
    bits & MACH_MSGH_BITS_PORTS_MASK
}

/// Everything that is not a port-disposition field.
#[inline]
pub const fn msgh_bits_other(bits: u32) -> u32 {
    bits & !MACH_MSGH_BITS_PORTS_MASK
}

/// Check whether a remote disposition is present (non-zero).
#[inline]
pub const fn msgh_bits_has_remote(bits: u32) -> bool {
    msgh_bits_remote(bits) != 0
}

/// Check whether a local disposition is present (non-zero).
#[inline]
pub const fn msgh_bits_has_local(bits: u32) -> bool {
    msgh_bits_local(bits) != 0
}

/// Check whether a voucher disposition is present (non-zero).
#[inline]
pub const fn msgh_bits_has_voucher(bits: u32) -> bool {
    msgh_bits_voucher(bits) != 0
}

/// Check whether the complex flag is set.
#[inline]
pub const fn msgh_bits_is_complex(bits: u32) -> bool {
    (bits & MACH_MSGH_BITS_COMPLEX) != 0
}

// ════════════════════════════════════════════════════════════
// Typed Wrapper
// ════════════════════════════════════════════════════════════

/// A typed `msgh_bits` word.
///
/// Wraps the raw `u32` and speaks [`Disposition`] instead of bare
/// integers. Because every `Disposition` discriminant is byte-sized,
/// values built through this type never overflow a field.
#[repr(transparent)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MsgBits(u32);

impl MsgBits {
    /// Create bits from the remote and local dispositions.
    pub const fn new(remote: Disposition, local: Disposition) -> Self {
        Self(msgh_bits(remote.as_u32(), local.as_u32()))
    }

    /// Create bits from all three port dispositions.
    pub const fn set(remote: Disposition, local: Disposition, voucher: Disposition) -> Self {
        Self(msgh_bits_set_ports(
            remote.as_u32(),
            local.as_u32(),
            voucher.as_u32(),
        ))
    }

    /// Wrap a raw bits word as-is.
    pub const fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    /// Get the raw bits word.
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Get the remote port disposition.
    ///
    /// Unknown field values decode as [`Disposition::None`].
    pub const fn remote(self) -> Disposition {
        Disposition::from_raw(msgh_bits_remote(self.0))
    }

    /// Get the local port disposition.
    pub const fn local(self) -> Disposition {
        Disposition::from_raw(msgh_bits_local(self.0))
    }

    /// Get the voucher port disposition.
    pub const fn voucher(self) -> Disposition {
        Disposition::from_raw(msgh_bits_voucher(self.0))
    }

    /// Replace the voucher disposition, leaving the rest alone.
    pub const fn with_voucher(self, voucher: Disposition) -> Self {
        Self((self.0 & !MACH_MSGH_BITS_VOUCHER_MASK) | (voucher.as_u32() << 16))
    }

    /// Check whether a remote disposition is present.
    pub const fn has_remote(self) -> bool {
        msgh_bits_has_remote(self.0)
    }

    /// Check whether a local disposition is present.
    pub const fn has_local(self) -> bool {
        msgh_bits_has_local(self.0)
    }

    /// Check whether the complex flag is set.
    pub const fn is_complex(self) -> bool {
        msgh_bits_is_complex(self.0)
    }

    /// Return the same bits with the complex flag set.
    pub const fn into_complex(self) -> Self {
        Self(self.0 | MACH_MSGH_BITS_COMPLEX)
    }

    /// Set the complex flag in place.
    pub fn set_complex(&mut self) {
        self.0 |= MACH_MSGH_BITS_COMPLEX;
    }
}

impl From<u32> for MsgBits {
    fn from(bits: u32) -> Self {
        MsgBits(bits)
    }
}

impl From<MsgBits> for u32 {
    fn from(bits: MsgBits) -> Self {
        bits.0
    }
}

// ════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════

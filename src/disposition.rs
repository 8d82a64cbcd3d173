//! Port-right dispositions carried in the header bits.

use crate::error::UnknownDisposition;

/// What happens to a port right referenced by a message header.
///
/// These are the `MACH_MSG_TYPE_*` port values. `None` means the
/// corresponding header field carries no port.
#[repr(u32)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposition {
    /// No port right
    #[default]
    None = 0,
    /// Move receive right
    MoveReceive = 16,
    /// Move send right
    MoveSend = 17,
    /// Move send-once right
    MoveSendOnce = 18,
    /// Copy send right
    CopySend = 19,
    /// Make send right
    MakeSend = 20,
    /// Make send-once right
    MakeSendOnce = 21,
}

impl Disposition {
    /// Convert from a raw field value, mapping anything unknown to
    /// [`Disposition::None`].
    pub const fn from_raw(value: u32) -> Self {
        match value {
            16 => Self::MoveReceive,
            17 => Self::MoveSend,
            18 => Self::MoveSendOnce,
            19 => Self::CopySend,
            20 => Self::MakeSend,
            21 => Self::MakeSendOnce,
            _ => Self::None,
        }
    }

    /// Strict conversion from a raw field value.
    ///
    /// Unlike [`from_raw`](Self::from_raw), a value that is neither
    /// zero nor a known port disposition is rejected.
    pub const fn try_from_raw(value: u32) -> Result<Self, UnknownDisposition> {
        match value {
            0 => Ok(Self::None),
            16..=21 => Ok(Self::from_raw(value)),
            _ => Err(UnknownDisposition(value)),
        }
    }

    /// The raw field value.
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Check if this transfers a right (sender loses it).
    pub const fn is_move(self) -> bool {
        matches!(self, Self::MoveReceive | Self::MoveSend | Self::MoveSendOnce)
    }

    /// Check if this copies a right (sender retains it).
    pub const fn is_copy(self) -> bool {
        matches!(self, Self::CopySend)
    }

    /// Check if this creates a right from a receive right.
    pub const fn is_make(self) -> bool {
        matches!(self, Self::MakeSend | Self::MakeSendOnce)
    }

    /// Check if a port is present at all.
    pub const fn is_port(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<u32> for Disposition {
    type Error = UnknownDisposition;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from_raw(value)
    }
}

impl From<Disposition> for u32 {
    fn from(disposition: Disposition) -> Self {
        disposition.as_u32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_values() {
        assert_eq!(Disposition::MoveReceive.as_u32(), 16);
        assert_eq!(Disposition::MoveSend.as_u32(), 17);
        assert_eq!(Disposition::MoveSendOnce.as_u32(), 18);
        assert_eq!(Disposition::CopySend.as_u32(), 19);
        assert_eq!(Disposition::MakeSend.as_u32(), 20);
        assert_eq!(Disposition::MakeSendOnce.as_u32(), 21);
    }

    #[test]
    fn lenient_decode_maps_unknown_to_none() {
        assert_eq!(Disposition::from_raw(17), Disposition::MoveSend);
        assert_eq!(Disposition::from_raw(0), Disposition::None);
        assert_eq!(Disposition::from_raw(7), Disposition::None);
        assert_eq!(Disposition::from_raw(0xFF), Disposition::None);
    }

    #[test]
    fn strict_decode_rejects_unknown() {
        assert_eq!(Disposition::try_from_raw(21), Ok(Disposition::MakeSendOnce));
        assert_eq!(Disposition::try_from_raw(0), Ok(Disposition::None));
        assert_eq!(Disposition::try_from_raw(7), Err(UnknownDisposition(7)));
        assert_eq!(Disposition::try_from(22), Err(UnknownDisposition(22)));
    }

    #[test]
    fn classification() {
        assert!(Disposition::MoveReceive.is_move());
        assert!(Disposition::CopySend.is_copy());
        assert!(Disposition::MakeSendOnce.is_make());
        assert!(!Disposition::None.is_port());
        assert!(Disposition::MoveSend.is_port());
        assert!(!Disposition::CopySend.is_move());
    }
}

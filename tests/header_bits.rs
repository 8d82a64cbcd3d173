//! End-to-end checks of the bits composer.
//!
//! The byte-disposition input domain is small enough (256 x 256) to
//! sweep exhaustively; the property tests cover the full u32 range.

use msgh_bits::*;
use proptest::prelude::*;

#[test]
fn exhaustive_byte_domain() {
    for remote in 0u32..=0xFF {
        for local in 0u32..=0xFF {
            let bits = msgh_bits(remote, local);
            assert_eq!(bits, remote | (local << 8));
            assert_eq!(msgh_bits_remote(bits), remote);
            assert_eq!(msgh_bits_local(bits), local);
            assert_eq!(msgh_bits_voucher(bits), 0);
        }
    }
}

#[test]
fn known_vectors() {
    assert_eq!(msgh_bits(0, 0), 0);
    assert_eq!(msgh_bits(0xFF, 0), 0xFF);
    assert_eq!(msgh_bits(0, 0xFF), 0xFF00);
    assert_eq!(msgh_bits(0x12, 0x34), 0x3412);

    // COPY_SEND destination with a MAKE_SEND_ONCE reply port, the most
    // common client-side header in the wild
    assert_eq!(
        msgh_bits(
            Disposition::CopySend.as_u32(),
            Disposition::MakeSendOnce.as_u32()
        ),
        0x1513
    );
}

#[test]
fn typed_layer_agrees_with_raw_layer() {
    let typed = MsgBits::new(Disposition::MoveSend, Disposition::MakeSendOnce);
    let raw = msgh_bits(17, 21);
    assert_eq!(typed.as_raw(), raw);
    assert_eq!(MsgBits::from_raw(raw), typed);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Byte-range fields never interfere with each other.
    #[test]
    fn fields_are_disjoint(remote in 0u32..=0xFF, local in 0u32..=0xFF, voucher in 0u32..=0xFF) {
        let bits = msgh_bits_set_ports(remote, local, voucher);
        prop_assert_eq!(msgh_bits_remote(bits), remote);
        prop_assert_eq!(msgh_bits_local(bits), local);
        prop_assert_eq!(msgh_bits_voucher(bits), voucher);
        prop_assert_eq!(msgh_bits_other(bits), 0);
    }

    /// Ports and non-ports partition any word; reassembly is lossless.
    #[test]
    fn extraction_partitions_any_word(bits in any::<u32>()) {
        prop_assert_eq!(msgh_bits_ports(bits) | msgh_bits_other(bits), bits);
        prop_assert_eq!(msgh_bits_ports(bits) & msgh_bits_other(bits), 0);
        prop_assert_eq!(
            msgh_bits_set(
                msgh_bits_remote(bits),
                msgh_bits_local(bits),
                msgh_bits_voucher(bits),
                msgh_bits_other(bits),
            ),
            bits
        );
    }

    /// The composer is the literal macro expansion for any inputs,
    /// including ones wider than a byte.
    #[test]
    fn composer_is_shift_and_or(remote in any::<u32>(), local in any::<u32>()) {
        prop_assert_eq!(msgh_bits(remote, local), remote | (local << 8));
    }

    /// Strict and lenient disposition decode agree whenever the strict
    /// one accepts.
    #[test]
    fn decode_modes_agree(value in any::<u32>()) {
        match Disposition::try_from_raw(value) {
            Ok(d) => {
                prop_assert_eq!(Disposition::from_raw(value), d);
                prop_assert_eq!(d.as_u32(), value);
            }
            Err(UnknownDisposition(v)) => {
                prop_assert_eq!(v, value);
                prop_assert_eq!(Disposition::from_raw(value), Disposition::None);
            }
        }
    }
}

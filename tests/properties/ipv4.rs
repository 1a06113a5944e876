//! Property tests for the strict IPv4 dotted-quad grammar.

use proptest::prelude::*;

use devmon::is_valid_ipv4;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any quad of in-range octets, rendered without extra
    /// characters, is accepted.
    #[test]
    fn property_in_range_quads_are_accepted(
        a in 0u16..=255, b in 0u16..=255, c in 0u16..=255, d in 0u16..=255,
    ) {
        let rendered = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(is_valid_ipv4(&rendered));
    }

    /// PROPERTY: a quad with one octet above 255 is rejected.
    #[test]
    fn property_out_of_range_octet_is_rejected(
        good in 0u16..=255,
        bad in 256u16..=999,
        position in 0usize..4,
    ) {
        let octets: Vec<String> = (0..4)
            .map(|i| if i == position { bad.to_string() } else { good.to_string() })
            .collect();
        prop_assert!(!is_valid_ipv4(&octets.join(".")));
    }

    /// PROPERTY: wrong segment counts are rejected, whatever the octets.
    #[test]
    fn property_wrong_segment_count_is_rejected(
        octets in proptest::collection::vec(0u16..=255, 1..=7),
    ) {
        prop_assume!(octets.len() != 4);
        let rendered: Vec<String> = octets.iter().map(u16::to_string).collect();
        prop_assert!(!is_valid_ipv4(&rendered.join(".")));
    }

    /// PROPERTY: the predicate never panics on arbitrary input.
    #[test]
    fn property_never_panics(input in "(?s).{0,64}") {
        let _ = is_valid_ipv4(&input);
    }

    /// PROPERTY: surrounding whitespace always invalidates an address.
    #[test]
    fn property_surrounding_whitespace_is_rejected(
        a in 0u16..=255, b in 0u16..=255, c in 0u16..=255, d in 0u16..=255,
    ) {
        let leading = format!(" {}.{}.{}.{}", a, b, c, d);
        let trailing = format!("{}.{}.{}.{} ", a, b, c, d);
        prop_assert!(!is_valid_ipv4(&leading));
        prop_assert!(!is_valid_ipv4(&trailing));
    }
}

use bytecursor::{ByteOrder, CursorErrorKind};
use rstest::rstest;

#[rstest]
#[case("little", ByteOrder::LittleEndian)]
#[case("LE", ByteOrder::LittleEndian)]
#[case(" little-endian ", ByteOrder::LittleEndian)]
#[case("big", ByteOrder::BigEndian)]
#[case("Big-Endian", ByteOrder::BigEndian)]
#[case("be", ByteOrder::BigEndian)]
fn parse(#[case] input: &str, #[case] expected: ByteOrder) {
    assert_eq!(input.parse::<ByteOrder>().unwrap(), expected);
}

#[rstest]
#[case("", "missing value")]
#[case("   ", "missing value")]
#[case("middle", "expected `little-endian` or `big-endian`")]
fn parse_rejects(#[case] input: &str, #[case] expected_reason: &str) {
    let error = input.parse::<ByteOrder>().unwrap_err();

    assert!(error.is_invalid_argument());
    let CursorErrorKind::InvalidArgument { name, reason } = *error.kind() else {
        panic!("unexpected error kind: {error}");
    };
    assert_eq!(name, "byte_order");
    assert_eq!(reason, expected_reason);
}

#[test]
fn display_roundtrips_through_parse() {
    for byte_order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        assert_eq!(byte_order.to_string().parse::<ByteOrder>().unwrap(), byte_order);
    }
}

#[test]
fn default_and_reversed() {
    assert_eq!(ByteOrder::default(), ByteOrder::LittleEndian);
    assert_eq!(ByteOrder::LittleEndian.reversed(), ByteOrder::BigEndian);
    assert!(ByteOrder::BigEndian.reversed().is_little_endian());
    assert!(ByteOrder::BigEndian.is_big_endian());
}

#[test]
fn native_matches_target() {
    assert_eq!(ByteOrder::NATIVE.is_little_endian(), cfg!(target_endian = "little"));
}

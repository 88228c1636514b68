use super::*;

#[test]
fn channels_pack_most_significant_first() {
    let p = rgba(0x12, 0x34, 0x56, 0x78);
    assert_eq!(p, 0x1234_5678);
    assert_eq!((r(p), g(p), b(p), a(p)), (0x12, 0x34, 0x56, 0x78));
    assert_eq!(to_rgba8(p), [0x12, 0x34, 0x56, 0x78]);
    assert_eq!(from_rgba8([0x12, 0x34, 0x56, 0x78]), p);
}

#[test]
fn rgb_is_opaque() {
    assert!(is_opaque(rgb(1, 2, 3)));
    assert!(is_fully_transparent(TRANSPARENT));
    assert!(is_fully_transparent(rgba(9, 9, 9, 0)));
}

#[test]
fn int8_mul_endpoints() {
    for v in 0..=255u8 {
        assert_eq!(int8_mul(v, 255), v);
        assert_eq!(int8_mul(255, v), v);
        assert_eq!(int8_mul(v, 0), 0);
    }
}

#[test]
fn int8_mul_rounds_to_nearest() {
    // 128 * 128 / 255 = 64.25
    assert_eq!(int8_mul(128, 128), 64);
    // 200 * 100 / 255 = 78.43
    assert_eq!(int8_mul(200, 100), 78);
    // 1 * 128 / 255 = 0.502
    assert_eq!(int8_mul(1, 128), 1);
}

#[test]
fn parse_hex_accepts_common_forms() {
    assert_eq!(parse_hex("#ff0000").unwrap(), 0xff00_00ff);
    assert_eq!(parse_hex("00ff0080").unwrap(), 0x00ff_0080);
    assert_eq!(parse_hex("0x000000ff").unwrap(), 0x0000_00ff);
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert!(parse_hex("fff").unwrap_err().is_invalid_argument());
    assert!(parse_hex("zzzzzz").unwrap_err().is_invalid_argument());
    assert!(parse_hex("").unwrap_err().is_invalid_argument());
    assert!(parse_hex("#").unwrap_err().is_invalid_argument());
}

#[test]
fn parse_hex_rejects_sign_prefixes() {
    assert!(parse_hex("+1234567").unwrap_err().is_invalid_argument());
    assert!(parse_hex("+12345").unwrap_err().is_invalid_argument());
    assert!(parse_hex("#+12345").unwrap_err().is_invalid_argument());
    assert!(parse_hex("-1234567").unwrap_err().is_invalid_argument());
}

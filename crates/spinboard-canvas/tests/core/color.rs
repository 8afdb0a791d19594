use spinboard_canvas::Rgba;
use spinboard_core::Error;

#[test]
fn test_hex_shorthand() {
    assert_eq!(Rgba::from_css("#f00").unwrap(), Rgba::opaque(255, 0, 0));
    assert_eq!(Rgba::from_css("#0f0").unwrap(), Rgba::opaque(0, 255, 0));
}

#[test]
fn test_hex_full() {
    assert_eq!(Rgba::from_css("#ffd500").unwrap(), Rgba::opaque(255, 213, 0));
    assert_eq!(Rgba::from_css("#b300ff").unwrap(), Rgba::opaque(179, 0, 255));
    assert_eq!(Rgba::from_css("#00ffb7").unwrap(), Rgba::opaque(0, 255, 183));
}

#[test]
fn test_named_colors() {
    assert_eq!(Rgba::from_css("green").unwrap(), Rgba::opaque(0, 128, 0));
    assert_eq!(Rgba::from_css("GREEN").unwrap(), Rgba::GREEN);
}

#[test]
fn test_invalid_literals() {
    for bad in ["", "#12345", "#gg0000", "not-a-color", "#"] {
        let err = Rgba::from_css(bad).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidColor {
                value: bad.to_string()
            }
        );
    }
}

#[test]
fn test_from_str_trait() {
    let color: Rgba = "#f00".parse().unwrap();
    assert_eq!(color, Rgba::RED);
}

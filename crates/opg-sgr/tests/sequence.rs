use opg_sgr::{sgr, Bg, Code, Fg, InvalidCodeError, OutputMode, Sequence, Style, RESET};
use proptest::prelude::*;

#[test]
fn test_documented_examples() {
    let seq = Sequence::new([1, 4, 31]).unwrap();
    assert_eq!(seq.escape_sequence(), "\x1b[1;4;31m");
    assert_eq!(seq.to_string(), "\x1b[1;4;31m");

    assert_eq!(Sequence::empty().escape_sequence(), "\x1b[m");
    assert_eq!(RESET, "\x1b[m");

    assert_eq!(seq.render("X"), format!("{}X\x1b[m", seq.escape_sequence()));
    assert_eq!(seq.render_with("X", false), format!("{}X", seq.escape_sequence()));
}

#[test]
fn test_concat_matches_flat_construction() {
    let joined = Sequence::new([1, 4]).unwrap() + Sequence::new([31]).unwrap();
    assert_eq!(joined.attributes(), "1;4;31");
    assert_eq!(joined, Sequence::new([1, 4, 31]).unwrap());
}

#[test]
fn test_out_of_range_codes_rejected() {
    assert!(matches!(
        Sequence::new([256]),
        Err(InvalidCodeError::OutOfRange { value: 256 })
    ));
    assert!(matches!(
        Sequence::new([-1]),
        Err(InvalidCodeError::OutOfRange { value: -1 })
    ));
    assert!(matches!(
        Sequence::new(["bold", "purple"]),
        Err(InvalidCodeError::NotACode { .. })
    ));
}

#[test]
fn test_named_and_raw_codes_agree() {
    let named = sgr![Style::Bold, Bg::BrightBlack, Fg::BrightYellow].unwrap();
    let raw = Sequence::new([1, 100, 93]).unwrap();
    let text = Sequence::new(["sty.bold", "bg.black_b", "fg.yellow_b"]).unwrap();
    assert_eq!(named, raw);
    assert_eq!(named, text);
}

#[test]
fn test_text_mode_renders_plain() {
    let seq = sgr![Fg::Cyan].unwrap();
    assert_eq!(seq.render_for("plain", true, OutputMode::Text), "plain");
}

#[test]
fn test_sequence_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sequence>();

    let seq = sgr![Style::Dim].unwrap();
    let handle = std::thread::spawn({
        let seq = seq.clone();
        move || seq.render("bg")
    });
    assert_eq!(handle.join().unwrap(), seq.render("bg"));
}

proptest! {
    #[test]
    fn attributes_are_joined_codes(codes in prop::collection::vec(any::<u8>(), 0..12)) {
        let seq = Sequence::new(codes.iter().copied()).unwrap();
        let expected = codes.iter().map(u8::to_string).collect::<Vec<_>>().join(";");
        prop_assert_eq!(seq.attributes(), expected.as_str());
        prop_assert_eq!(seq.escape_sequence(), format!("\x1b[{}m", expected));
        prop_assert_eq!(seq.codes().iter().map(|c| c.value()).collect::<Vec<_>>(), codes);
    }

    #[test]
    fn wide_integers_validate_range(value in any::<i64>()) {
        let result = Sequence::new([value]);
        if (0..=255).contains(&value) {
            let seq = result.unwrap();
            prop_assert_eq!(seq.codes(), &[Code::new(value as u8)][..]);
        } else {
            prop_assert_eq!(result, Err(InvalidCodeError::OutOfRange { value }));
        }
    }

    #[test]
    fn concat_is_associative(
        a in prop::collection::vec(any::<u8>(), 0..5),
        b in prop::collection::vec(any::<u8>(), 0..5),
        c in prop::collection::vec(any::<u8>(), 0..5),
    ) {
        let a = Sequence::new(a).unwrap();
        let b = Sequence::new(b).unwrap();
        let c = Sequence::new(c).unwrap();
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn render_never_changes_the_text(text in ".*", reset in any::<bool>()) {
        let seq = sgr![Style::Bold, Fg::Red].unwrap();
        let out = seq.render_with(&text, reset);
        let body = out.strip_prefix(seq.escape_sequence()).unwrap();
        let body = if reset { body.strip_suffix(RESET).unwrap() } else { body };
        prop_assert_eq!(body, text.as_str());
    }
}

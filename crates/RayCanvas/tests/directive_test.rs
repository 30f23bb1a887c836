use ray_canvas::directive::{normalize, parse_fragment};
use ray_canvas::{AnchorKind, Directive, FragmentError, parse};

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
    assert!(parse(",,,").is_empty());
}

#[test]
fn test_single_directive() {
    assert_eq!(
        parse("red lines from the center"),
        vec![Directive::new("red", AnchorKind::Center)]
    );
}

#[test]
fn test_multiple_directives_keep_order() {
    let directives =
        parse("blue lines from four corners, green lines from the midpoints of four sides");
    assert_eq!(
        directives,
        vec![
            Directive::new("blue", AnchorKind::Corners),
            Directive::new("green", AnchorKind::Midpoints),
        ]
    );
}

#[test]
fn test_unknown_anchor_is_skipped() {
    assert!(parse("purple lines from nowhere").is_empty());
    assert_eq!(
        parse_fragment("purple lines from nowhere"),
        Err(FragmentError::UnknownAnchor("nowhere".to_string()))
    );
}

#[test]
fn test_case_and_punctuation_are_normalized() {
    assert_eq!(
        parse("BLUE!!! Lines From The Center"),
        vec![Directive::new("blue", AnchorKind::Center)]
    );
    assert_eq!(normalize("Red; lines: from, 4 Corners!"), "red lines from, 4 corners");
}

#[test]
fn test_bad_fragments_do_not_affect_good_ones() {
    let directives = parse(
        "red lines from the center, gibberish, orange lines to the center, teal lines from four corners",
    );
    assert_eq!(
        directives,
        vec![
            Directive::new("red", AnchorKind::Center),
            Directive::new("teal", AnchorKind::Corners),
        ]
    );
    assert_eq!(parse_fragment(" gibberish"), Err(FragmentError::NoMatch));
}

#[test]
fn test_duplicates_are_kept() {
    let directives = parse("red lines from the center, red lines from the center");
    assert_eq!(directives.len(), 2);
    assert_eq!(directives[0], directives[1]);
}

#[test]
fn test_surrounding_whitespace_and_leading_words() {
    // The color is the word directly before "lines from".
    assert_eq!(
        parse("  dark red lines from the center  "),
        vec![Directive::new("red", AnchorKind::Center)]
    );
}

#[test]
fn test_trailing_words_make_anchor_unknown() {
    assert!(parse("red lines from the center please").is_empty());
}

#[test]
fn test_phrase_table_round_trips() {
    for kind in AnchorKind::ALL {
        assert_eq!(AnchorKind::from_phrase(kind.phrase()), Some(kind));
    }
    assert_eq!(AnchorKind::from_phrase("the corners"), None);
}

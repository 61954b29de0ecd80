//! Tests for tic-tac-toe position enum.

use strictly_rounds::Position;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_from_label_prefers_exact_match() {
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top-center"), Some(Position::TopCenter));
    assert_eq!(Position::from_label_or_number("bottom right"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("7"), Some(Position::BottomCenter));
    assert_eq!(Position::from_label_or_number("nowhere"), None);
}

#[test]
fn test_from_label_rejects_ambiguous_prefix() {
    assert_eq!(Position::from_label_or_number("top"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
    assert_eq!(Position::from_label_or_number("bottom-"), None);
}

#[test]
fn test_from_label_accepts_unique_prefix() {
    assert_eq!(Position::from_label_or_number("top-r"), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_number("Bottom c"), Some(Position::BottomCenter));
    assert_eq!(Position::from_label_or_number("cent"), Some(Position::Center));
}

#[test]
fn test_from_label_digits_are_zero_based() {
    assert_eq!(Position::from_label_or_number("0"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("8"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("9"), None);
}

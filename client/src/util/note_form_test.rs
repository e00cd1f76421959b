use super::*;

// =============================================================
// validate_title
// =============================================================

#[test]
fn title_length_bounds() {
    assert_eq!(validate_title(""), Err("Title must be at least 3 characters"));
    assert_eq!(validate_title("ab"), Err("Title must be at least 3 characters"));
    assert_eq!(validate_title("abc"), Ok(()));
    assert_eq!(validate_title(&"x".repeat(50)), Ok(()));
    assert_eq!(validate_title(&"x".repeat(51)), Err("Title can't exceed 50 characters"));
}

#[test]
fn title_is_not_trimmed() {
    assert_eq!(validate_title("   "), Ok(()));
    assert_eq!(validate_title(" a"), Err("Title must be at least 3 characters"));
}

#[test]
fn title_counts_utf16_units() {
    // Each emoji is a surrogate pair: two units.
    assert_eq!(validate_title("😀😀"), Ok(()));
    assert_eq!(validate_title("😀"), Err("Title must be at least 3 characters"));
    assert_eq!(validate_title("é"), Err("Title must be at least 3 characters"));
}

// =============================================================
// validate_content
// =============================================================

#[test]
fn content_length_bounds() {
    assert_eq!(validate_content("short"), Err("Content must be at least 10 characters"));
    assert_eq!(validate_content(&"y".repeat(10)), Ok(()));
    assert_eq!(validate_content(&"y".repeat(500)), Ok(()));
    assert_eq!(validate_content(&"y".repeat(501)), Err("Content can't exceed 500 characters"));
}

// =============================================================
// validate_note_form
// =============================================================

#[test]
fn valid_form_builds_payload() {
    let note = validate_note_form("Groceries", "milk, eggs, bread").unwrap();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "milk, eggs, bread");
}

#[test]
fn invalid_form_reports_all_fields() {
    let errors = validate_note_form("a", "b").unwrap_err();
    assert_eq!(
        errors,
        NoteFormErrors {
            title: Some("Title must be at least 3 characters"),
            content: Some("Content must be at least 10 characters"),
        }
    );
    assert!(!errors.is_empty());
}

#[test]
fn invalid_form_reports_single_field() {
    let errors = validate_note_form("Valid title", "tiny").unwrap_err();
    assert_eq!(errors.title, None);
    assert_eq!(errors.content, Some("Content must be at least 10 characters"));
}

#[test]
fn default_errors_are_empty() {
    assert!(NoteFormErrors::default().is_empty());
}

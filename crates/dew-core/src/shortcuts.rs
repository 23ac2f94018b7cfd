//! Keyboard shortcuts for the contact table.

/// Semantic action for a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ask to delete the selected rows.
    DeleteSelected,
    /// Clear the selection.
    ClearSelection,
    /// Focus the search input.
    FocusSearch,
}

/// Map a `KeyboardEvent.key` value to a shortcut.
///
/// Callers skip this while focus is inside a text field.
#[must_use]
pub fn interpret_shortcut(key: &str) -> Option<Shortcut> {
    match key {
        "Delete" | "Backspace" => Some(Shortcut::DeleteSelected),
        "Escape" => Some(Shortcut::ClearSelection),
        "/" => Some(Shortcut::FocusSearch),
        _ => None,
    }
}

/// `<input type>` values that do not take typed text.
const NON_TEXT_INPUT_TYPES: [&str; 10] = [
    "checkbox", "radio", "button", "submit", "reset", "range", "color", "file", "image", "hidden",
];

/// Whether key events from an element should be left to the element.
///
/// `input_type` is the `type` attribute of an `<input>`; a missing attribute
/// means a text field. Checkboxes and other non-text inputs do not swallow
/// shortcuts, so a row can be checked with the mouse and then deleted with
/// the keyboard.
#[must_use]
pub fn is_text_entry(tag_name: &str, input_type: Option<&str>) -> bool {
    match tag_name.to_ascii_uppercase().as_str() {
        "TEXTAREA" | "SELECT" => true,
        "INPUT" => input_type.is_none_or(|kind| {
            let kind = kind.trim().to_ascii_lowercase();
            !NON_TEXT_INPUT_TYPES.contains(&kind.as_str())
        }),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_keys_request_bulk_delete() {
        assert_eq!(
            interpret_shortcut("Backspace"),
            Some(Shortcut::DeleteSelected)
        );
        assert_eq!(interpret_shortcut("Delete"), Some(Shortcut::DeleteSelected));
    }

    #[test]
    fn other_keys_map_or_pass_through() {
        assert_eq!(interpret_shortcut("Escape"), Some(Shortcut::ClearSelection));
        assert_eq!(interpret_shortcut("/"), Some(Shortcut::FocusSearch));
        assert_eq!(interpret_shortcut("a"), None);
    }

    #[test]
    fn text_fields_swallow_shortcuts() {
        assert!(is_text_entry("INPUT", None));
        assert!(is_text_entry("INPUT", Some("search")));
        assert!(is_text_entry("input", Some("Email")));
        assert!(is_text_entry("textarea", None));
        assert!(!is_text_entry("BUTTON", None));
    }

    #[test]
    fn focused_checkbox_keeps_shortcuts_active() {
        assert!(!is_text_entry("INPUT", Some("checkbox")));
        assert!(!is_text_entry("INPUT", Some("radio")));
        assert_eq!(interpret_shortcut("Backspace"), Some(Shortcut::DeleteSelected));
    }
}

use crate::callingcode::Selection;

/// Host-side collaborator contracts. The engine stays free of any UI
/// framework dependency; widgets plug in through these traits and apply the
/// state patches the engine hands back.

/// Receiver for the "move focus to the number field" signal emitted after an
/// explicit country selection. Invoked only on successful selection, never
/// on clear.
pub trait FocusRequester {
    fn request_number_field_focus(&mut self);
}

/// Live text-cursor access of the number field widget. Host UI layers move
/// the caret to end-of-text whenever a controlled value is replaced
/// programmatically; `SelectionTracker` counteracts that through this trait
/// on every re-render while the field is focused.
pub trait CursorHost {
    fn set_cursor_range(&mut self, selection: Selection);
}

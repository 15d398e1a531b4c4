//! Keyboard Shortcuts

/// Page-wide actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Cmd/Ctrl + K
    FocusSearch,
    /// Escape
    CloseDropdowns,
}

/// Class marking an open dropdown
pub const OPEN_DROPDOWN_CLASS: &str = "dropdown-open";

/// Search inputs, in lookup order
pub const SEARCH_INPUT_SELECTOR: &str = "input[name=\"search\"], input[placeholder*=\"Search\"]";

pub fn match_shortcut(key: &str, meta: bool, ctrl: bool) -> Option<Shortcut> {
    match key {
        "k" if meta || ctrl => Some(Shortcut::FocusSearch),
        "Escape" => Some(Shortcut::CloseDropdowns),
        _ => None,
    }
}

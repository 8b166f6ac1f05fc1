//! Built-in themes embedded in the crate.

use super::types::Theme;

/// Get all built-in themes, in catalog order.
///
/// The order is stable: a persisted theme index refers to a position in
/// this list.
pub fn builtin_themes() -> Vec<Theme> {
    vec![modern(), minimal(), vibrant()]
}

/// Get a built-in theme by name.
pub fn get_builtin(name: &str) -> Option<Theme> {
    match name {
        "modern" => Some(modern()),
        "minimal" => Some(minimal()),
        "vibrant" => Some(vibrant()),
        _ => None,
    }
}

/// Modern theme: violet primary with a pink accent.
pub fn modern() -> Theme {
    Theme {
        name: "Modern",
        primary: "#7c3aed",
        surface: "#f5f3ff",
        card_bg: "#ffffff",
        input_bg: "#ffffff",
        text: "#5b21b6",
        border: "#ddd6fe",
        button: "#7c3aed",
        button_hover: "#6d28d9",
        accent: "#ec4899",
    }
}

/// Minimal theme: slate monochrome.
pub fn minimal() -> Theme {
    Theme {
        name: "Minimal",
        primary: "#1e293b",
        surface: "#f8fafc",
        card_bg: "#ffffff",
        input_bg: "#f8fafc",
        text: "#1e293b",
        border: "#e2e8f0",
        button: "#1e293b",
        button_hover: "#0f172a",
        accent: "#475569",
    }
}

/// Vibrant theme: emerald primary with a yellow accent.
pub fn vibrant() -> Theme {
    Theme {
        name: "Vibrant",
        primary: "#059669",
        surface: "#ecfdf5",
        card_bg: "#ffffff",
        input_bg: "#ffffff",
        text: "#065f46",
        border: "#a7f3d0",
        button: "#059669",
        button_hover: "#047857",
        accent: "#eab308",
    }
}

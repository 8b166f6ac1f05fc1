//! Theme type definitions.
//!
//! Defines the `Theme` struct with the semantic color slots a frontend
//! needs to skin the configurator.

/// Complete theme definition with semantic colors as hex strings.
///
/// Colors are plain CSS hex values rather than any toolkit-specific type
/// so the crate stays presentation-agnostic; theme selection is persisted
/// by catalog index, not by serializing the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme display name
    pub name: &'static str,

    /// Header and primary action color
    pub primary: &'static str,
    /// Page background
    pub surface: &'static str,
    /// Card and panel background
    pub card_bg: &'static str,
    /// Form input background
    pub input_bg: &'static str,
    /// Main text color
    pub text: &'static str,
    /// Border and separator color
    pub border: &'static str,
    /// Action button color
    pub button: &'static str,
    /// Action button hover color
    pub button_hover: &'static str,
    /// Secondary highlight color
    pub accent: &'static str,
}

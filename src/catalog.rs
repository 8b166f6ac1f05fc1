//! Option catalogs for garment customization
//!
//! The fixed choice lists a frontend renders as pickers: garment colors,
//! font families/sizes/colors, garment sizes, and body builds. Each enum
//! carries its display label and, where relevant, the CSS value a
//! presentation layer would apply.

use serde::{Deserialize, Serialize};

/// The two independently customizable faces of the garment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Front => "Front",
            Side::Back => "Back",
        }
    }

    /// The opposite face.
    pub fn other(&self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// Available garment base colors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentColor {
    #[default]
    White,
    Black,
    Navy,
    Red,
    Green,
}

impl GarmentColor {
    pub fn label(&self) -> &'static str {
        match self {
            GarmentColor::White => "White",
            GarmentColor::Black => "Black",
            GarmentColor::Navy => "Navy",
            GarmentColor::Red => "Red",
            GarmentColor::Green => "Green",
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            GarmentColor::White => "#ffffff",
            GarmentColor::Black => "#000000",
            GarmentColor::Navy => "#0a192f",
            GarmentColor::Red => "#e11d48",
            GarmentColor::Green => "#059669",
        }
    }

    pub fn all() -> &'static [GarmentColor] {
        &[
            GarmentColor::White,
            GarmentColor::Black,
            GarmentColor::Navy,
            GarmentColor::Red,
            GarmentColor::Green,
        ]
    }
}

/// Font families offered for the printed text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
    Handwriting,
    Display,
}

impl FontFamily {
    pub fn label(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans Serif",
            FontFamily::Serif => "Serif",
            FontFamily::Monospace => "Monospace",
            FontFamily::Handwriting => "Handwriting",
            FontFamily::Display => "Display",
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            FontFamily::SansSerif => "'Inter', sans-serif",
            FontFamily::Serif => "'Merriweather', serif",
            FontFamily::Monospace => "'Roboto Mono', monospace",
            FontFamily::Handwriting => "'Caveat', cursive",
            FontFamily::Display => "'Bebas Neue', cursive",
        }
    }

    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::SansSerif,
            FontFamily::Serif,
            FontFamily::Monospace,
            FontFamily::Handwriting,
            FontFamily::Display,
        ]
    }
}

/// Font size steps for the printed text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl FontSize {
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
            FontSize::XLarge => "X-Large",
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            FontSize::Small => "14px",
            FontSize::Medium => "18px",
            FontSize::Large => "24px",
            FontSize::XLarge => "32px",
        }
    }

    pub fn all() -> &'static [FontSize] {
        &[
            FontSize::Small,
            FontSize::Medium,
            FontSize::Large,
            FontSize::XLarge,
        ]
    }
}

/// Colors offered for the printed text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FontColor {
    #[default]
    Black,
    White,
    Red,
    Blue,
    Yellow,
}

impl FontColor {
    pub fn label(&self) -> &'static str {
        match self {
            FontColor::Black => "Black",
            FontColor::White => "White",
            FontColor::Red => "Red",
            FontColor::Blue => "Blue",
            FontColor::Yellow => "Yellow",
        }
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            FontColor::Black => "#000000",
            FontColor::White => "#ffffff",
            FontColor::Red => "#e11d48",
            FontColor::Blue => "#3b82f6",
            FontColor::Yellow => "#eab308",
        }
    }

    pub fn all() -> &'static [FontColor] {
        &[
            FontColor::Black,
            FontColor::White,
            FontColor::Red,
            FontColor::Blue,
            FontColor::Yellow,
        ]
    }
}

/// Garment sizes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum GarmentSize {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
    Xxl,
}

impl GarmentSize {
    pub fn label(&self) -> &'static str {
        match self {
            GarmentSize::Xs => "XS",
            GarmentSize::S => "S",
            GarmentSize::M => "M",
            GarmentSize::L => "L",
            GarmentSize::Xl => "XL",
            GarmentSize::Xxl => "XXL",
        }
    }

    pub fn all() -> &'static [GarmentSize] {
        &[
            GarmentSize::Xs,
            GarmentSize::S,
            GarmentSize::M,
            GarmentSize::L,
            GarmentSize::Xl,
            GarmentSize::Xxl,
        ]
    }
}

/// Body build categories for the fit profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    pub fn label(&self) -> &'static str {
        match self {
            Build::Lean => "Lean",
            Build::Regular => "Regular",
            Build::Athletic => "Athletic",
            Build::Big => "Big",
        }
    }

    pub fn all() -> &'static [Build] {
        &[Build::Lean, Build::Regular, Build::Athletic, Build::Big]
    }
}

//! Built-in visual themes for the configurator.
//!
//! Themes live in a fixed catalog; a design records only the index of
//! its active theme. The keyboard shortcut that cycles themes reduces to
//! [`next_theme_index`] modulo the catalog length.

mod builtin;
mod types;

pub use builtin::{builtin_themes, get_builtin, minimal, modern, vibrant};
pub use types::Theme;

/// Number of built-in themes.
pub fn theme_count() -> usize {
    builtin_themes().len()
}

/// The theme at a persisted index, clamped into the catalog.
///
/// Records saved by a build with more themes than this one fall back to
/// the first theme instead of panicking.
pub fn theme_at(index: usize) -> Theme {
    let themes = builtin_themes();
    themes
        .get(index)
        .cloned()
        .unwrap_or_else(|| themes[0].clone())
}

/// The index after `current`, wrapping at the end of the catalog.
pub fn next_theme_index(current: usize) -> usize {
    (current + 1) % theme_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_wraps_around() {
        let count = theme_count();
        let mut index = 0;
        for _ in 0..count {
            index = next_theme_index(index);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn lookup_by_name_matches_catalog() {
        for theme in builtin_themes() {
            let found = get_builtin(&theme.name.to_lowercase()).unwrap();
            assert_eq!(found, theme);
        }
    }

    #[test]
    fn out_of_range_index_falls_back_to_first() {
        assert_eq!(theme_at(999).name, builtin_themes()[0].name);
    }
}

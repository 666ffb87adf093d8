//! Light/dark theme preference
//!
//! Persisted as the literal strings "light" and "dark" under the `theme`
//! key, default light. The icon glyph names the state the next toggle
//! produces: a sun while dark is active, a moon while light is active.

use tracing::warn;

use crate::store::{LocalStore, StoreResult};

/// Store key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Dashboard color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted literal for this theme
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// "dark" selects dark; anything else falls back to light
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The theme a toggle switches to
    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle-trigger glyph, naming the target of the next toggle
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Read the persisted preference; unset, unrecognized, or unreadable
    /// values fall back to light
    pub fn load(store: &LocalStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(%err, "could not read theme preference, using light");
                Theme::default()
            }
        }
    }

    /// Persist this theme
    pub fn save(self, store: &LocalStore) -> StoreResult<()> {
        store.put(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("solarized"), Theme::Light);
    }

    #[test]
    fn test_load_unset_store_is_light() {
        let (_dir, store) = temp_store();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_dark_then_light() {
        let (_dir, store) = temp_store();

        let theme = Theme::load(&store).flipped();
        theme.save(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("dark".to_string()));

        let theme = Theme::load(&store).flipped();
        theme.save(&store).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_icon_alternates_with_theme() {
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_ne!(Theme::Light.icon(), Theme::Light.flipped().icon());
    }
}

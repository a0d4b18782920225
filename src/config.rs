use cosmic::{
    cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry},
    theme,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::fl;

pub const CONFIG_VERSION: u64 = 1;

/// Favorites live in their own config namespace, independent of the app
/// preferences
pub const FAVORITES_ID: &str = "com.sandeep.AtomicGuru.Favorites";
pub const FAVORITES_VERSION: u64 = 1;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    Dark,
    Light,
    #[default]
    System,
}

impl AppTheme {
    pub fn theme(&self) -> theme::Theme {
        match self {
            Self::Dark => {
                let mut t = theme::system_dark();
                t.theme_type.prefer_dark(Some(true));
                t
            }
            Self::Light => {
                let mut t = theme::system_light();
                t.theme_type.prefer_dark(Some(false));
                t
            }
            Self::System => theme::system_preference(),
        }
    }
}

/// Display language for UI chrome and element content
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Language {
    English,
    #[default]
    Odia,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::Odia, Self::English]
    }

    pub fn locale(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Odia => "or",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::English => fl!("language-english"),
            Self::Odia => fl!("language-odia"),
        }
    }

    /// First-launch hint only; the persisted choice wins afterwards
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("or") {
            Self::Odia
        } else {
            Self::English
        }
    }
}

#[derive(Clone, CosmicConfigEntry, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[version = 1]
pub struct Config {
    pub app_theme: AppTheme,
    pub language: Language,
    pub first_launch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(),
            language: Language::default(),
            first_launch: true,
        }
    }
}

#[derive(Clone, CosmicConfigEntry, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[version = 1]
pub struct Favorites {
    /// Atomic numbers as decimal strings
    pub ids: BTreeSet<String>,
}

impl Favorites {
    pub fn contains(&self, atomic_number: u32) -> bool {
        self.ids.contains(&atomic_number.to_string())
    }

    /// The set with membership of `atomic_number` flipped. Two toggles
    /// return the original set.
    pub fn toggled(&self, atomic_number: u32) -> BTreeSet<String> {
        let mut ids = self.ids.clone();
        let id = atomic_number.to_string();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_membership() {
        let favorites = Favorites::default();
        let once = favorites.toggled(8);
        assert!(once.contains("8"));

        let favorites = Favorites { ids: once };
        assert!(favorites.contains(8));
        let twice = favorites.toggled(8);
        assert!(twice.is_empty());
    }

    #[test]
    fn double_toggle_is_identity() {
        let favorites = Favorites {
            ids: ["1", "26", "79"].into_iter().map(String::from).collect(),
        };
        for number in [1, 26, 79, 118] {
            let once = Favorites {
                ids: favorites.toggled(number),
            };
            let twice = once.toggled(number);
            assert_eq!(twice, favorites.ids, "toggle({number}) twice changed the set");
        }
    }

    #[test]
    fn first_launch_defaults_on() {
        let config = Config::default();
        assert!(config.first_launch);
        assert_eq!(config.language, Language::Odia);
    }
}

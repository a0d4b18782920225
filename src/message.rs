use cosmic::{
    cosmic_theme,
    iced::core::SmolStr,
    iced::keyboard::{Key, Modifiers},
    iced::widget::scrollable,
};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::{AppTheme, Config, Favorites, Language};
use crate::pages::ContextPage;
use crate::promotions::Promotion;
use crate::viewport::Gesture;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    SearchActivate,
    WindowNew,
}

impl Action {
    pub fn message(&self) -> Message {
        match self {
            Self::SearchActivate => Message::SearchActivate,
            Self::WindowNew => Message::WindowNew,
        }
    }
}

/// Messages that are used specifically by our [`App`](crate::app::App).
#[derive(Clone, Debug)]
pub enum Message {
    AppTheme(AppTheme),
    CatalogLoaded(Arc<Catalog>),
    ClassicFit,
    ClassicGesture(Gesture),
    ClassicScrolled(scrollable::Viewport),
    Config(Config),
    DialogCancel,
    DialogConfirm,
    DialogLanguage(Language),
    Favorites(Favorites),
    Key(Modifiers, Key, Option<SmolStr>),
    Language(Language),
    LaunchUrl(String),
    MaybeExit,
    Promotion(Option<Promotion>),
    PromotionImage(String, Vec<u8>),
    ScrollView(scrollable::Viewport),
    SearchActivate,
    SearchClear,
    SearchInput(String),
    SearchResults(String, Vec<u32>),
    SearchSubmit,
    Select(u32),
    SelectNone,
    Share(u32),
    SystemThemeModeChange(cosmic_theme::ThemeMode),
    ToggleContextPage(ContextPage),
    ToggleFavorite(u32),
    WindowClose,
    WindowNew,
}

//! Page-related enums for navigation and dialogs

pub mod details;
pub use details::DetailsPage;

use crate::config::Language;

/// Context page for the context drawer
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextPage {
    Settings,
}

/// Dialog page types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogPage {
    /// First-launch language selection, carrying the current choice
    LanguageSelect(Language),
}

/// Navigation page
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub enum NavPage {
    #[default]
    Elements,
    ClassicTable,
    Favorites,
}

impl NavPage {
    pub fn all() -> &'static [Self] {
        &[Self::Elements, Self::ClassicTable, Self::Favorites]
    }

    pub fn title(&self) -> String {
        use crate::fl;
        match self {
            Self::Elements => fl!("elements"),
            Self::ClassicTable => fl!("classic-table"),
            Self::Favorites => fl!("favorites"),
        }
    }

    pub fn icon(&self) -> cosmic::widget::icon::Icon {
        let name = match self {
            Self::Elements => "view-grid-symbolic",
            Self::ClassicTable => "zoom-fit-best-symbolic",
            Self::Favorites => "starred-symbolic",
        };
        cosmic::widget::icon::from_name(name).size(16).icon()
    }
}

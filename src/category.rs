use cosmic::iced::Color;

use crate::fl;

/// Element categories as tagged in the bundled catalog.
///
/// The catalog stores the category as free text inside each localized detail
/// block; [`Category::from_tag`] recognizes the English tags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    ReactiveNonmetal,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl Category {
    pub fn all() -> &'static [Self] {
        &[
            Self::AlkaliMetal,
            Self::AlkalineEarthMetal,
            Self::TransitionMetal,
            Self::PostTransitionMetal,
            Self::Metalloid,
            Self::ReactiveNonmetal,
            Self::NobleGas,
            Self::Lanthanide,
            Self::Actinide,
            Self::Unknown,
        ]
    }

    /// Parse the free-text category tag of a detail block.
    ///
    /// Matching is by containment so that tags like "diatomic nonmetal" or
    /// "probably an alkali metal" resolve to the right bucket. "alkaline
    /// earth metal" must be checked before the plain metal tags share a
    /// substring with it.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.contains("alkaline earth metal") {
            Self::AlkalineEarthMetal
        } else if tag.contains("alkali metal") {
            Self::AlkaliMetal
        } else if tag.contains("lanthanide") {
            Self::Lanthanide
        } else if tag.contains("actinide") {
            Self::Actinide
        } else if tag.contains("post-transition metal") {
            Self::PostTransitionMetal
        } else if tag.contains("transition metal") {
            Self::TransitionMetal
        } else if tag.contains("metalloid") {
            Self::Metalloid
        } else if tag.contains("noble gas") {
            Self::NobleGas
        } else if tag.contains("nonmetal") || tag.contains("halogen") {
            Self::ReactiveNonmetal
        } else {
            Self::Unknown
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::AlkaliMetal => fl!("category-alkali-metal"),
            Self::AlkalineEarthMetal => fl!("category-alkaline-earth-metal"),
            Self::TransitionMetal => fl!("category-transition-metal"),
            Self::PostTransitionMetal => fl!("category-post-transition-metal"),
            Self::Metalloid => fl!("category-metalloid"),
            Self::ReactiveNonmetal => fl!("category-reactive-nonmetal"),
            Self::NobleGas => fl!("category-noble-gas"),
            Self::Lanthanide => fl!("category-lanthanide"),
            Self::Actinide => fl!("category-actinide"),
            Self::Unknown => fl!("category-unknown"),
        }
    }

    /// Pastel palette carried over from the original app
    pub fn color(&self) -> Color {
        match self {
            Self::AlkaliMetal => Color::from_rgb8(0xA0, 0xC4, 0xFF),
            Self::AlkalineEarthMetal => Color::from_rgb8(0xFF, 0xAD, 0xAD),
            Self::TransitionMetal => Color::from_rgb8(0xE0, 0xBB, 0xE4),
            Self::PostTransitionMetal => Color::from_rgb8(0xB5, 0xEA, 0xD7),
            Self::Metalloid => Color::from_rgb8(0xFF, 0xD6, 0xA5),
            Self::ReactiveNonmetal => Color::from_rgb8(0xC9, 0xF0, 0xFF),
            Self::NobleGas => Color::from_rgb8(0xFF, 0xC6, 0xFF),
            Self::Lanthanide => Color::from_rgb8(0xD4, 0xF0, 0xC9),
            Self::Actinide => Color::from_rgb8(0xFF, 0xB3, 0xA7),
            Self::Unknown => Color::from_rgb8(0xE0, 0xE0, 0xE0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;

    #[test]
    fn tag_parsing() {
        assert_eq!(Category::from_tag("alkali metal"), Category::AlkaliMetal);
        assert_eq!(
            Category::from_tag("Alkaline earth metal"),
            Category::AlkalineEarthMetal
        );
        assert_eq!(
            Category::from_tag("diatomic nonmetal"),
            Category::ReactiveNonmetal
        );
        assert_eq!(Category::from_tag("halogen"), Category::ReactiveNonmetal);
        assert_eq!(
            Category::from_tag("post-transition metal"),
            Category::PostTransitionMetal
        );
        assert_eq!(
            Category::from_tag("transition metal"),
            Category::TransitionMetal
        );
        assert_eq!(Category::from_tag("noble gas"), Category::NobleGas);
        assert_eq!(Category::from_tag("something else"), Category::Unknown);
    }
}

//! Serde model of the bundled element catalog.
//!
//! Field names mirror the keys of `res/periodic_table.json`, which carries
//! one record per element with two parallel localized detail blocks.

use serde::Deserialize;

use crate::category::Category;
use crate::config::Language;

/// Top-level structure of the bundled catalog document
#[derive(Clone, Debug, Deserialize)]
pub struct ElementFile {
    pub elements: Vec<Element>,
}

/// A single element record
#[derive(Clone, Debug, Deserialize)]
pub struct Element {
    #[serde(rename = "atomicNumber")]
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    /// Canonical reference URL (Wikipedia)
    pub source: String,
    /// Column in the classic table layout, 1-based
    pub xpos: u16,
    /// Row in the classic table layout, 1-based
    pub ypos: u16,
    /// Latin transliteration of the Odia name; optional in the asset
    #[serde(default)]
    pub name_oe: Option<String>,
    pub details_en: ElementDetails,
    pub details_odia: ElementDetails,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ElementDetails {
    pub general_info: GeneralInfo,
    pub physical_properties: PhysicalProperties,
    pub chemical_properties: Vec<String>,
    pub occurrence: Vec<String>,
    pub uses: Vec<String>,
    pub detailed_description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeneralInfo {
    pub element_name: String,
    pub symbol: String,
    pub atomic_number: String,
    pub atomic_mass: String,
    pub category: String,
    pub group_period: String,
    pub appearance: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PhysicalProperties {
    pub melting_point: String,
    pub boiling_point: String,
    pub density: String,
    pub malleability_ductility: String,
    pub conductivity: String,
}

impl Element {
    pub fn details(&self, language: Language) -> &ElementDetails {
        match language {
            Language::English => &self.details_en,
            Language::Odia => &self.details_odia,
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        &self.details(language).general_info.element_name
    }

    /// The category tag is language-independent; the English block is
    /// authoritative for parsing it.
    pub fn category(&self) -> Category {
        Category::from_tag(&self.details_en.general_info.category)
    }
}

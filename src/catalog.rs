//! The element catalog, decoded once from the bundled asset.

use rayon::prelude::*;
use std::collections::BTreeSet;

use crate::element::{Element, ElementFile};

/// Bundled catalog document; ships with the binary
pub const CATALOG_JSON: &str = include_str!("../res/periodic_table.json");

#[derive(Debug, Default)]
pub struct Catalog {
    elements: Vec<Element>,
}

impl Catalog {
    /// Decode the bundled asset. Failure here is fatal to startup; the
    /// caller decides how to abort.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::parse(CATALOG_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let file: ElementFile = serde_json::from_str(json)?;
        let mut elements = file.elements;
        elements.par_sort_unstable_by_key(|element| element.atomic_number);
        Ok(Self { elements })
    }

    /// All elements in catalog order (ascending atomic number)
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn by_number(&self, atomic_number: u32) -> Option<&Element> {
        self.elements
            .binary_search_by_key(&atomic_number, |element| element.atomic_number)
            .ok()
            .and_then(|i| self.elements.get(i))
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
    }

    /// The element occupying a classic-table cell, if any
    pub fn at_cell(&self, xpos: u16, ypos: u16) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.xpos == xpos && element.ypos == ypos)
    }

    /// Drop favorite ids that do not name a catalog element. Persisted state
    /// may predate catalog revisions; the favorite set must stay a subset of
    /// the catalog.
    pub fn prune_favorites(&self, ids: &BTreeSet<String>) -> BTreeSet<String> {
        ids.iter()
            .filter(|id| {
                id.parse::<u32>()
                    .ok()
                    .and_then(|number| self.by_number(number))
                    .is_some()
            })
            .cloned()
            .collect()
    }

    /// Favorited elements in catalog order
    pub fn favorites<'a>(&'a self, ids: &BTreeSet<String>) -> Vec<&'a Element> {
        self.elements
            .iter()
            .filter(|element| ids.contains(&element.atomic_number.to_string()))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn test_catalog() -> Catalog {
    // Schema-complete four-element fixture; detail text abbreviated
    let detail = |name: &str, category: &str| {
        format!(
            r#"{{
                "general_info": {{
                    "element_name": "{name}",
                    "symbol": "X",
                    "atomic_number": "0",
                    "atomic_mass": "0 u",
                    "category": "{category}",
                    "group_period": "Group 1, Period 1",
                    "appearance": "colorless"
                }},
                "physical_properties": {{
                    "melting_point": "0 °C",
                    "boiling_point": "0 °C",
                    "density": "0 g/L",
                    "malleability_ductility": "Not applicable",
                    "conductivity": "Poor"
                }},
                "chemical_properties": ["reacts"],
                "occurrence": ["everywhere"],
                "uses": ["testing"],
                "detailed_description": "{name} description."
            }}"#
        )
    };
    let element = |number: u32, symbol: &str, name: &str, name_or: &str, name_oe: Option<&str>,
                   category: &str, xpos: u16, ypos: u16| {
        format!(
            r#"{{
                "atomicNumber": {number},
                "symbol": "{symbol}",
                "name": "{name}",
                "source": "https://en.wikipedia.org/wiki/{name}",
                "xpos": {xpos},
                "ypos": {ypos},
                {name_oe}
                "details_en": {details_en},
                "details_odia": {details_or}
            }}"#,
            name_oe = match name_oe {
                Some(t) => format!(r#""name_oe": "{t}","#),
                None => String::new(),
            },
            details_en = detail(name, category),
            details_or = detail(name_or, category),
        )
    };
    let json = format!(
        r#"{{"elements": [{}, {}, {}, {}]}}"#,
        element(8, "O", "Oxygen", "ଅମ୍ଳଜାନ", Some("Amlajana"), "diatomic nonmetal", 16, 2),
        element(1, "H", "Hydrogen", "ଉଦଜାନ", Some("Udajana"), "diatomic nonmetal", 1, 1),
        element(11, "Na", "Sodium", "ସୋଡ଼ିୟମ", Some("Sodiyama"), "alkali metal", 1, 3),
        element(2, "He", "Helium", "ହିଲିୟମ", None, "noble gas", 18, 1),
    );
    Catalog::parse(&json).expect("fixture catalog must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes() {
        let catalog = Catalog::load().expect("bundled catalog must decode");
        assert_eq!(catalog.len(), 118);

        let mut numbers = BTreeSet::new();
        for element in catalog.elements() {
            assert!(
                (1..=118).contains(&element.atomic_number),
                "atomic number {} out of range",
                element.atomic_number
            );
            assert!(
                numbers.insert(element.atomic_number),
                "duplicate atomic number {}",
                element.atomic_number
            );
            assert!((1..=18).contains(&element.xpos), "{}: bad xpos", element.name);
            assert!((1..=10).contains(&element.ypos), "{}: bad ypos", element.name);
            assert!(!element.symbol.is_empty());
        }
    }

    #[test]
    fn catalog_order_is_ascending() {
        let catalog = Catalog::load().expect("bundled catalog must decode");
        for pair in catalog.elements().windows(2) {
            assert!(pair[0].atomic_number < pair[1].atomic_number);
        }
    }

    #[test]
    fn lookups() {
        let catalog = test_catalog();
        assert_eq!(catalog.by_number(8).map(|e| e.symbol.as_str()), Some("O"));
        assert_eq!(catalog.by_number(200).map(|e| e.symbol.as_str()), None);
        // Symbol lookup is case-insensitive
        assert_eq!(catalog.by_symbol("he").map(|e| e.atomic_number), Some(2));
        assert_eq!(catalog.by_symbol("NA").map(|e| e.atomic_number), Some(11));
        assert_eq!(catalog.at_cell(1, 1).map(|e| e.atomic_number), Some(1));
        assert!(catalog.at_cell(5, 5).is_none());
    }

    #[test]
    fn favorite_pruning() {
        let catalog = test_catalog();
        let ids: BTreeSet<String> = ["8", "2", "119", "bogus"]
            .into_iter()
            .map(String::from)
            .collect();
        let pruned = catalog.prune_favorites(&ids);
        assert_eq!(
            pruned,
            ["2", "8"].into_iter().map(String::from).collect::<BTreeSet<_>>()
        );

        // Favorites listing follows catalog order, not insertion order
        let favorites = catalog.favorites(&pruned);
        let numbers: Vec<u32> = favorites.iter().map(|e| e.atomic_number).collect();
        assert_eq!(numbers, vec![2, 8]);
    }
}

//! Catalog filtering, extracted as pure functions so search stays testable
//! outside the UI loop.

use regex::Regex;

use crate::catalog::Catalog;
use crate::element::Element;

/// Filter the catalog by a query string.
///
/// Returns the atomic numbers of matching elements in catalog order. A blank
/// query is the identity filter. A non-blank query matches an element when
/// any of its searchable fields (English name, Odia name, transliteration if
/// present, symbol, decimal atomic number) contains the query
/// case-insensitively. No ranking is applied.
pub fn filter_elements(catalog: &Catalog, query: &str) -> Vec<u32> {
    if query.trim().is_empty() {
        return catalog
            .elements()
            .iter()
            .map(|element| element.atomic_number)
            .collect();
    }

    let pattern = regex::escape(query);
    let regex = match regex::RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
    {
        Ok(ok) => ok,
        Err(err) => {
            log::warn!("failed to build filter {:?}: {}", pattern, err);
            return Vec::new();
        }
    };

    catalog
        .elements()
        .iter()
        .filter(|element| element_matches(element, &regex))
        .map(|element| element.atomic_number)
        .collect()
}

fn element_matches(element: &Element, regex: &Regex) -> bool {
    regex.is_match(&element.name)
        || regex.is_match(&element.details_odia.general_info.element_name)
        || element
            .name_oe
            .as_deref()
            .is_some_and(|transliteration| regex.is_match(transliteration))
        || regex.is_match(&element.symbol)
        || regex.is_match(&element.atomic_number.to_string())
}

#[cfg(test)]
mod tests {
    use super::filter_elements;
    use crate::catalog::test_catalog;

    // Fixture holds H(1), He(2), O(8), Na(11)

    #[test]
    fn blank_query_is_identity() {
        let catalog = test_catalog();
        assert_eq!(filter_elements(&catalog, ""), vec![1, 2, 8, 11]);
        assert_eq!(filter_elements(&catalog, "   "), vec![1, 2, 8, 11]);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let catalog = test_catalog();
        assert_eq!(filter_elements(&catalog, "ox"), vec![8]);
        assert_eq!(filter_elements(&catalog, "OX"), vec![8]);
        assert_eq!(filter_elements(&catalog, "oXyGeN"), vec![8]);
        assert!(filter_elements(&catalog, "zz").is_empty());
    }

    #[test]
    fn symbol_and_number_match() {
        let catalog = test_catalog();
        assert_eq!(filter_elements(&catalog, "sod"), vec![11]);
        // "na" also hits the transliterations of H and O, not just the symbol Na
        assert_eq!(filter_elements(&catalog, "na"), vec![1, 8, 11]);
        // Decimal text containment: "1" hits 1 and 11
        assert_eq!(filter_elements(&catalog, "1"), vec![1, 11]);
        assert_eq!(filter_elements(&catalog, "11"), vec![11]);
    }

    #[test]
    fn localized_and_transliterated_names_match() {
        let catalog = test_catalog();
        // Odia script name
        assert_eq!(filter_elements(&catalog, "ଅମ୍ଳଜାନ"), vec![8]);
        // Transliteration, case-insensitively
        assert_eq!(filter_elements(&catalog, "udaja"), vec![1]);
        // He has no transliteration; the absent field simply never matches
        assert_eq!(filter_elements(&catalog, "helium"), vec![2]);
    }

    #[test]
    fn results_are_an_ordered_subsequence() {
        let catalog = test_catalog();
        let all = filter_elements(&catalog, "");
        let matched = filter_elements(&catalog, "h");
        let mut last_position = 0;
        for number in &matched {
            let position = all
                .iter()
                .position(|n| n == number)
                .expect("result must come from the catalog");
            assert!(position >= last_position, "order not preserved");
            last_position = position;
        }
        // Complement property: everything excluded really matches nowhere
        for element in catalog.elements() {
            if !matched.contains(&element.atomic_number) {
                let haystacks = [
                    element.name.to_lowercase(),
                    element.details_odia.general_info.element_name.clone(),
                    element.name_oe.clone().unwrap_or_default().to_lowercase(),
                    element.symbol.to_lowercase(),
                    element.atomic_number.to_string(),
                ];
                assert!(!haystacks.iter().any(|h| h.contains('h')));
            }
        }
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let catalog = test_catalog();
        assert!(filter_elements(&catalog, "(").is_empty());
        assert!(filter_elements(&catalog, ".*").is_empty());
    }
}

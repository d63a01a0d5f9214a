//! Search-link synthesis.
//!
//! Deliberately split in two: `build_candidates` constructs every catalog
//! entry with its URL and signal, `search_marketplaces` applies the
//! availability filter. Swapping the synthetic oracle for a real lookup
//! touches neither URL construction nor the filter.

use tracing::debug;

use snapfind_core::{Locale, MarketplaceCandidate, ProductDescription, SearchResult};

use crate::catalog::CATALOG;
use crate::oracle::AvailabilityOracle;

/// Query used when a description somehow carries no usable name; the URLs
/// stay syntactically valid either way.
fn query_fallback(locale: Locale) -> &'static str {
    match locale {
        Locale::Tr => "ürün",
        Locale::En => "item",
    }
}

fn blurb(locale: Locale, spec: &crate::catalog::CandidateSpec, name: &str) -> String {
    match locale {
        Locale::Tr => format!("\"{name}\" için {} ara", spec.locative_tr),
        Locale::En => format!("Search {} for \"{name}\"", spec.display_name),
    }
}

/// Build the full candidate set for a product name: one entry per catalog
/// marketplace, each with its search URL and a freshly drawn signal.
pub fn build_candidates(
    description: &ProductDescription,
    oracle: &dyn AvailabilityOracle,
    locale: Locale,
) -> Vec<MarketplaceCandidate> {
    let name = description.name.trim();
    let name = if name.is_empty() {
        query_fallback(locale)
    } else {
        name
    };
    let escaped = urlencoding::encode(name);

    CATALOG
        .iter()
        .map(|spec| {
            let signal = oracle.signal(spec);
            MarketplaceCandidate {
                id: spec.id.to_string(),
                display_name: spec.display_name.to_string(),
                base_url: spec.base_url.to_string(),
                search_url: spec.search_template.replace("{query}", &escaped),
                icon_url: spec.icon_url.to_string(),
                blurb: blurb(locale, spec, name),
                availability_signal: signal,
                is_available: signal > 0,
            }
        })
        .collect()
}

/// Full synthesis step: build all candidates, then keep the available ones
/// in catalog order.
pub fn search_marketplaces(
    description: &ProductDescription,
    oracle: &dyn AvailabilityOracle,
    locale: Locale,
) -> SearchResult {
    let all = build_candidates(description, oracle, locale);
    let candidates: Vec<_> = all.into_iter().filter(|c| c.is_available).collect();
    debug!(
        product = %description.name,
        shown = candidates.len(),
        total = CATALOG.len(),
        "Synthesized marketplace links"
    );
    SearchResult {
        description: description.clone(),
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::SyntheticAvailability;
    use std::collections::HashMap;

    fn description(name: &str) -> ProductDescription {
        ProductDescription {
            name: name.to_string(),
            category: None,
            features: vec![],
            brand: None,
            color: None,
            style: None,
            material: None,
        }
    }

    #[test]
    fn urls_carry_the_escaped_name() {
        let oracle = SyntheticAvailability::with_seed(1);
        let all = build_candidates(&description("Kırmızı Ayakkabı"), &oracle, Locale::Tr);
        assert_eq!(all.len(), CATALOG.len());
        for candidate in &all {
            assert!(
                candidate
                    .search_url
                    .contains("K%C4%B1rm%C4%B1z%C4%B1%20Ayakkab%C4%B1"),
                "{}",
                candidate.search_url
            );
            assert!(!candidate.search_url.contains(' '));
        }
    }

    #[test]
    fn filter_is_exactly_signal_above_zero() {
        let seed = 99;
        let full = build_candidates(
            &description("lamp"),
            &SyntheticAvailability::with_seed(seed),
            Locale::En,
        );
        let filtered = search_marketplaces(
            &description("lamp"),
            &SyntheticAvailability::with_seed(seed),
            Locale::En,
        );

        let expected: Vec<_> = full
            .iter()
            .filter(|c| c.availability_signal > 0)
            .map(|c| c.id.clone())
            .collect();
        let got: Vec<_> = filtered.candidates.iter().map(|c| c.id.clone()).collect();
        assert_eq!(got, expected);
        assert!(filtered.candidates.iter().all(|c| c.is_available));
    }

    #[test]
    fn catalog_order_is_preserved() {
        let result = search_marketplaces(
            &description("lamp"),
            &SyntheticAvailability::with_seed(5),
            Locale::En,
        );
        let order: HashMap<_, _> = CATALOG
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.id, i))
            .collect();
        let positions: Vec<_> = result
            .candidates
            .iter()
            .map(|c| order[c.id.as_str()])
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn every_marketplace_can_be_both_shown_and_hidden() {
        let mut shown: HashMap<&str, u32> = HashMap::new();
        let mut hidden: HashMap<&str, u32> = HashMap::new();

        for seed in 0..5000u64 {
            let oracle = SyntheticAvailability::with_seed(seed);
            for candidate in build_candidates(&description("lamp"), &oracle, Locale::En) {
                let spec_id = CATALOG
                    .iter()
                    .find(|s| s.id == candidate.id)
                    .map(|s| s.id)
                    .unwrap();
                if candidate.is_available {
                    *shown.entry(spec_id).or_default() += 1;
                } else {
                    *hidden.entry(spec_id).or_default() += 1;
                }
            }
        }

        for spec in &CATALOG {
            assert!(shown.get(spec.id).copied().unwrap_or(0) > 0, "{}", spec.id);
            assert!(hidden.get(spec.id).copied().unwrap_or(0) > 0, "{}", spec.id);
        }
    }

    #[test]
    fn empty_name_falls_back_but_stays_valid() {
        let oracle = SyntheticAvailability::with_seed(3);
        let all = build_candidates(&description("   "), &oracle, Locale::Tr);
        for candidate in &all {
            assert!(candidate.search_url.contains("%C3%BCr%C3%BCn"));
        }
    }

    #[test]
    fn blurbs_follow_the_locale() {
        let oracle = SyntheticAvailability::with_seed(3);
        let tr = build_candidates(&description("lamba"), &oracle, Locale::Tr);
        assert!(tr[0].blurb.contains("Trendyol'da"));
        let en = build_candidates(&description("lamp"), &oracle, Locale::En);
        assert!(en[0].blurb.starts_with("Search Trendyol"));
    }
}

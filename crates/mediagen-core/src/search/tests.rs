use super::*;
use crate::catalog::{Catalog, CatalogItem};

fn titled(id: &str, title: &str) -> CatalogItem {
    CatalogItem::new(id, title, "", "")
}

fn titles<'a>(matches: &[ScoredMatch<'a>]) -> Vec<&'a str> {
    matches.iter().map(|m| m.item.title.as_str()).collect()
}

#[test]
fn query_keeps_only_matching_items() {
    let items = vec![
        titled("fal-ai/recraft-v3", "Recraft V3"),
        titled("fal-ai/flux/dev", "FLUX.1 [dev]"),
        titled("fal-ai/kling-video/v1.6/pro/text-to-video", "Kling 1.6"),
    ];

    let results = RankedSearch::default().rank(&items, "flux");

    assert_eq!(titles(&results), vec!["FLUX.1 [dev]"]);
    assert!(results[0].score > 0.0);
}

#[test]
fn subsequence_query_ranks_below_prefix_query() {
    let items = vec![titled("fal-ai/flux/dev", "FLUX.1 [dev]")];
    let search = RankedSearch::default();

    let scattered = search.rank(&items, "fd");
    let prefix = search.rank(&items, "flux");

    assert_eq!(scattered.len(), 1);
    assert!(scattered[0].score > 0.0);
    assert!(scattered[0].score < prefix[0].score);
}

#[test]
fn empty_catalog_yields_no_results() {
    let results = RankedSearch::default().rank(&[], "anything");
    assert!(results.is_empty());
}

#[test]
fn empty_query_lifts_popular_titles() {
    let items = vec![
        titled("acme/obscure", "Obscure Model"),
        titled("fal-ai/flux/dev", "FLUX.1 [dev]"),
    ];

    let results = RankedSearch::default().rank(&items, "");

    assert_eq!(titles(&results), vec!["FLUX.1 [dev]", "Obscure Model"]);
    assert_eq!(results[0].score, 100.0);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn whitespace_query_is_the_default_view() {
    let items = vec![
        titled("acme/obscure", "Obscure Model"),
        titled("fal-ai/veo2", "Veo 2"),
        titled("acme/another", "Another Model"),
    ];
    let search = RankedSearch::default();

    assert_eq!(
        titles(&search.rank(&items, "   \t")),
        titles(&search.rank(&items, ""))
    );
    assert_eq!(
        titles(&search.rank(&items, "  ")),
        vec!["Veo 2", "Obscure Model", "Another Model"]
    );
}

#[test]
fn default_view_ignores_non_title_fields() {
    let items = vec![
        CatalogItem::new("fal-ai/flux/plain", "Plain", "text-to-image", "flux based"),
        titled("acme/stable", "Stable Video"),
    ];

    let results = RankedSearch::default().rank(&items, "");

    assert_eq!(titles(&results), vec!["Stable Video", "Plain"]);
}

#[test]
fn equal_scores_keep_catalog_order() {
    let items = vec![
        titled("a", "Veo 2"),
        titled("b", "Veo 2"),
        titled("c", "Veo 2"),
    ];

    let results = RankedSearch::default().rank(&items, "veo");
    let ids: Vec<&str> = results.iter().map(|m| m.item.id.as_str()).collect();

    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn results_are_capped() {
    let items: Vec<CatalogItem> = (0..250)
        .map(|i| titled(&format!("fal-ai/flux-{i}"), &format!("Flux {i}")))
        .collect();
    let search = RankedSearch::default();

    assert_eq!(search.rank(&items, "flux").len(), MAX_RESULTS);
    assert_eq!(search.rank(&items, "").len(), MAX_RESULTS);
}

#[test]
fn results_are_sorted_by_descending_score() {
    let catalog = Catalog::fallback();
    let results = RankedSearch::default().rank(catalog.items(), "video");

    assert!(!results.is_empty());
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn exact_title_beats_prefix_title() {
    let items = vec![titled("x/luma-ray", "Luma Ray"), titled("x/luma", "Luma")];

    let results = RankedSearch::default().rank(&items, "LUMA");

    assert_eq!(titles(&results), vec!["Luma", "Luma Ray"]);
}

#[test]
fn custom_popular_terms() {
    let search = RankedSearch::new(SearchConfig {
        popular_terms: vec!["recraft".to_string(), "  ".to_string()],
        popular_boost: 7.5,
    })
    .unwrap();
    let items = vec![titled("a", "FLUX.1 [dev]"), titled("b", "Recraft V3")];

    let results = search.rank(&items, "");

    assert_eq!(titles(&results), vec!["Recraft V3", "FLUX.1 [dev]"]);
    assert_eq!(results[0].score, 7.5);
}

#[test]
fn popular_terms_match_literally() {
    let search = RankedSearch::new(SearchConfig {
        popular_terms: vec!["v1.6".to_string()],
        ..Default::default()
    })
    .unwrap();

    assert!(search.is_popular("Kling V1.6"));
    assert!(!search.is_popular("Kling v1x6"));
}

#[test]
fn no_popular_terms_keeps_catalog_order() {
    let search = RankedSearch::new(SearchConfig {
        popular_terms: vec![],
        ..Default::default()
    })
    .unwrap();
    let items = vec![titled("a", "Obscure"), titled("b", "FLUX.1 [dev]")];

    let results = search.rank(&items, "");

    assert_eq!(titles(&results), vec!["Obscure", "FLUX.1 [dev]"]);
    assert!(results.iter().all(|m| m.score == 0.0));
}

#[test]
fn rejects_invalid_boost() {
    for boost in [-1.0, f64::NAN, f64::INFINITY] {
        let err = RankedSearch::new(SearchConfig {
            popular_boost: boost,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, MediagenError::ConfigError(_)));
    }
}

#[test]
fn config_uses_camel_case_keys() {
    let config: SearchConfig =
        serde_json::from_str(r#"{"popularTerms": ["luma"], "popularBoost": 5}"#).unwrap();
    assert_eq!(config.popular_terms, vec!["luma"]);
    assert_eq!(config.popular_boost, 5.0);

    let defaults: SearchConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, SearchConfig::default());
}

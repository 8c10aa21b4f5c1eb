use mediagen_core::Catalog;
use mediagen_core::CatalogItem;
use mediagen_core::RankedSearch;

use super::ModelPicker;

fn catalog() -> Catalog {
    return Catalog::new(vec![
        CatalogItem::new("acme/obscure", "Obscure Model", "text-to-image", "Rarely used"),
        CatalogItem::new("fal-ai/flux/dev", "FLUX.1 [dev]", "text-to-image", "High quality"),
        CatalogItem::new("fal-ai/recraft-v3", "Recraft V3", "text-to-image", "Vector art"),
    ]);
}

fn loaded_picker() -> ModelPicker {
    let mut picker = ModelPicker::new(RankedSearch::default());
    picker.load_catalog(catalog());
    return picker;
}

#[test]
fn it_shows_loading_before_catalog_arrives() {
    let mut picker = ModelPicker::new(RankedSearch::default());
    picker.set_query("flux");

    assert!(!picker.is_loaded());
    assert_eq!(picker.options().len(), 1);
    assert_eq!(picker.options()[0].name, "Loading...");
    assert!(picker.selected().is_none());
    assert_eq!(picker.status(), "Loading...");
}

#[test]
fn it_keeps_the_query_typed_while_loading() {
    let mut picker = ModelPicker::new(RankedSearch::default());
    picker.set_query("recraft");
    picker.load_catalog(catalog());

    assert_eq!(picker.query(), "recraft");
    assert_eq!(picker.options()[0].value, "fal-ai/recraft-v3");
}

#[test]
fn it_lists_popular_models_first_by_default() {
    let picker = loaded_picker();

    let values: Vec<&str> = picker
        .options()
        .iter()
        .map(|o| return o.value.as_str())
        .collect();
    assert_eq!(
        values,
        vec!["fal-ai/flux/dev", "acme/obscure", "fal-ai/recraft-v3"]
    );
    assert_eq!(picker.status(), "FLUX.1 [dev] | 3/3");
}

#[test]
fn it_filters_on_query() {
    let mut picker = loaded_picker();
    picker.set_query("flux");

    assert_eq!(picker.options().len(), 1);
    assert_eq!(picker.options()[0].name, "FLUX.1 [dev]");
    assert_eq!(picker.options()[0].description, "[text-to-image] High quality");
}

#[test]
fn it_substitutes_placeholder_for_no_matches() {
    let mut picker = loaded_picker();
    picker.set_query("zzzz");

    assert_eq!(picker.options().len(), 1);
    assert_eq!(picker.options()[0].name, "No matches");
    assert!(picker.selected().is_none());
    assert_eq!(picker.status(), "0/3 models");
}

#[test]
fn it_handles_empty_catalog() {
    let mut picker = ModelPicker::new(RankedSearch::default());
    picker.load_catalog(Catalog::default());
    picker.set_query("anything");

    assert_eq!(picker.options()[0].name, "No matches");
    assert_eq!(picker.status(), "0/0 models");
}

#[test]
fn it_wraps_selection() {
    let mut picker = loaded_picker();

    picker.select_previous();
    assert_eq!(picker.selected_index(), 2);
    assert_eq!(picker.selected().unwrap().value, "fal-ai/recraft-v3");

    picker.select_next();
    assert_eq!(picker.selected_index(), 0);
    picker.select_next();
    assert_eq!(picker.selected().unwrap().name, "Obscure Model");
}

#[test]
fn it_resets_selection_on_query_change() {
    let mut picker = loaded_picker();
    picker.select_next();
    picker.set_query("");

    assert_eq!(picker.selected_index(), 0);
}

use std::cell::Cell;

use searchable_select::classify::classify;
use searchable_select::descriptor::Descriptor;
use searchable_select::filter::{
    Fallible, FuzzyFilter, SubstringFilter, default_option_filter, filter_groups, filter_options,
};
use searchable_select::record::{OptionRecord, option_records};
use searchable_select::SelectError;

fn fruits() -> Descriptor {
    Descriptor::root()
        .child(Descriptor::placeholder("pick a fruit"))
        .child(Descriptor::option("Apple"))
        .child(Descriptor::option("Banana"))
        .child(Descriptor::option("Pineapple"))
        .child(Descriptor::option("Cherry"))
}

fn records(root: &Descriptor) -> Vec<OptionRecord<'_>> {
    let classified = classify(root).unwrap();
    option_records(&classified, None, false)
}

fn texts(records: &[OptionRecord<'_>]) -> Vec<String> {
    records.iter().map(|record| record.text.clone()).collect()
}

#[test]
fn test_default_filter_absent_search_matches() {
    assert!(default_option_filter(None, &Descriptor::option("anything")));
}

#[test]
fn test_default_filter_empty_search_matches() {
    assert!(default_option_filter(Some(""), &Descriptor::option("anything")));
    assert!(default_option_filter(Some(""), &Descriptor::search_field()));
}

#[test]
fn test_default_filter_match_and_miss() {
    assert!(default_option_filter(Some("search"), &Descriptor::option("search")));
    assert!(default_option_filter(Some("SEAR"), &Descriptor::option("research")));
    assert!(!default_option_filter(Some("search"), &Descriptor::option("miss")));
}

#[test]
fn test_filter_without_search_returns_all() {
    let root = fruits();
    let options = records(&root);

    let all = filter_options(&options, None, &SubstringFilter).unwrap();
    let empty = filter_options(&options, Some(""), &SubstringFilter).unwrap();

    assert_eq!(all, options);
    assert_eq!(empty, options);
}

#[test]
fn test_filter_case_insensitive_order_preserved() {
    let root = fruits();
    let options = records(&root);

    let visible = filter_options(&options, Some("APPLE"), &SubstringFilter).unwrap();

    assert_eq!(texts(&visible), vec!["Apple", "Pineapple"]);
    assert_eq!(visible[0].original_index, 0);
    assert_eq!(visible[1].original_index, 2);
}

#[test]
fn test_filter_no_matches_is_empty() {
    let root = fruits();
    let options = records(&root);

    let visible = filter_options(&options, Some("kiwi"), &SubstringFilter).unwrap();

    assert!(visible.is_empty());
}

#[test]
fn test_custom_predicate_called_once_per_option() {
    let root = fruits();
    let options = records(&root);
    let calls = Cell::new(0);

    let predicate = |search: &str, option: &Descriptor| {
        calls.set(calls.get() + 1);
        option.name.is_none() && !search.is_empty()
    };
    let visible = filter_options(&options, Some("x"), &predicate).unwrap();

    assert_eq!(calls.get(), options.len());
    assert_eq!(visible.len(), options.len());
}

#[test]
fn test_custom_predicate_sees_descriptor_attrs() {
    let root = Descriptor::root()
        .child(Descriptor::option("one").attr("tier", "gold"))
        .child(Descriptor::option("two").attr("tier", "silver"))
        .child(Descriptor::option("three").attr("tier", "gold"));
    let options = records(&root);

    let by_tier = |search: &str, option: &Descriptor| {
        option.attrs.get("tier").and_then(|tier| tier.as_str()) == Some(search)
    };
    let visible = filter_options(&options, Some("gold"), &by_tier).unwrap();

    assert_eq!(texts(&visible), vec!["one", "three"]);
}

#[test]
fn test_fallible_predicate_error_propagates() {
    let root = fruits();
    let options = records(&root);

    let failing = Fallible(|_: &str, option: &Descriptor| -> Result<bool, String> {
        if option.children == Descriptor::option("Banana").children {
            Err("cannot match bananas".to_string())
        } else {
            Ok(true)
        }
    });
    let err = filter_options(&options, Some("a"), &failing).unwrap_err();

    assert!(matches!(err, SelectError::Predicate(_)));
    assert!(err.to_string().contains("cannot match bananas"));
}

#[test]
fn test_substring_filter_uses_record_text() {
    let root = Descriptor::root()
        .child(Descriptor::option("a").attr("label", "Alpha"))
        .child(Descriptor::option("b").attr("label", "Beta"));
    let classified = classify(&root).unwrap();
    let combiner: searchable_select::text::TextCombiner = std::sync::Arc::new(|option: &Descriptor| {
        option
            .attrs
            .get("label")
            .and_then(|label| label.as_str())
            .unwrap_or_default()
            .to_string()
    });
    let options = option_records(&classified, Some(&combiner), false);

    let visible = filter_options(&options, Some("alp"), &SubstringFilter).unwrap();

    assert_eq!(texts(&visible), vec!["Alpha"]);
}

#[test]
fn test_fuzzy_filter_keeps_declaration_order() {
    let root = fruits();
    let options = records(&root);
    let fuzzy = FuzzyFilter::new();

    let visible = filter_options(&options, Some("apl"), &fuzzy).unwrap();

    assert_eq!(texts(&visible), vec!["Apple", "Pineapple"]);
}

#[test]
fn test_fuzzy_filter_empty_query_matches_all() {
    let root = fruits();
    let options = records(&root);

    let visible = filter_options(&options, Some(""), &FuzzyFilter::new()).unwrap();

    assert_eq!(visible.len(), 4);
}

#[test]
fn test_empty_groups_are_pruned() {
    let root = Descriptor::root()
        .child(
            Descriptor::group("fruit")
                .text("Fruit")
                .child(Descriptor::option("apple"))
                .child(Descriptor::option("banana")),
        )
        .child(
            Descriptor::group("veg")
                .text("Vegetables")
                .child(Descriptor::option("carrot")),
        );
    let classified = classify(&root).unwrap();
    let options = option_records(&classified, None, false);

    let visible = filter_options(&options, Some("an"), &SubstringFilter).unwrap();
    let groups = filter_groups(&classified, &visible);

    assert_eq!(groups.len(), 2);
    let fruit = groups[0].as_ref().unwrap();
    assert_eq!(fruit.name.as_deref(), Some("fruit"));
    assert_eq!(texts(&fruit.options), vec!["banana"]);
    assert!(groups[1].is_none());
}

use std::sync::{Arc, Mutex};

use searchable_select::prelude::*;

fn three_options() -> Descriptor {
    Descriptor::root()
        .child(Descriptor::placeholder("select one"))
        .child(Descriptor::option("option a"))
        .child(Descriptor::option("option b"))
        .child(Descriptor::option("option c").attr("testProp", "foo"))
}

#[test]
fn test_resolve_is_idempotent() {
    let select = SearchableSelect::new(three_options());
    let state = SelectState::new().with_selected(1).with_search("option");

    let first = select.resolve(&state).unwrap();
    let second = select.resolve(&state).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_selection_survives_search_changes() {
    let select = SearchableSelect::new(three_options());
    let mut state = SelectState::new().with_selected(2);

    let menu = select.resolve(&state).unwrap();
    assert_eq!(menu.selected_indices, vec![2]);
    assert_eq!(menu.original_index(2), Some(2));

    state.apply_search("option a");
    let menu = select.resolve(&state).unwrap();
    assert!(menu.selected_indices.is_empty());
    assert_eq!(state.selected_index, Some(2));
}

#[test]
fn test_on_select_receives_original_index() {
    let calls: Arc<Mutex<Vec<(Option<usize>, Option<String>)>>> = Arc::default();
    let sink = Arc::clone(&calls);
    let select = SearchableSelect::new(three_options()).on_select(move |index, event| {
        let prop = event
            .attr("testProp")
            .and_then(|value| value.as_str())
            .map(str::to_string);
        sink.lock().unwrap().push((index, prop));
    });

    let state = SelectState::new().with_search("option");
    let menu = select.resolve(&state).unwrap();
    let picked = select
        .select(&menu, &MenuEvent::option(2, SourceEvent::Click { x: 0, y: 3 }))
        .unwrap();
    assert_eq!(picked.original_index, Some(2));

    let state = SelectState::new().with_search("c");
    let menu = select.resolve(&state).unwrap();
    select.select(&menu, &MenuEvent::option(0, SourceEvent::Input));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], (Some(2), Some("foo".to_string())));
    assert_eq!(calls[1], (Some(2), Some("foo".to_string())));
}

#[test]
fn test_click_at_filtered_position_reports_original() {
    let root = Descriptor::root()
        .child(Descriptor::option("red"))
        .child(Descriptor::option("green"))
        .child(Descriptor::option("blue"))
        .child(Descriptor::option("purple"));
    let picked: Arc<Mutex<Option<usize>>> = Arc::default();
    let sink = Arc::clone(&picked);
    let select = SearchableSelect::new(root).on_select(move |index, _| {
        *sink.lock().unwrap() = index;
    });

    // "u" keeps blue and purple.
    let menu = select.resolve(&SelectState::new().with_search("u")).unwrap();
    select.select(&menu, &MenuEvent::option(1, SourceEvent::Programmatic));

    assert_eq!(*picked.lock().unwrap(), Some(3));
}

#[test]
fn test_unselectable_click_does_not_fire() {
    let fired: Arc<Mutex<usize>> = Arc::default();
    let sink = Arc::clone(&fired);
    let select = SearchableSelect::new(three_options())
        .with_config(SelectConfig::default().with_loading(true))
        .on_select(move |_, _| *sink.lock().unwrap() += 1);

    let menu = select.resolve(&SelectState::new()).unwrap();

    assert!(select.select(&menu, &MenuEvent::option(0, SourceEvent::Programmatic)).is_none());
    assert_eq!(*fired.lock().unwrap(), 0);
}

#[test]
fn test_reset_click_clears_selection() {
    let select = SearchableSelect::new(three_options());
    let mut state = SelectState::new().with_selected(1);

    let menu = select.resolve(&state).unwrap();
    let event = MenuEvent::new(MenuTarget::Null, SourceEvent::Click { x: 0, y: 0 });
    let selected = select.select(&menu, &event).unwrap();
    state.apply_selection(&selected);

    assert_eq!(state.selected_index, None);
}

#[test]
fn test_on_search_fires_once_with_text() {
    let searches: Arc<Mutex<Vec<(String, SourceEvent)>>> = Arc::default();
    let sink = Arc::clone(&searches);
    let select = SearchableSelect::new(three_options()).on_search(move |text, event| {
        sink.lock()
            .unwrap()
            .push((text.to_string(), event.source.clone()));
    });

    select.search("asdf", SourceEvent::Input);

    let searches = searches.lock().unwrap();
    assert_eq!(searches.as_slice(), &[("asdf".to_string(), SourceEvent::Input)]);
}

#[test]
fn test_custom_option_filter() {
    let select = SearchableSelect::new(three_options())
        .with_option_filter(|search, option| option.attrs.contains_key(search));

    let menu = select
        .resolve(&SelectState::new().with_search("testProp"))
        .unwrap();

    assert_eq!(menu.options().len(), 1);
    assert_eq!(menu.original_index(0), Some(2));
}

#[test]
fn test_fallible_predicate_aborts_pass() {
    let select = SearchableSelect::new(three_options()).with_predicate(Fallible(
        |_: &str, _: &Descriptor| -> Result<bool, std::io::Error> {
            Err(std::io::Error::other("backend unavailable"))
        },
    ));

    let err = select.resolve(&SelectState::new()).unwrap_err();

    assert!(matches!(err, SelectError::Predicate(_)));
}

#[test]
fn test_fuzzy_match_mode() {
    let select = SearchableSelect::new(three_options())
        .with_config(SelectConfig::default().with_match_mode(MatchMode::Fuzzy));

    let menu = select.resolve(&SelectState::new().with_search("opnc")).unwrap();

    assert_eq!(menu.options().len(), 1);
    assert_eq!(menu.original_index(0), Some(2));
}

#[test]
fn test_nested_group_fails_pass() {
    let inner = Descriptor::group("inner").child(Descriptor::option("x"));
    let root = Descriptor::root().child(Descriptor::group("outer").child(inner));
    let select = SearchableSelect::new(root);

    assert!(matches!(
        select.resolve(&SelectState::new()),
        Err(SelectError::InvalidTree { .. })
    ));
    assert!(select.control(&SelectState::new()).is_err());
}

#[test]
fn test_control_shows_selected_label() {
    let select = SearchableSelect::new(three_options());

    let view = select.control(&SelectState::new().with_selected(2)).unwrap();

    assert_eq!(view.label(), "option c");
    assert!(view.is_selected);
    assert!(view.is_highlighted);
    assert!(!view.is_disabled);
}

#[test]
fn test_control_shows_selection_even_when_filtered_out() {
    let select = SearchableSelect::new(three_options());

    let view = select
        .control(&SelectState::new().with_selected(2).with_search("option a"))
        .unwrap();

    assert_eq!(view.label(), "option c");
}

#[test]
fn test_control_placeholder_when_unselected() {
    let select = SearchableSelect::new(three_options());

    let view = select.control(&SelectState::new()).unwrap();

    assert_eq!(view.label(), "select one");
    assert!(matches!(view.content, ControlContent::Placeholder(Some(_))));
    assert!(!view.is_selected);
    assert!(!view.is_highlighted);
}

#[test]
fn test_control_disabled() {
    let select = SearchableSelect::new(three_options())
        .with_config(SelectConfig::default().with_disabled(true));

    let view = select.control(&SelectState::new().with_selected(2)).unwrap();
    let menu = select.resolve(&SelectState::new()).unwrap();

    assert!(view.is_disabled);
    assert!(!view.is_selected);
    assert!(menu.is_disabled);
}

#[test]
fn test_control_highlight_disabled() {
    let select = SearchableSelect::new(three_options())
        .with_config(SelectConfig::default().with_selection_highlighted(false));

    let view = select.control(&SelectState::new().with_selected(2)).unwrap();

    assert!(!view.is_selected);
    assert!(!view.is_highlighted);
}

#[test]
fn test_text_combiner_drives_labels_and_matching() {
    let select = SearchableSelect::new(three_options())
        .with_text_combiner(|option| combined_text(option).to_uppercase());

    let menu = select.resolve(&SelectState::new().with_search("OPTION B")).unwrap();
    let view = select.control(&SelectState::new().with_selected(0)).unwrap();

    assert_eq!(menu.options()[0].text, "OPTION B");
    assert_eq!(view.label(), "OPTION A");
}

#[test]
fn test_menu_props_pass_through() {
    let config = SelectConfig::default()
        .with_menu(MenuProps {
            is_expanded: true,
            direction: MenuDirection::Up,
            focused_index: Some(2),
            max_height: None,
        })
        .with_max_menu_height(123);
    let select = SearchableSelect::new(
        three_options().child(Descriptor::search_field().attr("placeholder", "custom")),
    )
    .with_config(config);

    let menu = select.resolve(&SelectState::new()).unwrap();

    assert_eq!(menu.props.max_height, Some(123));
    assert_eq!(menu.props.direction, MenuDirection::Up);
    assert_eq!(menu.props.focused_index, Some(2));
    assert!(menu.props.is_expanded);
    assert_eq!(
        menu.search_field
            .and_then(|field| field.attrs.get("placeholder"))
            .and_then(|value| value.as_str()),
        Some("custom")
    );
}

use super::*;
use crate::error::SelectListError;
use crate::fuzzy;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss::strip_ansi;
use std::borrow::Cow;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Query(String),
    Selection(Option<String>),
    Confirm(String),
    ConfirmEmpty,
    Cancel,
}

type EventLog = Arc<Mutex<Vec<Event>>>;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn plain_element(item: &String, _: ItemRenderOptions) -> Element {
    Element::new(item.clone())
}

fn recording_props(items: &[&str], log: &EventLog) -> SelectListProps<String> {
    let on_query = Arc::clone(log);
    let on_selection = Arc::clone(log);
    let on_confirm = Arc::clone(log);
    let on_empty = Arc::clone(log);
    let on_cancel = Arc::clone(log);

    SelectListProps::new()
        .items(strings(items))
        .element_for_item(plain_element)
        .did_change_query(move |query| {
            on_query.lock().unwrap().push(Event::Query(query.to_string()))
        })
        .did_change_selection(move |item| {
            on_selection
                .lock()
                .unwrap()
                .push(Event::Selection(item.map(|s| s.to_string())))
        })
        .did_confirm_selection(move |item| {
            on_confirm.lock().unwrap().push(Event::Confirm(item.to_string()))
        })
        .did_confirm_empty_selection(move || on_empty.lock().unwrap().push(Event::ConfirmEmpty))
        .did_cancel_selection(move || on_cancel.lock().unwrap().push(Event::Cancel))
}

fn recording_list(items: &[&str]) -> (SelectList<String>, EventLog) {
    let log = EventLog::default();
    let list = SelectList::new(recording_props(items, &log)).unwrap();
    (list, log)
}

fn take_events(log: &EventLog) -> Vec<Event> {
    std::mem::take(&mut *log.lock().unwrap())
}

fn selected(name: &str) -> Event {
    Event::Selection(Some(name.to_string()))
}

fn visible(list: &SelectList<String>) -> Vec<String> {
    list.visible_items().iter().map(|s| s.to_string()).collect()
}

fn row_texts<I: Item>(list: &SelectList<I>) -> Vec<String> {
    list.rows().iter().map(ListItem::text_content).collect()
}

fn key(code: KeyCode) -> KeyMsg {
    KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }
}

fn type_text(list: &mut SelectList<String>, text: &str) {
    for ch in text.chars() {
        list.handle_key(&key(KeyCode::Char(ch)));
    }
}

#[derive(Debug, Default)]
struct ObserverState {
    observed: Vec<(ElementId, usize)>,
    unobserved: Vec<ElementId>,
    disconnects: usize,
}

#[derive(Clone, Default)]
struct RecordingObserver(Arc<Mutex<ObserverState>>);

impl VisibilityObserver for RecordingObserver {
    fn observe(&mut self, element: ElementId, index: usize) {
        self.0.lock().unwrap().observed.push((element, index));
    }

    fn unobserve(&mut self, element: ElementId) {
        let mut state = self.0.lock().unwrap();
        state.observed.retain(|(id, _)| *id != element);
        state.unobserved.push(element);
    }

    fn disconnect(&mut self) {
        let mut state = self.0.lock().unwrap();
        state.observed.clear();
        state.disconnects += 1;
    }
}

fn visibility_element(item: &String, options: ItemRenderOptions) -> Element {
    let flag = if options.visible { "v" } else { "h" };
    Element::new(format!("{item}:{flag}"))
}

#[test]
fn test_missing_required_properties() {
    let no_items = SelectList::new(SelectListProps::<String>::new().element_for_item(plain_element));
    assert_eq!(
        no_items.err(),
        Some(SelectListError::MissingProperty("items"))
    );

    let no_renderer = SelectList::new(SelectListProps::new().items(strings(&["a"])));
    assert_eq!(
        no_renderer.err(),
        Some(SelectListError::MissingProperty("element_for_item"))
    );
}

#[test]
fn test_construction_selects_first_item() {
    let (list, log) = recording_list(&["a", "b", "c"]);

    assert_eq!(take_events(&log), vec![selected("a")]);
    assert_eq!(row_texts(&list), ["a", "b", "c"]);
    assert!(list.rows()[0].element().has_class(SELECTED_CLASS));
    assert!(!list.rows()[1].element().has_class(SELECTED_CLASS));
    assert_eq!(list.selected_item().map(|s| s.as_str()), Some("a"));
    assert_eq!(list.query(), "");
}

#[test]
fn test_initial_selection_none_selects_nothing() {
    let log = EventLog::default();
    let list = SelectList::new(recording_props(&["a", "b"], &log).initial_selection_index(None))
        .unwrap();

    assert!(take_events(&log).is_empty());
    assert_eq!(list.selection_index(), None);
    assert!(list.rows().iter().all(|row| !row.selected()));
}

#[test]
fn test_initial_selection_index_out_of_range_wraps() {
    let log = EventLog::default();
    let list = SelectList::new(recording_props(&["a", "b", "c"], &log).initial_selection_index(Some(7)))
        .unwrap();
    assert_eq!(list.selection_index(), Some(0));
}

#[test]
fn test_empty_query_keeps_item_order() {
    let (list, _) = recording_list(&["zeta", "alpha", "mid"]);
    assert_eq!(visible(&list), ["zeta", "alpha", "mid"]);
}

#[test]
fn test_fuzzy_filter_orders_by_score() {
    let (mut list, log) = recording_list(&["Grace", "Johnathan", "Joanna"]);
    take_events(&log);

    let _ = list.update(SelectListUpdate::new().query("Jon"));

    assert_eq!(visible(&list), ["Joanna", "Johnathan"]);
    assert_eq!(
        take_events(&log),
        vec![Event::Query("Jon".to_string()), selected("Joanna")]
    );
    assert_eq!(row_texts(&list), ["Joanna", "Johnathan"]);
}

#[test]
fn test_fuzzy_filter_ignores_case() {
    let (mut list, _) = recording_list(&["john", "Joanna", "JOHNATHAN", "Grace"]);

    let _ = list.update(SelectListUpdate::new().query("Jo"));
    let mut upper = visible(&list);
    upper.sort();
    assert_eq!(upper, ["JOHNATHAN", "Joanna", "john"]);

    let _ = list.update(SelectListUpdate::new().query("jo"));
    let mut lower = visible(&list);
    lower.sort();
    assert_eq!(lower, upper);
}

#[test]
fn test_visible_items_score_positive_and_descending() {
    let (mut list, _) = recording_list(&[
        "select-list-view",
        "status-bar",
        "list",
        "self-test",
        "settings-view",
        "tree-view",
    ]);
    let _ = list.update(SelectListUpdate::new().query("sl"));

    let scores: Vec<f64> = list
        .visible_items()
        .iter()
        .map(|item| fuzzy::score(item, "sl"))
        .collect();
    assert!(!scores.is_empty());
    assert!(scores.iter().all(|score| *score > 0.0));
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[derive(Debug)]
struct Person {
    name: &'static str,
    city: &'static str,
}

impl Item for Person {}

#[test]
fn test_filter_key_for_item() {
    let people = vec![
        Person { name: "Ada", city: "London" },
        Person { name: "Marie", city: "Paris" },
        Person { name: "Louis", city: "Paris" },
    ];

    let mut list = SelectList::new(
        SelectListProps::new()
            .items(people)
            .element_for_item(|p: &Person, _| Element::new(p.name))
            .filter_key_for_item(|p| p.city.to_string()),
    )
    .unwrap();
    let _ = list.update(SelectListUpdate::new().query("Paris"));

    let names: Vec<&str> = list.visible_items().iter().map(|p| p.name).collect();
    assert_eq!(names, ["Marie", "Louis"]);

    // Without a key function the default filter value never matches.
    let _ = list.update(SelectListUpdate::new().clear_filter_key_for_item().query("Pari"));
    assert!(list.visible_items().is_empty());
}

#[test]
fn test_custom_filter_and_query_transform() {
    let log = EventLog::default();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_filter = Arc::clone(&seen);

    let mut list = SelectList::new(
        recording_props(&["apple", "apricot", "banana"], &log)
            .filter(move |items: Vec<Arc<String>>, query: &str| {
                seen_in_filter
                    .lock()
                    .unwrap()
                    .push((items.len(), query.to_string()));
                items
                    .into_iter()
                    .filter(|item| item.starts_with(query))
                    .collect()
            })
            .filter_query(|raw| raw.trim().to_lowercase()),
    )
    .unwrap();
    take_events(&log);

    let _ = list.update(SelectListUpdate::new().query("  AP "));

    assert_eq!(visible(&list), ["apple", "apricot"]);
    assert_eq!(list.query(), "  AP ");
    assert_eq!(list.filter_query(), "ap");
    assert_eq!(take_events(&log)[0], Event::Query("ap".to_string()));
    assert_eq!(
        seen.lock().unwrap().last(),
        Some(&(3, "ap".to_string()))
    );
}

#[test]
fn test_order_then_truncate() {
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["b", "d", "a", "c"]))
            .element_for_item(plain_element)
            .order(|a: &String, b: &String| b.cmp(a))
            .max_results(2),
    )
    .unwrap();
    assert_eq!(visible(&list), ["d", "c"]);

    let _ = list.update(SelectListUpdate::new().max_results(0));
    assert_eq!(visible(&list), ["d", "c", "b", "a"]);

    let _ = list.update(SelectListUpdate::new().max_results(3).clear_order());
    assert_eq!(visible(&list), ["b", "d", "a"]);
}

#[test]
fn test_empty_message_until_items_arrive() {
    let mut list = SelectList::new(
        SelectListProps::<u32>::new()
            .items(Vec::new())
            .element_for_item(|n: &u32, _| Element::new(n.to_string()))
            .empty_message("No matches"),
    )
    .unwrap();

    assert!(list.regions().contains(&Region::EmptyMessage("No matches")));
    assert!(strip_ansi(&list.view()).contains("No matches"));

    let _ = list.update(SelectListUpdate::new().items(vec![1, 2, 3]));

    assert!(!list
        .regions()
        .iter()
        .any(|region| matches!(region, Region::EmptyMessage(_))));
    let view = strip_ansi(&list.view());
    assert!(!view.contains("No matches"));
    assert_eq!(row_texts(&list), ["1", "2", "3"]);
}

#[test]
fn test_empty_message_strings_count_as_unset() {
    let mut list = SelectList::new(
        SelectListProps::<String>::new()
            .items(Vec::new())
            .element_for_item(plain_element)
            .empty_message("")
            .info_message("")
            .error_message(""),
    )
    .unwrap();
    assert_eq!(list.regions(), vec![Region::QueryInput]);

    // An empty loading message does not hide the empty message.
    let _ = list.update(
        SelectListUpdate::new()
            .empty_message("Nothing")
            .loading_message("")
            .loading_badge("3"),
    );
    assert_eq!(
        list.regions(),
        vec![Region::QueryInput, Region::EmptyMessage("Nothing")]
    );
}

#[test]
fn test_loading_message_hides_empty_message() {
    let mut list = SelectList::new(
        SelectListProps::<String>::new()
            .items(Vec::new())
            .element_for_item(plain_element)
            .empty_message("Nothing")
            .loading_message("Indexing")
            .loading_badge("42"),
    )
    .unwrap();

    assert_eq!(
        list.regions(),
        vec![
            Region::QueryInput,
            Region::LoadingMessage {
                message: "Indexing",
                badge: Some("42")
            },
        ]
    );
    let view = strip_ansi(&list.view());
    assert!(view.contains("Indexing"));
    assert!(view.contains("42"));

    let _ = list.update(SelectListUpdate::new().clear_loading_message());
    assert_eq!(list.regions().last(), Some(&Region::EmptyMessage("Nothing")));
}

#[test]
fn test_region_order_and_container_classes() {
    let list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a"]))
            .element_for_item(plain_element)
            .error_message("bad")
            .info_message("hint")
            .loading_message("wait")
            .items_class_list(["mark-active"]),
    )
    .unwrap();

    let regions = list.regions();
    assert_eq!(regions[0], Region::QueryInput);
    assert!(matches!(regions[1], Region::LoadingMessage { message: "wait", badge: None }));
    assert_eq!(regions[2], Region::InfoMessage("hint"));
    assert_eq!(regions[3], Region::ErrorMessage("bad"));
    match &regions[4] {
        Region::Items { class_list, rows } => {
            assert_eq!(class_list, &["list-group", "mark-active"]);
            assert_eq!(rows.len(), 1);
        }
        other => panic!("expected items region, got {other:?}"),
    }
    assert_eq!(regions.len(), 5);
}

#[test]
fn test_unexisting_query_confirms_empty() {
    let (mut list, log) = recording_list(&["Grace", "John", "Peter", ""]);
    take_events(&log);

    let _ = list.update(SelectListUpdate::new().query("unexisting"));

    assert!(list.visible_items().is_empty());
    assert_eq!(list.selected_item(), None);
    assert_eq!(
        take_events(&log),
        vec![Event::Query("unexisting".to_string()), Event::Selection(None)]
    );

    list.confirm_selection();
    assert_eq!(take_events(&log), vec![Event::ConfirmEmpty]);
}

#[test]
fn test_click_selects_then_confirms() {
    let (mut list, log) = recording_list(&["a", "b", "c"]);
    take_events(&log);

    assert_eq!(
        list.handle_mouse(MouseTarget::Row(1), MouseAction::Down),
        EventDisposition::DefaultPrevented
    );
    assert_eq!(
        list.handle_mouse(MouseTarget::Row(1), MouseAction::Up),
        EventDisposition::DefaultPrevented
    );
    assert!(take_events(&log).is_empty());

    assert_eq!(
        list.handle_mouse(MouseTarget::Row(1), MouseAction::Click),
        EventDisposition::DefaultPrevented
    );
    assert_eq!(
        take_events(&log),
        vec![selected("b"), Event::Confirm("b".to_string())]
    );
    assert_eq!(list.selection_index(), Some(1));

    assert_eq!(
        list.handle_mouse(MouseTarget::Row(9), MouseAction::Click),
        EventDisposition::Ignored
    );
    assert!(take_events(&log).is_empty());
}

#[test]
fn test_empty_update_is_a_quiet_refresh() {
    let (mut list, log) = recording_list(&["a", "b"]);
    take_events(&log);
    let before: Vec<ElementId> = list.rows().iter().map(ListItem::id).collect();

    let _ = list.update(SelectListUpdate::new());
    let _ = list.update(SelectListUpdate::new());

    assert!(take_events(&log).is_empty());
    assert_eq!(row_texts(&list), ["a", "b"]);
    assert_eq!(list.selection_index(), Some(0));
    let after: Vec<ElementId> = list.rows().iter().map(ListItem::id).collect();
    assert!(before.iter().zip(&after).all(|(old, new)| old != new));
}

#[test]
fn test_select_next_and_previous_wrap() {
    let (mut list, log) = recording_list(&["a", "b", "c"]);
    take_events(&log);

    for _ in 0..3 {
        let _ = list.select_next();
    }
    assert_eq!(list.selection_index(), Some(0));
    assert_eq!(take_events(&log), vec![selected("b"), selected("c"), selected("a")]);

    let _ = list.select_previous();
    assert_eq!(list.selection_index(), Some(2));
    for _ in 0..2 {
        let _ = list.select_previous();
    }
    assert_eq!(list.selection_index(), Some(0));
}

#[test]
fn test_select_index_wraps_at_both_ends() {
    let (mut list, log) = recording_list(&["a", "b", "c"]);
    take_events(&log);

    let _ = list.select_index(3);
    assert_eq!(list.selection_index(), Some(0));
    let _ = list.select_index(-1);
    assert_eq!(list.selection_index(), Some(2));
    let _ = list.select_last();
    assert_eq!(list.selection_index(), Some(2));
    let _ = list.select_first();
    assert_eq!(list.selection_index(), Some(0));

    // Each request notifies, even when the same item stays selected.
    assert_eq!(
        take_events(&log),
        vec![selected("a"), selected("c"), selected("c"), selected("a")]
    );
}

#[test]
fn test_selection_on_empty_list_reports_none() {
    let (mut list, log) = recording_list(&[]);
    assert_eq!(take_events(&log), vec![Event::Selection(None)]);

    let _ = list.select_next();
    let _ = list.select_previous();
    let _ = list.select_last();
    assert_eq!(list.selection_index(), None);
    assert_eq!(take_events(&log), vec![Event::Selection(None); 3]);
}

#[test]
fn test_select_none_is_silent() {
    let (mut list, log) = recording_list(&["a", "b", "c"]);
    take_events(&log);

    let _ = list.select_none();
    assert_eq!(list.selection_index(), None);
    assert!(take_events(&log).is_empty());
    assert!(list.rows().iter().all(|row| !row.element().has_class(SELECTED_CLASS)));

    let _ = list.select_previous();
    assert_eq!(list.selection_index(), Some(2));
    let _ = list.select_none();
    let _ = list.select_next();
    assert_eq!(list.selection_index(), Some(0));
}

#[test]
fn test_select_item_uses_identity() {
    let shared: Vec<Arc<String>> = strings(&["x", "y", "y"]).into_iter().map(Arc::new).collect();
    let mut list = SelectList::new(
        SelectListProps::new()
            .shared_items(shared.clone())
            .element_for_item(plain_element),
    )
    .unwrap();

    assert!(list.select_item(&shared[2]).is_ok());
    assert_eq!(list.selection_index(), Some(2));
    assert!(Arc::ptr_eq(list.selected_item().unwrap(), &shared[2]));

    let lookalike = Arc::new("y".to_string());
    assert_eq!(
        list.select_item(&lookalike).err(),
        Some(SelectListError::ItemNotFound)
    );
    assert_eq!(list.selection_index(), Some(2));
}

#[test]
fn test_selection_change_patches_only_affected_rows() {
    let renders = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&renders);
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a", "b", "c", "d"]))
            .element_for_item(move |item: &String, options| {
                sink.lock().unwrap().push((item.clone(), options.selected));
                Element::new(item.clone())
            }),
    )
    .unwrap();
    let ids: Vec<ElementId> = list.rows().iter().map(ListItem::id).collect();
    renders.lock().unwrap().clear();

    let _ = list.select_next();

    assert_eq!(
        *renders.lock().unwrap(),
        vec![("a".to_string(), false), ("b".to_string(), true)]
    );
    let after: Vec<ElementId> = list.rows().iter().map(ListItem::id).collect();
    assert_ne!(after[0], ids[0]);
    assert_ne!(after[1], ids[1]);
    assert_eq!(after[2..], ids[2..]);
    assert!(list.rows()[1].selected());
}

#[test]
fn test_item_for_element_lookup() {
    let (mut list, _) = recording_list(&["a", "b"]);
    let first = list.rows()[0].id();
    let second = list.rows()[1].id();

    assert_eq!(list.item_for_element(second).map(|s| s.as_str()), Some("b"));
    assert_eq!(list.item_for_element(ElementId::new(u64::MAX)), None);

    let _ = list.select_next();
    // Row 0 was re-rendered, so its old element is gone.
    assert_eq!(list.item_for_element(first), None);

    let _ = list.update(SelectListUpdate::new().items(Vec::new()));
    assert_eq!(list.item_for_element(second), None);
}

#[test]
fn test_rows_past_initial_count_are_deferred() {
    let observer = RecordingObserver::default();
    let state = Arc::clone(&observer.0);
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a", "b", "c", "d", "e"]))
            .element_for_item(visibility_element)
            .initially_visible_item_count(2)
            .visibility_observer(observer),
    )
    .unwrap();

    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:h", "d:h", "e:h"]);
    let observed: Vec<(ElementId, usize)> = state.lock().unwrap().observed.clone();
    let expected: Vec<(ElementId, usize)> =
        list.rows()[2..].iter().map(|row| row.id()).zip(2..).collect();
    assert_eq!(observed, expected);

    let c = list.rows()[2].id();
    let d = list.rows()[3].id();
    let _ = list.handle_intersections(&[
        Intersection { element: c, ratio: 0.0 },
        Intersection { element: d, ratio: 0.5 },
        Intersection { element: ElementId::new(u64::MAX), ratio: 1.0 },
    ]);

    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:h", "d:v", "e:h"]);
    assert!(state.lock().unwrap().unobserved.contains(&d));
    assert_eq!(state.lock().unwrap().observed.len(), 2);
}

#[test]
fn test_zero_initial_count_renders_every_row_visible() {
    let observer = RecordingObserver::default();
    let state = Arc::clone(&observer.0);
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a", "b", "c"]))
            .element_for_item(visibility_element)
            .initially_visible_item_count(0)
            .visibility_observer(observer),
    )
    .unwrap();

    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:v"]);
    assert!(state.lock().unwrap().observed.is_empty());

    let _ = list.update(SelectListUpdate::new().initially_visible_item_count(Some(0)));
    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:v"]);
    assert!(state.lock().unwrap().observed.is_empty());
}

#[test]
fn test_recompute_disconnects_observer() {
    let observer = RecordingObserver::default();
    let state = Arc::clone(&observer.0);
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a", "b", "c"]))
            .element_for_item(visibility_element)
            .initially_visible_item_count(1)
            .visibility_observer(observer),
    )
    .unwrap();
    let stale = list.rows()[2].id();
    let disconnects = state.lock().unwrap().disconnects;

    let _ = list.update(SelectListUpdate::new().query("c"));
    assert!(state.lock().unwrap().disconnects > disconnects);
    assert_eq!(row_texts(&list), ["c:v"]);

    // A report for a row from before the recompute changes nothing.
    let _ = list.handle_intersections(&[Intersection { element: stale, ratio: 1.0 }]);
    assert_eq!(row_texts(&list), ["c:v"]);

    list.destroy();
    assert!(state.lock().unwrap().observed.is_empty());
}

#[test]
fn test_viewport_observer_reveals_scrolled_rows() {
    let mut list = SelectList::new(
        SelectListProps::new()
            .items(strings(&["a", "b", "c", "d", "e"]))
            .element_for_item(visibility_element)
            .initially_visible_item_count(2)
            .height(2),
    )
    .unwrap();
    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:h", "d:h", "e:h"]);
    assert_eq!(list.viewport(), 0..2);

    let _ = list.select_last();
    assert_eq!(list.viewport(), 3..5);
    assert_eq!(row_texts(&list), ["a:v", "b:v", "c:h", "d:v", "e:v"]);

    let view = strip_ansi(&list.view());
    assert_eq!(view.lines().count(), 3);
    assert!(view.contains("d:v"));
    assert!(view.contains("e:v"));
    assert!(!view.contains("a:v"));

    let _ = list.scroll_to(1);
    assert_eq!(list.viewport(), 1..3);
    assert_eq!(row_texts(&list)[2], "c:v");
}

#[test]
fn test_view_marks_selected_row() {
    let (mut list, _) = recording_list(&["alpha", "beta"]);
    let _ = list.select_next();
    let view = strip_ansi(&list.view());
    let lines: Vec<&str> = view.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('>'));
    assert!(lines[1].contains("alpha"));
    assert!(!lines[1].contains(style::SELECTED_MARKER));
    assert!(lines[2].contains(&format!("{} beta", style::SELECTED_MARKER)));
}

#[tokio::test]
async fn test_render_handle_resolves_after_view() {
    let (mut list, _) = recording_list(&["a", "b", "c"]);
    let first = list.select_next();
    let second = list.select_next();
    assert!(!first.is_applied());

    let _ = list.view();
    assert!(first.is_applied());
    assert!(second.is_applied());
    first.await;
    second.await;

    let third = list.update(SelectListUpdate::new());
    assert!(!third.is_applied());
    let _ = list.view();
    third.await;
}

#[tokio::test]
async fn test_destroy_resolves_pending_handles() {
    let (mut list, _) = recording_list(&["a", "b"]);
    let handle = list.select_next();
    list.destroy();
    assert!(handle.is_applied());
    handle.await;
}

#[test]
fn test_confirm_and_cancel_do_not_destroy() {
    let (mut list, log) = recording_list(&["a", "b"]);
    take_events(&log);

    list.confirm_selection();
    list.cancel_selection();
    list.confirm_selection();
    assert_eq!(
        take_events(&log),
        vec![
            Event::Confirm("a".to_string()),
            Event::Cancel,
            Event::Confirm("a".to_string())
        ]
    );
    assert_eq!(row_texts(&list), ["a", "b"]);
}

#[test]
fn test_focus_loss_to_items_list_keeps_focus() {
    let (mut list, log) = recording_list(&["a"]);
    take_events(&log);
    list.focus();

    assert_eq!(
        list.handle_mouse(MouseTarget::ItemsList, MouseAction::Down),
        EventDisposition::Ignored
    );
    list.did_lose_focus(FocusLoss {
        related_target_inside: false,
        document_has_focus: true,
    });
    assert!(list.focused());
    assert!(take_events(&log).is_empty());

    // The flag is one-shot.
    list.did_lose_focus(FocusLoss {
        related_target_inside: false,
        document_has_focus: true,
    });
    assert!(!list.focused());
    assert_eq!(take_events(&log), vec![Event::Cancel]);
}

#[test]
fn test_focus_loss_inside_or_to_other_window() {
    let (mut list, log) = recording_list(&["a"]);
    take_events(&log);
    list.focus();

    list.did_lose_focus(FocusLoss {
        related_target_inside: true,
        document_has_focus: true,
    });
    assert!(list.focused());

    list.did_lose_focus(FocusLoss {
        related_target_inside: false,
        document_has_focus: false,
    });
    assert!(!list.focused());
    assert!(take_events(&log).is_empty());
}

#[test]
fn test_typing_filters_and_keys_run_commands() {
    let (mut list, log) = recording_list(&["Grace", "Johnathan", "Joanna"]);
    take_events(&log);

    type_text(&mut list, "Jon");
    assert!(take_events(&log).is_empty(), "unfocused input ignores keys");

    list.focus();
    type_text(&mut list, "Jon");
    assert_eq!(visible(&list), ["Joanna", "Johnathan"]);
    let events = take_events(&log);
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], Event::Query("J".to_string()));
    assert_eq!(events[2], Event::Query("Jo".to_string()));
    assert_eq!(events[4..], [Event::Query("Jon".to_string()), selected("Joanna")]);

    assert_eq!(
        list.handle_key(&key(KeyCode::Down)),
        EventDisposition::PropagationStopped
    );
    assert_eq!(
        list.handle_key(&key(KeyCode::Enter)),
        EventDisposition::PropagationStopped
    );
    assert_eq!(
        list.handle_key(&key(KeyCode::Esc)),
        EventDisposition::PropagationStopped
    );
    assert_eq!(
        take_events(&log),
        vec![
            selected("Johnathan"),
            Event::Confirm("Johnathan".to_string()),
            Event::Cancel
        ]
    );

    assert_eq!(
        list.handle_key(&key(KeyCode::Backspace)),
        EventDisposition::Handled
    );
    assert_eq!(list.query(), "Jo");
}

#[test]
fn test_skip_commands_registration_leaves_keys_to_host() {
    let log = EventLog::default();
    let mut list = SelectList::new(
        recording_props(&["a", "b"], &log).skip_commands_registration(true),
    )
    .unwrap();
    take_events(&log);
    list.focus();

    assert_eq!(list.handle_key(&key(KeyCode::Down)), EventDisposition::Ignored);
    assert_eq!(list.handle_key(&key(KeyCode::Up)), EventDisposition::Ignored);
    assert_eq!(list.handle_key(&key(KeyCode::Enter)), EventDisposition::Ignored);
    assert_eq!(list.selection_index(), Some(0));
    assert!(take_events(&log).is_empty());

    // Editing keys still reach the query input.
    assert_eq!(list.handle_key(&key(KeyCode::Left)), EventDisposition::Handled);
    assert_eq!(list.query(), "");

    let _ = list.dispatch(SelectListCommand::MoveDown);
    assert_eq!(list.selection_index(), Some(1));
    let _ = list.dispatch(SelectListCommand::MoveToTop);
    let _ = list.dispatch(SelectListCommand::Confirm);
    assert_eq!(
        take_events(&log),
        vec![selected("b"), selected("a"), Event::Confirm("a".to_string())]
    );
}

#[test]
fn test_handle_msg_ignores_other_messages() {
    let (mut list, _) = recording_list(&["a", "b"]);
    let other: bubbletea_rs::Msg = Box::new(42u32);
    assert_eq!(list.handle_msg(&other), EventDisposition::Ignored);

    let down: bubbletea_rs::Msg = Box::new(key(KeyCode::Down));
    assert_eq!(list.handle_msg(&down), EventDisposition::PropagationStopped);
    assert_eq!(list.selection_index(), Some(1));
}

#[test]
fn test_unchanged_query_does_not_notify() {
    let (mut list, log) = recording_list(&["alpha", "beta"]);
    let _ = list.update(SelectListUpdate::new().query("a"));
    take_events(&log);

    let _ = list.update(SelectListUpdate::new().query("a"));
    assert!(take_events(&log).is_empty());

    // New items with the same query are still filtered.
    let _ = list.update(
        SelectListUpdate::new()
            .items(strings(&["xyz", "gamma", "quiz"]))
            .query("a"),
    );
    assert_eq!(visible(&list), ["gamma"]);
    assert_eq!(take_events(&log), vec![selected("gamma")]);
}

#[test]
fn test_items_update_does_not_fire_query_change() {
    let (mut list, log) = recording_list(&["a"]);
    take_events(&log);
    let _ = list.update(SelectListUpdate::new().items(strings(&["b", "c"])));
    assert_eq!(take_events(&log), vec![selected("b")]);
}

#[test]
fn test_initial_selection_index_applies_on_next_recompute() {
    let (mut list, _) = recording_list(&["a", "b", "c"]);
    let _ = list.update(SelectListUpdate::new().initial_selection_index(Some(2)));
    assert_eq!(list.selection_index(), Some(0));

    let _ = list.update(SelectListUpdate::new().items(strings(&["x", "y", "z"])));
    assert_eq!(list.selection_index(), Some(2));
}

#[test]
fn test_reset_clears_query() {
    let (mut list, log) = recording_list(&["alpha", "beta"]);
    let _ = list.update(SelectListUpdate::new().query("bet"));
    assert_eq!(visible(&list), ["beta"]);
    take_events(&log);

    let _ = list.reset();
    assert_eq!(list.query(), "");
    assert_eq!(visible(&list), ["alpha", "beta"]);
    assert_eq!(take_events(&log), vec![Event::Query(String::new()), selected("alpha")]);

    let _ = list.reset();
    assert!(take_events(&log).is_empty());
}

#[test]
fn test_select_query_then_typing_replaces_it() {
    let (mut list, _) = recording_list(&["alpha", "beta"]);
    list.focus();
    let _ = list.update(SelectListUpdate::new().query("alp").select_query(true));
    assert!(list.query_input().has_selection());

    type_text(&mut list, "b");
    assert_eq!(list.query(), "b");
    assert_eq!(visible(&list), ["beta"]);

    let _ = list.update(SelectListUpdate::new().select_query(true));
    let _ = list.update(SelectListUpdate::new().select_query(false));
    assert!(!list.query_input().has_selection());
}

#[test]
fn test_component_focus() {
    use crate::Component;

    let (mut list, _) = recording_list(&["a"]);
    assert!(Component::focus(&mut list).is_none());
    assert!(Component::focused(&list));
    Component::blur(&mut list);
    assert!(!Component::focused(&list));
}

#[test]
fn test_default_filter_value_for_plain_types() {
    assert_eq!(42u32.filter_value(), Cow::<str>::Owned("42".to_string()));
    assert_eq!("abc".filter_value(), "abc");
}

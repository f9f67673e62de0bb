use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marketdesk::entities;
use marketdesk::model::{EntityKind, Record, Row};
use marketdesk::routes::Route;
use marketdesk::store::AppStore;
use marketdesk::table::CellFormat;
use marketdesk::ui::components::DataTableComponent;
use marketdesk::ui::core::{Action, Component, DialogType};

fn table(kind: EntityKind, page_size: usize) -> DataTableComponent {
    let store = AppStore::with_fixtures().unwrap();
    DataTableComponent::new(&entities::config(kind), store.records(kind), page_size, CellFormat::default())
}

fn key(table: &mut DataTableComponent, code: KeyCode) -> Action {
    table.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_query(table: &mut DataTableComponent, text: &str) {
    key(table, KeyCode::Char('/'));
    for c in text.chars() {
        key(table, KeyCode::Char(c));
    }
    key(table, KeyCode::Enter);
}

#[test]
fn test_search_mode_captures_typing() {
    let mut blog = table(EntityKind::Blog, 10);
    key(&mut blog, KeyCode::Char('/'));
    assert!(blog.is_searching());
    assert!(blog.captures_input());

    // 'd' is search text here, not delete
    assert!(matches!(key(&mut blog, KeyCode::Char('d')), Action::None));
    assert_eq!(blog.view().query(), "d");

    key(&mut blog, KeyCode::Esc);
    assert!(!blog.is_searching());
    assert_eq!(blog.view().query(), "");
}

#[test]
fn test_search_then_open_match() {
    let mut blog = table(EntityKind::Blog, 10);
    type_query(&mut blog, "mobile");
    assert!(!blog.is_searching());
    assert_eq!(blog.view().visible_rows().len(), 1);

    match key(&mut blog, KeyCode::Enter) {
        Action::Navigate(route) => assert_eq!(route, Route::Detail(EntityKind::Blog, "BLOG004".to_string())),
        other => panic!("unexpected action: {:?}", other),
    }
}

#[test]
fn test_sort_key_toggles_direction_on_focused_column() {
    let mut products = table(EntityKind::Product, 10);
    // First column is the id
    key(&mut products, KeyCode::Char('s'));
    key(&mut products, KeyCode::Char('s'));
    let first: Vec<String> = products.view().visible_rows().iter().map(|r| r.id().to_string()).collect();
    let mut sorted = first.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(first, sorted);
}

#[test]
fn test_paging_keys() {
    let mut orders = table(EntityKind::Order, 2);
    assert_eq!(orders.view().page(), 0);
    key(&mut orders, KeyCode::Char('n'));
    assert_eq!(orders.view().page(), 1);
    key(&mut orders, KeyCode::End);
    assert_eq!(orders.view().page(), orders.view().page_count() - 1);
    key(&mut orders, KeyCode::Home);
    assert_eq!(orders.view().page(), 0);
    key(&mut orders, KeyCode::Char('p'));
    assert_eq!(orders.view().page(), 0);
}

#[test]
fn test_selection_feeds_delete_request() {
    let mut vendors = table(EntityKind::Vendor, 10);
    key(&mut vendors, KeyCode::Char(' '));
    key(&mut vendors, KeyCode::Char('j'));
    key(&mut vendors, KeyCode::Char(' '));
    assert_eq!(vendors.view().selected_count(), 2);

    match key(&mut vendors, KeyCode::Char('d')) {
        Action::ShowDialog(DialogType::DeleteConfirmation { kind, ids }) => {
            assert_eq!(kind, EntityKind::Vendor);
            assert_eq!(ids, vec!["VEND001".to_string(), "VEND002".to_string()]);
        }
        other => panic!("unexpected action: {:?}", other),
    }

    // Esc clears the selection before it navigates back
    assert!(matches!(key(&mut vendors, KeyCode::Esc), Action::None));
    assert_eq!(vendors.view().selected_count(), 0);
    assert!(matches!(key(&mut vendors, KeyCode::Esc), Action::Back));
}

#[test]
fn test_delete_on_empty_table_shows_info() {
    let mut empty = DataTableComponent::new(
        &entities::config(EntityKind::Job),
        Vec::<Record>::new().into(),
        10,
        CellFormat::default(),
    );
    assert!(matches!(key(&mut empty, KeyCode::Char('d')), Action::ShowDialog(DialogType::Info(_))));
    assert_eq!(empty.cursor_id(), None);
}

#[test]
fn test_filter_actions_update_view() {
    let mut orders = table(EntityKind::Order, 10);
    assert!(matches!(key(&mut orders, KeyCode::Char('f')), Action::ShowDialog(DialogType::Filters { .. })));

    orders.update(Action::ToggleFilter {
        key: "status".to_string(),
        value: "cancelled".to_string(),
    });
    let visible: Vec<String> = orders.view().visible_rows().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(visible, vec!["ORD004"]);

    orders.update(Action::ClearFilters);
    assert!(orders.view().filters().is_empty());
}

#[test]
fn test_unfocused_table_ignores_keys() {
    let mut products = table(EntityKind::Product, 10);
    products.focused = false;
    assert!(matches!(key(&mut products, KeyCode::Char('c')), Action::None));
    products.focused = true;
    assert!(matches!(key(&mut products, KeyCode::Char('c')), Action::Navigate(Route::Create(EntityKind::Product))));
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use marketdesk::config::Config;
use marketdesk::constants::{ERROR_INVALID_FORM, SUCCESS_RECORD_CREATED, SUCCESS_RECORD_DELETED};
use marketdesk::logger::Logger;
use marketdesk::model::{EntityKind, Row};
use marketdesk::routes::Route;
use marketdesk::store::AppStore;
use marketdesk::ui::app_component::{AppComponent, Page};
use marketdesk::ui::core::{AppContext, Component, DialogType, EventType, Pane};
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;

fn app_at(route: Route) -> AppComponent {
    let mut config = Config::default();
    config.forms.save_delay_ms = 0;
    let context = AppContext::new(AppStore::with_fixtures().unwrap(), config, Logger::new());
    AppComponent::new(context, route)
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await
        .unwrap();
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

/// Wait for background saves and feed their results back in
async fn settle(app: &mut AppComponent) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        let actions = app.process_background_actions();
        if !actions.is_empty() {
            for action in actions {
                app.dispatch(action).await;
            }
            return;
        }
    }
    panic!("background save never completed");
}

#[tokio::test]
async fn test_starts_on_requested_route() {
    let app = app_at(Route::List(EntityKind::Vendor));
    assert_eq!(app.route(), &Route::List(EntityKind::Vendor));
    assert!(matches!(app.page(), Page::List(EntityKind::Vendor)));
    assert!(app.table(EntityKind::Vendor).is_some());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_unknown_detail_id_renders_not_found() {
    let app = app_at(Route::Detail(EntityKind::Order, "ORD404".to_string()));
    assert!(app.detail().is_some_and(|d| d.is_not_found()));

    // Editing an unknown id lands on the same not-found state
    let app = app_at(Route::Update(EntityKind::Order, "ORD404".to_string()));
    assert!(app.form().is_none());
    assert!(app.detail().is_some_and(|d| d.is_not_found()));
}

#[tokio::test]
async fn test_enter_opens_detail_and_escape_goes_back() {
    let mut app = app_at(Route::List(EntityKind::Product));
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.route(), &Route::Detail(EntityKind::Product, "PROD001".to_string()));
    assert!(app.detail().is_some_and(|d| !d.is_not_found()));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.route(), &Route::List(EntityKind::Product));

    press(&mut app, KeyCode::Esc).await;
    assert_eq!(app.route(), &Route::Dashboard);
}

#[tokio::test]
async fn test_delete_with_confirmation() {
    let mut app = app_at(Route::List(EntityKind::Product));
    let before = app.store().count(EntityKind::Product);

    press(&mut app, KeyCode::Char('d')).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::DeleteConfirmation { .. })));

    press(&mut app, KeyCode::Char('y')).await;
    assert!(!app.dialog_visible());
    assert_eq!(app.store().count(EntityKind::Product), before - 1);
    assert!(app.store().find(EntityKind::Product, "PROD001").is_err());
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_RECORD_DELETED));

    // The table follows the store
    let table = app.table(EntityKind::Product).unwrap();
    assert_eq!(table.view().rows().len(), before - 1);
}

#[tokio::test]
async fn test_declined_delete_is_noop() {
    let mut app = app_at(Route::List(EntityKind::Product));
    let before = app.store().count(EntityKind::Product);

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('n')).await;

    assert!(!app.dialog_visible());
    assert_eq!(app.store().count(EntityKind::Product), before);
}

#[tokio::test]
async fn test_delete_from_detail_returns_to_list() {
    let mut app = app_at(Route::Detail(EntityKind::Vendor, "VEND002".to_string()));
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.route(), &Route::List(EntityKind::Vendor));
    assert!(app.store().find(EntityKind::Vendor, "VEND002").is_err());
}

#[tokio::test]
async fn test_create_form_saves_in_background() {
    let mut app = app_at(Route::List(EntityKind::Manufacturer));
    let before = app.store().count(EntityKind::Manufacturer);
    let expected_id = app.store().next_id(EntityKind::Manufacturer);

    press(&mut app, KeyCode::Char('c')).await;
    assert_eq!(app.route(), &Route::Create(EntityKind::Manufacturer));

    type_text(&mut app, "Bosch").await;
    press(&mut app, KeyCode::Tab).await;
    type_text(&mut app, "Tools").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(app.form().is_some_and(|f| f.is_saving()));

    settle(&mut app).await;

    assert_eq!(app.route(), &Route::List(EntityKind::Manufacturer));
    assert_eq!(app.store().count(EntityKind::Manufacturer), before + 1);
    let created = app.store().find(EntityKind::Manufacturer, &expected_id).unwrap();
    assert_eq!(created.text("name"), "Bosch");
    assert_eq!(created.id(), expected_id);
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_RECORD_CREATED));
}

#[tokio::test]
async fn test_update_form_keeps_record_id() {
    let mut app = app_at(Route::Update(EntityKind::Vendor, "VEND001".to_string()));
    let before = app.store().count(EntityKind::Vendor);
    let name = app.store().find(EntityKind::Vendor, "VEND001").unwrap().text("name");

    type_text(&mut app, " Ltd").await;
    press(&mut app, KeyCode::Enter).await;
    settle(&mut app).await;

    assert_eq!(app.store().count(EntityKind::Vendor), before);
    let updated = app.store().find(EntityKind::Vendor, "VEND001").unwrap();
    assert_eq!(updated.text("name"), format!("{name} Ltd"));
}

#[tokio::test]
async fn test_invalid_form_shows_error_and_does_not_save() {
    let mut app = app_at(Route::Create(EntityKind::Manufacturer));
    press(&mut app, KeyCode::Enter).await;

    let form = app.form().unwrap();
    assert!(!form.is_saving());
    assert!(form.error().is_some_and(|e| e.starts_with(ERROR_INVALID_FORM)));
    assert_eq!(app.active_task_count(), 0);
}

#[tokio::test]
async fn test_form_captures_global_keys() {
    let mut app = app_at(Route::Create(EntityKind::Manufacturer));
    type_text(&mut app, "q?G").await;
    assert!(!app.should_quit());
    assert!(!app.dialog_visible());
    assert_eq!(app.form().unwrap().state().value_of("name"), Some("q?G"));
}

#[tokio::test]
async fn test_sidebar_navigation_and_pane_toggle() {
    let mut app = app_at(Route::Dashboard);
    assert_eq!(app.state().pane, Pane::Main);

    // Shift+j moves the sidebar from anywhere
    press(&mut app, KeyCode::Char('J')).await;
    assert!(matches!(app.route(), Route::List(_)));

    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.state().pane, Pane::Sidebar);
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.state().pane, Pane::Main);
}

#[tokio::test]
async fn test_global_dialogs_and_quit() {
    let mut app = app_at(Route::Dashboard);

    press(&mut app, KeyCode::Char('?')).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Help)));
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.dialog_visible());

    press(&mut app, KeyCode::Char('G')).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Logs)));
    press(&mut app, KeyCode::Char('q')).await;
    assert!(!app.should_quit(), "q closes the dialog first");

    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_filter_dialog_applies_to_table() {
    let mut app = app_at(Route::List(EntityKind::Order));
    press(&mut app, KeyCode::Char('f')).await;
    assert!(matches!(app.dialog_type(), Some(DialogType::Filters { .. })));

    // First option of the first filter
    press(&mut app, KeyCode::Char(' ')).await;
    let table = app.table(EntityKind::Order).unwrap();
    assert_eq!(table.view().filters().count(), 1);
    assert!(table.view().visible_rows().len() < table.view().rows().len());

    press(&mut app, KeyCode::Char('c')).await;
    assert!(app.table(EntityKind::Order).unwrap().view().filters().is_empty());
}

fn mouse_app_at(route: Route, save_delay_ms: u64) -> AppComponent {
    let mut config = Config::default();
    config.ui.mouse_enabled = true;
    config.forms.save_delay_ms = save_delay_ms;
    let context = AppContext::new(AppStore::with_fixtures().unwrap(), config, Logger::new());
    let mut app = AppComponent::new(context, route);
    // Rendering records where the sidebar sits
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    app
}

async fn scroll_sidebar(app: &mut AppComponent) {
    let event = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 1,
        row: 10,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_event(EventType::Mouse(event)).await.unwrap();
}

#[tokio::test]
async fn test_sidebar_scroll_navigates() {
    let mut app = mouse_app_at(Route::List(EntityKind::Manufacturer), 0);
    scroll_sidebar(&mut app).await;
    assert_ne!(app.route(), &Route::List(EntityKind::Manufacturer));
}

#[tokio::test]
async fn test_mouse_is_ignored_while_saving() {
    let mut app = mouse_app_at(Route::Create(EntityKind::Manufacturer), 60_000);
    type_text(&mut app, "Bosch").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(app.is_saving());

    scroll_sidebar(&mut app).await;
    assert_eq!(app.route(), &Route::Create(EntityKind::Manufacturer));
    assert!(app.form().is_some_and(|f| f.is_saving()));
}

use marketdesk::config::Config;
use marketdesk::constants::NOT_FOUND_TITLE;
use marketdesk::logger::Logger;
use marketdesk::model::EntityKind;
use marketdesk::routes::Route;
use marketdesk::store::AppStore;
use marketdesk::ui::app_component::AppComponent;
use marketdesk::ui::core::{Action, AppContext, Component, DialogType};
use ratatui::{backend::TestBackend, Terminal};

fn render(app: &mut AppComponent, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal.backend().buffer().content.iter().map(|cell| cell.symbol()).collect()
}

fn app_at(route: Route) -> AppComponent {
    let context = AppContext::new(AppStore::with_fixtures().unwrap(), Config::default(), Logger::new());
    AppComponent::new(context, route)
}

#[tokio::test]
async fn test_every_route_renders() {
    for kind in EntityKind::ALL {
        for route in [
            Route::List(kind),
            Route::Create(kind),
            Route::Detail(kind, "missing".to_string()),
        ] {
            let mut app = app_at(route.clone());
            let screen = render(&mut app, 120, 40);
            assert!(screen.contains(&route.to_string()), "status bar should show {route}");
        }
    }
}

#[tokio::test]
async fn test_list_shows_rows_and_footer() {
    let mut app = app_at(Route::List(EntityKind::Blog));
    let screen = render(&mut app, 140, 40);
    assert!(screen.contains("BLOG004"));
    assert!(screen.contains("of 5"));
}

#[tokio::test]
async fn test_dashboard_shows_kpis() {
    let mut app = app_at(Route::Dashboard);
    let screen = render(&mut app, 140, 45);
    assert!(screen.contains("Asset Units"));
    assert!(screen.contains("35"));
}

#[tokio::test]
async fn test_not_found_screen() {
    let mut app = app_at(Route::Detail(EntityKind::Vendor, "VEND999".to_string()));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains(NOT_FOUND_TITLE));
    assert!(screen.contains("VEND999"));
}

#[tokio::test]
async fn test_dialogs_render_on_top() {
    let mut app = app_at(Route::List(EntityKind::Order));
    app.dispatch(Action::ShowDialog(DialogType::Help)).await;
    assert!(app.dialog_visible());
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("Help"));
}

#[tokio::test]
async fn test_tiny_terminal_does_not_panic() {
    let mut app = app_at(Route::List(EntityKind::Product));
    render(&mut app, 20, 5);
    let mut app = app_at(Route::Dashboard);
    render(&mut app, 10, 3);
}

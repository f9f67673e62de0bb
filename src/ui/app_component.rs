use crate::constants::{
    ERROR_DELETE_FAILED, ERROR_INVALID_FORM, ERROR_SAVE_FAILED, SUCCESS_RECORD_CREATED, SUCCESS_RECORD_DELETED,
    SUCCESS_RECORD_UPDATED, SUCCESS_SELECTION_DELETED,
};
use crate::entities;
use crate::forms::FormState;
use crate::kpi::dashboard_kpis;
use crate::model::{EntityKind, Record};
use crate::routes::Route;
use crate::store::AppStore;
use crate::ui::components::{
    DashboardComponent, DataTableComponent, DetailComponent, DialogComponent, FormComponent, SidebarComponent,
    StatusBar, StatusInfo,
};
use crate::ui::core::{
    actions::{Action, DialogType, Pane},
    context::AppContext,
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::collections::BTreeMap;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub pane: Pane,
    pub info_message: Option<String>,
}

/// What the main pane currently shows
pub enum Page {
    Dashboard,
    List(EntityKind),
    Detail(DetailComponent),
    Form(FormComponent),
}

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    dashboard: DashboardComponent,
    tables: BTreeMap<EntityKind, DataTableComponent>,
    page: Page,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    context: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Simple UI state
    should_quit: bool,
    sidebar_area: Rect,
}

impl AppComponent {
    pub fn new(context: AppContext, start_route: Route) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(context.logger.clone());

        let mut app = Self {
            sidebar: SidebarComponent::new(),
            dashboard: DashboardComponent::new(),
            tables: BTreeMap::new(),
            page: Page::Dashboard,
            dialog,
            state: AppState::default(),
            context,
            task_manager,
            background_action_rx,
            should_quit: false,
            sidebar_area: Rect::default(),
        };
        app.refresh_summaries();
        app.sidebar.update(Action::Navigate(start_route.clone()));
        app.navigate(start_route);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn route(&self) -> &Route {
        &self.state.route
    }

    pub fn store(&self) -> &AppStore {
        &self.context.store
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn table(&self, kind: EntityKind) -> Option<&DataTableComponent> {
        self.tables.get(&kind)
    }

    pub fn form(&self) -> Option<&FormComponent> {
        match &self.page {
            Page::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailComponent> {
        match &self.page {
            Page::Detail(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    pub fn is_saving(&self) -> bool {
        self.task_manager.is_saving()
    }

    fn log(&self, message: String) {
        self.context.logger.log(message);
    }

    /// Component that receives main-pane keys for the current page
    fn main_component(&mut self) -> Option<&mut dyn Component> {
        match &mut self.page {
            Page::Dashboard => Some(&mut self.dashboard as &mut dyn Component),
            Page::List(kind) => self.tables.get_mut(kind).map(|t| t as &mut dyn Component),
            Page::Detail(detail) => Some(detail as &mut dyn Component),
            Page::Form(form) => Some(form as &mut dyn Component),
        }
    }

    fn main_captures_input(&mut self) -> bool {
        self.main_component().is_some_and(|c| c.captures_input())
    }

    /// Switch the main pane to `route`
    fn navigate(&mut self, route: Route) {
        self.log(format!("Navigation: {} -> {}", self.state.route, route));
        self.state.info_message = None;

        self.page = match &route {
            Route::Dashboard => Page::Dashboard,
            Route::List(kind) => {
                self.ensure_table(*kind);
                Page::List(*kind)
            }
            Route::Detail(kind, id) => Page::Detail(self.detail_page(*kind, id)),
            Route::Create(kind) => {
                let config = entities::config(*kind);
                Page::Form(FormComponent::new(FormState::create(*kind, config.form)))
            }
            Route::Update(kind, id) => match self.context.store.find(*kind, id) {
                Ok(record) => {
                    let config = entities::config(*kind);
                    Page::Form(FormComponent::new(FormState::edit(*kind, config.form, record)))
                }
                Err(e) => {
                    self.log(format!("Navigation: {}", e));
                    Page::Detail(self.detail_page(*kind, id))
                }
            },
        };
        self.state.route = route;
        self.state.pane = Pane::Main;
        self.apply_focus();
    }

    fn detail_page(&self, kind: EntityKind, id: &str) -> DetailComponent {
        let display = &self.context.config.display;
        DetailComponent::new(
            entities::config(kind),
            id.to_string(),
            self.context.store.find(kind, id).ok().cloned(),
            display.cell_format(),
            display.truncate_width,
        )
    }

    fn ensure_table(&mut self, kind: EntityKind) {
        if self.tables.contains_key(&kind) {
            return;
        }
        let table = DataTableComponent::new(
            &entities::config(kind),
            self.context.store.records(kind),
            self.context.config.ui.page_size,
            self.context.config.display.cell_format(),
        );
        self.tables.insert(kind, table);
    }

    fn apply_focus(&mut self) {
        let main = self.state.pane == Pane::Main;
        self.sidebar.focused = !main;
        self.dashboard.focused = main;
        for table in self.tables.values_mut() {
            table.focused = main;
        }
    }

    /// Push a store change into every view derived from it
    fn refresh_entity(&mut self, kind: EntityKind) {
        if let Some(table) = self.tables.get_mut(&kind) {
            table.set_rows(self.context.store.records(kind));
        }
        self.refresh_summaries();
    }

    fn refresh_summaries(&mut self) {
        let currency = self.context.config.display.currency_symbol.clone();
        self.dashboard.set_kpis(dashboard_kpis(&self.context.store, &currency));
        self.sidebar.update_counts(&self.context.store);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Tab => Action::TogglePane,
            KeyCode::Esc => Action::Back,
            _ => Action::None,
        }
    }

    /// Clicks are dropped under a dialog and while a save is in flight,
    /// since the finished save navigates back to the list.
    fn accepts_mouse(&self) -> bool {
        self.context.config.ui.mouse_enabled && !self.dialog.is_visible() && !self.task_manager.is_saving()
    }

    /// Route a key through the component hierarchy
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            // Dialog has priority when visible
            return self.dialog.handle_key_events(key);
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }
        if self.main_captures_input() {
            // Forms and table search own the keyboard
            return self.main_component().map_or(Action::None, |c| c.handle_key_events(key));
        }

        let sidebar_action = self.sidebar.handle_key_events(key);
        if !matches!(sidebar_action, Action::None) {
            return sidebar_action;
        }

        if self.state.pane == Pane::Main {
            let main_action = self.main_component().map_or(Action::None, |c| c.handle_key_events(key));
            if !matches!(main_action, Action::None) {
                return main_action;
            }
        }

        self.handle_global_key(key)
    }

    /// Process an event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) if self.accepts_mouse() => {
                let sidebar_action = self.sidebar.handle_mouse(mouse, self.sidebar_area);
                if !matches!(sidebar_action, Action::None) {
                    sidebar_action
                } else if let Page::List(kind) = &self.page {
                    self.tables.get_mut(kind).map_or(Action::None, |t| t.handle_mouse(mouse))
                } else {
                    Action::None
                }
            }
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
        Ok(())
    }

    /// Run an action through the components and the app until it settles
    pub async fn dispatch(&mut self, mut action: Action) {
        while !matches!(action, Action::None) {
            let processed = self.update(action);
            action = self.handle_app_action(processed).await;
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::Navigate(route) => {
                self.navigate(route);
                Action::None
            }
            Action::Back => {
                let parent = self.state.route.parent();
                if parent == self.state.route {
                    return Action::None;
                }
                // Let the sidebar follow the route change
                Action::Navigate(parent)
            }
            Action::TogglePane => {
                self.state.pane = match self.state.pane {
                    Pane::Sidebar => Pane::Main,
                    Pane::Main => Pane::Sidebar,
                };
                self.apply_focus();
                Action::None
            }
            Action::SubmitForm => self.submit_form(),
            Action::SaveCompleted { kind, record, is_new } => self.apply_save(kind, record, is_new),
            Action::DeleteRecords { kind, ids } => self.delete_records(kind, &ids),
            _ => Action::None,
        }
    }

    /// Validate the open form and start a background save
    fn submit_form(&mut self) -> Action {
        let Page::Form(form) = &mut self.page else {
            return Action::None;
        };
        let kind = form.state().kind;
        let (id, is_new) = match form.state().editing_id() {
            Some(id) => (id.to_string(), false),
            None => (self.context.store.next_id(kind), true),
        };

        match form.state().validate(&id) {
            Ok(record) => {
                form.set_saving(true);
                let delay = self.context.config.forms.save_delay();
                self.task_manager.spawn_save(kind, record, is_new, delay);
                self.context.logger.log(format!("Form: Saving {} {}", kind.noun(), id));
                Action::None
            }
            Err(e) => {
                form.set_error(format!("{}: {}", ERROR_INVALID_FORM, e));
                self.context.logger.log(format!("Form: Validation failed for {} {}: {}", kind.noun(), id, e));
                Action::None
            }
        }
    }

    /// Apply a finished save to the store and return to the list
    fn apply_save(&mut self, kind: EntityKind, record: Record, is_new: bool) -> Action {
        let result = if is_new {
            self.context.store.insert(kind, record)
        } else {
            self.context.store.update(kind, record)
        };

        match result {
            Ok(()) => {
                self.refresh_entity(kind);
                let message = if is_new { SUCCESS_RECORD_CREATED } else { SUCCESS_RECORD_UPDATED };
                self.log(format!("Store: {} ({})", message, kind.noun()));
                self.navigate(Route::List(kind));
                self.state.info_message = Some(message.to_string());
                Action::None
            }
            Err(e) => {
                let message = format!("{}: {}", ERROR_SAVE_FAILED, e);
                self.log(message.clone());
                if let Page::Form(form) = &mut self.page {
                    form.set_error(message.clone());
                }
                Action::ShowDialog(DialogType::Error(message))
            }
        }
    }

    fn delete_records(&mut self, kind: EntityKind, ids: &[String]) -> Action {
        let removed = ids.iter().filter(|id| self.context.store.delete(kind, id)).count();
        self.log(format!("Store: Deleted {} of {} {} record(s)", removed, ids.len(), kind.noun()));
        self.refresh_entity(kind);

        if let Some(table) = self.tables.get_mut(&kind) {
            table.view_mut().clear_selection();
        }

        let message = match removed {
            0 => ERROR_DELETE_FAILED,
            1 => SUCCESS_RECORD_DELETED,
            _ => SUCCESS_SELECTION_DELETED,
        };

        // A deleted record's detail page has nothing left to show
        if matches!(self.page, Page::Detail(_)) && removed > 0 {
            self.navigate(Route::List(kind));
            self.sidebar.update(Action::Navigate(Route::List(kind)));
        }
        self.state.info_message = Some(message.to_string());
        Action::None
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.log(format!("Background: Cleaned up {} finished tasks", completed_tasks.len()));
        }

        actions
    }

    fn status_info(&self) -> StatusInfo {
        let searching = match &self.page {
            Page::List(kind) => self.tables.get(kind).is_some_and(DataTableComponent::is_searching),
            _ => false,
        };
        StatusInfo {
            route: self.state.route.to_string(),
            saving: self.task_manager.is_saving(),
            searching,
            message: self.state.info_message.clone(),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);

        // Filter changes belong to the table on screen
        match &self.page {
            Page::List(kind) => match self.tables.get_mut(kind) {
                Some(table) => table.update(action),
                None => action,
            },
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (body, status_area) = LayoutManager::main_layout(rect);
        let (sidebar_area, main_area) = LayoutManager::body_layout(body, self.context.config.ui.sidebar_width);
        self.sidebar_area = sidebar_area;

        // Render components
        self.sidebar.render(f, sidebar_area);
        if let Some(component) = self.main_component() {
            component.render(f, main_area);
        }
        let info = self.status_info();
        StatusBar::render(f, status_area, &info);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

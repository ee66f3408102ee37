use crate::backend::SearchBackend;
use crate::config::Config;
use crate::logger::Logger;
use crate::models::DataSource;
use crate::ui::components::{
    DialogComponent, ResultsComponent, SearchBarComponent, StatusBarComponent, TabBarComponent,
    WelcomeCurtainComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Effect, Focus},
    event_handler::EventType,
    state::AppState,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Palette;
use crate::welcome::{CurtainPhase, WelcomeSequencer};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, widgets::Block, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    tab_bar: TabBarComponent,
    search_bar: SearchBarComponent,
    results: ResultsComponent,
    status_bar: StatusBarComponent,
    dialog: DialogComponent,
    curtain: WelcomeCurtainComponent,

    // Application state
    state: AppState,

    // Services
    backend: Arc<dyn SearchBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    mouse_enabled: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn SearchBackend>, config: &Config, logger: Logger, sequencer: WelcomeSequencer) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        logger.log(format!(
            "AppComponent: using {} backend, curtain {:?}",
            backend.backend_type(),
            sequencer.phase()
        ));

        let mut app = Self {
            tab_bar: TabBarComponent::new(),
            search_bar: SearchBarComponent::new(),
            results: ResultsComponent::new(),
            status_bar: StatusBarComponent::new(),
            dialog: DialogComponent::new(),
            curtain: WelcomeCurtainComponent::new(sequencer),
            state: AppState::new(config.ui.theme, config.schemas.clone()),
            backend,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            mouse_enabled: config.ui.mouse_enabled,
        };
        app.sync_component_data();
        app
    }

    /// Initial status query on startup
    pub fn start(&mut self) {
        self.logger.log("AppComponent: requesting initial status".to_string());
        self.dispatch(Action::RefreshStatus);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Busy indicator state
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn curtain_phase(&self) -> CurtainPhase {
        self.curtain.sequencer().phase()
    }

    pub fn curtain_visible(&self) -> bool {
        self.curtain.is_visible()
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn upload_input(&self) -> &str {
        &self.dialog.input_buffer
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Route an action through the components, then the state machine, and
    /// carry out whatever effects it requests.
    pub fn dispatch(&mut self, action: Action) {
        if matches!(action, Action::ShowDialog(DialogType::Logs)) {
            self.dialog.update_logs(self.logger.get_logs());
        }

        let action = self.curtain.update(action);
        let action = self.dialog.update(action);

        match action {
            Action::None => {}
            Action::Quit => {
                self.logger.log("AppComponent: quitting".to_string());
                self.should_quit = true;
            }
            action => {
                let effects = self.state.apply(action);
                self.run_effects(effects);
            }
        }

        self.sync_component_data();
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefreshStatus => {
                    self.task_manager.spawn_status_refresh(self.backend.clone());
                }
                Effect::Upload { path } => {
                    self.logger.log(format!("Upload: sending {}", path.display()));
                    self.task_manager.spawn_upload(self.backend.clone(), path);
                }
                Effect::Clear => {
                    self.logger.log("Clear: dropping uploaded dataset".to_string());
                    self.task_manager.spawn_clear(self.backend.clone());
                }
                Effect::Search { token, query, source } => {
                    self.logger.log(format!("Search #{}: '{}' in {}", token, query, source));
                    self.task_manager.spawn_search(self.backend.clone(), token, query, source);
                }
                Effect::ShowAlert(message) => {
                    self.logger.warn(format!("Alert: {}", message));
                    self.dialog.push_alert(message);
                }
                Effect::ResetFilePicker => self.dialog.reset_upload_input(),
            }
        }
    }

    /// Push the current state into every component
    fn sync_component_data(&mut self) {
        let palette = Palette::for_mode(self.state.view.theme_mode);
        let active = self.state.active_tab();
        let busy = self.state.is_busy();

        self.tab_bar.update_data(active, self.state.dataset.internal_records, palette);
        self.search_bar
            .update_data(active, self.state.focus == Focus::SearchInput, busy, palette);
        self.results.update_data(
            self.state.results.clone(),
            self.state.focus == Focus::Results,
            self.curtain.sequencer().scroll_locked(),
            palette,
        );
        self.status_bar.update_data(
            &self.state.status_text,
            self.state.file_info.as_deref(),
            active,
            self.state.server_unreachable,
            busy,
            palette,
        );
        self.dialog.set_palette(palette);
        self.curtain.palette = palette;
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::F(2) => {
                self.logger.log("Global key: F2 - internal tab".to_string());
                Action::SwitchTab(DataSource::Internal)
            }
            KeyCode::F(3) => {
                self.logger.log("Global key: F3 - excel tab".to_string());
                Action::SwitchTab(DataSource::Excel)
            }
            KeyCode::F(4) => Action::ToggleTheme,
            KeyCode::Char('u') if ctrl => Action::ShowDialog(DialogType::Upload),
            KeyCode::Char('l') if ctrl => {
                if self.state.file_info.is_some() {
                    self.logger.log("Global key: Ctrl+L - clearing dataset".to_string());
                    Action::ClearDataset
                } else {
                    Action::None
                }
            }
            KeyCode::Char('g') if ctrl => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.curtain.is_visible() {
            return self.curtain.handle_key_events(key);
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.state.focus {
            Focus::SearchInput => self.search_bar.handle_key_events(key),
            Focus::Results => match key.code {
                KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
                KeyCode::Char('q') => Action::Quit,
                _ => self.results.handle_key_events(key),
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.curtain.is_visible() || self.dialog.is_visible() {
            return Action::None;
        }
        let action = self.tab_bar.handle_mouse_events(mouse);
        if !matches!(action, Action::None) {
            return action;
        }
        self.results.handle_mouse_events(mouse)
    }

    /// Drain completions reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        for (id, description) in self.task_manager.cleanup_finished_tasks() {
            log::debug!("Background: task {} finished ({})", id, description);
        }

        actions
    }

    /// Wait for the next background completion
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Tick(elapsed) => {
                self.search_bar.on_tick();
                self.curtain.on_tick(elapsed)
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.curtain.update(action);
        self.dialog.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = Palette::for_mode(self.state.view.theme_mode);
        f.render_widget(Block::default().style(palette.base), rect);

        // The shell appears only once the curtain reports its slide is over
        if self.curtain.sequencer().shell_revealed() {
            let areas = LayoutManager::shell_layout(rect);
            self.tab_bar.render(f, areas.tabs);
            self.search_bar.render(f, areas.search);
            self.results.render(f, areas.results);
            self.status_bar.render(f, areas.status);

            if self.dialog.is_visible() {
                self.dialog.render(f, rect);
            }
        }

        self.curtain.render(f, rect);
    }
}

//! Interactive timer application.
//!
//! [`App`] owns the state machine and the preference store and turns key
//! presses, driver events and focus changes into state machine calls.
//! [`run`] wires it to the real terminal, clock and devices.

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::notification::DesktopNotifier;
use crate::notifier::{BellVibrator, CompletionNotifier};
use crate::session::{Scheduler, SessionMachine, TickOutcome};
use crate::sound::{try_create_player, SilentTonePlayer, TonePlayer};
use crate::storage::{JsonFileStore, KeyValueStore, SettingsStore};
use crate::types::{Layout, NotificationPermission, SwitchTarget, TimerSettings};
use crate::ui::{self, prompt, Action, PanelResponse, SettingsPanel, View};
use crate::wakelock::InhibitorWakeLock;

use super::driver::{DriverEvent, TokioScheduler};
use super::input::{spawn_reader, InputEvent};
use super::terminal::Terminal;

/// Interactive state around the session machine.
pub struct App<S: Scheduler, K: KeyValueStore> {
    machine: SessionMachine<S>,
    store: SettingsStore<K>,
    layout: Layout,
    panel: Option<SettingsPanel>,
    prompt_visible: bool,
    quit: bool,
}

impl<S: Scheduler, K: KeyValueStore> App<S, K> {
    /// Creates the app; the layout preference is read from `store`.
    pub fn new(machine: SessionMachine<S>, store: SettingsStore<K>) -> Self {
        let layout = store.load_layout();
        Self {
            machine,
            store,
            layout,
            panel: None,
            prompt_visible: false,
            quit: false,
        }
    }

    pub fn machine(&self) -> &SessionMachine<S> {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut SessionMachine<S> {
        &mut self.machine
    }

    pub fn store(&self) -> &SettingsStore<K> {
        &self.store
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn panel(&self) -> Option<&SettingsPanel> {
        self.panel.as_ref()
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current frame contents.
    pub fn view(&self) -> View<'_> {
        View {
            state: self.machine.state(),
            layout: self.layout,
            panel: self.panel.as_ref(),
            prompt_visible: self.prompt_visible,
        }
    }

    /// Feeds a driver event to the state machine.
    pub fn on_driver_event(&mut self, event: DriverEvent) {
        match event {
            DriverEvent::Tick => {
                if let TickOutcome::Completed(completion) = self.machine.tick() {
                    debug!("Completion effects: {:?}", completion.report);
                }
            }
            DriverEvent::AutoStart => self.machine.on_auto_start_due(),
        }
    }

    /// Handles one terminal input event.
    pub fn on_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key) => self.on_key(&key),
            InputEvent::FocusGained => self.machine.recover_after_hidden(),
            InputEvent::FocusLost => debug!("Terminal lost focus"),
            InputEvent::Resize => {}
        }
    }

    /// Shows the permission prompt if the user has not answered yet.
    pub fn on_prompt_due(&mut self) {
        let notifier = self.machine.notifier_mut();
        if prompt::should_prompt(notifier.permission()) && notifier.notifications_available() {
            self.prompt_visible = true;
        }
    }

    /// Releases the wake lock and stops the countdown.
    pub fn shutdown(&mut self) {
        self.machine.release_resources();
    }

    fn on_key(&mut self, key: &KeyEvent) {
        if self.prompt_visible {
            if let Some(permission) = prompt::answer(key) {
                self.answer_prompt(permission);
                return;
            }
        }

        let mut editing = false;
        if let Some(panel) = self.panel.as_mut() {
            match panel.handle_key(key) {
                PanelResponse::Changed(settings) => {
                    self.apply_settings(settings);
                    return;
                }
                PanelResponse::Handled => return,
                PanelResponse::Ignored => editing = panel.is_editing(),
            }
        }

        if let Some(action) = ui::map_key(key, editing) {
            self.perform(action);
        }
    }

    fn perform(&mut self, action: Action) {
        debug!("Action: {:?}", action);
        match action {
            Action::ToggleRun => self.machine.toggle(),
            Action::Reset => self.machine.reset(),
            Action::ToggleLayout => {
                self.layout = self.layout.toggled();
                if let Err(e) = self.store.save_layout(self.layout) {
                    warn!("Failed to save layout: {}", e);
                }
            }
            Action::ClosePanel => self.panel = None,
            Action::SwitchFocus => {
                self.machine.switch_session_type(SwitchTarget::Focus);
            }
            Action::SwitchRest => {
                self.machine.switch_session_type(SwitchTarget::Rest);
            }
            Action::OpenSettings => {
                if self.panel.is_none() {
                    self.panel = Some(SettingsPanel::new(*self.machine.settings()));
                }
            }
            Action::Quit => self.quit = true,
        }
    }

    fn apply_settings(&mut self, settings: TimerSettings) {
        if let Err(e) = self.store.save_settings(&settings) {
            warn!("Failed to save settings: {} ({})", e, e.suggestion());
        }
        self.machine.apply_settings(settings);
    }

    fn answer_prompt(&mut self, permission: NotificationPermission) {
        info!("Notification permission: {}", permission.as_str());
        self.prompt_visible = false;
        self.machine.notifier_mut().set_permission(permission);
        if let Err(e) = self.store.save_permission(permission) {
            warn!("Failed to save notification permission: {}", e);
        }
    }
}

/// Runs the interactive timer until the user quits.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the terminal cannot
/// be driven.
pub async fn run(data_dir: &Path) -> Result<()> {
    let store = JsonFileStore::open(data_dir).context("Failed to open settings store")?;
    let store = SettingsStore::new(store);

    let tone_player: Box<dyn TonePlayer> = match try_create_player() {
        Some(player) => Box::new(player),
        None => Box::new(SilentTonePlayer),
    };
    let notifier = CompletionNotifier::new(
        tone_player,
        Box::new(BellVibrator),
        Box::new(DesktopNotifier::detect()),
        store.load_permission(),
    );
    let machine = SessionMachine::new(
        store.load_settings(),
        TokioScheduler::new(),
        Box::new(InhibitorWakeLock::new()),
        notifier,
    );
    let mut app = App::new(machine, store);

    let mut terminal = Terminal::enter().context("Failed to open terminal")?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _reader = spawn_reader(tx);

    let prompt_delay = sleep(ui::PROMPT_DELAY);
    tokio::pin!(prompt_delay);
    let mut prompt_pending = true;

    info!("Pomodoro timer started");
    let result = loop {
        let lines = ui::render(&app.view());
        let title = ui::title(app.machine().state());
        if let Err(e) = terminal.draw(&lines, &title) {
            break Err(anyhow::Error::from(e).context("Failed to draw"));
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = app.machine_mut().scheduler_mut().next_event() => {
                app.on_driver_event(event);
            }
            input = rx.recv() => match input {
                Some(input) => app.on_input(input),
                None => break Ok(()),
            },
            _ = &mut prompt_delay, if prompt_pending => {
                prompt_pending = false;
                app.on_prompt_due();
            }
        }
    };

    app.shutdown();
    drop(rx);
    drop(terminal);
    info!("Pomodoro timer stopped");
    result
}

//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw:
//!
//! - **Animating** (request outstanding or echo reveal running): draws every
//!   ~80ms so the spinner, border pulse and typed-out text move smoothly.
//! - **Idle**: sleeps up to 500ms and only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::Profile;
use crate::core::action::{Action, Effect, PendingClaim, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Panel, SubmissionId};
use crate::service::{ClaimService, HttpClaimService, ServiceError};
use crate::tui::component::EventHandler;
use crate::tui::components::{HistoryListState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub input_box: InputBox,
    pub history_list: HistoryListState,
    pub profile_label: &'static str,
    // Animation state
    pub pulse_value: f32,
}

impl TuiState {
    pub fn new(profile: Profile) -> Self {
        Self {
            input_box: InputBox::new(),
            history_list: HistoryListState::new(),
            profile_label: profile.label(),
            pulse_value: 0.0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Calls `restore` once when dropped, including on early `?` returns.
struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Build the HTTP claim service described by a resolved config.
pub fn build_service(config: &ResolvedConfig) -> Result<Arc<dyn ClaimService>, ServiceError> {
    let profile = &config.claim_profile;
    let service = HttpClaimService::new(
        &config.base_url,
        &profile.endpoint_path,
        profile.result_field.clone(),
        config.request_timeout,
    )?;
    info!(
        "Using {} profile at {}",
        config.profile.label(),
        service.endpoint()
    );
    Ok(Arc::new(service))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config).map_err(std::io::Error::other)?;
    let mut app = App::new(service, config.claim_profile.clone());
    let mut tui = TuiState::new(config.profile);

    let mut terminal = ratatui::init();
    let _restore = RestoreOnDrop::new(ratatui::restore);
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        tui.input_box.dimmed = app.panel == Panel::Output;

        let animating = app.is_awaiting() || app.reveal.is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending event before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event)
                && dispatch(&mut app, action, &tx)
            {
                break 'main;
            }
        }

        // Results from background requests and reveal timers
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, action, &tx) {
                break 'main;
            }
        }
    }

    Ok(())
}

/// Turn a terminal event into a core action, applying TUI-local events
/// (editing, scrolling) directly.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::ToggleHistory => {
            tui.history_list = HistoryListState::new();
            Some(Action::ToggleHistory)
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.history_list.handle_event(event);
            None
        }
        _ => match app.panel {
            Panel::Output => match event {
                TuiEvent::Escape => Some(Action::ShowInput),
                // Typing goes straight to a new claim
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    tui.input_box.handle_event(event);
                    Some(Action::ShowInput)
                }
                _ => None,
            },
            Panel::Input => match tui.input_box.handle_event(event)? {
                InputEvent::Submit(text) => Some(Action::Submit(text)),
                InputEvent::ContentChanged => None,
            },
        },
    }
}

/// Apply `action` and carry out its effect. Returns true when the app should exit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::SpawnRequest(pending) => {
            if let Some(after) = pending.reveal_after {
                schedule_reveal(pending.submission, after, tx.clone());
            }
            spawn_request(app.service.clone(), pending, tx.clone());
        }
        Effect::ScheduleReveal { submission, after } => {
            schedule_reveal(submission, after, tx.clone());
        }
    }
    false
}

fn spawn_request(service: Arc<dyn ClaimService>, pending: PendingClaim, tx: mpsc::Sender<Action>) {
    info!(
        "Spawning claim request #{} to {}",
        pending.submission,
        service.endpoint()
    );
    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = service.submit(&pending.claim).await;
        debug!(
            "Claim request #{} finished in {}ms (ok={})",
            pending.submission,
            started.elapsed().as_millis(),
            outcome.is_ok()
        );
        let action = Action::ResponseReceived {
            submission: pending.submission,
            claim: pending.claim,
            outcome,
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to deliver response for claim #{}: receiver dropped",
                pending.submission
            );
        }
    });
}

fn schedule_reveal(submission: SubmissionId, after: Duration, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        // The loop has exited if this fails; nothing left to reveal
        let _ = tx.send(Action::RevealTick(submission));
    });
}

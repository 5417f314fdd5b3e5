//! Zellij plugin entry point for justlists.
//!
//! This binary is the thin shim between Zellij and the library. It turns
//! Zellij key events into [`KeyPress`]es and left clicks into
//! [`LogicalKey::Select`], hands them to the session, and draws the resulting
//! snapshot. All list behavior lives in the library.
//!
//! # Lifecycle
//!
//! 1. `load`: parse configuration, start logging, load the list file
//! 2. `update`: one key or click per event; returns whether to re-render
//! 3. `render`: draw the current snapshot
//!
//! The session ends when the engine asks to terminate, on a fatal engine
//! error, or when Zellij closes the pane. All three paths run the final
//! save exactly once.
//!
//! The plugin only exists on wasm targets, where Zellij provides the host
//! functions. Native builds get a stub `main` so the library's tests link.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::BTreeMap;
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use justlists::app::{map_key, KeyCode, KeyPress, LogicalKey, StatusMessage};
#[cfg(target_family = "wasm")]
use justlists::{Config, Outcome, Session};

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("justlists is a Zellij plugin; build it with --target wasm32-wasip1");
}

/// Plugin state held by Zellij between events.
#[cfg(target_family = "wasm")]
struct State {
    session: Session,
    /// Pane size of the last frame, used to map clicks back to rows.
    rows: usize,
    cols: usize,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        Self {
            session: Session::new(&Config::default()),
            rows: 0,
            cols: 0,
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let (config, config_error) = match Config::from_zellij(&configuration) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };
        justlists::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(list_file = %config.list_file, theme = ?config.theme_name, "parsed configuration");

        self.session = justlists::initialize(&config);

        if let Some(e) = config_error {
            tracing::warn!(error = %e, "invalid configuration, using defaults");
            self.session.engine.notify(StatusMessage::error(e.to_string()));
        }

        subscribe(&[EventType::Key, EventType::Mouse, EventType::BeforeClose]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key_event(&key),
            Event::Mouse(Mouse::LeftClick(line, _)) => self.handle_click(line),
            Event::BeforeClose => {
                tracing::debug!("pane closing");
                self.finish();
                false
            }
            _ => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        justlists::ui::render(&self.session.snapshot(), &self.session.theme, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    fn handle_key_event(&mut self, key: &KeyWithModifier) -> bool {
        let _span = tracing::debug_span!("key_event", bare_key = ?key.bare_key).entered();

        let Some(press) = Self::map_key_event(key) else {
            return false;
        };
        let Some(logical) = map_key(self.session.engine.mode().kind(), press) else {
            tracing::trace!(press = ?press, "key not bound in this mode");
            return false;
        };

        self.dispatch(logical)
    }

    /// Selects the item under a click. `line` is the 0-based pane line.
    fn handle_click(&mut self, line: isize) -> bool {
        let _span = tracing::debug_span!("click_event", line).entered();

        let Ok(line) = usize::try_from(line) else {
            return false;
        };
        let viewmodel = justlists::ui::compute_viewmodel(&self.session.snapshot(), self.rows, self.cols);
        let Some(index) = viewmodel.item_at_row(line + 1) else {
            tracing::trace!("click outside the list");
            return false;
        };

        self.dispatch(LogicalKey::Select(index))
    }

    /// Feeds one logical key to the session and acts on the outcome.
    fn dispatch(&mut self, logical: LogicalKey) -> bool {
        match self.session.handle_key(logical) {
            Ok(Outcome::Ignored) => false,
            Ok(Outcome::Updated) => true,
            Ok(Outcome::Terminate) => {
                self.finish();
                close_self();
                false
            }
            Err(e) if e.is_fatal() => {
                tracing::error!(error = %e, "fatal engine error, closing");
                self.finish();
                close_self();
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "key handling failed");
                true
            }
        }
    }

    /// Runs the final save. Later calls are no-ops.
    fn finish(&mut self) {
        if let Err(e) = self.session.shutdown() {
            tracing::error!(error = %e, "final save failed");
        }
    }

    /// Translates a Zellij key into a [`KeyPress`]. Alt chords are not used.
    fn map_key_event(key: &KeyWithModifier) -> Option<KeyPress> {
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        let code = match key.bare_key {
            BareKey::Char(c) if key.has_modifiers(&[KeyModifier::Shift]) => {
                KeyCode::Char(c.to_uppercase().next().unwrap_or(c))
            }
            BareKey::Char(c) => KeyCode::Char(c),
            BareKey::Enter => KeyCode::Enter,
            BareKey::Esc => KeyCode::Esc,
            BareKey::Backspace => KeyCode::Backspace,
            BareKey::Up => KeyCode::Up,
            BareKey::Down => KeyCode::Down,
            BareKey::Left => KeyCode::Left,
            BareKey::Right => KeyCode::Right,
            BareKey::Home => KeyCode::Home,
            BareKey::End => KeyCode::End,
            _ => return None,
        };

        Some(if key.has_modifiers(&[KeyModifier::Ctrl]) {
            KeyPress::ctrl(code)
        } else {
            KeyPress::plain(code)
        })
    }
}

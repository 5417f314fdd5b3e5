//! Physical key to logical key mapping.
//!
//! The driver translates host key events into [`KeyPress`] values and asks
//! [`map_key`] for the [`LogicalKey`] they mean in the current mode. Printable
//! characters are commands while browsing and text while filtering or editing.
//!
//! # Keybindings
//!
//! Browsing:
//! - `a`: Add, `e`/`Enter`: Edit, `d`: Delete
//! - `f`/`/`: Filter, `s`/`Ctrl+s`: Save, `x`/`q`/`Ctrl+x`: Exit
//! - `k`/`Up`, `j`/`Down`: Move, `h`/`Left`/`Home`: First, `l`/`Right`/`End`: Last
//!
//! Filtering:
//! - `Enter`/`Esc`: Back to list, `Ctrl+x`: Exit, `Backspace`: Erase
//!
//! Editing:
//! - `Enter`: Confirm, `Esc`: Cancel, `Backspace`: Erase
//!
//! Exit confirmation:
//! - `Enter`/`y`: Exit, `s`: Save and exit, `Esc`/`n`: Cancel

use super::modes::{LogicalKey, ModeKind};

/// Host-independent key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// A key code plus the one modifier the key map cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    #[must_use]
    pub const fn ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true }
    }
}

/// Maps a key press to its logical meaning in `mode`.
///
/// Returns `None` for keys that mean nothing in that mode.
#[must_use]
pub fn map_key(mode: ModeKind, key: KeyPress) -> Option<LogicalKey> {
    if key.ctrl {
        return match (mode, key.code) {
            (ModeKind::Browsing | ModeKind::Filtering, KeyCode::Char('x')) => Some(LogicalKey::Exit),
            (ModeKind::Browsing, KeyCode::Char('s')) => Some(LogicalKey::Save),
            _ => None,
        };
    }

    match mode {
        ModeKind::Browsing => browsing(key.code),
        ModeKind::Filtering => text_entry(key.code, LogicalKey::Confirm),
        ModeKind::Editing => text_entry(key.code, LogicalKey::Cancel),
        ModeKind::ExitConfirm => exit_confirm(key.code),
    }
}

fn browsing(code: KeyCode) -> Option<LogicalKey> {
    Some(match code {
        KeyCode::Char('a') => LogicalKey::Add,
        KeyCode::Char('e') | KeyCode::Enter => LogicalKey::Edit,
        KeyCode::Char('d') => LogicalKey::Delete,
        KeyCode::Char('f' | '/') => LogicalKey::FilterStart,
        KeyCode::Char('s') => LogicalKey::Save,
        KeyCode::Char('x' | 'q') => LogicalKey::Exit,
        KeyCode::Char('k') | KeyCode::Up => LogicalKey::Up,
        KeyCode::Char('j') | KeyCode::Down => LogicalKey::Down,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Home => LogicalKey::First,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::End => LogicalKey::Last,
        _ => return None,
    })
}

/// Filtering and Editing share text entry; they differ only in what `Esc` means.
fn text_entry(code: KeyCode, on_escape: LogicalKey) -> Option<LogicalKey> {
    match code {
        KeyCode::Enter => Some(LogicalKey::Confirm),
        KeyCode::Esc => Some(on_escape),
        KeyCode::Backspace => Some(LogicalKey::Erase),
        KeyCode::Char(c) if !c.is_control() => Some(LogicalKey::Input(c)),
        _ => None,
    }
}

fn exit_confirm(code: KeyCode) -> Option<LogicalKey> {
    match code {
        KeyCode::Enter | KeyCode::Char('y') => Some(LogicalKey::Confirm),
        KeyCode::Char('s') => Some(LogicalKey::Save),
        KeyCode::Esc | KeyCode::Char('n') => Some(LogicalKey::Cancel),
        _ => None,
    }
}

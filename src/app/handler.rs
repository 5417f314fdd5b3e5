//! The (mode, key) transition table.
//!
//! [`transition`] is a pure function: given the current [`Mode`], a
//! [`LogicalKey`], and a read-only [`Context`] describing the list, it returns
//! the [`Transition`] bound to that pair, or `None` when nothing is bound.
//!
//! # Lookup Order
//!
//! 1. The primary table for the current mode.
//! 2. In `Browsing` only, the navigation table.
//!
//! The first match wins, so a key never triggers two actions. An unmatched
//! key is not an error.
//!
//! # Example
//!
//! ```rust
//! use justlists::app::handler::{transition, Context};
//! use justlists::app::{LogicalKey, Mode};
//!
//! let ctx = Context { len: 2, selection: Some(0), dirty: false, selected_text: Some("milk") };
//! let t = transition(&Mode::Browsing, LogicalKey::Down, &ctx).unwrap();
//! assert_eq!(t.next, Mode::Browsing);
//! ```

use super::actions::{Command, Transition};
use super::modes::{LogicalKey, Mode};

/// Read-only view of the list that the table needs to decide a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context<'a> {
    /// Number of items in the full list.
    pub len: usize,
    /// Current selection into the full list.
    pub selection: Option<usize>,
    /// Whether the list has unsaved changes.
    pub dirty: bool,
    /// Text of the selected item, if the selection is valid.
    pub selected_text: Option<&'a str>,
}

impl Context<'_> {
    fn valid_selection(&self) -> Option<usize> {
        self.selection.filter(|&i| i < self.len)
    }

    fn last_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }
}

/// Looks up the transition bound to `(mode, key)`.
///
/// Returns `None` if no table binds the pair.
#[must_use]
pub fn transition(mode: &Mode, key: LogicalKey, ctx: &Context<'_>) -> Option<Transition> {
    let bound = match mode {
        Mode::Browsing => browsing(key, ctx),
        Mode::Filtering { pattern } => filtering(pattern, key, ctx),
        Mode::Editing { target_index, buffer } => editing(*target_index, buffer, key),
        Mode::ExitConfirm => exit_confirm(key),
    };

    bound.or_else(|| match mode {
        Mode::Browsing => navigation(key, ctx),
        _ => None,
    })
}

fn browsing(key: LogicalKey, ctx: &Context<'_>) -> Option<Transition> {
    match key {
        LogicalKey::Add => {
            let index = ctx.len;
            Some(
                Transition::to(Mode::Editing {
                    target_index: index,
                    buffer: String::new(),
                })
                .with(Command::Append(String::new()))
                .with(Command::Select(Some(index))),
            )
        }
        LogicalKey::Edit => Some(match (ctx.valid_selection(), ctx.selected_text) {
            (Some(index), Some(text)) => Transition::to(Mode::Editing {
                target_index: index,
                buffer: text.to_string(),
            }),
            _ => Transition::to(Mode::Browsing),
        }),
        LogicalKey::Delete => Some(match ctx.valid_selection() {
            Some(index) => {
                let remaining = ctx.len - 1;
                let selection = if index >= remaining {
                    remaining.checked_sub(1)
                } else {
                    Some(index)
                };
                Transition::to(Mode::Browsing)
                    .with(Command::Remove(index))
                    .with(Command::Select(selection))
            }
            None => Transition::to(Mode::Browsing),
        }),
        LogicalKey::FilterStart => Some(
            Transition::to(Mode::Filtering {
                pattern: String::new(),
            })
            .with(Command::ApplyFilter(String::new())),
        ),
        LogicalKey::Save => Some(Transition::to(Mode::Browsing).with(Command::Persist)),
        LogicalKey::Exit => Some(request_exit(Mode::Browsing, ctx)),
        _ => None,
    }
}

fn navigation(key: LogicalKey, ctx: &Context<'_>) -> Option<Transition> {
    let selection = match key {
        LogicalKey::Up => ctx.valid_selection().map(|i| i.saturating_sub(1)),
        LogicalKey::Down => ctx
            .valid_selection()
            .zip(ctx.last_index())
            .map(|(i, last)| (i + 1).min(last)),
        LogicalKey::First => (ctx.len > 0).then_some(0),
        LogicalKey::Last => ctx.last_index(),
        LogicalKey::Select(index) if index < ctx.len => Some(index),
        _ => return None,
    };

    Some(Transition::to(Mode::Browsing).with(Command::Select(selection)))
}

fn filtering(pattern: &str, key: LogicalKey, ctx: &Context<'_>) -> Option<Transition> {
    match key {
        LogicalKey::Input(c) => {
            if c.is_control() {
                return None;
            }
            let mut pattern = pattern.to_string();
            pattern.push(c);
            Some(refilter(pattern))
        }
        LogicalKey::Erase => {
            let mut pattern = pattern.to_string();
            pattern.pop();
            Some(refilter(pattern))
        }
        LogicalKey::Confirm => Some(Transition::to(Mode::Browsing)),
        LogicalKey::Exit => Some(request_exit(
            Mode::Filtering {
                pattern: pattern.to_string(),
            },
            ctx,
        )),
        _ => None,
    }
}

fn refilter(pattern: String) -> Transition {
    Transition::to(Mode::Filtering {
        pattern: pattern.clone(),
    })
    .with(Command::ApplyFilter(pattern))
}

fn editing(target_index: usize, buffer: &str, key: LogicalKey) -> Option<Transition> {
    match key {
        LogicalKey::Input(c) => {
            if c.is_control() {
                return None;
            }
            let mut buffer = buffer.to_string();
            buffer.push(c);
            Some(Transition::to(Mode::Editing { target_index, buffer }))
        }
        LogicalKey::Erase => {
            let mut buffer = buffer.to_string();
            buffer.pop();
            Some(Transition::to(Mode::Editing { target_index, buffer }))
        }
        LogicalKey::Confirm => Some(Transition::to(Mode::Browsing).with(Command::Replace {
            index: target_index,
            text: buffer.to_string(),
        })),
        LogicalKey::Cancel => Some(Transition::to(Mode::Browsing)),
        _ => None,
    }
}

fn exit_confirm(key: LogicalKey) -> Option<Transition> {
    match key {
        LogicalKey::Confirm => Some(Transition::to(Mode::ExitConfirm).with(Command::Terminate)),
        LogicalKey::Save => Some(
            Transition::to(Mode::ExitConfirm)
                .with(Command::Persist)
                .with(Command::Terminate),
        ),
        LogicalKey::Cancel => Some(Transition::to(Mode::Browsing)),
        _ => None,
    }
}

/// Exit is immediate when clean; otherwise the user has to confirm.
fn request_exit(current: Mode, ctx: &Context<'_>) -> Transition {
    if ctx.dirty {
        Transition::to(Mode::ExitConfirm)
    } else {
        Transition::to(current).with(Command::Terminate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(len: usize, selection: Option<usize>, dirty: bool) -> Context<'static> {
        Context {
            len,
            selection,
            dirty,
            selected_text: selection.filter(|&i| i < len).map(|_| "item"),
        }
    }

    #[test]
    fn delete_last_steps_selection_back() {
        let t = transition(&Mode::Browsing, LogicalKey::Delete, &ctx(3, Some(2), false)).unwrap();
        assert_eq!(t.commands, vec![Command::Remove(2), Command::Select(Some(1))]);
    }

    #[test]
    fn delete_only_item_invalidates_selection() {
        let t = transition(&Mode::Browsing, LogicalKey::Delete, &ctx(1, Some(0), false)).unwrap();
        assert_eq!(t.commands, vec![Command::Remove(0), Command::Select(None)]);
    }

    #[test]
    fn delete_middle_keeps_index() {
        let t = transition(&Mode::Browsing, LogicalKey::Delete, &ctx(3, Some(1), false)).unwrap();
        assert_eq!(t.commands, vec![Command::Remove(1), Command::Select(Some(1))]);
    }

    #[test]
    fn edit_and_delete_without_selection_are_guarded() {
        for key in [LogicalKey::Edit, LogicalKey::Delete] {
            let t = transition(&Mode::Browsing, key, &ctx(0, None, false)).unwrap();
            assert_eq!(t, Transition::to(Mode::Browsing));
        }
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let up = transition(&Mode::Browsing, LogicalKey::Up, &ctx(3, Some(0), false)).unwrap();
        assert_eq!(up.commands, vec![Command::Select(Some(0))]);

        let down = transition(&Mode::Browsing, LogicalKey::Down, &ctx(3, Some(2), false)).unwrap();
        assert_eq!(down.commands, vec![Command::Select(Some(2))]);

        let last = transition(&Mode::Browsing, LogicalKey::Last, &ctx(3, Some(0), false)).unwrap();
        assert_eq!(last.commands, vec![Command::Select(Some(2))]);
    }

    #[test]
    fn navigation_on_empty_list_leaves_no_selection() {
        for key in [LogicalKey::Up, LogicalKey::Down, LogicalKey::First, LogicalKey::Last] {
            let t = transition(&Mode::Browsing, key, &ctx(0, None, false)).unwrap();
            assert_eq!(t.commands, vec![Command::Select(None)]);
        }
    }

    #[test]
    fn navigation_only_applies_while_browsing() {
        let filtering = Mode::Filtering { pattern: "a".into() };
        assert!(transition(&filtering, LogicalKey::Down, &ctx(3, Some(0), false)).is_none());
        assert!(transition(&Mode::ExitConfirm, LogicalKey::Up, &ctx(3, Some(1), true)).is_none());
    }

    #[test]
    fn unbound_pairs_are_none() {
        assert!(transition(&Mode::Browsing, LogicalKey::Confirm, &ctx(1, Some(0), false)).is_none());
        assert!(transition(&Mode::Browsing, LogicalKey::Input('a'), &ctx(1, Some(0), false)).is_none());
        assert!(transition(&Mode::ExitConfirm, LogicalKey::Add, &ctx(1, Some(0), true)).is_none());
        let editing = Mode::Editing { target_index: 0, buffer: String::new() };
        assert!(transition(&editing, LogicalKey::Exit, &ctx(1, Some(0), true)).is_none());
        let filtering = Mode::Filtering { pattern: String::new() };
        assert!(transition(&filtering, LogicalKey::Cancel, &ctx(1, Some(0), true)).is_none());
    }

    #[test]
    fn exit_routes_through_confirm_only_when_dirty() {
        let clean = transition(&Mode::Browsing, LogicalKey::Exit, &ctx(1, Some(0), false)).unwrap();
        assert!(clean.terminates());

        let dirty = transition(&Mode::Browsing, LogicalKey::Exit, &ctx(1, Some(0), true)).unwrap();
        assert_eq!(dirty, Transition::to(Mode::ExitConfirm));
    }

    #[test]
    fn exit_from_filtering_routes_through_confirm_only_when_dirty() {
        let filtering = Mode::Filtering { pattern: "mi".into() };

        let clean = transition(&filtering, LogicalKey::Exit, &ctx(2, Some(0), false)).unwrap();
        assert!(clean.terminates());
        assert_eq!(clean.next, filtering);

        let dirty = transition(&filtering, LogicalKey::Exit, &ctx(2, Some(0), true)).unwrap();
        assert_eq!(dirty, Transition::to(Mode::ExitConfirm));
    }

    #[test]
    fn select_moves_to_a_valid_index_while_browsing() {
        let t = transition(&Mode::Browsing, LogicalKey::Select(2), &ctx(3, Some(0), false)).unwrap();
        assert_eq!(t, Transition::to(Mode::Browsing).with(Command::Select(Some(2))));
    }

    #[test]
    fn select_out_of_range_is_unbound() {
        assert!(transition(&Mode::Browsing, LogicalKey::Select(3), &ctx(3, Some(0), false)).is_none());
        assert!(transition(&Mode::Browsing, LogicalKey::Select(0), &ctx(0, None, false)).is_none());
    }

    #[test]
    fn select_is_ignored_outside_browsing() {
        let filtering = Mode::Filtering { pattern: String::new() };
        let editing = Mode::Editing { target_index: 0, buffer: String::new() };
        for mode in [filtering, editing, Mode::ExitConfirm] {
            assert!(transition(&mode, LogicalKey::Select(1), &ctx(3, Some(0), true)).is_none());
        }
    }

    #[test]
    fn exit_confirm_save_persists_before_terminating() {
        let t = transition(&Mode::ExitConfirm, LogicalKey::Save, &ctx(1, Some(0), true)).unwrap();
        assert_eq!(t.commands, vec![Command::Persist, Command::Terminate]);
    }

    #[test]
    fn control_characters_are_not_text() {
        let editing = Mode::Editing { target_index: 0, buffer: "ab".into() };
        assert!(transition(&editing, LogicalKey::Input('\n'), &ctx(1, Some(0), false)).is_none());
    }
}

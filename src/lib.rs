//! Justlists: a Zellij plugin for keeping a plain-text list.
//!
//! Justlists shows one list of short text items in a plugin pane and lets you:
//! - Add, edit, and delete items with single keys
//! - Narrow the view with a literal substring filter
//! - Save to a plain text file, one item per line
//! - Get a confirmation before exiting with unsaved changes
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key mapping                                      │
//! │  - Transition table                                 │
//! │  - Render snapshot                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                                    │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ UI Layer (ui/)    │             │ Storage (storage/)│
//! │ - View model      │             │ - ListStore       │
//! │ - Theming         │             │ - Text file I/O   │
//! │ - Components      │             │ - Backend trait   │
//! └───────────────────┘             └───────────────────┘
//!         │                                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Plugin options are read from the Zellij layout or config:
//!
//! ```kdl
//! plugin location="file:justlists.wasm" {
//!     list_file "~/notes/groceries.list"
//!     theme "paper-light"
//!     trace_level "debug"
//! }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{InteractionEngine, LogicalKey, Mode, ModeKind, Outcome, RenderSnapshot};
pub use domain::{Item, JustlistsError, Result};
pub use storage::{ListStore, TextFileStorage};
pub use ui::Theme;

use app::StatusMessage;
use std::collections::BTreeMap;

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the list file.
    ///
    /// A leading `~` is resolved against the sandbox `/host` mount.
    /// Default: `"~/list.list"`
    pub list_file: String,

    /// Built-in theme name to use.
    ///
    /// Options: `ember-dark`, `paper-light`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file, e.g. `debug`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_file: infrastructure::DEFAULT_LIST_FILE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`JustlistsError::Config`] if `list_file` is present but blank.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use justlists::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("list_file".to_string(), "~/todo.list".to_string());
    /// map.insert("theme".to_string(), "paper-light".to_string());
    ///
    /// let config = Config::from_zellij(&map)?;
    /// assert_eq!(config.list_file, "~/todo.list");
    /// assert_eq!(config.theme_name.as_deref(), Some("paper-light"));
    /// # Ok::<(), justlists::JustlistsError>(())
    /// ```
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Result<Self> {
        let list_file = match config.get("list_file").map(|s| s.trim()) {
            Some("") => {
                return Err(JustlistsError::Config("list_file must not be empty".to_string()));
            }
            Some(path) => path.to_string(),
            None => infrastructure::DEFAULT_LIST_FILE.to_string(),
        };

        Ok(Self {
            list_file,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        })
    }

    /// The list file as a sandbox path.
    #[must_use]
    pub fn list_path(&self) -> String {
        infrastructure::expand_tilde(&self.list_file)
    }

    /// Resolves the theme: `theme_file` first, then `theme_name`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Everything one plugin instance owns: the engine, the store, and the theme.
///
/// The engine and the store are siblings; the store is handed to the
/// engine on every call rather than captured by it.
#[derive(Debug)]
pub struct Session {
    pub engine: InteractionEngine,
    pub store: ListStore,
    pub theme: Theme,
}

impl Session {
    /// Builds a session over an empty, not yet loaded store. Performs no I/O.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let store = ListStore::new(Box::new(TextFileStorage::new(config.list_path())));
        let engine = InteractionEngine::new(&store);

        Self {
            engine,
            store,
            theme: config.resolve_theme(),
        }
    }

    /// Loads the list file and resets the engine over its contents.
    ///
    /// A missing file is the normal first run and is only logged. Any other
    /// read failure is logged and shown on the status line. Either way the
    /// session continues with an empty list.
    pub fn load(&mut self) {
        let _span = tracing::debug_span!("load_session", location = %self.store.location()).entered();

        let loaded = self.store.load();
        self.engine = InteractionEngine::new(&self.store);

        match loaded {
            Ok(count) => tracing::info!(count, "list loaded"),
            Err(e) if e.is_missing_store() => {
                tracing::debug!("no list file yet, starting empty");
            }
            Err(e) => {
                tracing::warn!(error = %e, "list file unreadable, starting empty");
                self.engine.notify(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Snapshot of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        self.engine.snapshot(&self.store)
    }

    /// Feeds one logical key to the engine.
    ///
    /// # Errors
    ///
    /// See [`InteractionEngine::handle_key`].
    pub fn handle_key(&mut self, key: LogicalKey) -> Result<Outcome> {
        self.engine.handle_key(&mut self.store, key)
    }

    /// Performs the final save. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// See [`InteractionEngine::shutdown`].
    pub fn shutdown(&mut self) -> Result<()> {
        self.engine.shutdown(&mut self.store)
    }
}

/// Initializes a plugin session from configuration.
///
/// Resolves the theme, then loads the list file.
///
/// # Example
///
/// ```rust
/// use justlists::{initialize, Config, ModeKind};
///
/// let config = Config {
///     list_file: "/tmp/justlists-doc-missing.list".to_string(),
///     ..Config::default()
/// };
///
/// let session = initialize(&config);
/// assert_eq!(session.snapshot().mode, ModeKind::Browsing);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Session {
    tracing::debug!(list_file = %config.list_file, "initializing justlists plugin");

    let mut session = Session::new(config);
    session.load();
    session
}

//! File-based logging for the plugin.
//!
//! A plugin's stdout is its UI, so diagnostics go to a rotating log file
//! instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → justlists.log
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in the plugin configuration
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, LOG_FILE_NAME};

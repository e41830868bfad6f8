//! # Front Desk Library
//!
//! The application layer of the circulation desk: configuration, logging,
//! the shared [`DeskState`] and the command functions callers invoke.
//!
//! ## Module Organization
//! ```text
//! front_desk/
//! ├── lib.rs          ◄─── You are here (startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── desk.rs     ◄─── Arc<Mutex<Library>> wrapper
//! │   └── config.rs   ◄─── Configuration (defaults, file, env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── session.rs  ◄─── open / close / cards / status
//! │   ├── loans.rs    ◄─── check out / check in / renew
//! │   └── reports.rs  ◄─── search / overdue
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ErrorCode};
pub use state::{DeskConfig, DeskState};

/// Boots the desk.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Desk Startup                                      │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then CIRC_CONFIG_FILE, then CIRC_* variables            │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG if set, otherwise the configured filter                  │
/// │                                                                         │
/// │  3. Load Catalog & Build Library ─────────────────────────────────────► │
/// │     • Fresh calendar at day 0, library closed                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn bootstrap() -> Result<(DeskConfig, DeskState), ApiError> {
    bootstrap_with(|key| std::env::var(key).ok())
}

/// [`bootstrap`] with configuration read through `lookup` instead of the
/// process environment.
pub fn bootstrap_with<F>(lookup: F) -> Result<(DeskConfig, DeskState), ApiError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = DeskConfig::from_lookup(lookup)?;
    init_tracing(&config);

    info!(library = %config.library_name, "Starting front desk");
    let desk = DeskState::from_config(&config)?;

    Ok((config, desk))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command
/// - `RUST_LOG=circulation_core=trace` - Core crate only
/// - Default: [`DeskConfig::log_filter`]
///
/// Calling this twice keeps the first subscriber.
pub fn init_tracing(config: &DeskConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        debug!("Tracing subscriber already installed");
    }
}

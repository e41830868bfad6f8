//! # State Module
//!
//! Manages the front desk's state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐    │
//! │  │   DeskState                  │   │   DeskConfig                 │    │
//! │  │                              │   │                              │    │
//! │  │   Arc<Mutex<Library>>        │   │   library_name               │    │
//! │  │   (catalog, members,         │   │   catalog_path               │    │
//! │  │    session, clock handle)    │   │   log_filter                 │    │
//! │  └──────────────────────────────┘   └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DeskState: one Mutex around the whole Library                       │
//! │  • DeskConfig: Read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod desk;

pub use config::{
    DeskConfig, ENV_CATALOG_PATH, ENV_CONFIG_FILE, ENV_LIBRARY_NAME, ENV_LOG_FILTER,
};
pub use desk::DeskState;

//! # Core Application Logic
//!
//! claimcheck's business logic. It knows nothing about any specific UI
//! technology and performs no I/O of its own.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  service   │
//!            │  Adapter   │──spawns───▶│  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`history`]: Append-only claim history and the history panel rows
//! - [`profile`]: Per-service settings (endpoint, result field, echo)
//! - [`reveal`]: Typing animation for echoed claims
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod history;
pub mod profile;
pub mod reveal;
pub mod state;

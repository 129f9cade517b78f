//! # Ecosystem Docs
//!
//! A terminal documentation browser for the AI Development Ecosystem: six
//! static sections, keyword search across them, dark/light themes, and
//! Markdown and print exports.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Registry   │──▶│    Search    │──▶│ ResultsPanel │
//! └──────┬───────┘   └──────────────┘   └──────┬───────┘
//!        │                                     │ publish
//!        ▼                                     ▼
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  ViewRouter  │◀──│  ViewState   │◀──│  Dispatcher  │
//! └──────┬───────┘   └──────────────┘   └──────────────┘
//!        ▼
//!   terminal / HTML print / Markdown
//! ```
//!
//! The pure pieces live in [`ecosystem_docs_core`]; this crate adds the
//! CLI-facing modules.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`render`] | Terminal rendering with theme palettes |
//! | [`search`] | `ecodocs search` |
//! | [`sections`] | `ecodocs sections` |
//! | [`export`] | Markdown export |
//! | [`print`] | Print adapter and print surfaces |
//! | [`browse`] | Interactive browse loop |

pub mod browse;
pub mod config;
pub mod export;
pub mod print;
pub mod render;
pub mod search;
pub mod sections;

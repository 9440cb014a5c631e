//! # Opsdesk Architecture
//!
//! Opsdesk is a **UI-agnostic engine for business-admin record lists**. Every
//! listing module (leads, clients, assets, tickets, ...) shares one
//! filter/search/list/export core and configures it with its own record shape
//! instead of reimplementing the predicate chain inline.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables/cards, prints messages  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Typed per-module entry points over the generic engine    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the query engine                │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond writing requested artifacts    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Layer (store/, records/, backend.rs)                  │
//! │  - Order-preserving InMemoryStore seeded per module         │
//! │  - Backend trait for server-computed results                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Engine, Many Modules
//!
//! The [`model::Record`] trait is the seam between the generic engine and the
//! per-module record shapes. A record declares its filterable fields, its
//! fixed searchable-field list, and its table columns; the engine in
//! [`query`] never learns anything else about it. Adding a module means
//! adding a record type and seed data, not new filtering code.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments and returns
//! `Result<CmdResult<_>>`. Nothing writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal. Operations report their
//! outcome through [`commands::CmdMessage`] entries; the CLI decides how to
//! show them. Exactly one terminal success or failure message is attached
//! per user-facing operation.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`query`]: Filter predicate, search predicate, list view controller
//! - [`records`]: Per-module record shapes, status enums, and seed data
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`export`]: Artifact writers (csv, spreadsheet, pdf)
//! - [`backend`]: Typed boundary for server-computed reports and imports
//! - [`session`]: Injected identity for role-based branching
//! - [`nav`]: Query-parameter codec for edit/prefill round-trips
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod nav;
pub mod query;
pub mod records;
pub mod session;
pub mod store;

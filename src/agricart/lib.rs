//! # Agricart Architecture
//!
//! Agricart is the **UI-agnostic core of an agricultural equipment storefront**: the
//! catalog, its schema-driven filters, the cart, checkout and order tracking. The
//! terminal client shipped with it is one consumer among many possible ones.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! │  - Normalizes inputs (sort keys, flat filters, defaults)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns CmdResult + messages             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (attributes/, sort, cart, orders, customers, i18n...) │
//! │  - Pure functions and plain data                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait, InMemoryCatalog, JSON seed catalogs  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Data
//!
//! Nothing derived is cached. Attribute schemas, filtered listings and sorted
//! listings are recomputed from a fresh store read on every call:
//!
//! ```text
//! store.list() ──► derive_category_filters ──► schema shown to the user
//!      │
//!      └────────► evaluate(query) ──► sort_products(key) ──► listing
//! ```
//!
//! A catalog mutation is therefore visible everywhere on the next call.
//!
//! ## No I/O in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust values. It never
//! writes to stdout or stderr and never exits the process. Diagnostics go through
//! `tracing`; installing a subscriber is the binary's business.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, built on
//!    `store::memory::fixtures::CatalogFixture`.
//! 2. **API**: dispatch and normalization tests in `api.rs`.
//! 3. **CLI**: end-to-end tests in `tests/` run the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`attributes`]: Attribute schemas, filter values and the filter evaluator
//! - [`sort`]: Listing order
//! - [`store`]: Storage abstraction and the in-memory catalog
//! - [`model`]: Core data types (`Product`, `NewProduct`, `ProductPatch`)
//! - [`cart`], [`orders`]: Cart, checkout totals and order tracking
//! - [`customers`]: Customer records and their postal addresses
//! - [`i18n`]: Portuguese and English translation tables
//! - [`routes`]: The storefront's navigation surface
//! - [`config`]: Configuration management
//! - [`init`]: Session construction from configuration
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod attributes;
pub mod cart;
pub mod commands;
pub mod config;
pub mod customers;
pub mod error;
pub mod i18n;
pub mod init;
pub mod model;
pub mod orders;
pub mod routes;
pub mod sort;
pub mod store;

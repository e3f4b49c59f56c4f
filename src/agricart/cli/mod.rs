//! # CLI Layer
//!
//! This module is **one possible UI client** for agricart; it is not the application
//! itself. It is the only place that knows about stdout, stderr and exit codes.
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()`, context setup and one `handle_*` function per subcommand
//! - `render`: turns `CmdResult` contents into terminal text
//!
//! Handlers call the API facade and print whatever it returns. Filtering, sorting
//! and pricing all happen in the library; the handlers only translate shell
//! arguments (`--filter brand=A,B`, `--min Horsepower=120`) into typed queries.

mod commands;
mod render;
mod setup;

pub use commands::run;

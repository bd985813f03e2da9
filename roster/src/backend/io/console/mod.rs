//! # Console
//!
//! Interactive menu-driven session over any `BufRead`/`Write` pair, so the
//! binary runs it on stdin/stdout and tests run it on scripted input.

pub mod display;
pub mod loader;
pub mod menu;
pub mod session;

pub use loader::ProgressLoader;
pub use menu::MenuChoice;
pub use session::ConsoleSession;

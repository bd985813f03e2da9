//! # Storage Module
//!
//! Handles all data persistence for the student roster.
//!
//! The roster lives in memory while the application runs; this module is only
//! responsible for moving the whole collection to and from disk in one pass.
//!
//! ## Current Implementation
//!
//! - **Flat file**: one student per line, fields separated by `|`
//!   (see [`flat_file`])
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: the domain asks a repository to read or write
//!   records and never touches file formats itself
//! - **All-or-nothing reads**: a single malformed line fails the whole read

pub mod flat_file;

pub use flat_file::StudentRepository;

//! # IO Module
//!
//! The interface layer between the person at the keyboard and the domain.
//!
//! It turns typed input into domain operations, validates that input before
//! it reaches the roster, and formats results and errors for the console.
//! It holds no roster state of its own.
//!
//! ## Key Responsibilities
//!
//! - **Menu Loop**: reading menu choices and dispatching them
//! - **Input Validation**: roll numbers, marks and required text fields
//! - **Error Reporting**: printing domain errors and carrying on
//! - **Display Mapping**: converting domain records into `shared` DTOs

pub mod console;
pub mod mappers;

pub use console::ConsoleSession;

//! # Backend Module
//!
//! Contains all non-UI logic for the student roster.
//!
//! This module brings together:
//! - **Domain**: the student record, the in-memory roster and its rules
//! - **Storage**: the flat file the roster is loaded from and saved to
//! - **IO**: the console session that drives the roster
//!
//! ## Architecture
//!
//! ```text
//! Console session (io)
//!     ↓
//! RecordStore (domain)
//!     ↓
//! StudentRepository (storage)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use log::{error, info};
use std::path::PathBuf;

use crate::config::AppConfig;
use domain::{RecordStore, RosterError};

/// Outcome of reading the data file at startup
#[derive(Debug)]
pub enum StartupLoad {
    /// No data file yet; the roster starts empty
    NoDataFile,
    Loaded(usize),
    /// The file could not be read; the roster starts empty
    Failed(RosterError),
}

/// Everything a session needs: the roster and where it is saved
#[derive(Debug)]
pub struct AppState {
    pub store: RecordStore,
    pub data_file: PathBuf,
    pub startup: StartupLoad,
}

/// Build the application state, loading the configured data file.
///
/// A corrupt or unreadable file does not stop startup: the failure is kept in
/// `startup` for the session to report and the roster starts empty.
pub fn initialize_backend(config: &AppConfig) -> AppState {
    info!("Setting up roster from {:?}", config.data_file);
    let mut store = RecordStore::new();

    let startup = if !config.data_file.exists() {
        info!("No data file at {:?}, starting empty", config.data_file);
        StartupLoad::NoDataFile
    } else {
        match store.load(&config.data_file) {
            Ok(count) => StartupLoad::Loaded(count),
            Err(e) => {
                error!("Failed to load {:?}: {}", config.data_file, e);
                StartupLoad::Failed(e)
            }
        }
    };

    AppState {
        store,
        data_file: config.data_file.clone(),
        startup,
    }
}

use std::io::{self, Write};
use std::thread;

use crate::config::LoaderConfig;

/// Cosmetic "Loading....." indicator.
///
/// Runs on the calling thread and blocks until finished; it never touches
/// roster state.
#[derive(Debug, Clone)]
pub struct ProgressLoader {
    config: LoaderConfig,
}

impl ProgressLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if !self.config.enabled {
            return Ok(());
        }

        write!(out, "Loading")?;
        out.flush()?;
        for _ in 0..self.config.ticks {
            thread::sleep(self.config.tick_duration());
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out)
    }
}

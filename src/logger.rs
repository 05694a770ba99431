use std::io::{self, Write};

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};


/// Progress and diagnostics on stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        let max_level = if verbose { LevelFilter::Trace } else { LevelFilter::Info };
        ConsoleLogger { max_level }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.max_level);
        Ok(())
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error => eprintln!("{} {}", "error:".red().bold(), record.args()),
            Level::Warn  => eprintln!("{} {}", "warning:".yellow().bold(), record.args()),
            Level::Info  => eprintln!("{}", record.args()),
            _            => eprintln!("{} {}", "debug:".blue(), record.args()),
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

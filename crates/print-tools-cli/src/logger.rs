use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr, keeping stdout for results
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Level for the `-v` count and `-q` flag
    pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Error;
        }
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn format_line(timestamp: DateTime<Local>, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} {}: {}",
        timestamp.format("%H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(
                Local::now(),
                record.level(),
                record.target(),
                &record.args().to_string(),
            );
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(verbose: bool) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut stderr = std::io::stderr().lock();
        let _ = match record.level() {
            Level::Debug | Level::Trace => writeln!(
                stderr,
                "{} {:<5} [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            ),
            _ => writeln!(
                stderr,
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            ),
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

use ansi_term::{Colour, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

/// Writes log records to stderr with a coloured level tag.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let style = match record.level() {
            Level::Error => Colour::Red.bold(),
            Level::Warn => Colour::Yellow.bold(),
            Level::Info => Colour::Green.normal(),
            Level::Debug => Colour::Blue.normal(),
            Level::Trace => Style::new().dimmed(),
        };
        eprintln!(
            "{} {}",
            style.paint(format!("{:<5}", record.level())),
            record.args()
        );
    }

    fn flush(&self) {}
}

/// `LOX_LOG` wins over the default but not over an explicit flag.
pub fn level(flag: Option<LevelFilter>) -> LevelFilter {
    if let Some(level) = flag {
        return level;
    }
    match std::env::var("LOX_LOG") {
        Ok(s) => LevelFilter::from_str(&s).unwrap_or(LevelFilter::Warn),
        Err(_) => LevelFilter::Warn,
    }
}

pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

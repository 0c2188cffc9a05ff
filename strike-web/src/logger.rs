//! `log` backend that writes to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

const fn max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from(format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Route `log` macros to the console. Safe to call more than once.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_include_level_and_target() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("strike_web::booking")
                .args(format_args!("slot unreadable"))
                .build(),
        );
        assert_eq!(line, "[WARN] strike_web::booking: slot unreadable");
    }

    #[test]
    fn max_level_never_hides_info() {
        assert!(max_level() >= LevelFilter::Info);
    }
}

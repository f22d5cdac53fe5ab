//! Console Logger
//!
//! Routes `log` records to the browser console as `[target] message` lines.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: wasm_bindgen::JsValue = format_line(record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `travel_guide_ui::map` -> `[MAP] ...`
fn format_line(target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", module.to_uppercase(), message)
}

/// Install the console logger. Debug builds log everything down to debug.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(format_line("travel_guide_ui::map", "ready"), "[MAP] ready");
        assert_eq!(format_line("leptos_deck", "moved"), "[LEPTOS_DECK] moved");
    }
}

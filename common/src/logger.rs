use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static WARNED_UNINITIALIZED: AtomicBool = AtomicBool::new(false);

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        println!("{}", self.format_line(&timestamp, file, line, message));
    }
}

/// Later calls are ignored; the first prefix wins.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else if !WARNED_UNINITIALIZED.swap(true, Ordering::Relaxed) {
        eprintln!("Logger not initialized, dropping log output. Call init_logger() first.");
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

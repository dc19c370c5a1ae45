use crate::util::GrammarBug;
use std::collections::VecDeque;
use std::default::Default;
use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock};

static LOG: OnceLock<Mutex<Log>> = OnceLock::new();

/// Once the log holds this many entries, the oldest are dropped.
const MAX_ENTRIES: usize = 1024;

/// The process-wide diagnostic sink. Resolution reports warnings (unused productions) and
/// errors (duplicates, missing productions) here.
pub struct Log {
    entries: VecDeque<LogEntry>,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Log {
    fn new() -> Log {
        Log {
            entries: VecDeque::new(),
        }
    }

    #[doc(hidden)]
    pub fn with_log<R>(callback: impl FnOnce(&mut Log) -> R) -> R {
        let log_mutex: &'static Mutex<Log> = LOG.get_or_init(|| Mutex::new(Log::new()));
        let mut log_guard: MutexGuard<Log> = log_mutex.lock().bug();
        callback(&mut log_guard)
    }

    /// Warnings are also written to stderr. Errors are not: every error logged here is also
    /// returned to the caller.
    #[doc(hidden)]
    pub fn push(&mut self, entry: LogEntry) {
        if entry.level == LogLevel::Warn {
            eprintln!("{}", entry);
        }
        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Remove and return every entry, oldest first.
    pub fn drain() -> Vec<LogEntry> {
        Log::with_log(|log| log.entries.drain(..).collect())
    }

    /// The messages of every entry logged at exactly `level`, oldest first.
    pub fn entries_at(level: LogLevel) -> Vec<String> {
        Log::with_log(|log| {
            log.entries
                .iter()
                .filter(|entry| entry.level == level)
                .map(|entry| entry.message.clone())
                .collect()
        })
    }

    pub fn to_string() -> String {
        Log::with_log(|log| format!("{}", log))
    }
}

impl Default for Log {
    fn default() -> Log {
        Log::new()
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, message: String) -> LogEntry {
        LogEntry { level, message }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let level = format!("[{}]", self.level);
        let msg = &self.message;
        write!(f, "{level:<7} {msg}")
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! log {
    ($level:ident, $message:literal) => {
        $crate::log!($level, $message,)
    };
    ($level:ident, $message:literal, $( $arg:expr ),*) => {
        {
            let level = $crate::LogLevel::$level;
            let message = format!($message, $( $arg ),*);
            let entry = $crate::LogEntry::new(level, message);
            $crate::Log::with_log(|log| log.push(entry));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_display() {
        let entry = LogEntry::new(LogLevel::Warn, "Unused productions: a".to_owned());
        assert_eq!(entry.to_string(), "[Warn]  Unused productions: a");
    }

    #[test]
    fn test_oldest_entries_are_dropped() {
        let mut log = Log::new();
        for i in 0..MAX_ENTRIES + 3 {
            log.push(LogEntry::new(LogLevel::Trace, format!("entry {}", i)));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message(), "entry 3");
        let last = format!("entry {}", MAX_ENTRIES + 2);
        assert_eq!(log.entries[MAX_ENTRIES - 1].message(), last);
    }

    #[test]
    fn test_log_macro() {
        log!(Info, "log macro test {}", 7);
        assert!(Log::entries_at(LogLevel::Info).contains(&"log macro test 7".to_owned()));
        assert!(Log::to_string().contains("[Info]  log macro test 7"));
    }
}

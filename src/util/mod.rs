mod bug;
mod indexed_map;
mod log;
mod ordered_map;

pub(crate) use bug::format_bug;
pub use bug::GrammarBug;
pub use indexed_map::IndexedMap;
pub use log::{Log, LogEntry, LogLevel};
pub use ordered_map::OrderedMap;

mod history;

pub use history::{CommandLog, HistoryResult};

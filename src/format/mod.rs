pub mod date;
pub mod duration;

pub use date::format_date;
pub use duration::{estimate_duration, WORDS_PER_MINUTE};

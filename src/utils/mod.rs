pub mod date;
pub mod formatting;
pub mod prompt;
pub mod table;

pub use formatting::title_case;

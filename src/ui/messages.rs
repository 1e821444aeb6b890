use std::fmt;

/// Width of the divider between report blocks.
const DIVIDER_WIDTH: usize = 40;

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("Error: {}", msg);
}

/// Horizontal rule separating prompt sections and report blocks.
pub fn divider_line() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

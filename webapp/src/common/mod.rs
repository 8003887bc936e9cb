pub mod dom;
pub mod style;

use chrono::{Datelike, Local};

// stamped into the footer
pub fn current_year() -> i32 {
    Local::now().year()
}

//! Cache key namespace
//!
//! Each resource has its own key per event so entries expire independently.

pub fn agenda(slug: &str) -> String {
    format!("agenda:{slug}")
}

pub fn agenda_raw(slug: &str) -> String {
    format!("agenda-raw:{slug}")
}

pub fn speakers(slug: &str) -> String {
    format!("speakers:{slug}")
}

pub fn booths(slug: &str) -> String {
    format!("booths:{slug}")
}

pub fn partnerships(slug: &str) -> String {
    format!("partnerships:{slug}")
}

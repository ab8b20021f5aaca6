//! Date and time prefixes.
use chrono::{Local, NaiveDateTime};

const DATE_FORMAT: &str = "%y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Which parts of the local clock a target shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StampFormat {
    pub date: bool,
    pub time: bool,
}

impl StampFormat {
    pub fn new(date: bool, time: bool) -> Self {
        Self { date, time }
    }

    pub fn is_empty(&self) -> bool {
        !self.date && !self.time
    }

    /// Formats the current local time.
    pub fn now(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.at(Local::now().naive_local())
    }

    /// `YY-MM-DD`, `HH:MM:SS`, both joined by a space, or nothing.
    pub fn at(&self, at: NaiveDateTime) -> String {
        match (self.date, self.time) {
            (false, false) => String::new(),
            (true, false) => at.format(DATE_FORMAT).to_string(),
            (false, true) => at.format(TIME_FORMAT).to_string(),
            (true, true) => format!("{} {}", at.format(DATE_FORMAT), at.format(TIME_FORMAT)),
        }
    }
}

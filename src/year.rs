use std::fmt;

use serde::{Deserialize, Serialize};

/// Year details as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearInfo {
    pub year: i32,
    pub sponsored_by: String,
    /// Human-readable representation of the year.
    pub year_string: String,
}

impl fmt::Display for YearInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), sponsored by {}",
            self.year, self.year_string, self.sponsored_by
        )
    }
}

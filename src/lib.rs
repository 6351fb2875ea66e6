//! Client for the GetFullYear API.
//!
//! The whole crate is one operation: GET the year endpoint, check for `200 OK`
//! and decode the body into a [`YearInfo`].
//!
//! ```no_run
//! # async fn run() -> Result<(), getfullyear::FetchError> {
//! let year = getfullyear::get_full_year().await?;
//! println!("Year: {}, Sponsored By: {}", year.year, year.sponsored_by);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod fetcher;
mod year;

pub use config::{FetcherConfig, DEFAULT_TIMEOUT, ENDPOINT, USER_AGENT};
pub use error::FetchError;
pub use fetcher::{get_full_year, YearFetcher};
pub use year::YearInfo;

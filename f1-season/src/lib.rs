//! Core types and derived views for the F1 season dashboard.
//!
//! This crate turns a flat list of race results into the two series the
//! dashboard charts: one driver's per-round results up to a cutoff round,
//! and every driver's running points total up to that same cutoff.
//!
//! # Architecture
//!
//! - [`record`]: `ResultRecord` and the immutable `Corpus`
//! - [`loader`]: tries candidate locations in order until one yields a JSON array
//! - [`season`]: `SeasonIndex`, built once after load (drivers, rounds, lookups)
//! - [`series`] / [`standings`]: pure builders over the index
//! - [`selection`] / [`dashboard`]: the selector state and the update protocol
//! - [`chart`]: payloads and the slot lifecycle handed to a rendering surface
//!
//! # Usage
//!
//! ```rust
//! use f1_season::{Corpus, ResultRecord, SeasonIndex};
//! use f1_season::standings::cumulative_standings;
//!
//! let corpus = Corpus::from(vec![
//!     ResultRecord::new(1, "Bahrain GP", "Max Verstappen", 25.0, 1),
//!     ResultRecord::new(1, "Bahrain GP", "Lando Norris", 18.0, 2),
//! ]);
//! let index = SeasonIndex::new(corpus);
//! let standings = cumulative_standings(&index, 1);
//! assert_eq!(standings.series[1].totals, vec![18.0]);
//! ```

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod loader;
pub mod record;
pub mod season;
pub mod selection;
pub mod series;
pub mod standings;
pub mod summary;

pub use dashboard::{Dashboard, DashboardView};
pub use error::{DashboardError, LoadError, SourceError};
pub use record::{Corpus, ResultRecord};
pub use season::{race_code, SeasonIndex};
pub use selection::Selection;

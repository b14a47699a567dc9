//! Synthetic fleet roster and driving-telemetry generation for
//! demonstration and load-testing purposes.
//!
//! Nothing here describes a real person: names come from fixed pools,
//! documents are plausible-looking random values, and positions are uniform
//! draws over a bounding box. The crate does no I/O; spreadsheet and
//! archive handling live in `frota-export`.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Building a complete roster of [`UserRecord`]s from scratch
//! - Completing an uploaded [`PartialUserRecord`] roster, filling only the
//!   missing fields
//! - Deriving a timestamp-ordered [`TelemetryEvent`] collection from a
//!   roster
//! - The individual field generators, usable on their own
//!
//! Every entry point takes a [`rand::Rng`], so a seeded generator yields
//! reproducible datasets.
//!
//! # Example
//!
//! ```
//! use frota_data::{build_roster, derive_telemetry};
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let roster = build_roster(&mut rng, 3);
//! assert_eq!(roster.len(), 3);
//!
//! let now = NaiveDate::from_ymd_opt(2025, 6, 1)
//!     .expect("valid date")
//!     .and_hms_opt(12, 0, 0)
//!     .expect("valid time");
//! let events = derive_telemetry(&mut rng, &roster, now);
//! assert!(events.len() >= 15 && events.len() <= 45);
//! ```

pub mod generator;
pub mod pools;
mod record;
mod roster;
mod telemetry;

pub use record::{PartialUserRecord, UserRecord};
pub use roster::{build_roster, complete_roster};
pub use telemetry::{
    EventKind, MAX_EVENTS_PER_USER, MIN_EVENTS_PER_USER, TelemetryEvent, derive_telemetry,
};

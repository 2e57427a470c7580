#![warn(missing_docs)]

//! # Natyakosh: a CSV-backed catalog of Marathi theatrical plays
//!
//! A library for the core of a play-catalog application: an ordered,
//! in-memory table of play records mirrored to a flat CSV file, conjunctive
//! optional filters over the table, and passphrase-gated in-place edits
//! resolved through stable synthetic record identities. Widget rendering,
//! authentication UI and process bootstrapping are the host's concern.
//!
//! ## Quick Start
//!
//! ### Opening and filtering the catalog
//!
//! ```no_run
//! use natyakosh::{Catalog, FilterCriteria};
//!
//! # fn main() -> natyakosh::Result<()> {
//! let catalog = Catalog::open("plays.csv")?;
//!
//! let criteria = FilterCriteria::new().genre("Drama").acts_exactly(3.0);
//! for play in criteria.apply(catalog.plays()) {
//!     println!("{} ({})", play.title_english, play.author_english);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Adding and editing records
//!
//! ```no_run
//! use natyakosh::{Catalog, Gatekeeper, Language, Play, PlayEdit};
//!
//! # fn main() -> natyakosh::Result<()> {
//! let mut catalog = Catalog::open("plays.csv")?
//!     .with_gate(Gatekeeper::new("naatak_adman"));
//!
//! let play = Play::builder()
//!     .title_marathi("नटसम्राट")
//!     .title_english("Natsamrat")
//!     .author_marathi("वि. वा. शिरवाडकर")
//!     .author_english("V. V. Shirwadkar")
//!     .acts(2.0)
//!     .genre("Drama")
//!     .build();
//! let id = play.id;
//! catalog.append(play, Some("naatak_adman"))?;
//!
//! let edit = PlayEdit::new().first_performance_year(1970);
//! catalog.update(id, &edit, Language::English, Some("naatak_adman"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Core record types (`Play`, `PlayId`, `PlayEdit`, `Language`)
//! - [`store`] — The `Catalog` store: load-or-seed, append, update, persist
//! - [`filter`] — Conjunctive, order-preserving filter criteria
//! - [`schema`] — Declared column set, defaults, and load-time coercion
//! - [`storage`] — Whole-table CSV read/write
//! - [`options`] — Distinct option values for choice widgets
//! - [`auth`] — Shared-passphrase write gate
//! - [`error`] — Error types and result type

pub mod auth;
pub mod error;
pub mod filter;
pub mod options;
pub mod record;
pub mod schema;
pub mod storage;
pub mod store;

pub use auth::Gatekeeper;
pub use error::{CatalogError, Result};
pub use filter::{ActsFilter, BoundedRange, FilterCriteria};
pub use record::{Language, Play, PlayBuilder, PlayEdit, PlayId};
pub use store::Catalog;

//! The catalog store: the authoritative in-memory table and its disk mirror.
//!
//! [`Catalog`] owns the ordered play table and the path of its backing CSV
//! file. It is an explicit store object passed by reference into whatever
//! presentation layer hosts it — there is no ambient global state. All I/O
//! is blocking whole-file read/write with no locking; two processes editing
//! the same file concurrently are last-write-wins, an accepted limitation.
//!
//! # Examples
//!
//! ```no_run
//! use natyakosh::{Catalog, Gatekeeper, Play, PlayEdit, Language};
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
//!     .build();
//! let id = play.id;
//! catalog.append(play, Some("naatak_adman"))?;
//!
//! let edit = PlayEdit::new().acts(2.0);
//! catalog.update(id, &edit, Language::English, Some("naatak_adman"))?;
//! # Ok(())
//! # }
//! ```

use crate::auth::Gatekeeper;
use crate::error::{CatalogError, Result};
use crate::record::{Language, Play, PlayEdit, PlayId};
use crate::storage;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// The play catalog: an ordered table of records mirrored to a CSV file.
///
/// Every successful mutation persists the full table before returning, so
/// the disk mirror is never older than the last acknowledged write. Failed
/// mutations leave both the table and the file unchanged.
#[derive(Debug)]
pub struct Catalog {
    path: PathBuf,
    plays: Vec<Play>,
    gate: Option<Gatekeeper>,
}

impl Catalog {
    /// Open the catalog at `path`, loading the backing file if it exists.
    ///
    /// When the file is absent, the catalog seeds one placeholder record and
    /// persists it immediately, so a fresh deployment starts with a visible,
    /// editable row.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed as
    /// CSV, or if the seed write fails. Malformed field *values* never
    /// fail the load; they coerce to missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            let plays = storage::read_table(&path)?;
            info!("opened catalog at {} ({} plays)", path.display(), plays.len());
            return Ok(Catalog { path, plays, gate: None });
        }

        let catalog = Catalog {
            path,
            plays: vec![Self::seed_play()],
            gate: None,
        };
        catalog.persist()?;
        info!("seeded new catalog at {}", catalog.path.display());
        Ok(catalog)
    }

    /// Configure the write gate.
    ///
    /// Without a gate the catalog is open-write; with one, both append and
    /// update require the matching passphrase.
    #[must_use]
    pub fn with_gate(mut self, gate: Gatekeeper) -> Self {
        self.gate = Some(gate);
        self
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full table, in insertion order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    /// Number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Resolve a record by its stable identity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RecordNotFound`] when no row carries the id.
    pub fn find(&self, id: PlayId) -> Result<&Play> {
        self.plays
            .iter()
            .find(|play| play.id == id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))
    }

    /// Look up a record by its English title.
    ///
    /// Display-layer compatibility only: the title is not unique and this
    /// deterministically returns the first row in table order when
    /// duplicates exist. Mutation paths resolve by [`PlayId`] instead.
    #[must_use]
    pub fn find_by_title(&self, title_english: &str) -> Option<&Play> {
        self.plays
            .iter()
            .find(|play| play.title_english == title_english)
    }

    /// Append a record to the end of the table and persist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`] on a gate mismatch,
    /// [`CatalogError::Validation`] when a mandatory field is empty, or an
    /// I/O error if persisting fails. On any error the table is unchanged.
    pub fn append(&mut self, play: Play, passphrase: Option<&str>) -> Result<()> {
        self.authorize(passphrase)?;
        play.validate()?;

        let title = play.title_english.clone();
        self.plays.push(play);
        if let Err(err) = self.persist() {
            // Roll the in-memory table back so a failed write leaves no
            // half-applied state.
            self.plays.pop();
            return Err(err);
        }
        info!("appended '{title}' ({} plays)", self.plays.len());
        Ok(())
    }

    /// Apply an edit to the record with the given identity and persist.
    ///
    /// The edit is all-or-nothing: every set field applies, or — on a gate
    /// mismatch, unknown id, or write failure — none does. Title/author
    /// fields route to the column pair of `language`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unauthorized`], [`CatalogError::RecordNotFound`],
    /// [`CatalogError::Validation`] (when the edit empties a mandatory
    /// field), or an I/O error from persisting.
    pub fn update(
        &mut self,
        id: PlayId,
        edit: &PlayEdit,
        language: Language,
        passphrase: Option<&str>,
    ) -> Result<()> {
        self.authorize(passphrase)?;
        let index = self
            .plays
            .iter()
            .position(|play| play.id == id)
            .ok_or_else(|| CatalogError::RecordNotFound(id.to_string()))?;

        let previous = self.plays[index].clone();
        edit.apply(&mut self.plays[index], language);
        if let Err(err) = self
            .plays[index]
            .validate()
            .and_then(|()| self.persist())
        {
            self.plays[index] = previous;
            return Err(err);
        }
        info!("updated '{}'", self.plays[index].title_english);
        Ok(())
    }

    /// Write the full table to the backing file, overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error when the path is unwritable; the error is surfaced
    /// to the caller, never retried.
    pub fn persist(&self) -> Result<()> {
        storage::write_table(&self.path, &self.plays)
    }

    fn authorize(&self, passphrase: Option<&str>) -> Result<()> {
        match &self.gate {
            None => Ok(()),
            Some(gate) => match passphrase {
                Some(candidate) if gate.verify(candidate) => Ok(()),
                _ => {
                    warn!("rejected write to {}", self.path.display());
                    Err(CatalogError::Unauthorized)
                },
            },
        }
    }

    fn seed_play() -> Play {
        Play::builder()
            .title_marathi("नमुना नाटक")
            .title_english("Sample Play")
            .author_marathi("अज्ञात")
            .author_english("Unknown")
            .acts(1.0)
            .genre("Drama")
            .build()
    }
}

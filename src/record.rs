//! Play record structures and operations.
//!
//! This module provides the core record types for working with catalog
//! entries:
//! - [`Play`] — One cataloged play and its attributes
//! - [`PlayId`] — Stable synthetic identifier used for resolution
//! - [`PlayBuilder`] — Fluent construction of new records
//! - [`PlayEdit`] — Partial update applied to a resolved record
//! - [`Language`] — Which bilingual column pair a view is displaying
//!
//! # Examples
//!
//! Create a record with the builder API:
//!
//! ```
//! use natyakosh::Play;
//!
//! let play = Play::builder()
//!     .title_marathi("नटसम्राट")
//!     .title_english("Natsamrat")
//!     .author_marathi("वि. वा. शिरवाडकर")
//!     .author_english("V. V. Shirwadkar")
//!     .acts(2.0)
//!     .genre("Drama")
//!     .first_performance_year(1970)
//!     .build();
//!
//! assert!(play.validate().is_ok());
//! ```

use crate::error::{CatalogError, Result};
use crate::schema::{self, columns, Row};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use uuid::Uuid;

/// Stable synthetic identifier for a [`Play`].
///
/// Generated once at record creation and never derived from user-editable
/// fields, so duplicate titles can never make resolution ambiguous. Persisted
/// in its own backing-file column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayId(Uuid);

impl PlayId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        PlayId(Uuid::new_v4())
    }

    /// Parse an identifier from its cell representation.
    ///
    /// Returns `None` for anything that is not a well-formed UUID; the load
    /// path then backfills a fresh one.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(PlayId)
    }
}

impl Default for PlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The bilingual column pair a display view is currently rendering.
///
/// Title and author edits route to the column pair of the active language
/// only, so editing in the English view never touches the Marathi columns
/// and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// The Marathi title/author columns.
    Marathi,
    /// The English title/author columns.
    English,
}

/// One cataloged play.
///
/// The four title/author fields are mandatory and non-empty at creation time
/// (enforced by [`Play::validate`], called on append); every other field may
/// be absent. Numeric fields use `None` as the missing marker, text fields
/// use the empty string, so substring and split operations never fail on
/// absent data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    /// Stable synthetic identifier, the only resolution key for edits.
    pub id: PlayId,
    /// Title in Marathi (mandatory).
    pub title_marathi: String,
    /// Title in English (mandatory).
    pub title_english: String,
    /// Author in Marathi (mandatory).
    pub author_marathi: String,
    /// Author in English (mandatory).
    pub author_english: String,
    /// Running length in minutes.
    pub length_minutes: Option<u32>,
    /// Number of acts; the catalog uses values like 1, 1.5, 2, 3, 4.
    pub acts: Option<f64>,
    /// Genre tags (stored semicolon-joined in the backing file).
    pub genres: SmallVec<[String; 4]>,
    /// First performance year, expected within [1500, 2024].
    pub first_performance_year: Option<i32>,
    /// Who submitted the record.
    pub submitted_by: String,
    /// Count of male characters.
    pub male_characters: Option<u32>,
    /// Count of female characters.
    pub female_characters: Option<u32>,
    /// Script page count.
    pub pages: Option<u32>,
    /// Property/rights tags (stored semicolon-joined).
    pub properties: SmallVec<[String; 4]>,
    /// Script availability note.
    pub availability: String,
    /// External media link.
    pub media_link: String,
    /// Who certified the record.
    pub certified_by: String,
}

impl Play {
    /// Create a builder for fluently constructing a play record.
    ///
    /// A fresh [`PlayId`] is generated; use [`PlayBuilder::id`] on load
    /// paths where an identity already exists.
    #[must_use]
    pub fn builder() -> PlayBuilder {
        PlayBuilder {
            play: Play {
                id: PlayId::new(),
                title_marathi: String::new(),
                title_english: String::new(),
                author_marathi: String::new(),
                author_english: String::new(),
                length_minutes: None,
                acts: None,
                genres: SmallVec::new(),
                first_performance_year: None,
                submitted_by: String::new(),
                male_characters: None,
                female_characters: None,
                pages: None,
                properties: SmallVec::new(),
                availability: String::new(),
                media_link: String::new(),
                certified_by: String::new(),
            },
        }
    }

    /// The title shown in the given language view.
    #[must_use]
    pub fn title(&self, language: Language) -> &str {
        match language {
            Language::Marathi => &self.title_marathi,
            Language::English => &self.title_english,
        }
    }

    /// The author shown in the given language view.
    #[must_use]
    pub fn author(&self, language: Language) -> &str {
        match language {
            Language::Marathi => &self.author_marathi,
            Language::English => &self.author_english,
        }
    }

    /// Check the mandatory-field invariant.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] naming the first of the four
    /// mandatory title/author fields that is empty.
    pub fn validate(&self) -> Result<()> {
        let mandatory = [
            (columns::TITLE_MARATHI, &self.title_marathi),
            (columns::TITLE_ENGLISH, &self.title_english),
            (columns::AUTHOR_MARATHI, &self.author_marathi),
            (columns::AUTHOR_ENGLISH, &self.author_english),
        ];
        for (name, value) in mandatory {
            if value.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "Mandatory field '{name}' is empty"
                )));
            }
        }
        Ok(())
    }

    /// Build a play from a migrated backing-file row.
    ///
    /// Numeric cells that do not parse become missing values; this mapping
    /// never fails. The row is expected to have passed [`schema::migrate`],
    /// so every declared column is present.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        let cell = |name: &str| row.get(name).map(String::as_str).unwrap_or("");
        let integer = |name: &str| schema::coerce_integer(cell(name));
        let count = |name: &str| {
            integer(name).and_then(|value| u32::try_from(value).ok())
        };

        Play {
            id: PlayId::parse(cell(columns::RECORD_ID)).unwrap_or_default(),
            title_marathi: cell(columns::TITLE_MARATHI).trim().to_string(),
            title_english: cell(columns::TITLE_ENGLISH).trim().to_string(),
            author_marathi: cell(columns::AUTHOR_MARATHI).trim().to_string(),
            author_english: cell(columns::AUTHOR_ENGLISH).trim().to_string(),
            length_minutes: count(columns::LENGTH_MINUTES),
            acts: schema::coerce_number(cell(columns::NUMBER_OF_ACTS)),
            genres: schema::split_tags(cell(columns::GENRE)),
            first_performance_year: integer(columns::FIRST_PERFORMANCE_YEAR)
                .and_then(|value| i32::try_from(value).ok()),
            submitted_by: cell(columns::SUBMITTED_BY).trim().to_string(),
            male_characters: count(columns::MALE_CHARACTERS),
            female_characters: count(columns::FEMALE_CHARACTERS),
            pages: count(columns::PAGES),
            properties: schema::split_tags(cell(columns::PROPERTY)),
            availability: cell(columns::AVAILABILITY).trim().to_string(),
            media_link: cell(columns::MEDIA_LINK).trim().to_string(),
            certified_by: cell(columns::CERTIFIED_BY).trim().to_string(),
        }
    }

    /// Serialize the play back to a backing-file row.
    ///
    /// Missing numeric values write as empty cells; acts with a zero
    /// fraction write without the trailing `.0` so integer-act plays
    /// round-trip as integers.
    #[must_use]
    pub fn to_row(&self) -> Row {
        fn cell<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        let acts = match self.acts {
            Some(value) if value.fract() == 0.0 => format!("{}", value as i64),
            Some(value) => value.to_string(),
            None => String::new(),
        };

        let mut row = Row::new();
        row.insert(columns::RECORD_ID.to_string(), self.id.to_string());
        row.insert(columns::TITLE_MARATHI.to_string(), self.title_marathi.clone());
        row.insert(columns::TITLE_ENGLISH.to_string(), self.title_english.clone());
        row.insert(columns::AUTHOR_MARATHI.to_string(), self.author_marathi.clone());
        row.insert(columns::AUTHOR_ENGLISH.to_string(), self.author_english.clone());
        row.insert(columns::LENGTH_MINUTES.to_string(), cell(self.length_minutes));
        row.insert(columns::NUMBER_OF_ACTS.to_string(), acts);
        row.insert(columns::GENRE.to_string(), schema::join_tags(&self.genres));
        row.insert(
            columns::FIRST_PERFORMANCE_YEAR.to_string(),
            cell(self.first_performance_year),
        );
        row.insert(columns::SUBMITTED_BY.to_string(), self.submitted_by.clone());
        row.insert(columns::MALE_CHARACTERS.to_string(), cell(self.male_characters));
        row.insert(
            columns::FEMALE_CHARACTERS.to_string(),
            cell(self.female_characters),
        );
        row.insert(columns::PAGES.to_string(), cell(self.pages));
        row.insert(columns::PROPERTY.to_string(), schema::join_tags(&self.properties));
        row.insert(columns::AVAILABILITY.to_string(), self.availability.clone());
        row.insert(columns::MEDIA_LINK.to_string(), self.media_link.clone());
        row.insert(columns::CERTIFIED_BY.to_string(), self.certified_by.clone());
        row
    }
}

/// Fluent builder for [`Play`] records.
///
/// Builds unconditionally; the mandatory-field invariant is checked by
/// [`Play::validate`] when the record enters the store, so a host can
/// assemble a record incrementally from form state first.
#[derive(Debug)]
pub struct PlayBuilder {
    play: Play,
}

impl PlayBuilder {
    /// Use a caller-provided identity instead of the generated one.
    ///
    /// Load paths use this where an identity already exists in the file.
    #[must_use]
    pub fn id(mut self, id: PlayId) -> Self {
        self.play.id = id;
        self
    }

    /// Set the Marathi title.
    #[must_use]
    pub fn title_marathi(mut self, title: impl Into<String>) -> Self {
        self.play.title_marathi = title.into();
        self
    }

    /// Set the English title.
    #[must_use]
    pub fn title_english(mut self, title: impl Into<String>) -> Self {
        self.play.title_english = title.into();
        self
    }

    /// Set the Marathi author.
    #[must_use]
    pub fn author_marathi(mut self, author: impl Into<String>) -> Self {
        self.play.author_marathi = author.into();
        self
    }

    /// Set the English author.
    #[must_use]
    pub fn author_english(mut self, author: impl Into<String>) -> Self {
        self.play.author_english = author.into();
        self
    }

    /// Set the running length in minutes.
    #[must_use]
    pub fn length_minutes(mut self, minutes: u32) -> Self {
        self.play.length_minutes = Some(minutes);
        self
    }

    /// Set the number of acts.
    #[must_use]
    pub fn acts(mut self, acts: f64) -> Self {
        self.play.acts = Some(acts);
        self
    }

    /// Add one genre tag. Multiple calls accumulate.
    #[must_use]
    pub fn genre(mut self, tag: impl Into<String>) -> Self {
        self.play.genres.push(tag.into());
        self
    }

    /// Set the first performance year.
    #[must_use]
    pub fn first_performance_year(mut self, year: i32) -> Self {
        self.play.first_performance_year = Some(year);
        self
    }

    /// Set the submitter name.
    #[must_use]
    pub fn submitted_by(mut self, name: impl Into<String>) -> Self {
        self.play.submitted_by = name.into();
        self
    }

    /// Set the male character count.
    #[must_use]
    pub fn male_characters(mut self, count: u32) -> Self {
        self.play.male_characters = Some(count);
        self
    }

    /// Set the female character count.
    #[must_use]
    pub fn female_characters(mut self, count: u32) -> Self {
        self.play.female_characters = Some(count);
        self
    }

    /// Set the script page count.
    #[must_use]
    pub fn pages(mut self, pages: u32) -> Self {
        self.play.pages = Some(pages);
        self
    }

    /// Add one property/rights tag. Multiple calls accumulate.
    #[must_use]
    pub fn property(mut self, tag: impl Into<String>) -> Self {
        self.play.properties.push(tag.into());
        self
    }

    /// Set the availability note.
    #[must_use]
    pub fn availability(mut self, availability: impl Into<String>) -> Self {
        self.play.availability = availability.into();
        self
    }

    /// Set the external media link.
    #[must_use]
    pub fn media_link(mut self, link: impl Into<String>) -> Self {
        self.play.media_link = link.into();
        self
    }

    /// Set the certifier name.
    #[must_use]
    pub fn certified_by(mut self, name: impl Into<String>) -> Self {
        self.play.certified_by = name.into();
        self
    }

    /// Build and return the record.
    #[must_use]
    pub fn build(self) -> Play {
        self.play
    }
}

/// A partial update to one resolved play record.
///
/// Every field is optional; only set fields apply. Title and author are
/// language-neutral here — [`PlayEdit::apply`] routes them to the column pair
/// of the view's active [`Language`].
#[derive(Debug, Clone, Default)]
pub struct PlayEdit {
    /// New title for the active language's title column.
    pub title: Option<String>,
    /// New author for the active language's author column.
    pub author: Option<String>,
    /// New running length in minutes.
    pub length_minutes: Option<u32>,
    /// New number of acts.
    pub acts: Option<f64>,
    /// Replacement genre tag set.
    pub genres: Option<Vec<String>>,
    /// New first performance year.
    pub first_performance_year: Option<i32>,
    /// New male character count.
    pub male_characters: Option<u32>,
    /// New female character count.
    pub female_characters: Option<u32>,
    /// New page count.
    pub pages: Option<u32>,
    /// Replacement property tag set.
    pub properties: Option<Vec<String>>,
    /// New availability note.
    pub availability: Option<String>,
    /// New media link.
    pub media_link: Option<String>,
    /// New certifier name.
    pub certified_by: Option<String>,
}

impl PlayEdit {
    /// Create an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title for the active language.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new author for the active language.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set a new running length.
    #[must_use]
    pub fn length_minutes(mut self, minutes: u32) -> Self {
        self.length_minutes = Some(minutes);
        self
    }

    /// Set a new number of acts.
    #[must_use]
    pub fn acts(mut self, acts: f64) -> Self {
        self.acts = Some(acts);
        self
    }

    /// Replace the genre tag set.
    #[must_use]
    pub fn genres<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set a new first performance year.
    #[must_use]
    pub fn first_performance_year(mut self, year: i32) -> Self {
        self.first_performance_year = Some(year);
        self
    }

    /// Set a new male character count.
    #[must_use]
    pub fn male_characters(mut self, count: u32) -> Self {
        self.male_characters = Some(count);
        self
    }

    /// Set a new female character count.
    #[must_use]
    pub fn female_characters(mut self, count: u32) -> Self {
        self.female_characters = Some(count);
        self
    }

    /// Set a new page count.
    #[must_use]
    pub fn pages(mut self, pages: u32) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Replace the property tag set.
    #[must_use]
    pub fn properties<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Set a new availability note.
    #[must_use]
    pub fn availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Set a new media link.
    #[must_use]
    pub fn media_link(mut self, link: impl Into<String>) -> Self {
        self.media_link = Some(link.into());
        self
    }

    /// Set a new certifier name.
    #[must_use]
    pub fn certified_by(mut self, name: impl Into<String>) -> Self {
        self.certified_by = Some(name.into());
        self
    }

    /// True when no field is set; applying is a no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.length_minutes.is_none()
            && self.acts.is_none()
            && self.genres.is_none()
            && self.first_performance_year.is_none()
            && self.male_characters.is_none()
            && self.female_characters.is_none()
            && self.pages.is_none()
            && self.properties.is_none()
            && self.availability.is_none()
            && self.media_link.is_none()
            && self.certified_by.is_none()
    }

    /// Apply every set field to the play.
    ///
    /// Title and author write to the column pair of `language` only; the
    /// other language's columns are untouched. The record's [`PlayId`] is
    /// not editable.
    pub fn apply(&self, play: &mut Play, language: Language) {
        if let Some(ref title) = self.title {
            match language {
                Language::Marathi => play.title_marathi = title.clone(),
                Language::English => play.title_english = title.clone(),
            }
        }
        if let Some(ref author) = self.author {
            match language {
                Language::Marathi => play.author_marathi = author.clone(),
                Language::English => play.author_english = author.clone(),
            }
        }
        if let Some(minutes) = self.length_minutes {
            play.length_minutes = Some(minutes);
        }
        if let Some(acts) = self.acts {
            play.acts = Some(acts);
        }
        if let Some(ref genres) = self.genres {
            play.genres = genres.iter().cloned().collect();
        }
        if let Some(year) = self.first_performance_year {
            play.first_performance_year = Some(year);
        }
        if let Some(count) = self.male_characters {
            play.male_characters = Some(count);
        }
        if let Some(count) = self.female_characters {
            play.female_characters = Some(count);
        }
        if let Some(pages) = self.pages {
            play.pages = Some(pages);
        }
        if let Some(ref properties) = self.properties {
            play.properties = properties.iter().cloned().collect();
        }
        if let Some(ref availability) = self.availability {
            play.availability = availability.clone();
        }
        if let Some(ref link) = self.media_link {
            play.media_link = link.clone();
        }
        if let Some(ref name) = self.certified_by {
            play.certified_by = name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn sample_play() -> Play {
        Play::builder()
            .title_marathi("नाटक १")
            .title_english("Play 1")
            .author_marathi("लेखक")
            .author_english("Author")
            .acts(3.0)
            .genre("Drama")
            .first_performance_year(1987)
            .male_characters(4)
            .female_characters(2)
            .build()
    }

    #[test]
    fn test_builder_generates_id() {
        let first = sample_play();
        let second = sample_play();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(sample_play().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_author_marathi() {
        let play = Play::builder()
            .title_marathi("नाटक १")
            .title_english("Play 1")
            .author_english("Author")
            .build();

        let err = play.validate().unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(err.to_string().contains(columns::AUTHOR_MARATHI));
    }

    #[test]
    fn test_validate_rejects_whitespace_title() {
        let play = Play::builder()
            .title_marathi("   ")
            .title_english("Play 1")
            .author_marathi("लेखक")
            .author_english("Author")
            .build();

        assert!(play.validate().is_err());
    }

    #[test]
    fn test_row_roundtrip() {
        let play = sample_play();
        let row = play.to_row();
        let reloaded = Play::from_row(&row);
        assert_eq!(reloaded, play);
    }

    #[test]
    fn test_to_row_writes_integer_acts_without_fraction() {
        let row = sample_play().to_row();
        assert_eq!(row[columns::NUMBER_OF_ACTS], "3");

        let mut play = sample_play();
        play.acts = Some(1.5);
        assert_eq!(play.to_row()[columns::NUMBER_OF_ACTS], "1.5");
    }

    #[test]
    fn test_from_row_coerces_bad_numerics_to_missing() {
        let mut row = sample_play().to_row();
        row.insert(columns::NUMBER_OF_ACTS.to_string(), "two".to_string());
        row.insert(columns::PAGES.to_string(), "n/a".to_string());

        let play = Play::from_row(&row);
        assert_eq!(play.acts, None);
        assert_eq!(play.pages, None);
    }

    #[test]
    fn test_from_row_backfilled_id_parses() {
        let mut row = sample_play().to_row();
        row.insert(columns::RECORD_ID.to_string(), "not-a-uuid".to_string());

        // A malformed id cell falls back to a fresh identity.
        let play = Play::from_row(&row);
        assert_ne!(play.id.to_string(), "not-a-uuid");
    }

    #[test]
    fn test_edit_routes_title_by_language() {
        let mut play = sample_play();
        let edit = PlayEdit::new().title("Play One");

        edit.apply(&mut play, Language::English);
        assert_eq!(play.title_english, "Play One");
        assert_eq!(play.title_marathi, "नाटक १");

        let edit = PlayEdit::new().title("नाटक एक");
        edit.apply(&mut play, Language::Marathi);
        assert_eq!(play.title_marathi, "नाटक एक");
        assert_eq!(play.title_english, "Play One");
    }

    #[test]
    fn test_edit_applies_only_set_fields() {
        let mut play = sample_play();
        let edit = PlayEdit::new().acts(2.0).genres(["Comedy"]);

        edit.apply(&mut play, Language::English);
        assert_eq!(play.acts, Some(2.0));
        assert_eq!(play.genres.as_slice(), ["Comedy"]);
        assert_eq!(play.first_performance_year, Some(1987));
        assert_eq!(play.male_characters, Some(4));
    }

    #[test]
    fn test_empty_edit_is_noop() {
        let mut play = sample_play();
        let before = play.clone();
        let edit = PlayEdit::new();

        assert!(edit.is_empty());
        edit.apply(&mut play, Language::Marathi);
        assert_eq!(play, before);
    }

    #[test]
    fn test_genre_tags_roundtrip_semicolon_cell() {
        let play = Play::builder()
            .title_marathi("त")
            .title_english("T")
            .author_marathi("ल")
            .author_english("A")
            .genre("Drama")
            .genre("Historical")
            .build();

        let row = play.to_row();
        assert_eq!(row[columns::GENRE], "Drama; Historical");
        assert_eq!(
            schema::split_tags(&row[columns::GENRE]).as_slice(),
            ["Drama", "Historical"]
        );
    }
}

//! Conjunctive filter criteria over the play table.
//!
//! This module provides [`FilterCriteria`], a builder-style set of
//! independently optional predicates applied as a logical AND over the full
//! table. Filtering never reorders rows: retained rows keep their relative
//! order from the underlying table, and applying the same criteria twice
//! yields the same row set as applying it once.
//!
//! # Examples
//!
//! ```
//! use natyakosh::{FilterCriteria, Language};
//!
//! let criteria = FilterCriteria::new()
//!     .genre("Drama")
//!     .acts_exactly(3.0)
//!     .author_contains("Shirwadkar")
//!     .language(Language::English)
//!     .year_between(1950, 2000);
//! assert!(!criteria.is_identity());
//! ```
//!
//! An empty criteria set is the identity filter:
//!
//! ```
//! use natyakosh::FilterCriteria;
//!
//! let criteria = FilterCriteria::new();
//! assert!(criteria.is_identity());
//! ```

use crate::record::{Language, Play};

/// Filter on the number-of-acts field.
///
/// An explicit tri-state instead of a numeric sentinel: earlier variants of
/// the catalog overloaded 0 ("missing") and -1 ("show all") onto the acts
/// value itself, which this representation replaces.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ActsFilter {
    /// No acts predicate; every row passes.
    #[default]
    Any,
    /// Keep only rows whose acts value is missing.
    Missing,
    /// Keep only rows whose acts value equals this exactly.
    Exactly(f64),
}

impl ActsFilter {
    fn matches(self, acts: Option<f64>) -> bool {
        match self {
            ActsFilter::Any => true,
            ActsFilter::Missing => acts.is_none(),
            ActsFilter::Exactly(wanted) => acts == Some(wanted),
        }
    }
}

/// An inclusive double-bounded range predicate.
///
/// Rows with a missing value are excluded whenever the predicate is present,
/// even when the bounds span every observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRange<T> {
    /// Lower bound, inclusive.
    pub min: T,
    /// Upper bound, inclusive.
    pub max: T,
}

impl<T: PartialOrd + Copy> BoundedRange<T> {
    /// Create a range; bounds are taken as given, inclusive on both ends.
    #[must_use]
    pub fn new(min: T, max: T) -> Self {
        BoundedRange { min, max }
    }

    /// Whether a present value falls within the range.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The set of optional predicates applied conjunctively to the table.
///
/// Each predicate defaults to absent; an absent predicate passes every row.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Selected genre tags; a row matches when the intersection with its
    /// own tag set is non-empty. Empty selection passes every row.
    pub genres: Vec<String>,
    /// Acts predicate.
    pub acts: ActsFilter,
    /// Case-insensitive substring matched against the author column of
    /// [`FilterCriteria::language`].
    pub author: Option<String>,
    /// Which language's author column the author predicate reads.
    pub language: Option<Language>,
    /// Inclusive first-performance-year range.
    pub year: Option<BoundedRange<i32>>,
    /// Inclusive male-character-count range.
    pub male_characters: Option<BoundedRange<u32>>,
    /// Inclusive female-character-count range.
    pub female_characters: Option<BoundedRange<u32>>,
}

impl FilterCriteria {
    /// Create criteria that match every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one genre tag to the selection. Multiple calls accumulate.
    #[must_use]
    pub fn genre(mut self, tag: impl Into<String>) -> Self {
        self.genres.push(tag.into());
        self
    }

    /// Add several genre tags to the selection.
    #[must_use]
    pub fn genres<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Keep only rows whose acts value equals `acts` exactly.
    #[must_use]
    pub fn acts_exactly(mut self, acts: f64) -> Self {
        self.acts = ActsFilter::Exactly(acts);
        self
    }

    /// Keep only rows whose acts value is missing.
    #[must_use]
    pub fn acts_missing(mut self) -> Self {
        self.acts = ActsFilter::Missing;
        self
    }

    /// Keep only rows whose author (in the active language) contains
    /// `needle`, case-insensitively.
    #[must_use]
    pub fn author_contains(mut self, needle: impl Into<String>) -> Self {
        self.author = Some(needle.into());
        self
    }

    /// Set the language whose author column the author predicate reads.
    ///
    /// Defaults to English when an author predicate is present without an
    /// explicit language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Keep only rows with a first-performance year in `[min, max]`.
    ///
    /// Rows with no year are excluded, even at the observed global bounds.
    #[must_use]
    pub fn year_between(mut self, min: i32, max: i32) -> Self {
        self.year = Some(BoundedRange::new(min, max));
        self
    }

    /// Keep only rows with a male character count in `[min, max]`.
    #[must_use]
    pub fn male_between(mut self, min: u32, max: u32) -> Self {
        self.male_characters = Some(BoundedRange::new(min, max));
        self
    }

    /// Keep only rows with a female character count in `[min, max]`.
    #[must_use]
    pub fn female_between(mut self, min: u32, max: u32) -> Self {
        self.female_characters = Some(BoundedRange::new(min, max));
        self
    }

    /// True when no predicate is set, i.e. `apply` returns every row.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.genres.is_empty()
            && self.acts == ActsFilter::Any
            && self.author.is_none()
            && self.year.is_none()
            && self.male_characters.is_none()
            && self.female_characters.is_none()
    }

    /// Check whether one play passes every set predicate.
    #[must_use]
    pub fn matches(&self, play: &Play) -> bool {
        if !self.genres.is_empty() {
            let selected = self
                .genres
                .iter()
                .any(|tag| play.genres.iter().any(|own| own == tag));
            if !selected {
                return false;
            }
        }

        if !self.acts.matches(play.acts) {
            return false;
        }

        if let Some(ref needle) = self.author {
            let language = self.language.unwrap_or(Language::English);
            let haystack = play.author(language).to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(ref range) = self.year {
            match play.first_performance_year {
                Some(year) if range.contains(year) => {},
                _ => return false,
            }
        }

        if let Some(ref range) = self.male_characters {
            match play.male_characters {
                Some(count) if range.contains(count) => {},
                _ => return false,
            }
        }

        if let Some(ref range) = self.female_characters {
            match play.female_characters {
                Some(count) if range.contains(count) => {},
                _ => return false,
            }
        }

        true
    }

    /// Reduce the table to the rows passing every predicate.
    ///
    /// Relative order is preserved from the input slice.
    #[must_use]
    pub fn apply<'a>(&self, plays: &'a [Play]) -> Vec<&'a Play> {
        plays.iter().filter(|play| self.matches(play)).collect()
    }
}

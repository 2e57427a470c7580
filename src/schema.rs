//! The declared backing-file schema and load-time normalization.
//!
//! The catalog's CSV file has grown columns over its life, so older files may
//! lack columns the current code expects. Rather than patching individual
//! fields ad hoc, this module declares the current column set once — name,
//! value kind, and default — and applies it as a single migration step when a
//! row is loaded: any declared column absent from the row receives its
//! default.
//!
//! Normalization is never-fail by design. A numeric column holding an
//! unparseable value coerces to the missing marker ([`None`]), and a missing
//! text column coerces to the empty string, so downstream text operations
//! (contains, split) always have a value to work with.

use indexmap::IndexMap;
use smallvec::SmallVec;
use uuid::Uuid;

/// A loaded CSV row: column name to raw cell text, in column order.
pub type Row = IndexMap<String, String>;

/// The value kind a column is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Synthetic record identifier; an empty cell is backfilled with a
    /// freshly generated UUID during migration.
    Id,
    /// Free text; missing coerces to the empty string.
    Text,
    /// Whole number; unparseable coerces to missing.
    Integer,
    /// Real number (the acts column allows 1.5); unparseable coerces to
    /// missing.
    Number,
}

/// One declared column of the backing file.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Header name as written to the CSV file.
    pub name: &'static str,
    /// Expected value kind.
    pub kind: ColumnKind,
    /// Default cell text for rows loaded without this column.
    pub default: &'static str,
}

/// Column header names, referenced by the record mapping code.
pub mod columns {
    /// Synthetic record identifier.
    pub const RECORD_ID: &str = "Record ID";
    /// Play title in Marathi (mandatory).
    pub const TITLE_MARATHI: &str = "Title_Marathi";
    /// Play title in English (mandatory).
    pub const TITLE_ENGLISH: &str = "Title_English";
    /// Author name in Marathi (mandatory).
    pub const AUTHOR_MARATHI: &str = "Author_Marathi";
    /// Author name in English (mandatory).
    pub const AUTHOR_ENGLISH: &str = "Author_English";
    /// Running length in minutes.
    pub const LENGTH_MINUTES: &str = "Length (minutes)";
    /// Number of acts; 1.5 is a valid catalog value.
    pub const NUMBER_OF_ACTS: &str = "Number of Acts";
    /// Semicolon-joined genre tags.
    pub const GENRE: &str = "Genre";
    /// First performance year.
    pub const FIRST_PERFORMANCE_YEAR: &str = "First Performance Year";
    /// Name of the person who submitted the record.
    pub const SUBMITTED_BY: &str = "Submitted By";
    /// Count of male characters.
    pub const MALE_CHARACTERS: &str = "Male Characters";
    /// Count of female characters.
    pub const FEMALE_CHARACTERS: &str = "Female Characters";
    /// Script page count.
    pub const PAGES: &str = "Pages";
    /// Semicolon-joined property/rights tags.
    pub const PROPERTY: &str = "Property";
    /// Script availability note.
    pub const AVAILABILITY: &str = "Availability";
    /// External media link.
    pub const MEDIA_LINK: &str = "Media Link";
    /// Name of the certifier.
    pub const CERTIFIED_BY: &str = "Certified By";
}

/// The current declared column set, in file order.
pub const COLUMNS: &[Column] = &[
    Column { name: columns::RECORD_ID, kind: ColumnKind::Id, default: "" },
    Column { name: columns::TITLE_MARATHI, kind: ColumnKind::Text, default: "" },
    Column { name: columns::TITLE_ENGLISH, kind: ColumnKind::Text, default: "" },
    Column { name: columns::AUTHOR_MARATHI, kind: ColumnKind::Text, default: "" },
    Column { name: columns::AUTHOR_ENGLISH, kind: ColumnKind::Text, default: "" },
    Column { name: columns::LENGTH_MINUTES, kind: ColumnKind::Integer, default: "" },
    Column { name: columns::NUMBER_OF_ACTS, kind: ColumnKind::Number, default: "" },
    Column { name: columns::GENRE, kind: ColumnKind::Text, default: "" },
    Column { name: columns::FIRST_PERFORMANCE_YEAR, kind: ColumnKind::Integer, default: "" },
    Column { name: columns::SUBMITTED_BY, kind: ColumnKind::Text, default: "" },
    Column { name: columns::MALE_CHARACTERS, kind: ColumnKind::Integer, default: "" },
    Column { name: columns::FEMALE_CHARACTERS, kind: ColumnKind::Integer, default: "" },
    Column { name: columns::PAGES, kind: ColumnKind::Integer, default: "" },
    Column { name: columns::PROPERTY, kind: ColumnKind::Text, default: "" },
    Column { name: columns::AVAILABILITY, kind: ColumnKind::Text, default: "" },
    Column { name: columns::MEDIA_LINK, kind: ColumnKind::Text, default: "" },
    Column { name: columns::CERTIFIED_BY, kind: ColumnKind::Text, default: "" },
];

/// Apply the declared schema to a loaded row.
///
/// Every declared column absent from the row is inserted with its default.
/// An [`ColumnKind::Id`] column that is absent or empty is backfilled with a
/// freshly generated identifier, so legacy files predating the id column
/// acquire stable identities on first load.
pub fn migrate(row: &mut Row) {
    for column in COLUMNS {
        match column.kind {
            ColumnKind::Id => {
                let missing = row
                    .get(column.name)
                    .map_or(true, |value| value.trim().is_empty());
                if missing {
                    row.insert(column.name.to_string(), Uuid::new_v4().to_string());
                }
            },
            _ => {
                if !row.contains_key(column.name) {
                    row.insert(column.name.to_string(), column.default.to_string());
                }
            },
        }
    }
}

/// Coerce a raw cell to a whole number, or the missing marker.
///
/// Accepts integer text as well as float text with a zero fraction
/// (`"3.0"` loads as 3 — spreadsheet exports write integers that way).
/// Anything else, including the empty cell, is missing.
#[must_use]
pub fn coerce_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => Some(value as i64),
        _ => None,
    }
}

/// Coerce a raw cell to a real number, or the missing marker.
#[must_use]
pub fn coerce_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Split a semicolon-joined cell into its trimmed, non-empty tags.
#[must_use]
pub fn split_tags(raw: &str) -> SmallVec<[String; 4]> {
    raw.split(';')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a tag set back into the semicolon-joined cell representation.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join("; ")
}

//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Row identifiers are
//! database-assigned `BIGSERIAL` values; subjects are keyed by a slug.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper over a database row id
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_raw(7);
/// assert_eq!(id.get(), 7);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw row id
    pub const fn from_raw(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying row id
    pub const fn get(&self) -> i64 {
        self.value
    }

    /// Ids handed out by Postgres sequences start at 1
    pub const fn is_valid(&self) -> bool {
        self.value > 0
    }
}

// Manual impls so that markers need no derives.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;
    pub struct Course;
    pub struct Level;
    pub struct Question;
    pub struct Puzzle;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CourseId = Id<markers::Course>;
pub type LevelId = Id<markers::Level>;
pub type QuestionId = Id<markers::Question>;
pub type PuzzleId = Id<markers::Puzzle>;

// ============================================================================
// SubjectId
// ============================================================================

const SUBJECT_ID_MAX_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectIdError {
    #[error("subject_id is required")]
    Empty,
    #[error("subject_id must be at most {max} characters")]
    TooLong { max: usize },
}

/// Subject slug such as `science` or `biology`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SubjectIdError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SubjectIdError::Empty);
        }
        if trimmed.chars().count() > SUBJECT_ID_MAX_LEN {
            return Err(SubjectIdError::TooLong {
                max: SUBJECT_ID_MAX_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SubjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SubjectId::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrips_as_plain_integer() {
        let id = LevelId::from_raw(12);
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        let back: LevelId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_validity() {
        assert!(UserId::from_raw(1).is_valid());
        assert!(!UserId::from_raw(0).is_valid());
        assert!(!UserId::from_raw(-3).is_valid());
    }

    #[test]
    fn test_subject_id_is_trimmed() {
        let id = SubjectId::new("  biology ").unwrap();
        assert_eq!(id.as_str(), "biology");
    }

    #[test]
    fn test_subject_id_rejects_blank_and_long() {
        assert_eq!(SubjectId::new("   "), Err(SubjectIdError::Empty));
        assert!(matches!(
            SubjectId::new("x".repeat(65)),
            Err(SubjectIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_subject_id_deserialize_validates() {
        assert!(serde_json::from_str::<SubjectId>("\"\"").is_err());
        let id: SubjectId = serde_json::from_str("\"history\"").unwrap();
        assert_eq!(id.to_string(), "history");
    }
}

//! Application Configuration

use kernel::id::{SubjectId, SubjectIdError};

/// Subjects reported when progress is fetched without a subject filter
pub const DEFAULT_SUBJECTS: [&str; 3] = ["science", "biology", "history"];

#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub known_subjects: Vec<SubjectId>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            known_subjects: DEFAULT_SUBJECTS
                .iter()
                .filter_map(|s| SubjectId::new(s).ok())
                .collect(),
        }
    }
}

impl ProgressConfig {
    /// Parse a comma-separated subject list; blank entries are skipped
    ///
    /// ```
    /// use progress::ProgressConfig;
    ///
    /// let config = ProgressConfig::from_list("maths, art,,").unwrap();
    /// assert_eq!(config.known_subjects.len(), 2);
    /// ```
    pub fn from_list(list: &str) -> Result<Self, SubjectIdError> {
        let known_subjects = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(SubjectId::new)
            .collect::<Result<Vec<_>, _>>()?;

        if known_subjects.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self { known_subjects })
    }
}

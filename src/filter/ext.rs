use crate::errors::AppError;

/// Case-insensitive suffix filter over entry names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from one or more suffixes.
    ///
    /// Suffixes are trimmed and lower-cased. No leading dot is inserted, so
    /// `png` also matches `apng`.
    pub fn new<I, S>(suffixes: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.as_ref().trim().to_lowercase();
            if suffix.is_empty() {
                return Err(AppError::InvalidArgument(
                    "extension must not be empty".to_string(),
                ));
            }
            if !normalized.contains(&suffix) {
                normalized.push(suffix);
            }
        }

        if normalized.is_empty() {
            return Err(AppError::InvalidArgument(
                "at least one extension is required".to_string(),
            ));
        }

        Ok(Self {
            suffixes: normalized,
        })
    }

    /// Parse a comma-separated list of suffixes (e.g., `.hdr,.png`)
    pub fn parse(ext_string: &str) -> Result<Self, AppError> {
        Self::new(ext_string.split(','))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

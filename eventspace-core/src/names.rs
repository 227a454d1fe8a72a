//! Space name arguments.
//!
//! Every operation that takes space names accepts either a single name or an
//! ordered sequence of names. [`Names`] carries both shapes and normalizes
//! them to one ordered list before any registry sees them.

/// One space name, or an ordered sequence of them.
///
/// Built through `From`, so call sites can pass `"intro"`, `vec!["a", "b"]`
/// or `["a", "b"]` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Names {
    /// A single name.
    One(String),
    /// An ordered sequence of names. May be empty.
    Many(Vec<String>),
}

impl Names {
    /// Normalizes to an ordered list, rejecting blank names.
    ///
    /// Validation covers the whole list before anything is returned, so a
    /// caller that only mutates on `Ok` never applies part of a bad call.
    pub fn validate(self) -> Result<Vec<String>, crate::UsageError> {
        let names = self.into_vec();
        if let Some(bad) = names.iter().find(|name| name.trim().is_empty()) {
            return Err(crate::UsageError::InvalidSpaceName(bad.clone()));
        }
        Ok(names)
    }

    /// Normalizes to an ordered list without validation.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Names::One(name) => vec![name],
            Names::Many(names) => names,
        }
    }

    /// Number of names carried.
    pub fn len(&self) -> usize {
        match self {
            Names::One(_) => 1,
            Names::Many(names) => names.len(),
        }
    }

    /// Whether no names are carried.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for Names {
    fn from(name: &str) -> Self {
        Names::One(name.to_owned())
    }
}

impl From<String> for Names {
    fn from(name: String) -> Self {
        Names::One(name)
    }
}

impl From<&String> for Names {
    fn from(name: &String) -> Self {
        Names::One(name.clone())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Names::Many(names)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Names::Many(names.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Names {
    fn from(names: &[&str]) -> Self {
        Names::Many(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Names {
    fn from(names: [&str; N]) -> Self {
        Names::Many(names.into_iter().map(str::to_owned).collect())
    }
}

//! Call-site records captured into an error's stack.

use serde::{Deserialize, Serialize};

/// Function name recorded when a frame cannot be symbolized.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

/// One step in a captured execution stack.
///
/// # Examples
///
/// ```
/// use errtrail::Location;
///
/// let location = Location::new("app::config::load", "src/config.rs", 42);
/// assert_eq!(location.to_string(), "app::config::load [src/config.rs:42]");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{} [{}:{}]", function, file, line)]
#[serde(deny_unknown_fields)]
pub struct Location {
    /// Demangled function path, without the trailing symbol hash.
    function: String,
    /// Source file the frame belongs to.
    file: String,
    /// Line number within `file`.
    line: u32,
}

impl Location {
    /// Creates a location record.
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Returns a copy with the first matching prefix removed from `file`.
    ///
    /// Prefixes are tried in order; the stored location is left untouched.
    ///
    /// ```
    /// use errtrail::Location;
    ///
    /// let location = Location::new("app::run", "/home/ci/app/src/main.rs", 7);
    /// let short = location.strip_prefixes(&["/home/ci/app/".to_string()]);
    /// assert_eq!(short.file(), "src/main.rs");
    /// assert_eq!(location.file(), "/home/ci/app/src/main.rs");
    /// ```
    pub fn strip_prefixes(&self, prefixes: &[String]) -> Location {
        let file = prefixes
            .iter()
            .find_map(|prefix| self.file.strip_prefix(prefix.as_str()))
            .unwrap_or(&self.file);
        Location {
            function: self.function.clone(),
            file: file.to_string(),
            line: self.line,
        }
    }

    /// Returns a copy whose `file` is reduced to its final path component.
    pub fn base_name(&self) -> Location {
        let file = self
            .file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file);
        Location {
            function: self.function.clone(),
            file: file.to_string(),
            line: self.line,
        }
    }
}

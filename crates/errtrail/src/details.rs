//! Multi-line diagnostic rendering for logs.

use crate::{DetailsConfig, Location, TrailError};
use std::error::Error as StdError;

/// Renders an error's cause, mask and stack for internal logging.
///
/// Output for a structured error:
///
/// ```text
/// [ERROR] <root cause message>
/// [MASK ERROR] <mask message>
/// [STACK]:
/// <function> [<file>:<line>]
/// ```
///
/// The mask line is omitted when no mask is set on the outer node or when its
/// text equals the root cause text; the stack section is omitted when nothing was captured.
///
/// # Examples
///
/// ```
/// use errtrail::{Details, DetailsConfig, TrailError};
///
/// let err = TrailError::new("disk full");
/// let text = Details::new(DetailsConfig::builder().max_lines(2).base_name_only(true).build())
///     .render(Some(&err));
/// assert!(text.starts_with("[ERROR] disk full"));
/// ```
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct Details {
    /// Rendering options
    config: DetailsConfig,
}

impl Details {
    /// Creates a renderer with the given options.
    pub fn new(config: DetailsConfig) -> Self {
        Self { config }
    }

    /// Renderer that prints at most `max_lines` stack entries, untransformed.
    pub fn with_max_lines(max_lines: usize) -> Self {
        Self::new(DetailsConfig::builder().max_lines(max_lines).build())
    }

    /// Renders `err`.
    ///
    /// `None` renders as the empty string and a plain failure as its own
    /// message.
    pub fn render(&self, err: Option<&(dyn StdError + 'static)>) -> String {
        let Some(err) = err else {
            return String::new();
        };
        let Some(trail) = err.downcast_ref::<TrailError>() else {
            return err.to_string();
        };

        let cause = trail.root_cause_message();
        let mut lines = vec![format!("[ERROR] {cause}")];

        if let Some(mask) = trail.mask() {
            let mask = mask.message();
            if mask != cause {
                lines.push(format!("[MASK ERROR] {mask}"));
            }
        }

        if !trail.stack().is_empty() {
            lines.push("[STACK]:".to_string());
            lines.extend(
                trail
                    .stack()
                    .iter()
                    .take(*self.config.max_lines())
                    .map(|location| self.display_location(location).to_string()),
            );
        }

        lines.join("\n")
    }

    fn display_location(&self, location: &Location) -> Location {
        let location = location.strip_prefixes(self.config.strip_prefixes());
        if *self.config.base_name_only() {
            location.base_name()
        } else {
            location
        }
    }
}

//! Configuration for stack capture and detail rendering.
//!
//! Configuration is an explicit value handed to a [`Factory`](crate::Factory)
//! or a [`Details`](crate::Details) renderer. Nothing here is process-global.
//! Files are read only when [`TrailConfig::load`] or
//! [`TrailConfig::from_file`] is called, and always on top of the defaults
//! compiled into the library.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use errtrail_error::{ConfigError, ConfigErrorKind, ErrtrailError, ErrtrailResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default number of frames captured per error.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Default number of stack entries rendered by `details`.
pub const DEFAULT_MAX_LINES: usize = 5;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_max_lines() -> usize {
    DEFAULT_MAX_LINES
}

/// Stack capture policy.
///
/// Capture is bounded: at most `max_depth` frames are recorded, starting at
/// the caller of the construction operation. A depth of zero disables
/// capture entirely.
///
/// # Examples
///
/// ```
/// use errtrail::StackConfig;
///
/// let config = StackConfig::builder().max_depth(16).build();
/// assert_eq!(*config.max_depth(), 16);
///
/// assert_eq!(*StackConfig::default().max_depth(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct StackConfig {
    /// Maximum number of frames captured (default 5, 0 disables capture).
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl StackConfig {
    /// Creates a new stack config builder.
    pub fn builder() -> StackConfigBuilder {
        StackConfigBuilder::default()
    }

    /// Stack config that records no frames.
    pub fn disabled() -> Self {
        Self { max_depth: 0 }
    }

    /// True when capture is switched off.
    pub fn is_disabled(&self) -> bool {
        self.max_depth == 0
    }
}

/// Builder for `StackConfig`.
#[derive(Debug, Default)]
pub struct StackConfigBuilder {
    max_depth: Option<usize>,
}

impl StackConfigBuilder {
    /// Sets the maximum capture depth.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = Some(value);
        self
    }

    /// Builds the `StackConfig`.
    pub fn build(self) -> StackConfig {
        StackConfig {
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
        }
    }
}

/// Rendering options for [`Details`](crate::Details).
///
/// Path transformations apply to the rendered text only; the stack stored
/// on the error is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct DetailsConfig {
    /// Maximum number of stack entries rendered (default 5).
    #[serde(default = "default_max_lines")]
    max_lines: usize,

    /// Path prefixes removed from file names, tried in order.
    #[serde(default)]
    strip_prefixes: Vec<String>,

    /// Render only the final path component of each file.
    #[serde(default)]
    base_name_only: bool,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            strip_prefixes: Vec::new(),
            base_name_only: false,
        }
    }
}

impl DetailsConfig {
    /// Creates a new details config builder.
    pub fn builder() -> DetailsConfigBuilder {
        DetailsConfigBuilder::default()
    }
}

/// Builder for `DetailsConfig`.
#[derive(Debug, Default)]
pub struct DetailsConfigBuilder {
    max_lines: Option<usize>,
    strip_prefixes: Vec<String>,
    base_name_only: bool,
}

impl DetailsConfigBuilder {
    /// Sets the maximum number of rendered stack entries.
    pub fn max_lines(mut self, value: usize) -> Self {
        self.max_lines = Some(value);
        self
    }

    /// Adds a path prefix to strip when rendering.
    pub fn strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefixes.push(prefix.into());
        self
    }

    /// Renders only file base names.
    pub fn base_name_only(mut self, value: bool) -> Self {
        self.base_name_only = value;
        self
    }

    /// Builds the `DetailsConfig`.
    pub fn build(self) -> DetailsConfig {
        DetailsConfig {
            max_lines: self.max_lines.unwrap_or(DEFAULT_MAX_LINES),
            strip_prefixes: self.strip_prefixes,
            base_name_only: self.base_name_only,
        }
    }
}

/// Top-level errtrail configuration.
///
/// # Example
///
/// ```toml
/// [stack]
/// max_depth = 8
///
/// [details]
/// max_lines = 4
/// strip_prefixes = ["/home/ci/build/"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct TrailConfig {
    /// Stack capture policy
    #[serde(default)]
    stack: StackConfig,

    /// Detail rendering options
    #[serde(default)]
    details: DetailsConfig,
}

impl TrailConfig {
    /// Assembles a configuration from its parts.
    pub fn new(stack: StackConfig, details: DetailsConfig) -> Self {
        Self { stack, details }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `details.max_lines` is zero.
    pub fn validate(&self) -> ErrtrailResult<()> {
        if self.details.max_lines == 0 {
            return Err(ConfigError::invalid("details.max_lines", "must be at least 1").into());
        }
        Ok(())
    }

    /// The defaults shipped inside the library, with no user overrides.
    ///
    /// ```
    /// use errtrail::TrailConfig;
    ///
    /// assert_eq!(TrailConfig::bundled()?, TrailConfig::default());
    /// # Ok::<(), errtrail::ErrtrailError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is malformed.
    #[instrument]
    pub fn bundled() -> ErrtrailResult<Self> {
        Self::resolve(bundled_layer(), "bundled defaults")
    }

    /// Reads one TOML file on top of the bundled defaults.
    ///
    /// Keys missing from the file keep their bundled values, so a file that
    /// only sets `[stack] max_depth` is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, contains keys
    /// errtrail does not know, or fails [`TrailConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ErrtrailResult<Self> {
        let path = path.as_ref();
        let layers = bundled_layer().add_source(File::from(path));
        Self::resolve(layers, &path.display().to_string())
    }

    /// Resolves the effective configuration for this process.
    ///
    /// Layers, lowest priority first:
    /// 1. the bundled `errtrail.toml`
    /// 2. `~/.config/errtrail/errtrail.toml`, when present
    /// 3. `errtrail.toml` in the working directory, when present
    ///
    /// Stack depth and rendering options are plain values; call this once at
    /// startup and hand the pieces to a [`Factory`](crate::Factory) and a
    /// [`Details`](crate::Details) renderer.
    ///
    /// ```no_run
    /// use errtrail::{Details, Factory, TrailConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TrailConfig::load()?;
    /// let factory = Factory::new(config.stack().clone());
    /// let renderer = Details::new(config.details().clone());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if an existing override cannot be parsed or the
    /// merged result fails [`TrailConfig::validate`].
    #[instrument]
    pub fn load() -> ErrtrailResult<Self> {
        let mut layers = bundled_layer();
        if let Some(home) = dirs::home_dir() {
            let user = home.join(".config").join("errtrail").join("errtrail.toml");
            debug!(path = %user.display(), "Adding user override layer");
            layers = layers.add_source(File::from(user).required(false));
        }
        layers = layers.add_source(File::with_name("errtrail").required(false));
        Self::resolve(layers, "layered configuration")
    }

    fn resolve(layers: ConfigBuilder<DefaultState>, origin: &str) -> ErrtrailResult<Self> {
        let merged = layers.build().map_err(|e| {
            ErrtrailError::from(ConfigError::new(ConfigErrorKind::Read(format!(
                "{origin}: {e}"
            ))))
        })?;
        let config: Self = merged.try_deserialize().map_err(|e| {
            ErrtrailError::from(ConfigError::new(ConfigErrorKind::Parse(format!(
                "{origin}: {e}"
            ))))
        })?;
        config.validate()?;
        debug!(
            origin,
            max_depth = config.stack.max_depth,
            max_lines = config.details.max_lines,
            "Resolved configuration"
        );
        Ok(config)
    }
}

const BUNDLED_DEFAULTS: &str = include_str!("../../../errtrail.toml");

fn bundled_layer() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(BUNDLED_DEFAULTS, FileFormat::Toml))
}

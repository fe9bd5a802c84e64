//! The structured error value.

use crate::capture::capture;
use crate::{Failure, Location, Message, StackConfig};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::error::Error as StdError;
use std::fmt;

/// A failure augmented with a preserved cause, an optional client-safe mask,
/// the call stack at creation, and keyed diagnostic data.
///
/// `Display` yields the public message only: the mask when one is set,
/// otherwise the wrap annotation (if any) followed by the cause's message.
/// Stack and data never leak through `Display`.
///
/// Mutation (`set_mask`, `set_data`) needs `&mut self`, so a value that has
/// been shared behind `&` or `Arc` is read-only.
///
/// # Examples
///
/// ```
/// use errtrail::{Failure, TrailError};
///
/// let mut err = TrailError::new("connection refused");
/// err.set_data("host", "db-1");
/// err.set_mask(Some(Failure::msg("service unavailable")));
///
/// assert_eq!(err.to_string(), "service unavailable");
/// assert_eq!(err.cause().message(), "connection refused");
/// assert_eq!(err.data("host"), Some(&"db-1".into()));
/// ```
#[derive(Debug)]
pub struct TrailError {
    cause: Box<Failure>,
    mask: Option<Box<Failure>>,
    wrap_message: Option<String>,
    stack: Vec<Location>,
    data: Option<HashMap<String, Value>>,
}

impl TrailError {
    /// Creates an error whose cause is a new message failure.
    ///
    /// The stack is captured with the default [`StackConfig`], starting at
    /// the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_config(message, &StackConfig::default())
    }

    /// Like [`TrailError::new`], capturing with an explicit stack policy.
    #[track_caller]
    pub fn with_config(message: impl Into<String>, config: &StackConfig) -> Self {
        let stack = capture(config);
        Self::from_parts(Failure::Plain(Box::new(Message::new(message))), stack)
    }

    pub(crate) fn from_parts(cause: Failure, stack: Vec<Location>) -> Self {
        Self {
            cause: Box::new(cause),
            mask: None,
            wrap_message: None,
            stack,
            data: None,
        }
    }

    pub(crate) fn with_wrap_message(mut self, message: String) -> Self {
        self.wrap_message = Some(message);
        self
    }

    pub(crate) fn with_data(mut self, data: HashMap<String, Value>) -> Self {
        if !data.is_empty() {
            self.data = Some(data);
        }
        self
    }

    /// The failure this error was built around, one level down.
    pub fn cause(&self) -> &Failure {
        &self.cause
    }

    /// The client-facing replacement failure, if set.
    pub fn mask(&self) -> Option<&Failure> {
        self.mask.as_deref()
    }

    /// The wrap annotation, if this node was created by `wrap`.
    pub fn wrap_message(&self) -> Option<&str> {
        self.wrap_message.as_deref()
    }

    /// The stack captured when this node was created.
    pub fn stack(&self) -> &[Location] {
        &self.stack
    }

    /// Replaces the mask. `None` reverts the public message to the cause.
    pub fn set_mask(&mut self, mask: Option<Failure>) {
        self.mask = mask.map(Box::new);
    }

    /// Attaches a diagnostic value to this node, replacing any previous value
    /// under the same key.
    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
    }

    /// Looks up a diagnostic value, searching this node first and then each
    /// structured cause in turn.
    pub fn data(&self, key: &str) -> Option<&Value> {
        let mut node = Some(self);
        while let Some(current) = node {
            if let Some(value) = current.data.as_ref().and_then(|data| data.get(key)) {
                return Some(value);
            }
            node = current.cause.as_structured();
        }
        None
    }

    /// Every data key visible through the chain, sorted.
    pub fn data_keys(&self) -> Vec<&str> {
        let mut keys = BTreeSet::new();
        for node in self.chain() {
            if let Some(data) = &node.data {
                keys.extend(data.keys().map(String::as_str));
            }
        }
        keys.into_iter().collect()
    }

    /// Diagnostic data of the whole chain merged into one map; outer nodes
    /// win on conflicting keys.
    pub fn merged_data(&self) -> HashMap<String, Value> {
        let mut merged = HashMap::new();
        for node in self.chain() {
            if let Some(data) = &node.data {
                for (key, value) in data {
                    merged.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }
        merged
    }

    /// Iterates over this node and each structured cause beneath it.
    pub fn chain(&self) -> impl Iterator<Item = &TrailError> {
        std::iter::successors(Some(self), |node| node.cause.as_structured())
    }

    /// Resolved message of the cause, one level down.
    pub fn cause_message(&self) -> String {
        self.cause.message()
    }

    /// Message of the failure at the bottom of the chain, ignoring masks and
    /// wrap annotations at every level.
    pub fn root_cause_message(&self) -> String {
        self.chain().last().unwrap_or(self).cause_message()
    }

    /// The public message: mask, else wrap-prefixed cause, else cause.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(mask) = &self.mask {
            return write!(f, "{mask}");
        }
        match &self.wrap_message {
            Some(wrap) => write!(f, "{wrap}: {}", self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

impl StdError for TrailError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_dyn())
    }
}

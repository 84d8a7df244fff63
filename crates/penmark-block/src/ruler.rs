//! Priority-ordered block rule registry.
//!
//! Rules are tried in list order; the first committing match wins. Extensions
//! position themselves relative to existing rules by name, the way the raw
//! passthrough rule registers itself just before the generic fence rule.

use crate::rule::BlockRule;

/// Error from positional rule registration.
#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    /// The anchor name is not registered.
    #[error("unknown block rule: {0}")]
    UnknownRule(String),
}

/// Ordered, name-addressed list of block rules.
#[derive(Default)]
pub struct Ruler {
    rules: Vec<Box<dyn BlockRule>>,
}

impl Ruler {
    /// Create an empty ruler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the lowest priority.
    pub fn push(&mut self, rule: Box<dyn BlockRule>) {
        self.rules.push(rule);
    }

    /// Insert a rule immediately before the rule named `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::UnknownRule`] if no rule with that name is
    /// registered.
    pub fn insert_before(&mut self, anchor: &str, rule: Box<dyn BlockRule>) -> Result<(), RulerError> {
        let idx = self.position(anchor)?;
        self.rules.insert(idx, rule);
        Ok(())
    }

    /// Insert a rule immediately after the rule named `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::UnknownRule`] if no rule with that name is
    /// registered.
    pub fn insert_after(&mut self, anchor: &str, rule: Box<dyn BlockRule>) -> Result<(), RulerError> {
        let idx = self.position(anchor)?;
        self.rules.insert(idx + 1, rule);
        Ok(())
    }

    /// Remove and return the rule named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::UnknownRule`] if no rule with that name is
    /// registered.
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn BlockRule>, RulerError> {
        let idx = self.position(name)?;
        Ok(self.rules.remove(idx))
    }

    /// Whether a rule with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_ok()
    }

    /// Iterate rules in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn BlockRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn position(&self, name: &str) -> Result<usize, RulerError> {
        self.rules
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| RulerError::UnknownRule(name.to_owned()))
    }
}

impl std::fmt::Debug for Ruler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|r| r.name()))
            .finish()
    }
}

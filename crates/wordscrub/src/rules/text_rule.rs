//! # Text Rule Trait

use std::borrow::Cow;

use crate::errors::ScrubResult;

/// A single sentence-level text transformation.
///
/// Rules are pure; the returned text borrows the input when the rule
/// made no change.
pub trait TextRule: Send + Sync {
    /// A short name for the rule, for diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the rule to `text`.
    fn apply<'h>(
        &self,
        text: &'h str,
    ) -> ScrubResult<Cow<'h, str>>;
}

/// Apply `rules` to `text`, in order.
pub fn apply_rules(
    rules: &[&dyn TextRule],
    text: &str,
) -> ScrubResult<String> {
    let mut current = text.to_string();
    for rule in rules {
        let next = match rule.apply(&current)? {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            current = next;
        }
    }
    Ok(current)
}

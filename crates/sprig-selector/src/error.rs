//! Errors raised while building selectors.

use thiserror::Error;

use crate::kind::FragmentKind;

/// A fragment could not be appended to a builder.
///
/// The builder is left exactly as it was before the failing call, so the
/// caller may retry with a different fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment of lower rank than the last appended one.
    #[error(
        "cannot append {kind} after {previous}: selector parts must appear in the order \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Ordering {
        /// Kind that was rejected.
        kind: FragmentKind,
        /// Kind of the most recently appended fragment.
        previous: FragmentKind,
    },

    /// A second element, id, or pseudo-element.
    #[error(
        "cannot append a second {kind}: element, id, and pseudo-element may each occur at most once"
    )]
    Duplicate {
        /// Singleton kind that was already present.
        kind: FragmentKind,
    },
}

/// A `kind=value` fragment token could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragmentParseError {
    /// The token has no `=` separating kind and value.
    #[error("expected `kind=value`, found `{0}`")]
    MissingSeparator(String),

    /// The text before `=` is not a fragment kind name.
    #[error(
        "unknown fragment kind `{0}` (expected element, id, class, attribute, pseudo-class or pseudo-element)"
    )]
    UnknownKind(String),
}

/// A selector recipe could not be loaded or built.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// The recipe text is not valid recipe JSON.
    #[error("invalid recipe: {0}")]
    Json(#[from] serde_json::Error),

    /// The recipe describes a selector that violates ordering or duplicate rules.
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

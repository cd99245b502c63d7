//! Ordered CSS selector construction for sprig.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragment kinds** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element
//!   - Fixed rank ordering and at-most-once kinds
//!
//! - **Selector builder**
//!   - Fluent appends checked against the ordering rules
//!   - Destructive stringify that leaves the builder reusable
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, subsequent-sibling and column
//!   - Nested combination of already-combined selectors
//!
//! - **Recipes**
//!   - JSON descriptions of selectors, replayed through the builder
//!
//! # Not Yet Implemented
//!
//! - Validation of fragment values against the CSS grammar
//! - Selector lists (`a, b`)

/// Fluent compound-selector builder.
pub mod builder;
/// Combinators and combined selectors.
pub mod combine;
/// Builder, fragment and recipe errors.
pub mod error;
/// Kind/value fragment pairs.
pub mod fragment;
/// Fragment kinds and the rank table.
pub mod kind;
/// JSON selector recipes.
pub mod recipe;

// Re-exports for convenience
pub use builder::{SelectorBuilder, attr, class, element, id, pseudo_class, pseudo_element};
pub use combine::{CombinedSelector, Combinator, Stringify, combine};
pub use error::{FragmentParseError, RecipeError, SelectorError};
pub use fragment::Fragment;
pub use kind::FragmentKind;
pub use recipe::{SelectorRecipe, build_recipe};

//! Fluent, order-checked construction of compound selectors.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator."
//!
//! ```
//! use sprig_selector::element;
//!
//! let selector = element("a")
//!     .id("main")?
//!     .class("x")?
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?
//!     .pseudo_element("before")?
//!     .stringify();
//! assert_eq!(selector, r#"a#main.x[href$=".png"]:focus::before"#);
//! # Ok::<(), sprig_selector::SelectorError>(())
//! ```

use sprig_common::warning::warn_once;

use crate::combine::Stringify;
use crate::error::SelectorError;
use crate::fragment::Fragment;
use crate::kind::{FragmentKind, KIND_COUNT};

/// An in-progress compound selector.
///
/// Fragments are appended in place and the builder is returned for chaining.
/// [`stringify`](Self::stringify) hands back the text and resets the builder,
/// so the same instance can start an unrelated selector right away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Formatted fragments, in call order.
    accumulated: String,
    /// Kind of the most recently appended fragment.
    last: Option<FragmentKind>,
    /// Per-kind presence flags; only consulted for singleton kinds.
    seen: [bool; KIND_COUNT],
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh builder holding a single fragment.
    fn starting_with(kind: FragmentKind, value: &str) -> Self {
        let mut builder = Self::new();
        builder.push(kind, value);
        builder
    }

    /// Append a fragment of any kind.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Ordering`] if `kind` ranks below the last appended kind.
    /// - [`SelectorError::Duplicate`] if `kind` is a singleton that is already present.
    ///
    /// On error the builder is unchanged.
    pub fn append(&mut self, kind: FragmentKind, value: &str) -> Result<&mut Self, SelectorError> {
        if let Some(previous) = self.last.filter(|previous| kind.rank() < previous.rank()) {
            return Err(SelectorError::Ordering { kind, previous });
        }
        if kind.is_singleton() && self.seen[kind.index()] {
            return Err(SelectorError::Duplicate { kind });
        }

        self.push(kind, value);
        Ok(self)
    }

    /// Append a parsed [`Fragment`].
    ///
    /// # Errors
    ///
    /// Same as [`append`](Self::append).
    pub fn append_fragment(&mut self, fragment: &Fragment) -> Result<&mut Self, SelectorError> {
        self.append(fragment.kind(), fragment.value())
    }

    fn push(&mut self, kind: FragmentKind, value: &str) {
        if value.is_empty() {
            warn_once("selector", &format!("empty {kind} fragment"));
        }
        kind.format_into(&mut self.accumulated, value);
        self.last = Some(kind);
        self.seen[kind.index()] = true;
    }

    /// Append a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Element, value)
    }

    /// Append an ID selector, e.g. `#main`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Id, value)
    }

    /// Append a class selector, e.g. `.btn`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Class, value)
    }

    /// Append an attribute selector; `value` is the text between the brackets.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, e.g. `:focus`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, value)
    }

    /// Append a pseudo-element, e.g. `::before`.
    ///
    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, value)
    }

    /// Return the selector text and reset the builder to its empty state.
    pub fn stringify(&mut self) -> String {
        std::mem::take(self).accumulated
    }

    /// Alias for [`stringify`](Self::stringify).
    pub fn finalize(&mut self) -> String {
        self.stringify()
    }

    /// The text accumulated so far, without resetting.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.accumulated
    }

    /// Whether nothing has been appended since creation or the last reset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Kind of the most recently appended fragment.
    #[must_use]
    pub const fn last_kind(&self) -> Option<FragmentKind> {
        self.last
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&mut self) -> String {
        Self::stringify(self)
    }
}

/// Start a selector with a type selector.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Element, value)
}

/// Start a selector with an ID selector.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Id, value)
}

/// Start a selector with a class selector.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Class, value)
}

/// Start a selector with an attribute selector.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::Attribute, value)
}

/// Start a selector with a pseudo-class.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(FragmentKind::PseudoElement, value)
}

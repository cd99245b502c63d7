//! Fragment kinds and their ordering table.
//!
//! A compound selector is assembled from six kinds of fragment. Each kind has
//! a fixed rank, and fragments must be appended in non-decreasing rank order:
//!
//! ```text
//! element(0)  id(1)  class(2)  attribute(3)  pseudo-class(4)  pseudo-element(5)
//!   a          #main  .x        [href]        :focus           ::before
//! ```
//!
//! Element, id and pseudo-element are singletons and may appear at most once.

use strum_macros::{Display, EnumIter, EnumString};

/// Number of fragment kinds.
pub(crate) const KIND_COUNT: usize = 6;

/// One kind of fragment in a compound selector.
///
/// Parses from and displays as its kebab-case name (`pseudo-class`);
/// `attr` is accepted as an alias for `attribute`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.btn`, `.nav-item`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-child(2)`
    PseudoClass,

    /// [§ 3.6.3 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    PseudoElement,
}

/// Static properties of a fragment kind.
#[derive(Debug)]
struct KindInfo {
    rank: u8,
    singleton: bool,
    prefix: &'static str,
    suffix: &'static str,
}

/// Indexed by `FragmentKind as usize`.
static KINDS: [KindInfo; KIND_COUNT] = [
    KindInfo {
        rank: 0,
        singleton: true,
        prefix: "",
        suffix: "",
    },
    KindInfo {
        rank: 1,
        singleton: true,
        prefix: "#",
        suffix: "",
    },
    KindInfo {
        rank: 2,
        singleton: false,
        prefix: ".",
        suffix: "",
    },
    KindInfo {
        rank: 3,
        singleton: false,
        prefix: "[",
        suffix: "]",
    },
    KindInfo {
        rank: 4,
        singleton: false,
        prefix: ":",
        suffix: "",
    },
    KindInfo {
        rank: 5,
        singleton: true,
        prefix: "::",
        suffix: "",
    },
];

impl FragmentKind {
    fn info(self) -> &'static KindInfo {
        &KINDS[self.index()]
    }

    /// Position of this kind in the table (and in per-kind flag arrays).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Fixed position of this kind in the required ordering.
    #[must_use]
    pub fn rank(self) -> u8 {
        self.info().rank
    }

    /// Whether this kind may occur at most once per compound selector.
    #[must_use]
    pub fn is_singleton(self) -> bool {
        self.info().singleton
    }

    /// Append `value` to `out`, wrapped in this kind's syntax.
    pub fn format_into(self, out: &mut String, value: &str) {
        let info = self.info();
        out.push_str(info.prefix);
        out.push_str(value);
        out.push_str(info.suffix);
    }

    /// Format `value` in this kind's syntax.
    ///
    /// ```
    /// use sprig_selector::FragmentKind;
    ///
    /// assert_eq!(FragmentKind::Attribute.format("lang|=en"), "[lang|=en]");
    /// assert_eq!(FragmentKind::PseudoElement.format("after"), "::after");
    /// ```
    #[must_use]
    pub fn format(self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        self.format_into(&mut out, value);
        out
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_table_is_indexed_by_declaration_order() {
        for (index, kind) in FragmentKind::iter().enumerate() {
            assert_eq!(kind.index(), index);
            assert_eq!(usize::from(kind.rank()), index);
        }
    }

    #[test]
    fn test_ranks_strictly_increase() {
        let ranks: Vec<u8> = FragmentKind::iter().map(FragmentKind::rank).collect();
        assert!(ranks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<FragmentKind> =
            FragmentKind::iter().filter(|kind| kind.is_singleton()).collect();
        assert_eq!(
            singletons,
            vec![
                FragmentKind::Element,
                FragmentKind::Id,
                FragmentKind::PseudoElement
            ]
        );
    }

    #[test]
    fn test_format_each_kind() {
        assert_eq!(FragmentKind::Element.format("div"), "div");
        assert_eq!(FragmentKind::Id.format("main"), "#main");
        assert_eq!(FragmentKind::Class.format("x"), ".x");
        assert_eq!(FragmentKind::Attribute.format("href"), "[href]");
        assert_eq!(FragmentKind::PseudoClass.format("focus"), ":focus");
        assert_eq!(FragmentKind::PseudoElement.format("before"), "::before");
    }

    #[test]
    fn test_names() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!(FragmentKind::from_str("attr"), Ok(FragmentKind::Attribute));
        assert_eq!(
            FragmentKind::from_str("pseudo-element"),
            Ok(FragmentKind::PseudoElement)
        );
        assert!(FragmentKind::from_str("selector").is_err());
    }
}

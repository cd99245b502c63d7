//! A single kind/value pair, as found in recipes and on the command line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FragmentParseError;
use crate::kind::FragmentKind;

/// One fragment of a compound selector, carrying its unformatted value.
///
/// In JSON a fragment is a single-key object naming its kind:
/// `{"element": "a"}`, `{"pseudo-class": "focus"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fragment {
    /// Type selector, e.g. `div`.
    Element(String),
    /// ID selector value, without the `#`.
    Id(String),
    /// Class selector value, without the `.`.
    Class(String),
    /// Attribute selector body, without the brackets.
    #[serde(alias = "attr")]
    Attribute(String),
    /// Pseudo-class name, without the `:`.
    PseudoClass(String),
    /// Pseudo-element name, without the `::`.
    PseudoElement(String),
}

impl Fragment {
    /// Create a fragment of the given kind.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            FragmentKind::Element => Self::Element(value),
            FragmentKind::Id => Self::Id(value),
            FragmentKind::Class => Self::Class(value),
            FragmentKind::Attribute => Self::Attribute(value),
            FragmentKind::PseudoClass => Self::PseudoClass(value),
            FragmentKind::PseudoElement => Self::PseudoElement(value),
        }
    }

    /// The kind of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        match self {
            Self::Element(_) => FragmentKind::Element,
            Self::Id(_) => FragmentKind::Id,
            Self::Class(_) => FragmentKind::Class,
            Self::Attribute(_) => FragmentKind::Attribute,
            Self::PseudoClass(_) => FragmentKind::PseudoClass,
            Self::PseudoElement(_) => FragmentKind::PseudoElement,
        }
    }

    /// The raw value, before kind-specific formatting.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Element(value)
            | Self::Id(value)
            | Self::Class(value)
            | Self::Attribute(value)
            | Self::PseudoClass(value)
            | Self::PseudoElement(value) => value,
        }
    }
}

/// Parses `kind=value`. Only the first `=` separates, so attribute bodies
/// like `attr=href$=".png"` keep theirs.
impl FromStr for Fragment {
    type Err = FragmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, value)) = s.split_once('=') else {
            return Err(FragmentParseError::MissingSeparator(s.to_string()));
        };
        let kind = FragmentKind::from_str(kind.trim())
            .map_err(|_| FragmentParseError::UnknownKind(kind.to_string()))?;
        Ok(Self::new(kind, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        let fragment: Fragment = "class=nav-item".parse().unwrap();
        assert_eq!(fragment, Fragment::Class("nav-item".to_string()));
        assert_eq!(fragment.kind(), FragmentKind::Class);
        assert_eq!(fragment.value(), "nav-item");
    }

    #[test]
    fn test_parse_attribute_keeps_inner_equals() {
        let fragment: Fragment = r#"attr=href$=".png""#.parse().unwrap();
        assert_eq!(fragment, Fragment::Attribute(r#"href$=".png""#.to_string()));
    }

    #[test]
    fn test_parse_empty_value() {
        let fragment: Fragment = "id=".parse().unwrap();
        assert_eq!(fragment, Fragment::Id(String::new()));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "div".parse::<Fragment>(),
            Err(FragmentParseError::MissingSeparator("div".to_string()))
        );
        assert_eq!(
            "tag=div".parse::<Fragment>(),
            Err(FragmentParseError::UnknownKind("tag".to_string()))
        );
    }

    #[test]
    fn test_json_shape() {
        let fragment: Fragment = serde_json::from_str(r#"{"pseudo-element":"before"}"#).unwrap();
        assert_eq!(fragment, Fragment::PseudoElement("before".to_string()));

        let alias: Fragment = serde_json::from_str(r#"{"attr":"href"}"#).unwrap();
        assert_eq!(alias.kind(), FragmentKind::Attribute);

        assert_eq!(
            serde_json::to_string(&Fragment::PseudoClass("focus".to_string())).unwrap(),
            r#"{"pseudo-class":"focus"}"#
        );
    }
}

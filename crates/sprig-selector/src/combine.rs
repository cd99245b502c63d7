//! Joining finished selectors with combinators.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."
//!
//! A combined selector is terminal: it can be stringified or combined again,
//! but no further fragments can be appended to it.

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

use sprig_common::warning::warn_once;

/// Anything that can hand back its selector text, resetting itself.
///
/// Implemented by [`SelectorBuilder`](crate::SelectorBuilder) and
/// [`CombinedSelector`], which lets `combine` nest.
pub trait Stringify {
    /// Return the accumulated selector text and reset to the empty state.
    fn stringify(&mut self) -> String;
}

/// The standard CSS combinators.
///
/// Parses from either the token (`>`) or the kebab-case name (`child`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// `A B`: B is an arbitrary descendant of A.
    ///
    /// `combine` puts a space on each side of every token, so this combinator
    /// renders as three spaces (`a   b`). Browsers collapse the whitespace.
    #[strum(serialize = "descendant", serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`: B is a direct child of A.
    #[strum(serialize = "child", serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`: B immediately follows A.
    #[strum(serialize = "next-sibling", serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`: B follows A, not necessarily immediately.
    #[strum(serialize = "subsequent-sibling", serialize = "~")]
    SubsequentSibling,

    /// [§ 16.5 Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator)
    /// `A || B`: B is a cell belonging to column A.
    #[strum(serialize = "column", serialize = "||")]
    Column,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
        }
    }

    /// Look up a combinator by its exact token (not its name).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|combinator| combinator.token() == token)
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.token()
    }
}

/// The result of [`combine`]: a finished selector that only stringifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
}

impl CombinedSelector {
    /// Return the combined text, leaving this selector empty.
    pub fn stringify(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// The combined text, without consuming it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&mut self) -> String {
        Self::stringify(self)
    }
}

/// Join two selectors as `first <combinator> second`.
///
/// Both inputs are stringified, and therefore reset. The combinator may be a
/// [`Combinator`] or any string; a string that is not a standard combinator
/// token is used verbatim but reported once as a warning.
///
/// ```
/// use sprig_selector::{combine, element, Combinator};
///
/// let mut list = combine(element("ul").class("nav")?, Combinator::Child, &mut element("li"));
/// assert_eq!(list.stringify(), "ul.nav > li");
/// # Ok::<(), sprig_selector::SelectorError>(())
/// ```
pub fn combine(
    first: &mut (impl Stringify + ?Sized),
    combinator: impl AsRef<str>,
    second: &mut (impl Stringify + ?Sized),
) -> CombinedSelector {
    let token = combinator.as_ref();
    if Combinator::from_token(token).is_none() {
        warn_once("selector", &format!("non-standard combinator `{token}`"));
    }

    let first = first.stringify();
    let second = second.stringify();
    CombinedSelector {
        text: format!("{first} {token} {second}"),
    }
}

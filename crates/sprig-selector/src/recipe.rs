//! JSON descriptions of selectors.
//!
//! A recipe is either a compound selector, written as an array of fragments,
//! or a combination of two recipes:
//!
//! ```json
//! {
//!   "first": [{"element": "div"}, {"id": "main"}],
//!   "combinator": "+",
//!   "second": [{"element": "table"}, {"id": "data"}]
//! }
//! ```
//!
//! Building a recipe replays it through [`SelectorBuilder`] and [`combine`],
//! so a recipe is subject to exactly the same ordering and duplicate rules as
//! hand-written builder calls.

use serde::{Deserialize, Serialize};

use crate::builder::SelectorBuilder;
use crate::combine::{CombinedSelector, Stringify, combine};
use crate::error::{RecipeError, SelectorError};
use crate::fragment::Fragment;

/// A selector described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectorRecipe {
    /// Fragments appended in order to one builder.
    Compound(Vec<Fragment>),

    /// Two recipes joined by a combinator token.
    Combined {
        /// Left-hand selector.
        first: Box<SelectorRecipe>,
        /// Combinator token, used verbatim.
        combinator: String,
        /// Right-hand selector.
        second: Box<SelectorRecipe>,
    },
}

/// Intermediate result of building one level of a recipe.
enum Assembled {
    Compound(SelectorBuilder),
    Combined(CombinedSelector),
}

impl Stringify for Assembled {
    fn stringify(&mut self) -> String {
        match self {
            Self::Compound(builder) => builder.stringify(),
            Self::Combined(combined) => combined.stringify(),
        }
    }
}

impl SelectorRecipe {
    /// Parse a recipe from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Json`] if the text is not a well-formed recipe.
    pub fn from_json(text: &str) -> Result<Self, RecipeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize this recipe to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, RecipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Join two recipes.
    #[must_use]
    pub fn combined(first: Self, combinator: impl Into<String>, second: Self) -> Self {
        Self::Combined {
            first: Box::new(first),
            combinator: combinator.into(),
            second: Box::new(second),
        }
    }

    /// Build the selector string.
    ///
    /// # Errors
    ///
    /// Returns the first [`SelectorError`] raised while appending fragments.
    pub fn build(&self) -> Result<String, SelectorError> {
        Ok(self.assemble()?.stringify())
    }

    fn assemble(&self) -> Result<Assembled, SelectorError> {
        match self {
            Self::Compound(fragments) => {
                let mut builder = SelectorBuilder::new();
                for fragment in fragments {
                    let _ = builder.append_fragment(fragment)?;
                }
                Ok(Assembled::Compound(builder))
            }
            Self::Combined {
                first,
                combinator,
                second,
            } => {
                let mut first = first.assemble()?;
                let mut second = second.assemble()?;
                Ok(Assembled::Combined(combine(&mut first, combinator, &mut second)))
            }
        }
    }
}

/// Parse and build a JSON recipe in one step.
///
/// # Errors
///
/// Returns [`RecipeError`] if the JSON is malformed or the selector breaks a builder rule.
pub fn build_recipe(text: &str) -> Result<String, RecipeError> {
    Ok(SelectorRecipe::from_json(text)?.build()?)
}

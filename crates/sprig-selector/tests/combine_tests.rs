//! Integration tests for combining selectors.

use sprig_common::warning::has_warned;
use sprig_selector::{Combinator, SelectorBuilder, Stringify, class, combine, element, id};

#[test]
fn test_combine_next_sibling() {
    let selector = combine(
        element("div").id("main").unwrap(),
        "+",
        element("table").id("data").unwrap(),
    )
    .stringify();
    assert_eq!(selector, "div#main + table#data");
}

#[test]
fn test_combine_with_each_combinator() {
    let cases = [
        (Combinator::Descendant, "ul   li"),
        (Combinator::Child, "ul > li"),
        (Combinator::NextSibling, "ul + li"),
        (Combinator::SubsequentSibling, "ul ~ li"),
        (Combinator::Column, "ul || li"),
    ];
    for (combinator, expected) in cases {
        let selector = combine(&mut element("ul"), combinator, &mut element("li")).stringify();
        assert_eq!(selector, expected);
    }
}

#[test]
fn test_combine_resets_inputs() {
    let mut first = element("div");
    let _ = first.class("a").unwrap();
    let mut second = element("p");

    let mut combined = combine(&mut first, Combinator::Child, &mut second);
    assert_eq!(combined.as_str(), "div.a > p");

    assert_eq!(first, SelectorBuilder::new());
    assert_eq!(second, SelectorBuilder::new());

    // Inputs are reusable for unrelated selectors
    let _ = first.element("span").unwrap();
    assert_eq!(first.stringify(), "span");
    assert_eq!(combined.stringify(), "div.a > p");
}

#[test]
fn test_nested_combine() {
    let mut inner = combine(&mut element("div"), ">", &mut class("item"));
    let selector = combine(&mut inner, "~", id("footer").class("x").unwrap()).stringify();
    assert_eq!(selector, "div > .item ~ #footer.x");
    assert_eq!(inner.as_str(), "");
}

#[test]
fn test_nested_combine_on_right_side() {
    let mut inner = combine(&mut element("li"), "+", &mut element("li"));
    let selector = combine(&mut element("ul"), ">", &mut inner).stringify();
    assert_eq!(selector, "ul > li + li");
}

#[test]
fn test_nesting_matches_plain_strings() {
    // Combining is concatenation over already-stringified selectors
    let mut left = combine(&mut element("a"), ">", &mut element("b"));
    let left_then_c = combine(&mut left, ">", &mut element("c")).stringify();

    let mut right = combine(&mut element("b"), ">", &mut element("c"));
    let a_then_right = combine(&mut element("a"), ">", &mut right).stringify();

    assert_eq!(left_then_c, "a > b > c");
    assert_eq!(left_then_c, a_then_right);
}

#[test]
fn test_combine_through_trait_objects() {
    let mut parts: Vec<Box<dyn Stringify>> = vec![
        Box::new(element("nav")),
        Box::new(combine(&mut element("ul"), ">", &mut element("li"))),
    ];
    let (head, tail) = parts.split_at_mut(1);
    let selector = combine(&mut *head[0], " ", &mut *tail[0]).stringify();
    assert_eq!(selector, "nav   ul > li");
}

#[test]
fn test_custom_combinator_is_used_verbatim() {
    let selector = combine(&mut element("a"), ">>>", &mut element("b")).stringify();
    assert_eq!(selector, "a >>> b");
    assert!(has_warned("selector", "non-standard combinator `>>>`"));
}

#[test]
fn test_standard_token_does_not_warn() {
    let _ = combine(&mut element("h1"), "~", &mut element("h2")).stringify();
    assert!(!has_warned("selector", "non-standard combinator `~`"));
}

#[test]
fn test_combined_stringify_is_destructive() {
    let mut combined = combine(&mut element("a"), "+", &mut element("b"));
    assert_eq!(combined.stringify(), "a + b");
    assert_eq!(combined.stringify(), "");
}

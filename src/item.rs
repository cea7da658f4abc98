use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};

/// Parser that consumes and returns a single element
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyItem;

impl<S: Cursor> Parser<S> for AnyItem {
    type Output = S::Element;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        match state.front() {
            Some(element) => {
                state.advance(1);
                Ok(element)
            }
            None => Err(ParseError::with_message("unexpected end of input")),
        }
    }
}

impl Combinator for AnyItem {}

/// Convenience function to create an AnyItem parser
pub fn any_item() -> AnyItem {
    AnyItem
}

/// Parser that matches a specific element
#[derive(Debug, Clone, Copy)]
pub struct Item<T> {
    expected: T,
}

impl<T> Item<T> {
    pub fn new(expected: T) -> Self {
        Item { expected }
    }
}

impl<S, T> Parser<S> for Item<T>
where
    S: Cursor<Element = T>,
    T: Atomic,
{
    type Output = T;

    fn parse(&self, state: &mut S) -> ParseResult<T> {
        match state.front() {
            Some(element) if element == self.expected => {
                state.advance(1);
                Ok(element)
            }
            Some(element) => Err(ParseError::lazy(|| {
                format!(
                    "expected '{}', found '{}'",
                    T::slice_to_string(&[self.expected]),
                    T::slice_to_string(&[element])
                )
            })),
            None => Err(ParseError::lazy(|| {
                format!(
                    "expected '{}', found end of input",
                    T::slice_to_string(&[self.expected])
                )
            })),
        }
    }
}

impl<T> Combinator for Item<T> {}

/// Convenience function to create an Item parser
pub fn item<T: Atomic>(expected: T) -> Item<T> {
    Item::new(expected)
}

/// Parser that matches an element satisfying a predicate
#[derive(Debug, Clone, Copy)]
pub struct ItemIf<F> {
    predicate: F,
    accept: bool,
}

impl<S, F> Parser<S> for ItemIf<F>
where
    S: Cursor,
    F: Fn(S::Element) -> bool,
{
    type Output = S::Element;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        match state.front() {
            Some(element) if (self.predicate)(element) == self.accept => {
                state.advance(1);
                Ok(element)
            }
            Some(_) => Err(ParseError::with_message("element rejected by predicate")),
            None => Err(ParseError::with_message("unexpected end of input")),
        }
    }
}

impl<F> Combinator for ItemIf<F> {}

/// Match one element for which `predicate` holds
pub fn item_if<F>(predicate: F) -> ItemIf<F> {
    ItemIf {
        predicate,
        accept: true,
    }
}

/// Match one element for which `predicate` does not hold
pub fn item_if_not<F>(predicate: F) -> ItemIf<F> {
    ItemIf {
        predicate,
        accept: false,
    }
}

/// Parser that matches an element within a range (inclusive)
#[derive(Debug, Clone, Copy)]
pub struct ItemRange<T> {
    start: T,
    end: T,
}

impl<S, T> Parser<S> for ItemRange<T>
where
    S: Cursor<Element = T>,
    T: Atomic + PartialOrd,
{
    type Output = T;

    fn parse(&self, state: &mut S) -> ParseResult<T> {
        match state.front() {
            Some(element) if element >= self.start && element <= self.end => {
                state.advance(1);
                Ok(element)
            }
            Some(element) => Err(ParseError::lazy(|| {
                format!(
                    "expected element in range '{}'-'{}', found '{}'",
                    T::slice_to_string(&[self.start]),
                    T::slice_to_string(&[self.end]),
                    T::slice_to_string(&[element])
                )
            })),
            None => Err(ParseError::with_message("unexpected end of input")),
        }
    }
}

impl<T> Combinator for ItemRange<T> {}

/// Convenience function to create an ItemRange parser
pub fn item_range<T: Atomic + PartialOrd>(start: T, end: T) -> ItemRange<T> {
    ItemRange { start, end }
}

//! Self-referential grammars.
//!
//! [`recursive`] hands the grammar builder a [`RecursiveHandle`] that stands
//! for the parser being defined. The finished parser owns the only strong
//! reference; handles embedded inside it are weak, so the cycle does not leak.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{BoxedParser, Combinator, Parser};
use std::rc::{Rc, Weak};
use tracing::warn;

/// A parser that may refer to itself through [`RecursiveHandle`]
pub struct Recursive<'a, S: Cursor, O> {
    inner: Rc<BoxedParser<'a, S, O>>,
}

impl<S: Cursor, O> Clone for Recursive<'_, S, O> {
    fn clone(&self) -> Self {
        Recursive {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'a, S: Cursor, O> Recursive<'a, S, O> {
    /// A handle to this parser, e.g. for mutually recursive definitions
    pub fn handle(&self) -> RecursiveHandle<'a, S, O> {
        RecursiveHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<S: Cursor, O> Parser<S> for Recursive<'_, S, O> {
    type Output = O;

    fn parse(&self, state: &mut S) -> ParseResult<O> {
        self.inner.parse(state)
    }
}

impl<S: Cursor, O> Combinator for Recursive<'_, S, O> {}

/// Weak reference to a [`Recursive`] parser, usable inside its own definition
pub struct RecursiveHandle<'a, S: Cursor, O> {
    inner: Weak<BoxedParser<'a, S, O>>,
}

impl<S: Cursor, O> Clone for RecursiveHandle<'_, S, O> {
    fn clone(&self) -> Self {
        RecursiveHandle {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S: Cursor, O> Parser<S> for RecursiveHandle<'_, S, O> {
    type Output = O;

    fn parse(&self, state: &mut S) -> ParseResult<O> {
        match self.inner.upgrade() {
            Some(parser) => parser.parse(state),
            None => {
                warn!("recursive parser invoked after its definition was dropped");
                Err(ParseError::with_message("recursive parser is no longer alive"))
            }
        }
    }
}

impl<S: Cursor, O> Combinator for RecursiveHandle<'_, S, O> {}

/// Define a parser in terms of itself
///
/// ```
/// use monacomb::and::AndExt;
/// use monacomb::item::item;
/// use monacomb::map::MapExt;
/// use monacomb::or::OrExt;
/// use monacomb::parser::invoke;
/// use monacomb::pure::pure;
/// use monacomb::recursive::{Recursive, recursive};
/// use monacomb::{State, Text};
///
/// // Depth of a run of balanced parentheses: "((()))" -> 3
/// let depth: Recursive<State<u8, (), Text>, usize> = recursive(|nested| {
///     item(b'(')
///         .then(nested)
///         .skip(item(b')'))
///         .map(|d: usize| d + 1)
///         .or(pure(0))
/// });
///
/// let (position, result) = invoke(&depth, "((()))");
/// assert_eq!(result.unwrap(), 3);
/// assert_eq!(position, 6);
/// ```
///
/// The handle must not be parsed while `generator` is still running.
pub fn recursive<'a, S, O, P, F>(generator: F) -> Recursive<'a, S, O>
where
    S: Cursor,
    P: Parser<S, Output = O> + 'a,
    F: FnOnce(RecursiveHandle<'a, S, O>) -> P,
{
    let inner = Rc::new_cyclic(|weak: &Weak<BoxedParser<'a, S, O>>| {
        let handle = RecursiveHandle {
            inner: Weak::clone(weak),
        };
        Box::new(generator(handle)) as BoxedParser<'a, S, O>
    });
    Recursive { inner }
}

//! Parsers that consume nothing.

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use std::marker::PhantomData;

/// Always succeeds with a clone of its value
#[derive(Debug, Clone, Copy)]
pub struct Pure<V> {
    value: V,
}

impl<S: Cursor, V: Clone> Parser<S> for Pure<V> {
    type Output = V;

    fn parse(&self, _state: &mut S) -> ParseResult<V> {
        Ok(self.value.clone())
    }
}

impl<V> Combinator for Pure<V> {}

pub fn pure<V: Clone>(value: V) -> Pure<V> {
    Pure { value }
}

/// Always succeeds with `()`
pub fn success() -> Pure<()> {
    pure(())
}

/// Always fails
pub struct Fail<O> {
    _output: PhantomData<fn() -> O>,
}

impl<O> Clone for Fail<O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O> Copy for Fail<O> {}

impl<S: Cursor, O> Parser<S> for Fail<O> {
    type Output = O;

    fn parse(&self, _state: &mut S) -> ParseResult<O> {
        Err(ParseError::new())
    }
}

impl<O> Combinator for Fail<O> {}

/// A parser of any output type that never matches
pub fn fail<O>() -> Fail<O> {
    Fail {
        _output: PhantomData,
    }
}

/// Succeeds iff the condition given at construction holds
#[derive(Debug, Clone, Copy)]
pub struct Cond {
    condition: bool,
}

impl<S: Cursor> Parser<S> for Cond {
    type Output = ();

    fn parse(&self, _state: &mut S) -> ParseResult<()> {
        if self.condition {
            Ok(())
        } else {
            Err(ParseError::with_message("condition not met"))
        }
    }
}

impl Combinator for Cond {}

pub fn cond(condition: bool) -> Cond {
    Cond { condition }
}

/// Succeeds only at the end of the input
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl<S: Cursor> Parser<S> for Empty {
    type Output = ();

    fn parse(&self, state: &mut S) -> ParseResult<()> {
        match state.front() {
            None => Ok(()),
            Some(found) => Err(ParseError::lazy(|| {
                format!(
                    "expected end of input, found '{}'",
                    <S::Element as Atomic>::slice_to_string(&[found])
                )
            })),
        }
    }
}

impl Combinator for Empty {}

pub fn empty() -> Empty {
    Empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::item::item;
    use crate::parser::invoke;
    use crate::sequence::sequence;

    #[test]
    fn test_pure_consumes_nothing() {
        let (position, result) = invoke(&pure(42), "abc");
        assert_eq!(result.unwrap(), 42);
        assert_eq!(position, 0);

        let (position, result) = invoke(&success(), "");
        assert_eq!(result.unwrap(), ());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_fail() {
        let (position, result) = invoke(&fail::<u8>(), "abc");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_cond() {
        let (_, result) = invoke(&cond(true), "x");
        assert!(result.is_ok());
        let (_, result) = invoke(&cond(false), "x");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_at_end() {
        let parser = sequence("ab").skip(empty());
        let (position, result) = invoke(&parser, "ab");
        assert_eq!(result.unwrap(), "ab");
        assert_eq!(position, 2);

        let (position, result) = invoke(&parser, "abc");
        assert!(result.is_err());
        assert_eq!(position, 2);
    }

    #[test]
    fn test_empty_on_tokens() {
        let (_, result) = invoke(&item(1u32).then(empty()), &[1u32]);
        assert!(result.is_ok());
        let (_, result) = invoke(&empty(), &[1u32]);
        assert!(result.is_err());
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn test_messages() {
        let (_, result) = invoke(&empty(), "z");
        assert_eq!(result.unwrap_err().message(), "expected end of input, found 'z'");
        let (_, result) = invoke(&cond(false), "");
        assert_eq!(result.unwrap_err().message(), "condition not met");
    }
}

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use crate::range::RangeParser;
use std::ops::Range;

/// Parser that matches an exact run of elements
///
/// The match is atomic: on a partial match nothing is consumed.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<L> {
    expected: L,
}

impl<S, L> RangeParser<S> for Sequence<L>
where
    S: Cursor,
    L: AsRef<[S::Element]>,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let expected = self.expected.as_ref();
        let start = state.position();

        if state.remaining().starts_with(expected) {
            state.advance(expected.len());
            Ok(start..state.position())
        } else {
            Err(ParseError::lazy(|| {
                format!("expected '{}'", <S::Element as Atomic>::slice_to_string(expected))
            }))
        }
    }
}

impl<S, L> Parser<S> for Sequence<L>
where
    S: Cursor,
    L: AsRef<[S::Element]>,
{
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl<L> Combinator for Sequence<L> {}

/// Match `expected` exactly, e.g. `sequence("true")` on text input
pub fn sequence<L>(expected: L) -> Sequence<L> {
    Sequence { expected }
}

/// Parser that consumes exactly `count` elements
#[derive(Debug, Clone, Copy)]
pub struct Consume {
    count: usize,
}

impl<S: Cursor> RangeParser<S> for Consume {
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        if !state.has_at_least(self.count) {
            return Err(ParseError::lazy(|| {
                format!("expected {} more elements", self.count)
            }));
        }
        let start = state.position();
        state.advance(self.count);
        Ok(start..state.position())
    }
}

impl<S: Cursor> Parser<S> for Consume {
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl Combinator for Consume {}

/// Consume `count` elements, failing if fewer remain
pub fn consume(count: usize) -> Consume {
    Consume { count }
}

/// Parser that consumes everything up to the end of input
#[derive(Debug, Clone, Copy, Default)]
pub struct Rest;

impl<S: Cursor> RangeParser<S> for Rest {
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let start = state.position();
        let end = state.end();
        state.advance(end - start);
        Ok(start..end)
    }
}

impl<S: Cursor> Parser<S> for Rest {
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl Combinator for Rest {}

pub fn rest() -> Rest {
    Rest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::invoke;

    #[test]
    fn test_sequence_success() {
        let (position, result) = invoke(&sequence("true"), "true, false");
        assert_eq!(result.unwrap(), "true");
        assert_eq!(position, 4);
    }

    #[test]
    fn test_sequence_partial_match_is_atomic() {
        let (position, result) = invoke(&sequence("abc"), "abd");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_sequence_too_short() {
        let (position, result) = invoke(&sequence("abc"), "ab");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn test_sequence_message() {
        let (_, result) = invoke(&sequence("null"), "nil");
        assert_eq!(result.unwrap_err().message(), "expected 'null'");
    }

    #[test]
    fn test_sequence_on_tokens() {
        let data = [1u32, 2, 3, 4];
        let (position, result) = invoke(&sequence([1u32, 2]), &data);
        assert_eq!(result.unwrap(), &[1, 2]);
        assert_eq!(position, 2);
    }

    #[test]
    fn test_sequence_round_trip() {
        let input = "hello world";
        let (position, result) = invoke(&sequence("hello"), input);
        assert_eq!(format!("{}{}", result.unwrap(), &input[position..]), input);
    }

    #[test]
    fn test_consume() {
        let (position, result) = invoke(&consume(3), "abcdef");
        assert_eq!(result.unwrap(), "abc");
        assert_eq!(position, 3);

        let (position, result) = invoke(&consume(0), "abc");
        assert_eq!(result.unwrap(), "");
        assert_eq!(position, 0);
    }

    #[test]
    fn test_consume_not_enough_input() {
        let (position, result) = invoke(&consume(4), "abc");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_rest() {
        let (position, result) = invoke(&rest(), "abc");
        assert_eq!(result.unwrap(), "abc");
        assert_eq!(position, 3);

        let (position, result) = invoke(&rest(), "");
        assert_eq!(result.unwrap(), "");
        assert_eq!(position, 0);
    }
}

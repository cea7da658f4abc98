use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};
use crate::range::RangeParser;
use std::ops::Range;

/// Parser that consumes the longest run of elements satisfying a predicate
///
/// It never fails; an empty run converts to an empty range.
#[derive(Debug, Clone, Copy)]
pub struct WhileIf<F> {
    predicate: F,
}

impl<S, F> RangeParser<S> for WhileIf<F>
where
    S: Cursor,
    F: Fn(S::Element) -> bool,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let start = state.position();
        let count = state
            .remaining()
            .iter()
            .take_while(|e| (self.predicate)(**e))
            .count();
        state.advance(count);
        Ok(start..start + count)
    }
}

impl<S, F> Parser<S> for WhileIf<F>
where
    S: Cursor,
    F: Fn(S::Element) -> bool,
{
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl<F> Combinator for WhileIf<F> {}

pub fn while_if<F>(predicate: F) -> WhileIf<F> {
    WhileIf { predicate }
}

/// Parser that consumes the longest run of elements found in a set
#[derive(Debug, Clone, Copy)]
pub struct WhileIn<L> {
    set: L,
}

impl<S, L> RangeParser<S> for WhileIn<L>
where
    S: Cursor,
    L: AsRef<[S::Element]>,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let set = self.set.as_ref();
        let start = state.position();
        let count = state
            .remaining()
            .iter()
            .take_while(|e| set.contains(*e))
            .count();
        state.advance(count);
        Ok(start..start + count)
    }
}

impl<S, L> Parser<S> for WhileIn<L>
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

impl<L> Combinator for WhileIn<L> {}

/// Consume while the current element is one of `set`
pub fn while_in<L>(set: L) -> WhileIn<L> {
    WhileIn { set }
}

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use crate::range::RangeParser;
use std::ops::Range;

/// Something an [`Until`] parser scans forward for
pub trait Terminator<S: Cursor> {
    /// Absolute range of the first terminator at or after the current position
    ///
    /// The cursor position afterwards is unspecified; the caller resets it.
    fn locate(&self, state: &mut S) -> Option<Range<usize>>;
}

/// Stops at the first element equal to a given one
#[derive(Debug, Clone, Copy)]
pub struct ItemTerminator<T>(T);

impl<S: Cursor<Element = T>, T: PartialEq + Copy> Terminator<S> for ItemTerminator<T> {
    fn locate(&self, state: &mut S) -> Option<Range<usize>> {
        let start = state.position();
        let offset = state.remaining().iter().position(|e| *e == self.0)?;
        Some(start + offset..start + offset + 1)
    }
}

/// Stops at the first element satisfying a predicate
#[derive(Debug, Clone, Copy)]
pub struct PredicateTerminator<F>(F);

impl<S: Cursor, F: Fn(S::Element) -> bool> Terminator<S> for PredicateTerminator<F> {
    fn locate(&self, state: &mut S) -> Option<Range<usize>> {
        let start = state.position();
        let offset = state.remaining().iter().position(|e| (self.0)(*e))?;
        Some(start + offset..start + offset + 1)
    }
}

/// Stops at the first occurrence of a run of elements
#[derive(Debug, Clone, Copy)]
pub struct SequenceTerminator<L>(L);

impl<S: Cursor, L: AsRef<[S::Element]>> Terminator<S> for SequenceTerminator<L> {
    fn locate(&self, state: &mut S) -> Option<Range<usize>> {
        let start = state.position();
        let needle = self.0.as_ref();
        if needle.is_empty() {
            return Some(start..start);
        }
        let offset = state
            .remaining()
            .windows(needle.len())
            .position(|window| window == needle)?;
        Some(start + offset..start + offset + needle.len())
    }
}

/// Stops at the first position where a parser succeeds
#[derive(Debug, Clone, Copy)]
pub struct ParserTerminator<P>(P);

impl<S: Cursor, P: Parser<S>> Terminator<S> for ParserTerminator<P> {
    fn locate(&self, state: &mut S) -> Option<Range<usize>> {
        for candidate in state.position()..=state.end() {
            state.set_position(candidate);
            if self.0.parse(state).is_ok() {
                return Some(candidate..state.position());
            }
        }
        None
    }
}

/// Parser that consumes input up to a terminator
///
/// By default the terminator is consumed but left out of the returned range.
/// If the terminator never occurs the parser fails without consuming, unless
/// `or_end()` was requested, in which case it takes the rest of the input.
#[derive(Debug, Clone, Copy)]
pub struct Until<M> {
    terminator: M,
    eat: bool,
    include: bool,
    or_end: bool,
}

impl<M> Until<M> {
    pub fn new(terminator: M) -> Self {
        Until {
            terminator,
            eat: true,
            include: false,
            or_end: false,
        }
    }

    /// Stop in front of the terminator instead of after it
    pub fn dont_eat(mut self) -> Self {
        self.eat = false;
        self
    }

    /// Return the terminator as part of the matched range
    pub fn include(mut self) -> Self {
        self.include = true;
        self
    }

    /// Succeed with the rest of the input when no terminator is found
    pub fn or_end(mut self) -> Self {
        self.or_end = true;
        self
    }
}

impl<S, M> RangeParser<S> for Until<M>
where
    S: Cursor,
    M: Terminator<S>,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let start = state.position();

        match self.terminator.locate(state) {
            Some(found) => {
                let content_end = if self.include { found.end } else { found.start };
                let stop = if self.eat { found.end } else { found.start };
                state.set_position(start);
                state.advance(stop - start);
                Ok(start..content_end)
            }
            None if self.or_end => {
                let end = state.end();
                state.set_position(start);
                state.advance(end - start);
                Ok(start..end)
            }
            None => {
                state.set_position(start);
                Err(ParseError::with_message("terminator not found"))
            }
        }
    }
}

impl<S, M> Parser<S> for Until<M>
where
    S: Cursor,
    M: Terminator<S>,
{
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl<M> Combinator for Until<M> {}

/// Take everything up to the first `terminator` element
pub fn until_item<T>(terminator: T) -> Until<ItemTerminator<T>> {
    Until::new(ItemTerminator(terminator))
}

/// Take everything up to the first element satisfying `predicate`
pub fn until_if<F>(predicate: F) -> Until<PredicateTerminator<F>> {
    Until::new(PredicateTerminator(predicate))
}

/// Take everything up to the first occurrence of `terminator`
pub fn until_sequence<L>(terminator: L) -> Until<SequenceTerminator<L>> {
    Until::new(SequenceTerminator(terminator))
}

/// Take everything up to the first position where `parser` matches
///
/// `until(empty())` takes the remainder of the input.
pub fn until<P>(parser: P) -> Until<ParserTerminator<P>> {
    Until::new(ParserTerminator(parser))
}

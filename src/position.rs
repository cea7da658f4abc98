use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};
use crate::range::RangeParser;
use std::ops::Range;

/// Represents a span of the input with start and end positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// A parser combinator that captures the position span of a successful parse
#[derive(Debug, Clone, Copy)]
pub struct Spanned<P> {
    parser: P,
}

impl<S, P> Parser<S> for Spanned<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = (P::Output, Span);

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let output = self.parser.parse(state)?;
        Ok((output, Span::new(start, state.position())))
    }
}

impl<P> Combinator for Spanned<P> {}

/// Pair the result of `parser` with the span it consumed
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned { parser }
}

/// Discards the result of a parser and returns the input it consumed
#[derive(Debug, Clone, Copy)]
pub struct GetParsed<P> {
    parser: P,
}

impl<S, P> RangeParser<S> for GetParsed<P>
where
    S: Cursor,
    P: Parser<S>,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let start = state.position();
        self.parser.parse(state)?;
        Ok(start..state.position())
    }
}

impl<S, P> Parser<S> for GetParsed<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<S::Converted> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl<P> Combinator for GetParsed<P> {}

/// The converted input consumed by `parser`
pub fn get_parsed<P>(parser: P) -> GetParsed<P> {
    GetParsed { parser }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt: Combinator + Sized {
    fn spanned(self) -> Spanned<Self> {
        spanned(self)
    }

    fn parsed(self) -> GetParsed<Self> {
        get_parsed(self)
    }
}

impl<P: Combinator> PositionExt for P {}

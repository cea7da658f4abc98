use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use std::borrow::Cow;
use std::fmt;

/// Parser combinator that transforms the error of a parser using a mapping function
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<S, P, F> Parser<S> for MapErr<P, F>
where
    S: Cursor,
    P: Parser<S>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        self.parser.parse(state).map_err(&self.mapper)
    }
}

impl<P, F> Combinator for MapErr<P, F> {}

/// Parser combinator that replaces any failure with a fixed message
#[derive(Debug, Clone)]
pub struct ChangeError<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<S, P> Parser<S> for ChangeError<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        self.parser
            .parse(state)
            .map_err(|_| ParseError::with_message(self.message.clone()))
    }
}

impl<P> Combinator for ChangeError<P> {}

/// Extension trait to add .map_err() and .change_error() to parsers
pub trait MapErrExt: Combinator + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }

    fn change_error(self, message: impl Into<Cow<'static, str>>) -> ChangeError<Self> {
        change_error(self, message)
    }
}

impl<P: Combinator> MapErrExt for P {}

/// Convenience function to create a MapErr parser
pub fn map_err<P, F>(parser: P, mapper: F) -> MapErr<P, F> {
    MapErr::new(parser, mapper)
}

/// Report failures of `parser` as `message`
///
/// Only the message changes; the cursor is wherever `parser` left it.
pub fn change_error<P>(parser: P, message: impl Into<Cow<'static, str>>) -> ChangeError<P> {
    ChangeError {
        parser,
        message: message.into(),
    }
}

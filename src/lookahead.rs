//! Combinators that control how much input a parser is allowed to keep.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};

/// Restores the position if the inner parser fails
///
/// Plain sequencing keeps whatever a failed chain consumed; wrapping it in
/// `attempt` makes the whole chain all-or-nothing.
#[derive(Debug, Clone, Copy)]
pub struct Attempt<P> {
    parser: P,
}

impl<S, P> Parser<S> for Attempt<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        self.parser.parse(state).inspect_err(|_| state.set_position(start))
    }
}

impl<P> Combinator for Attempt<P> {}

pub fn attempt<P>(parser: P) -> Attempt<P> {
    Attempt { parser }
}

/// Runs the inner parser and then restores the position, whatever the outcome
#[derive(Debug, Clone, Copy)]
pub struct LookAhead<P> {
    parser: P,
}

impl<S, P> Parser<S> for LookAhead<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let result = self.parser.parse(state);
        state.set_position(start);
        result
    }
}

impl<P> Combinator for LookAhead<P> {}

pub fn look_ahead<P>(parser: P) -> LookAhead<P> {
    LookAhead { parser }
}

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    parser: P,
}

impl<S, P> Parser<S> for Not<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = ();

    fn parse(&self, state: &mut S) -> ParseResult<()> {
        let start = state.position();
        let matched = self.parser.parse(state).is_ok();
        state.set_position(start);

        if matched {
            Err(ParseError::with_message("negative lookahead failed: unexpected match"))
        } else {
            Ok(())
        }
    }
}

impl<P> Combinator for Not<P> {}

pub fn not<P>(parser: P) -> Not<P> {
    Not { parser }
}

/// Extension trait for the backtracking helpers
pub trait LookAheadExt: Combinator + Sized {
    fn attempt(self) -> Attempt<Self> {
        attempt(self)
    }

    fn look_ahead(self) -> LookAhead<Self> {
        look_ahead(self)
    }

    fn not(self) -> Not<Self> {
        not(self)
    }
}

impl<P: Combinator> LookAheadExt for P {}

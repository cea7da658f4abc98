use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)`. For flat results run a tuple of parsers instead:
/// `(a, b, c, d)` is itself a parser yielding `(A, B, C, D)`.
///
/// Sequencing does not backtrack: if the second parser fails, the cursor
/// stays wherever the first one left it. Wrap in `attempt` to rewind.
///
/// Example:
/// ```
/// use monacomb::and::AndExt;
/// use monacomb::ascii::integer;
/// use monacomb::item::item;
/// use monacomb::parser::invoke;
///
/// let parser = integer::<i64>().and(item(b'.')).and(integer::<u64>());
/// let (position, result) = invoke(&parser, "123.456");
/// let ((int_part, _), frac_part) = result.unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// assert_eq!(position, 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<S, P1, P2> Parser<S> for And<P1, P2>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let result1 = self.parser1.parse(state)?;
        let result2 = self.parser2.parse(state)?;
        Ok((result1, result2))
    }
}

impl<P1, P2> Combinator for And<P1, P2> {}

/// Runs both parsers and keeps the right result
#[derive(Debug, Clone, Copy)]
pub struct Then<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<S, P1, P2> Parser<S> for Then<P1, P2>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = P2::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        self.parser1.parse(state)?;
        self.parser2.parse(state)
    }
}

impl<P1, P2> Combinator for Then<P1, P2> {}

/// Runs both parsers and keeps the left result
#[derive(Debug, Clone, Copy)]
pub struct Skip<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<S, P1, P2> Parser<S> for Skip<P1, P2>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = P1::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let result = self.parser1.parse(state)?;
        self.parser2.parse(state)?;
        Ok(result)
    }
}

impl<P1, P2> Combinator for Skip<P1, P2> {}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2> {
    And::new(parser1, parser2)
}

/// Run `parser1`, then `parser2`, keeping the result of `parser2`
pub fn then<P1, P2>(parser1: P1, parser2: P2) -> Then<P1, P2> {
    Then { parser1, parser2 }
}

/// Run `parser1`, then `parser2`, keeping the result of `parser1`
pub fn skip<P1, P2>(parser1: P1, parser2: P2) -> Skip<P1, P2> {
    Skip { parser1, parser2 }
}

/// Extension trait to add .and(), .then() and .skip() method support for parsers
pub trait AndExt: Combinator + Sized {
    fn and<P>(self, other: P) -> And<Self, P> {
        And::new(self, other)
    }

    fn then<P>(self, other: P) -> Then<Self, P> {
        then(self, other)
    }

    fn skip<P>(self, other: P) -> Skip<Self, P> {
        skip(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P: Combinator> AndExt for P {}

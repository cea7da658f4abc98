use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parser combinator that turns a failure into `None`
///
/// A failed attempt is rewound, so `optional` never consumes on `None`.
///
/// Example:
/// ```
/// use monacomb::and::AndExt;
/// use monacomb::ascii::integer;
/// use monacomb::item::item;
/// use monacomb::optional::optional;
/// use monacomb::parser::invoke;
///
/// let parser = integer::<i64>().and(optional(item(b'.').then(integer::<u64>())));
///
/// let (_, result) = invoke(&parser, "123.456");
/// assert_eq!(result.unwrap(), (123, Some(456)));
///
/// let (position, result) = invoke(&parser, "123.x");
/// assert_eq!(result.unwrap(), (123, None));
/// assert_eq!(position, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<S, P> Parser<S> for Optional<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        match self.parser.parse(state) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                state.set_position(start);
                Ok(None)
            }
        }
    }
}

impl<P> Combinator for Optional<P> {}

pub fn optional<P>(parser: P) -> Optional<P> {
    Optional { parser }
}

/// Runs the parser and reports whether it matched
#[derive(Debug, Clone, Copy)]
pub struct Succeed<P> {
    parser: P,
}

impl<S, P> Parser<S> for Succeed<P>
where
    S: Cursor,
    P: Parser<S>,
{
    type Output = bool;

    fn parse(&self, state: &mut S) -> ParseResult<bool> {
        let start = state.position();
        if self.parser.parse(state).is_ok() {
            return Ok(true);
        }
        state.set_position(start);
        Ok(false)
    }
}

impl<P> Combinator for Succeed<P> {}

pub fn succeed<P>(parser: P) -> Succeed<P> {
    Succeed { parser }
}

/// Extension trait to add .optional() and .succeed() to parsers
pub trait OptionalExt: Combinator + Sized {
    fn optional(self) -> Optional<Self> {
        optional(self)
    }

    fn succeed(self) -> Succeed<Self> {
        succeed(self)
    }
}

impl<P: Combinator> OptionalExt for P {}

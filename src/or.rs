use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The cursor is rewound before the second attempt, and again if that one
/// fails too, so a failing `Or` consumes nothing. The first parser wins
/// whenever it succeeds, even if it consumed no input.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<S, P1, P2> Parser<S> for Or<P1, P2>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S, Output = P1::Output>,
{
    type Output = P1::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        if let Ok(result) = self.parser1.parse(state) {
            return Ok(result);
        }

        state.set_position(start);
        let result = self.parser2.parse(state);
        if result.is_err() {
            state.set_position(start);
        }
        result
    }
}

impl<P1, P2> Combinator for Or<P1, P2> {}

/// Alternation over parsers with different output types
///
/// Only success is reported: the output is `true` if either branch matched.
/// Backtracking works as in [`Or`].
#[derive(Debug, Clone, Copy)]
pub struct Probe<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<S, P1, P2> Parser<S> for Probe<P1, P2>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = bool;

    fn parse(&self, state: &mut S) -> ParseResult<bool> {
        let start = state.position();
        if self.parser1.parse(state).is_ok() {
            return Ok(true);
        }

        state.set_position(start);
        match self.parser2.parse(state) {
            Ok(_) => Ok(true),
            Err(error) => {
                state.set_position(start);
                Err(error)
            }
        }
    }
}

impl<P1, P2> Combinator for Probe<P1, P2> {}

/// Extension trait to add .or() and .probe() method support for parsers
pub trait OrExt: Combinator + Sized {
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or::new(self, other)
    }

    fn probe<P>(self, other: P) -> Probe<Self, P> {
        probe(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P: Combinator> OrExt for P {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2> {
    Or::new(parser1, parser2)
}

/// Try two parsers of unrelated output types, reporting only whether one matched
pub fn probe<P1, P2>(parser1: P1, parser2: P2) -> Probe<P1, P2> {
    Probe { parser1, parser2 }
}

/// A tuple of parsers with a common output type, tried in order
pub trait Choice<S: Cursor> {
    type Output;

    fn choose(&self, state: &mut S) -> ParseResult<Self::Output>;
}

macro_rules! impl_choice {
    ($P1:ident $p1:ident $(, $P:ident $p:ident)*) => {
        impl<S, $P1, $($P),*> Choice<S> for ($P1, $($P,)*)
        where
            S: Cursor,
            $P1: Parser<S>,
            $($P: Parser<S, Output = $P1::Output>,)*
        {
            type Output = $P1::Output;

            fn choose(&self, state: &mut S) -> ParseResult<Self::Output> {
                let start = state.position();
                let ($p1, $($p,)*) = self;
                $p1.parse(state)
                    $(
                        .or_else(|_| {
                            state.set_position(start);
                            $p.parse(state)
                        })
                    )*
                    .map_err(|error| {
                        state.set_position(start);
                        error
                    })
            }
        }
    };
}

impl_choice!(P1 p1);
impl_choice!(P1 p1, P2 p2);
impl_choice!(P1 p1, P2 p2, P3 p3);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7);
impl_choice!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8);

/// Parser returning the result of the first alternative that matches
#[derive(Debug, Clone, Copy)]
pub struct First<Ps> {
    alternatives: Ps,
}

impl<S: Cursor, Ps: Choice<S>> Parser<S> for First<Ps> {
    type Output = Ps::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        self.alternatives.choose(state)
    }
}

impl<Ps> Combinator for First<Ps> {}

/// N-ary alternation: `first((p1, p2, p3))`
///
/// Every alternative starts from the same position; the error of the last
/// one is reported if none matches.
pub fn first<Ps>(alternatives: Ps) -> First<Ps> {
    First { alternatives }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::number::integer;
    use crate::item::item;
    use crate::map::MapExt;
    use crate::parser::invoke;
    use crate::sequence::sequence;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
        Special(char),
    }

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(item(b'a'), item(b'b'));
        let (position, result) = invoke(&parser, "abc");
        assert_eq!(result.unwrap(), b'a');
        assert_eq!(position, 1);
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(item(b'a'), item(b'b'));
        let (position, result) = invoke(&parser, "bcd");
        assert_eq!(result.unwrap(), b'b');
        assert_eq!(position, 1);
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(item(b'a'), item(b'b'));
        let (position, result) = invoke(&parser, "xyz");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_or_rewinds_after_partial_match() {
        let parser = sequence("abc").or(sequence("abd"));
        let (position, result) = invoke(&parser, "abd");
        assert_eq!(result.unwrap(), "abd");
        assert_eq!(position, 3);
    }

    #[test]
    fn test_or_rewinds_consuming_branch() {
        // The left branch consumes '#' before failing
        let parser = item(b'#').then(integer::<i64>()).or(integer::<i64>());
        let (position, result) = invoke(&parser, "#x");
        assert!(result.is_err());
        assert_eq!(position, 0);

        let parser = item(b'#')
            .then(item(b'!'))
            .map(|_: u8| 0i64)
            .or(item(b'#').then(integer::<i64>()));
        let (position, result) = invoke(&parser, "#5");
        assert_eq!(result.unwrap(), 5);
        assert_eq!(position, 2);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = item(b'a').or(item(b'b')).or(item(b'c')).or(item(b'd'));
        let (position, result) = invoke(&parser, "d");
        assert_eq!(result.unwrap(), b'd');
        assert_eq!(position, 1);
    }

    #[test]
    fn test_or_common_enum() {
        let letter = item(b'A').map(|b: u8| Token::Letter(b as char));
        let number = integer::<i64>().map(Token::Number);
        let special = item(b'!').map(|b: u8| Token::Special(b as char));
        let parser = letter.or(number).or(special);

        let (position, result) = invoke(&parser, "42");
        assert_eq!(result.unwrap(), Token::Number(42));
        assert_eq!(position, 2);
    }

    #[test]
    fn test_probe_heterogeneous() {
        let parser = integer::<i64>().probe(sequence("none"));

        let (position, result) = invoke(&parser, "none");
        assert!(result.unwrap());
        assert_eq!(position, 4);

        let (position, result) = invoke(&parser, "17");
        assert!(result.unwrap());
        assert_eq!(position, 2);

        let (position, result) = invoke(&parser, "nothing");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_first() {
        let parser = first((sequence("null"), sequence("true"), sequence("false")));

        let (position, result) = invoke(&parser, "false");
        assert_eq!(result.unwrap(), "false");
        assert_eq!(position, 5);

        let (position, result) = invoke(&parser, "nope");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_first_prefers_earlier() {
        let parser = first((
            item(b'a').map(|_: u8| 1),
            item(b'a').then(item(b'b')).map(|_: u8| 2),
        ));
        let (position, result) = invoke(&parser, "ab");
        assert_eq!(result.unwrap(), 1);
        assert_eq!(position, 1);
    }

    #[cfg(feature = "diagnostics")]
    #[test]
    fn test_first_reports_last_error() {
        use crate::map_err::MapErrExt;

        let parser = first((
            item(b'a').change_error("expected a"),
            item(b'b').then(item(b'c')).change_error("expected bc"),
        ));
        let (position, result) = invoke(&parser, "bx");
        assert_eq!(result.unwrap_err().message(), "expected bc");
        assert_eq!(position, 0);
    }
}

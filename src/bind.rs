use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parser combinator that feeds a result into a function choosing the next parser
///
/// The function only runs after the first parser succeeded, and the parser it
/// returns continues from wherever the first one stopped.
#[derive(Debug, Clone, Copy)]
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<S, P, F, Q> Parser<S> for Bind<P, F>
where
    S: Cursor,
    P: Parser<S>,
    F: Fn(P::Output) -> Q,
    Q: Parser<S>,
{
    type Output = Q::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let value = self.parser.parse(state)?;
        (self.binder)(value).parse(state)
    }
}

impl<P, F> Combinator for Bind<P, F> {}

/// Convenience function to create a Bind parser
pub fn bind<P, F>(parser: P, binder: F) -> Bind<P, F> {
    Bind { parser, binder }
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Combinator + Sized {
    fn bind<F>(self, binder: F) -> Bind<Self, F> {
        bind(self, binder)
    }
}

impl<P: Combinator> BindExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::number::integer;
    use crate::item::item;
    use crate::parser::invoke;
    use crate::sequence::consume;
    use std::cell::Cell;

    #[test]
    fn test_bind_length_prefixed() {
        let parser = integer::<usize>().skip(item(b':')).bind(consume);
        let (position, result) = invoke(&parser, "3:abcdef");
        assert_eq!(result.unwrap(), "abc");
        assert_eq!(position, 5);
    }

    #[test]
    fn test_bind_second_parser_fails() {
        let parser = integer::<usize>().skip(item(b':')).bind(consume);
        let (position, result) = invoke(&parser, "9:abc");
        assert!(result.is_err());
        assert_eq!(position, 2);
    }

    #[test]
    fn test_bind_not_called_on_failure() {
        let calls = Cell::new(0);
        let parser = bind(item(b'a'), |b: u8| {
            calls.set(calls.get() + 1);
            item(b)
        });

        let (position, result) = invoke(&parser, "xx");
        assert!(result.is_err());
        assert_eq!(position, 0);
        assert_eq!(calls.get(), 0);

        let (position, result) = invoke(&parser, "aa");
        assert_eq!(result.unwrap(), b'a');
        assert_eq!(position, 2);
        assert_eq!(calls.get(), 1);
    }
}

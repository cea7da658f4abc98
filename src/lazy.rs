use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// A parser built by `factory` every time it runs
///
/// Useful when a grammar rule is a plain function that would otherwise call
/// itself while being constructed.
#[derive(Clone, Copy)]
pub struct Lazy<F> {
    factory: F,
}

impl<S, F, P> Parser<S> for Lazy<F>
where
    S: Cursor,
    F: Fn() -> P,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        (self.factory)().parse(state)
    }
}

impl<F> Combinator for Lazy<F> {}

/// Create a lazy parser from a factory function
pub fn lazy<F>(factory: F) -> Lazy<F> {
    Lazy { factory }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::cursors::{State, Text};
    use crate::item::item;
    use crate::many::many;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::{BoxedExt, BoxedParser, invoke};
    use std::cell::Cell;

    type Bytes<'a> = State<'a, u8, (), Text>;

    // list := '[' list* ']'
    fn list<'a>() -> BoxedParser<'a, Bytes<'a>, usize> {
        item(b'[')
            .then(many(lazy(list)))
            .skip(item(b']'))
            .map(|children: Vec<usize>| children.len())
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| item(b'a'));
        let (position, result) = invoke(&parser, "aaaa");
        assert_eq!(result.unwrap(), b'a');
        assert_eq!(position, 1);
    }

    #[test]
    fn test_lazy_self_reference() {
        let (position, result) = invoke(&list(), "[[][[]][]]");
        assert_eq!(result.unwrap(), 3);
        assert_eq!(position, 10);
    }

    #[test]
    fn test_factory_runs_per_parse() {
        let built = Cell::new(0);
        let parser = lazy(|| {
            built.set(built.get() + 1);
            item(b'x').or(item(b'y'))
        });
        assert_eq!(built.get(), 0);

        let _ = invoke(&parser, "x");
        let _ = invoke(&parser, "y");
        assert_eq!(built.get(), 2);
    }
}

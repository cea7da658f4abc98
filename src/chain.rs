use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};
use tracing::trace;

/// Left-associative operator chaining: `atom (op atom)*`
///
/// `op` yields the function that combines the value so far with the next
/// atom, so `1-2-3` evaluates as `(1-2)-3`. An operator that is not followed
/// by an atom is left unconsumed.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, Op> {
    atom: A,
    operator: Op,
}

impl<S, A, Op, F> Parser<S> for Chain<A, Op>
where
    S: Cursor,
    A: Parser<S>,
    Op: Parser<S, Output = F>,
    F: Fn(A::Output, A::Output) -> A::Output,
{
    type Output = A::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let mut value = self.atom.parse(state)?;
        let mut operations = 0usize;

        loop {
            let checkpoint = state.position();
            let Ok(combine) = self.operator.parse(state) else {
                state.set_position(checkpoint);
                break;
            };
            let Ok(rhs) = self.atom.parse(state) else {
                state.set_position(checkpoint);
                break;
            };

            value = combine(value, rhs);
            operations += 1;
            if state.position() == checkpoint {
                break;
            }
        }

        trace!(operations, "operator chain finished");
        Ok(value)
    }
}

impl<A, Op> Combinator for Chain<A, Op> {}

pub fn chain<A, Op>(atom: A, operator: Op) -> Chain<A, Op> {
    Chain { atom, operator }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::item::item;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::invoke;

    type BinOp = fn(i64, i64) -> i64;

    fn additive<S: Cursor<Element = u8>>() -> impl Parser<S, Output = BinOp> {
        item(b'+')
            .value((|a: i64, b: i64| a + b) as BinOp)
            .or(item(b'-').value((|a: i64, b: i64| a - b) as BinOp))
    }

    #[test]
    fn test_chain_is_left_associative() {
        let parser = chain(integer::<i64>(), additive());
        let (position, result) = invoke(&parser, "10-3-2+1");
        assert_eq!(result.unwrap(), 6);
        assert_eq!(position, 8);
    }

    #[test]
    fn test_chain_single_atom() {
        let parser = chain(integer::<i64>(), additive());
        let (position, result) = invoke(&parser, "7");
        assert_eq!(result.unwrap(), 7);
        assert_eq!(position, 1);
    }

    #[test]
    fn test_chain_dangling_operator() {
        let parser = chain(integer::<i64>(), additive());
        let (position, result) = invoke(&parser, "1+2+x");
        assert_eq!(result.unwrap(), 3);
        assert_eq!(position, 3);
    }

    #[test]
    fn test_chain_needs_first_atom() {
        let parser = chain(integer::<i64>(), additive());
        let (position, result) = invoke(&parser, "+1");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_chain_with_mapped_atoms() {
        let atom = integer::<i64>().map(|n: i64| n * 2);
        let parser = chain(atom, item(b'*').value((|a: i64, b: i64| a * b) as BinOp));
        let (_, result) = invoke(&parser, "1*2*3");
        assert_eq!(result.unwrap(), 48);
    }
}

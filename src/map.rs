use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<S, P, F, U> Parser<S> for Map<P, F>
where
    S: Cursor,
    P: Parser<S>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, state: &mut S) -> ParseResult<U> {
        let value = self.parser.parse(state)?;
        Ok((self.mapper)(value))
    }
}

impl<P, F> Combinator for Map<P, F> {}

/// Parser combinator that replaces a successful result with a fixed value
#[derive(Debug, Clone, Copy)]
pub struct Value<P, V> {
    parser: P,
    value: V,
}

impl<S, P, V> Parser<S> for Value<P, V>
where
    S: Cursor,
    P: Parser<S>,
    V: Clone,
{
    type Output = V;

    fn parse(&self, state: &mut S) -> ParseResult<V> {
        self.parser.parse(state)?;
        Ok(self.value.clone())
    }
}

impl<P, V> Combinator for Value<P, V> {}

/// Convenience function to create a Map parser
pub fn map<P, F>(parser: P, mapper: F) -> Map<P, F> {
    Map::new(parser, mapper)
}

/// Extension trait to add .map() and .value() method support for parsers
pub trait MapExt: Combinator + Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F> {
        Map::new(self, mapper)
    }

    /// Yield `value` whenever this parser matches, e.g. `sequence("true").value(true)`
    fn value<V: Clone>(self, value: V) -> Value<Self, V> {
        Value {
            parser: self,
            value,
        }
    }
}

/// Implement MapExt for all parsers
impl<P: Combinator> MapExt for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::number::integer;
    use crate::item::item;
    use crate::parser::invoke;
    use crate::sequence::sequence;

    #[test]
    fn test_map_byte_to_char() {
        let parser = item(b'A').map(|byte: u8| byte as char);
        let (position, result) = invoke(&parser, "A");
        assert_eq!(result.unwrap(), 'A');
        assert_eq!(position, 1);
    }

    #[test]
    fn test_map_integer_to_string() {
        let parser = integer::<i64>().map(|num: i64| format!("Number: {}", num));
        let (position, result) = invoke(&parser, "123");
        assert_eq!(result.unwrap(), "Number: 123");
        assert_eq!(position, 3);
    }

    #[test]
    fn test_iterator_methods_with_parser_traits_in_scope() {
        use crate::and::AndExt;
        use crate::filter::FilterExt;

        let doubled: Vec<i64> = [1i64, 2, 3].iter().skip(1).map(|n| n * 2).collect();
        assert_eq!(doubled, vec![4, 6]);

        let even: Vec<i64> = doubled.into_iter().filter(|n| n % 4 == 0).collect();
        assert_eq!(even, vec![4]);

        let parser = item(b'-').then(integer::<i64>()).map(|n: i64| n * 2);
        let (position, result) = invoke(&parser, "-21");
        assert_eq!(result.unwrap(), 42);
        assert_eq!(position, 3);
    }

    #[test]
    fn test_map_chaining() {
        let parser = item(b'5')
            .map(|byte: u8| byte as char)
            .map(|ch: char| ch.to_digit(10).unwrap_or(0))
            .map(|digit: u32| format!("Digit: {}", digit));
        let (_, result) = invoke(&parser, "5");
        assert_eq!(result.unwrap(), "Digit: 5");
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = item(b'A').map(|byte: u8| byte as char);
        let (position, result) = invoke(&parser, "xyz");
        assert!(result.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(item(b'9'), |byte: u8| byte - b'0');
        let (_, result) = invoke(&parser, "9");
        assert_eq!(result.unwrap(), 9);
    }

    #[test]
    fn test_value() {
        let parser = sequence("true").value(true);
        let (position, result) = invoke(&parser, "true");
        assert!(result.unwrap());
        assert_eq!(position, 4);

        let (_, result) = invoke(&parser, "false");
        assert!(result.is_err());
    }
}

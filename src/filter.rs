use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Parser that keeps a result only if a predicate accepts it
///
/// A rejected result fails the parser and rewinds whatever it consumed.
#[derive(Debug, Clone)]
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
    message: Cow<'static, str>,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F, message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            message,
        }
    }
}

impl<S, P, F> Parser<S> for Filter<P, F>
where
    S: Cursor,
    P: Parser<S>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let value = self.parser.parse(state)?;

        if (self.predicate)(&value) {
            Ok(value)
        } else {
            state.set_position(start);
            Err(ParseError::with_message(self.message.clone()))
        }
    }
}

impl<P, F> Combinator for Filter<P, F> {}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Combinator + Sized {
    fn filter<F>(self, predicate: F, message: impl Into<Cow<'static, str>>) -> Filter<Self, F> {
        Filter::new(self, predicate, message.into())
    }
}

impl<P: Combinator> FilterExt for P {}

/// Keep the result of `parser` only when `predicate` holds
pub fn constrain<P, F>(parser: P, predicate: F) -> Filter<P, F> {
    Filter::new(parser, predicate, Cow::Borrowed("constraint not satisfied"))
}

/// Values that can be "nothing": empty collections and strings, zero, `None`
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for &[T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone> IsEmpty for Cow<'_, [T]> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for &str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for Cow<'_, str> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, H> IsEmpty for HashMap<K, V, H> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

macro_rules! impl_is_empty_number {
    ($($t:ty => $zero:expr),*) => {
        $(
            impl IsEmpty for $t {
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_is_empty_number!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    f32 => 0.0, f64 => 0.0
);

/// Parser that rejects an empty result
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty<P> {
    parser: P,
}

impl<S, P> Parser<S> for NotEmpty<P>
where
    S: Cursor,
    P: Parser<S>,
    P::Output: IsEmpty,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let value = self.parser.parse(state)?;

        if value.is_empty_value() {
            state.set_position(start);
            return Err(ParseError::with_message("unexpected empty result"));
        }
        Ok(value)
    }
}

impl<P> Combinator for NotEmpty<P> {}

/// Fail (and rewind) when `parser` yields an empty collection, string, zero or `None`
pub fn not_empty<P>(parser: P) -> NotEmpty<P> {
    NotEmpty { parser }
}

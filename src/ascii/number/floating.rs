use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use std::marker::PhantomData;
use std::str::FromStr;

/// Floating-point types the float parser can produce
pub trait Float: FromStr {}

impl Float for f32 {}
impl Float for f64 {}

/// Parser for ASCII floating-point literals
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]`, for example `123`,
/// `-123.321`, `123e+3` or `123.321e-3`. A `.` or exponent marker that is not
/// followed by digits ends the number in front of it. A lone sign fails
/// without consuming.
#[derive(Debug, Clone, Copy)]
pub struct FloatingParser<N> {
    _target: PhantomData<fn() -> N>,
}

fn ascii_at<S: Cursor>(state: &S, index: usize) -> Option<u8> {
    state.get(index).and_then(Atomic::as_ascii)
}

fn digits_from<S: Cursor>(state: &S, index: usize) -> usize {
    (index..state.end())
        .take_while(|i| ascii_at(state, *i).is_some_and(|b| b.is_ascii_digit()))
        .count()
}

impl<S, N> Parser<S> for FloatingParser<N>
where
    S: Cursor,
    N: Float,
{
    type Output = N;

    fn parse(&self, state: &mut S) -> ParseResult<N> {
        let start = state.position();
        let mut index = start;

        if matches!(ascii_at(state, index), Some(b'-' | b'+')) {
            index += 1;
        }

        let integral = digits_from(state, index);
        if integral == 0 {
            return Err(ParseError::with_message("expected digit"));
        }
        index += integral;

        if ascii_at(state, index) == Some(b'.') {
            let fraction = digits_from(state, index + 1);
            if fraction > 0 {
                index += 1 + fraction;
            }
        }

        if matches!(ascii_at(state, index), Some(b'e' | b'E')) {
            let mut exponent_start = index + 1;
            if matches!(ascii_at(state, exponent_start), Some(b'-' | b'+')) {
                exponent_start += 1;
            }
            let exponent = digits_from(state, exponent_start);
            if exponent > 0 {
                index = exponent_start + exponent;
            }
        }

        let literal: String = (start..index)
            .filter_map(|i| ascii_at(state, i))
            .map(char::from)
            .collect();
        let value = literal
            .parse::<N>()
            .map_err(|_| ParseError::lazy(|| format!("invalid float '{}'", literal)))?;

        state.advance(index - start);
        Ok(value)
    }
}

impl<N> Combinator for FloatingParser<N> {}

/// Parse a float of type `N`, e.g. `floating::<f64>()`
pub fn floating<N: Float>() -> FloatingParser<N> {
    FloatingParser {
        _target: PhantomData,
    }
}

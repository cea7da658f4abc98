use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use std::marker::PhantomData;

/// Primitive integer types the integer parser can produce
pub trait Integer: Copy {
    /// Whether a leading sign is accepted
    const SIGNED: bool;
    const ZERO: Self;

    /// `self * 10 ± digit`, or `None` on overflow
    fn push_digit(self, digit: u8, negative: bool) -> Option<Self>;
}

macro_rules! impl_integer {
    ($signed:expr => $($t:ty),*) => {
        $(
            impl Integer for $t {
                const SIGNED: bool = $signed;
                const ZERO: Self = 0;

                fn push_digit(self, digit: u8, negative: bool) -> Option<Self> {
                    let scaled = self.checked_mul(10)?;
                    if negative {
                        scaled.checked_sub(digit as Self)
                    } else {
                        scaled.checked_add(digit as Self)
                    }
                }
            }
        )*
    };
}

impl_integer!(true => i8, i16, i32, i64, i128, isize);
impl_integer!(false => u8, u16, u32, u64, u128, usize);

/// Parser that matches ASCII integer numbers
///
/// Signed targets accept an optional `+` or `-`; unsigned targets accept no
/// sign at all. Values that overflow the target fail. Nothing is consumed on
/// failure.
#[derive(Debug, Clone, Copy)]
pub struct IntegerParser<N> {
    no_leading_zero: bool,
    _target: PhantomData<fn() -> N>,
}

impl<N> IntegerParser<N> {
    /// Reject numbers like `007`; a lone `0` is still accepted
    pub fn no_leading_zero(mut self) -> Self {
        self.no_leading_zero = true;
        self
    }
}

fn ascii_at<S: Cursor>(state: &S, index: usize) -> Option<u8> {
    state.get(index).and_then(Atomic::as_ascii)
}

impl<S, N> Parser<S> for IntegerParser<N>
where
    S: Cursor,
    N: Integer,
{
    type Output = N;

    fn parse(&self, state: &mut S) -> ParseResult<N> {
        let start = state.position();
        let mut index = start;

        let negative = match ascii_at(state, index) {
            Some(b'-') if N::SIGNED => {
                index += 1;
                true
            }
            Some(b'+') if N::SIGNED => {
                index += 1;
                false
            }
            _ => false,
        };

        let digits_start = index;
        let mut value = N::ZERO;
        while let Some(digit) = ascii_at(state, index).filter(u8::is_ascii_digit) {
            value = value
                .push_digit(digit - b'0', negative)
                .ok_or_else(|| ParseError::with_message("integer out of range"))?;
            index += 1;
        }

        if index == digits_start {
            return Err(ParseError::with_message("expected digit"));
        }
        if self.no_leading_zero
            && index - digits_start > 1
            && ascii_at(state, digits_start) == Some(b'0')
        {
            return Err(ParseError::with_message("leading zero"));
        }

        state.advance(index - start);
        Ok(value)
    }
}

impl<N> Combinator for IntegerParser<N> {}

/// Parse an integer of type `N`, e.g. `integer::<i64>()`
pub fn integer<N: Integer>() -> IntegerParser<N> {
    IntegerParser {
        no_leading_zero: false,
        _target: PhantomData,
    }
}

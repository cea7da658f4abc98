//! Applying plain functions across the results of several parsers.
//!
//! A tuple of parsers is itself a parser: it runs its members left to right,
//! stops at the first failure, and yields the tuple of their results. `lift`
//! then calls an ordinary k-ary function with those results in one go.

use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};

/// A function callable with the elements of the tuple `Args`
pub trait Apply<Args> {
    type Output;

    fn apply(&self, args: Args) -> Self::Output;
}

/// A function callable with `&mut U` followed by the elements of `Args`
pub trait ApplyWithState<U, Args> {
    type Output;

    fn apply_with_state(&self, user_state: &mut U, args: Args) -> Self::Output;
}

macro_rules! impl_tuple {
    ($($P:ident $p:ident),+) => {
        impl<S, $($P),+> Parser<S> for ($($P,)+)
        where
            S: Cursor,
            $($P: Parser<S>,)+
        {
            type Output = ($($P::Output,)+);

            fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
                let ($($p,)+) = self;
                Ok(($($p.parse(state)?,)+))
            }
        }

        impl<$($P),+> Combinator for ($($P,)+) {}

        impl<F, R, $($P),+> Apply<($($P,)+)> for F
        where
            F: Fn($($P),+) -> R,
        {
            type Output = R;

            fn apply(&self, ($($p,)+): ($($P,)+)) -> R {
                self($($p),+)
            }
        }

        impl<F, R, U, $($P),+> ApplyWithState<U, ($($P,)+)> for F
        where
            F: Fn(&mut U, $($P),+) -> R,
        {
            type Output = R;

            fn apply_with_state(&self, user_state: &mut U, ($($p,)+): ($($P,)+)) -> R {
                self(user_state, $($p),+)
            }
        }
    };
}

impl_tuple!(P1 p1);
impl_tuple!(P1 p1, P2 p2);
impl_tuple!(P1 p1, P2 p2, P3 p3);
impl_tuple!(P1 p1, P2 p2, P3 p3, P4 p4);
impl_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5);
impl_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6);
impl_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7);
impl_tuple!(P1 p1, P2 p2, P3 p3, P4 p4, P5 p5, P6 p6, P7 p7, P8 p8);

/// Parser applying a function to the results of a tuple of parsers
#[derive(Debug, Clone, Copy)]
pub struct Lift<F, Ps> {
    function: F,
    parsers: Ps,
}

impl<S, F, Ps> Parser<S> for Lift<F, Ps>
where
    S: Cursor,
    Ps: Parser<S>,
    F: Apply<Ps::Output>,
{
    type Output = F::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let args = self.parsers.parse(state)?;
        Ok(self.function.apply(args))
    }
}

impl<F, Ps> Combinator for Lift<F, Ps> {}

/// Call `function` with the results of `parsers`, run strictly left to right
///
/// ```
/// use monacomb::ascii::integer;
/// use monacomb::item::item;
/// use monacomb::lift::lift;
/// use monacomb::parser::invoke;
///
/// let point = lift(
///     |x: i32, _: u8, y: i32| (x, y),
///     (integer::<i32>(), item(b','), integer::<i32>()),
/// );
/// let (position, result) = invoke(&point, "3,-4");
/// assert_eq!(result.unwrap(), (3, -4));
/// assert_eq!(position, 4);
/// ```
///
/// If a parser fails, the ones after it never run and the cursor stays where
/// the failing parser left it.
pub fn lift<F, Ps>(function: F, parsers: Ps) -> Lift<F, Ps> {
    Lift { function, parsers }
}

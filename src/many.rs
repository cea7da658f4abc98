//! Repetition.
//!
//! Every repeating combinator in the crate is a [`Repeat`]: one loop that
//! applies the item parser until it fails, hands each value to a
//! [`Collector`], and rewinds the attempt that failed. The collectors decide
//! what the repetition produces: a `Vec`, a fixed buffer, a map, a fold, a
//! count, or writes into the user state.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::filter::{NotEmpty, not_empty};
use crate::parser::{Combinator, Parser};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::trace;

/// Receives the values produced by a repetition
pub trait Collector<S: Cursor, O> {
    type Accumulator;
    type Output;

    fn start(&self, state: &mut S) -> Self::Accumulator;

    /// Add one value. An error aborts the whole repetition.
    fn inject(
        &self,
        acc: Self::Accumulator,
        state: &mut S,
        value: O,
    ) -> ParseResult<Self::Accumulator>;

    /// Build the result once the item parser stops matching
    ///
    /// `start` is where the repetition began and `count` the number of
    /// values injected.
    fn finish(
        &self,
        acc: Self::Accumulator,
        state: &mut S,
        start: usize,
        count: usize,
    ) -> Self::Output;
}

/// Placeholder separator for repetitions without one
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSeparator;

impl<S: Cursor> Parser<S> for NoSeparator {
    type Output = ();

    fn parse(&self, _state: &mut S) -> ParseResult<()> {
        Ok(())
    }
}

impl Combinator for NoSeparator {}

/// Zero or more matches of `parser`, optionally separated by `separator`
///
/// The loop stops at the first failed attempt (separator or item) and rewinds
/// to just before it, so the repetition itself never fails unless the
/// collector rejects a value. An iteration that consumes nothing still
/// contributes its value but ends the loop. With a separator the first item
/// is exempt from this, and later rounds are measured across separator plus
/// item: a round that consumes nothing is dropped and ends the loop.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<P, Sep, K> {
    parser: P,
    separator: Option<Sep>,
    collector: K,
}

impl<P, K> Repeat<P, NoSeparator, K> {
    pub fn new(parser: P, collector: K) -> Self {
        Repeat {
            parser,
            separator: None,
            collector,
        }
    }

    /// Require `separator` strictly between consecutive items
    ///
    /// A trailing separator is left unconsumed.
    pub fn separated_by<Sep>(self, separator: Sep) -> Repeat<P, Sep, K> {
        Repeat {
            parser: self.parser,
            separator: Some(separator),
            collector: self.collector,
        }
    }
}

impl<S, P, Sep, K> Parser<S> for Repeat<P, Sep, K>
where
    S: Cursor,
    P: Parser<S>,
    Sep: Parser<S>,
    K: Collector<S, P::Output>,
{
    type Output = K::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let mut acc = self.collector.start(state);
        let mut count = 0;

        loop {
            let checkpoint = state.position();

            if count > 0
                && let Some(separator) = &self.separator
                && separator.parse(state).is_err()
            {
                state.set_position(checkpoint);
                break;
            }

            let value = match self.parser.parse(state) {
                Ok(value) => value,
                Err(_) => {
                    state.set_position(checkpoint);
                    break;
                }
            };

            let progressed = state.position() != checkpoint;
            if !progressed && count > 0 && self.separator.is_some() {
                break;
            }

            acc = match self.collector.inject(acc, state, value) {
                Ok(acc) => acc,
                Err(error) => {
                    state.set_position(start);
                    return Err(error);
                }
            };
            count += 1;

            if !progressed && self.separator.is_none() {
                break;
            }
        }

        trace!(count, start, position = state.position(), "repetition stopped");
        Ok(self.collector.finish(acc, state, start, count))
    }
}

impl<P, Sep, K> Combinator for Repeat<P, Sep, K> {}

/// Collects into a `Vec`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntoVec;

impl<S: Cursor, O> Collector<S, O> for IntoVec {
    type Accumulator = Vec<O>;
    type Output = Vec<O>;

    fn start(&self, _state: &mut S) -> Vec<O> {
        Vec::new()
    }

    fn inject(&self, mut acc: Vec<O>, _state: &mut S, value: O) -> ParseResult<Vec<O>> {
        acc.push(value);
        Ok(acc)
    }

    fn finish(&self, acc: Vec<O>, _state: &mut S, _start: usize, _count: usize) -> Vec<O> {
        acc
    }
}

/// Collects into a fixed-size buffer, failing once it is full
#[derive(Debug, Clone, Copy, Default)]
pub struct IntoArray<const N: usize>;

impl<S: Cursor, O: Default, const N: usize> Collector<S, O> for IntoArray<N> {
    type Accumulator = ([O; N], usize);
    type Output = ([O; N], usize);

    fn start(&self, _state: &mut S) -> Self::Accumulator {
        (std::array::from_fn(|_| O::default()), 0)
    }

    fn inject(
        &self,
        (mut items, len): Self::Accumulator,
        _state: &mut S,
        value: O,
    ) -> ParseResult<Self::Accumulator> {
        match items.get_mut(len) {
            Some(slot) => {
                *slot = value;
                Ok((items, len + 1))
            }
            None => Err(ParseError::lazy(|| {
                format!("repetition exceeded capacity of {N}")
            })),
        }
    }

    fn finish(
        &self,
        acc: Self::Accumulator,
        _state: &mut S,
        _start: usize,
        _count: usize,
    ) -> Self::Output {
        acc
    }
}

/// Collects into any default-constructible, extendable container
pub struct IntoCollection<C> {
    _collection: PhantomData<fn() -> C>,
}

impl<C> Clone for IntoCollection<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for IntoCollection<C> {}

impl<S: Cursor, O, C: Default + Extend<O>> Collector<S, O> for IntoCollection<C> {
    type Accumulator = C;
    type Output = C;

    fn start(&self, _state: &mut S) -> C {
        C::default()
    }

    fn inject(&self, mut acc: C, _state: &mut S, value: O) -> ParseResult<C> {
        acc.extend(std::iter::once(value));
        Ok(acc)
    }

    fn finish(&self, acc: C, _state: &mut S, _start: usize, _count: usize) -> C {
        acc
    }
}

/// Left fold over the matches
#[derive(Debug, Clone, Copy)]
pub struct FoldWith<A, F> {
    init: A,
    function: F,
}

impl<S, O, A, F> Collector<S, O> for FoldWith<A, F>
where
    S: Cursor,
    A: Clone,
    F: Fn(A, O) -> A,
{
    type Accumulator = A;
    type Output = A;

    fn start(&self, _state: &mut S) -> A {
        self.init.clone()
    }

    fn inject(&self, acc: A, _state: &mut S, value: O) -> ParseResult<A> {
        Ok((self.function)(acc, value))
    }

    fn finish(&self, acc: A, _state: &mut S, _start: usize, _count: usize) -> A {
        acc
    }
}

/// Discards the matches and reports how many there were
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<S: Cursor, O> Collector<S, O> for Count {
    type Accumulator = ();
    type Output = usize;

    fn start(&self, _state: &mut S) {}

    fn inject(&self, _acc: (), _state: &mut S, _value: O) -> ParseResult<()> {
        Ok(())
    }

    fn finish(&self, _acc: (), _state: &mut S, _start: usize, count: usize) -> usize {
        count
    }
}

/// Hands every match to a callback and yields the consumed input
#[derive(Debug, Clone, Copy)]
pub struct ForEach<F> {
    function: F,
}

impl<S, O, F> Collector<S, O> for ForEach<F>
where
    S: Cursor,
    F: Fn(O),
{
    type Accumulator = ();
    type Output = S::Converted;

    fn start(&self, _state: &mut S) {}

    fn inject(&self, _acc: (), _state: &mut S, value: O) -> ParseResult<()> {
        (self.function)(value);
        Ok(())
    }

    fn finish(&self, _acc: (), state: &mut S, start: usize, _count: usize) -> S::Converted {
        state.convert(start, state.position())
    }
}

/// Hands every match to a callback together with the user state
#[derive(Debug, Clone, Copy)]
pub struct WithState<F> {
    function: F,
}

impl<S, O, F> Collector<S, O> for WithState<F>
where
    S: Cursor,
    F: Fn(&mut S::UserState, O),
{
    type Accumulator = ();
    type Output = S::Converted;

    fn start(&self, _state: &mut S) {}

    fn inject(&self, _acc: (), state: &mut S, value: O) -> ParseResult<()> {
        (self.function)(state.user_state_mut(), value);
        Ok(())
    }

    fn finish(&self, _acc: (), state: &mut S, start: usize, _count: usize) -> S::Converted {
        state.convert(start, state.position())
    }
}

/// Extends a container reached through `accessor` in the user state
pub struct IntoUserState<A, C> {
    accessor: A,
    _container: PhantomData<fn() -> C>,
}

impl<A: Clone, C> Clone for IntoUserState<A, C> {
    fn clone(&self) -> Self {
        IntoUserState {
            accessor: self.accessor.clone(),
            _container: PhantomData,
        }
    }
}

impl<S, O, A, C> Collector<S, O> for IntoUserState<A, C>
where
    S: Cursor,
    A: Fn(&mut S::UserState) -> &mut C,
    C: Extend<O>,
{
    type Accumulator = ();
    type Output = usize;

    fn start(&self, _state: &mut S) {}

    fn inject(&self, _acc: (), state: &mut S, value: O) -> ParseResult<()> {
        (self.accessor)(state.user_state_mut()).extend(std::iter::once(value));
        Ok(())
    }

    fn finish(&self, _acc: (), _state: &mut S, _start: usize, count: usize) -> usize {
        count
    }
}

/// Caller-defined accumulation: `init` builds the seed, `inject` folds a value in
#[derive(Debug, Clone, Copy)]
pub struct General<I, F> {
    init: I,
    inject: F,
}

impl<S, O, A, I, F> Collector<S, O> for General<I, F>
where
    S: Cursor,
    I: Fn() -> A,
    F: Fn(A, O) -> ParseResult<A>,
{
    type Accumulator = A;
    type Output = A;

    fn start(&self, _state: &mut S) -> A {
        (self.init)()
    }

    fn inject(&self, acc: A, _state: &mut S, value: O) -> ParseResult<A> {
        (self.inject)(acc, value)
    }

    fn finish(&self, acc: A, _state: &mut S, _start: usize, _count: usize) -> A {
        acc
    }
}

/// Zero or more matches collected into a `Vec`
///
/// ```
/// use monacomb::ascii::integer;
/// use monacomb::item::item;
/// use monacomb::many::many;
/// use monacomb::parser::invoke;
///
/// let list = many(integer::<u32>()).separated_by(item(b','));
/// let (position, result) = invoke(&list, "1,2,3,");
/// assert_eq!(result.unwrap(), vec![1, 2, 3]);
/// assert_eq!(position, 5);
/// ```
pub fn many<P>(parser: P) -> Repeat<P, NoSeparator, IntoVec> {
    Repeat::new(parser, IntoVec)
}

/// One or more matches collected into a `Vec`
pub fn some<P>(parser: P) -> NotEmpty<Repeat<P, NoSeparator, IntoVec>> {
    not_empty(many(parser))
}

/// Up to `N` matches in a fixed buffer, with the number actually filled
///
/// Fails, consuming nothing, if there are more than `N` matches.
pub fn many_to_array<const N: usize, P>(parser: P) -> Repeat<P, NoSeparator, IntoArray<N>> {
    Repeat::new(parser, IntoArray)
}

/// Zero or more matches collected into any `C: Default + Extend`
pub fn many_into<C, P>(parser: P) -> Repeat<P, NoSeparator, IntoCollection<C>> {
    Repeat::new(
        parser,
        IntoCollection {
            _collection: PhantomData,
        },
    )
}

/// Key/value matches collected into a `HashMap`; a repeated key keeps the last value
pub fn many_to_map<K, V, P>(parser: P) -> Repeat<P, NoSeparator, IntoCollection<HashMap<K, V>>>
where
    K: Eq + Hash,
{
    many_into(parser)
}

/// Left fold of the matches, starting from `init`
pub fn fold<P, A, F>(parser: P, init: A, function: F) -> Repeat<P, NoSeparator, FoldWith<A, F>> {
    Repeat::new(parser, FoldWith { init, function })
}

/// Number of matches
pub fn many_count<P>(parser: P) -> Repeat<P, NoSeparator, Count> {
    Repeat::new(parser, Count)
}

/// Call `function` on every match; yields the input consumed by all of them
pub fn many_f<P, F>(parser: P, function: F) -> Repeat<P, NoSeparator, ForEach<F>> {
    Repeat::new(parser, ForEach { function })
}

/// Call `function(user_state, value)` on every match; yields the consumed input
pub fn many_state<P, F>(parser: P, function: F) -> Repeat<P, NoSeparator, WithState<F>> {
    Repeat::new(parser, WithState { function })
}

/// Extend the container `accessor` picks out of the user state; yields the count
pub fn many_to_state<U, C, A, P>(
    accessor: A,
    parser: P,
) -> Repeat<P, NoSeparator, IntoUserState<A, C>>
where
    A: Fn(&mut U) -> &mut C,
{
    Repeat::new(
        parser,
        IntoUserState {
            accessor,
            _container: PhantomData,
        },
    )
}

/// Extend the user state itself; yields the count
pub fn many_to_state_direct<U, P>(
    parser: P,
) -> Repeat<P, NoSeparator, IntoUserState<fn(&mut U) -> &mut U, U>> {
    fn whole<U>(user_state: &mut U) -> &mut U {
        user_state
    }
    many_to_state(whole::<U> as fn(&mut U) -> &mut U, parser)
}

/// Repetition with a caller-defined accumulator
///
/// `inject` may reject a value, which fails the whole repetition and rewinds
/// to where it began.
pub fn many_general<P, I, F>(
    parser: P,
    init: I,
    inject: F,
) -> Repeat<P, NoSeparator, General<I, F>> {
    Repeat::new(parser, General { init, inject })
}

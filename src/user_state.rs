//! Combinators that read or write the caller's user state.
//!
//! The user state is whatever value was handed to
//! [`invoke_with_state`](crate::parser::invoke_with_state); parsers reach it
//! through [`Cursor::user_state_mut`].

use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::lift::{Apply, ApplyWithState};
use crate::parser::{Combinator, Parser};
use std::marker::PhantomData;

/// Calls a function on the user state without consuming input
#[derive(Debug, Clone, Copy)]
pub struct ModifyState<F> {
    function: F,
}

impl<S, F, R> Parser<S> for ModifyState<F>
where
    S: Cursor,
    F: Fn(&mut S::UserState) -> R,
{
    type Output = R;

    fn parse(&self, state: &mut S) -> ParseResult<R> {
        Ok((self.function)(state.user_state_mut()))
    }
}

impl<F> Combinator for ModifyState<F> {}

/// Apply `function` to the user state and succeed with its result
///
/// A function returning `()` makes this a plain side effect.
pub fn modify_state<F>(function: F) -> ModifyState<F> {
    ModifyState { function }
}

/// Stores a copy of each successful result in the user state
#[derive(Debug, Clone, Copy)]
pub struct SetInState<P, A> {
    parser: P,
    accessor: A,
}

impl<S, P, A> Parser<S> for SetInState<P, A>
where
    S: Cursor,
    P: Parser<S>,
    P::Output: Clone,
    A: Fn(&mut S::UserState) -> &mut P::Output,
{
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let value = self.parser.parse(state)?;
        *(self.accessor)(state.user_state_mut()) = value.clone();
        Ok(value)
    }
}

impl<P, A> Combinator for SetInState<P, A> {}

/// Run `parser` and, only if it succeeds, write its value where `accessor` points
pub fn set_in_state<U, T, P, A>(parser: P, accessor: A) -> SetInState<P, A>
where
    A: Fn(&mut U) -> &mut T,
{
    SetInState { parser, accessor }
}

/// Lifts a function over several parsers, handing it the user state first
#[derive(Debug, Clone, Copy)]
pub struct ApplyToState<F, Ps> {
    function: F,
    parsers: Ps,
}

impl<S, F, Ps> Parser<S> for ApplyToState<F, Ps>
where
    S: Cursor,
    Ps: Parser<S>,
    F: ApplyWithState<S::UserState, Ps::Output>,
{
    type Output = F::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let args = self.parsers.parse(state)?;
        Ok(self.function.apply_with_state(state.user_state_mut(), args))
    }
}

impl<F, Ps> Combinator for ApplyToState<F, Ps> {}

/// Run `parsers` left to right, then call `function(user_state, results...)`
///
/// Sequencing follows [`lift`](crate::lift::lift): the first failure aborts
/// and `function` is not called.
pub fn apply_to_state<F, Ps>(function: F, parsers: Ps) -> ApplyToState<F, Ps> {
    ApplyToState { function, parsers }
}

/// Builds a value from several parsers and appends it to a container `T` in the user state
pub struct EmplaceToState<A, C, Ps, T> {
    accessor: A,
    constructor: C,
    parsers: Ps,
    _container: PhantomData<fn() -> T>,
}

impl<A: Clone, C: Clone, Ps: Clone, T> Clone for EmplaceToState<A, C, Ps, T> {
    fn clone(&self) -> Self {
        EmplaceToState {
            accessor: self.accessor.clone(),
            constructor: self.constructor.clone(),
            parsers: self.parsers.clone(),
            _container: PhantomData,
        }
    }
}

impl<S, A, C, Ps, T> Parser<S> for EmplaceToState<A, C, Ps, T>
where
    S: Cursor,
    Ps: Parser<S>,
    C: Apply<Ps::Output>,
    A: Fn(&mut S::UserState) -> &mut T,
    T: Extend<C::Output>,
{
    type Output = ();

    fn parse(&self, state: &mut S) -> ParseResult<()> {
        let args = self.parsers.parse(state)?;
        let value = self.constructor.apply(args);
        (self.accessor)(state.user_state_mut()).extend(std::iter::once(value));
        Ok(())
    }
}

impl<A, C, Ps, T> Combinator for EmplaceToState<A, C, Ps, T> {}

/// Append `constructor(results...)` to the container `accessor` picks out of the user state
pub fn emplace_to_state<U, T, A, C, Ps>(
    accessor: A,
    constructor: C,
    parsers: Ps,
) -> EmplaceToState<A, C, Ps, T>
where
    A: Fn(&mut U) -> &mut T,
{
    EmplaceToState {
        accessor,
        constructor,
        parsers,
        _container: PhantomData,
    }
}

/// Append `constructor(results...)` to the user state itself
pub fn emplace_to_state_direct<U, C, Ps>(
    constructor: C,
    parsers: Ps,
) -> EmplaceToState<fn(&mut U) -> &mut U, C, Ps, U> {
    fn whole<U>(user_state: &mut U) -> &mut U {
        user_state
    }
    emplace_to_state(whole::<U> as fn(&mut U) -> &mut U, constructor, parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::ascii::{integer, whitespace};
    use crate::item::item;
    use crate::many::many;
    use crate::parser::invoke_with_state;
    use crate::sequence::sequence;
    use crate::until::until_item;
    use std::borrow::Cow;
    use std::collections::BTreeMap;

    #[derive(Debug, Default)]
    struct Config {
        port: u16,
        entries: BTreeMap<String, String>,
        points: Vec<(i32, i32)>,
    }

    #[test]
    fn test_modify_state_counter() {
        let tick = modify_state(|n: &mut u32| {
            *n += 1;
            *n
        });
        let parser = item(b'a').then(tick).and(item(b'b').then(tick));

        let (state, result) = invoke_with_state(&parser, "ab", 10u32);
        assert_eq!(result.unwrap(), (11, 12));
        assert_eq!(state.position(), 2);
        assert_eq!(*state.user_state(), 12);
    }

    #[test]
    fn test_modify_state_unit() {
        let parser = modify_state(|log: &mut Vec<&str>| log.push("seen"));
        let (state, result) = invoke_with_state(&parser, "", Vec::new());
        assert_eq!(result.unwrap(), ());
        assert_eq!(state.into_user_state(), vec!["seen"]);
    }

    #[test]
    fn test_set_in_state() {
        let port = sequence("port=").then(integer::<u16>());
        let parser = set_in_state(port, |c: &mut Config| &mut c.port);

        let (state, result) = invoke_with_state(&parser, "port=8080", Config::default());
        assert_eq!(result.unwrap(), 8080);
        assert_eq!(state.user_state().port, 8080);
    }

    #[test]
    fn test_set_in_state_only_on_success() {
        let parser = set_in_state(integer::<u16>(), |c: &mut Config| &mut c.port);
        let initial = Config {
            port: 22,
            ..Config::default()
        };

        let (state, result) = invoke_with_state(&parser, "99999", initial);
        assert!(result.is_err());
        assert_eq!(state.position(), 0);
        assert_eq!(state.user_state().port, 22);
    }

    #[test]
    fn test_apply_to_state_records() {
        let add = |c: &mut Config, key: Cow<str>, value: Cow<str>| {
            c.entries.insert(key.into_owned(), value.into_owned());
        };
        let record = sequence("Entry:").then(apply_to_state(
            add,
            (until_item(b':'), until_item(b';')),
        ));
        let parser = many(record.skip(whitespace()));

        let (state, result) =
            invoke_with_state(&parser, "Entry:a:1; Entry:b:2;", Config::default());
        assert_eq!(result.unwrap().len(), 2);
        assert_eq!(state.position(), 21);

        let entries = &state.user_state().entries;
        assert_eq!(entries["a"], "1");
        assert_eq!(entries["b"], "2");
    }

    #[test]
    fn test_apply_to_state_aborts_on_failure() {
        let add = |c: &mut Config, key: Cow<str>, value: Cow<str>| {
            c.entries.insert(key.into_owned(), value.into_owned());
        };
        let parser = apply_to_state(add, (until_item(b':'), until_item(b';')));

        let (state, result) = invoke_with_state(&parser, "a:1", Config::default());
        assert!(result.is_err());
        assert_eq!(state.position(), 2);
        assert!(state.user_state().entries.is_empty());
    }

    #[test]
    fn test_emplace_to_state() {
        let point = |x: i32, _: u8, y: i32| (x, y);
        let parser = many(
            emplace_to_state(
                |c: &mut Config| &mut c.points,
                point,
                (integer::<i32>(), item(b','), integer::<i32>()),
            )
            .skip(whitespace()),
        );

        let (state, result) = invoke_with_state(&parser, "1,2 -3,4", Config::default());
        assert_eq!(result.unwrap().len(), 2);
        assert_eq!(state.user_state().points, vec![(1, 2), (-3, 4)]);
    }

    #[test]
    fn test_emplace_to_state_direct() {
        let parser = many(
            emplace_to_state_direct(|n: i64| n * n, (integer::<i64>(),)).skip(whitespace()),
        );
        let (state, result) = invoke_with_state(&parser, "1 2 3", Vec::<i64>::new());
        assert_eq!(result.unwrap().len(), 3);
        assert_eq!(state.into_user_state(), vec![1, 4, 9]);
    }
}

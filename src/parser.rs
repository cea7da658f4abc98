use crate::cursor::Cursor;
use crate::cursors::{Input, State};
use crate::error::ParseResult;
use std::rc::Rc;
use tracing::{debug, trace};

/// Marker for parser types that does not depend on the cursor
///
/// The method-style constructors (`.then()`, `.map()`, `.or()` and friends)
/// are implemented for every `Combinator`, so a grammar can be chained
/// together before anything has decided which cursor it will run on.
pub trait Combinator {}

impl<P: Combinator + ?Sized> Combinator for &P {}
impl<P: Combinator + ?Sized> Combinator for Box<P> {}
impl<P: Combinator + ?Sized> Combinator for Rc<P> {}

/// Core parser trait for parser combinators
///
/// A parser is generic over the cursor `S` it runs on, so the same primitive
/// works for byte, character, and token input and for any user state.
pub trait Parser<S: Cursor>: Combinator {
    type Output;

    /// Attempt to parse from the current cursor position
    ///
    /// On success the cursor has moved past whatever was consumed. Primitive
    /// parsers and backtracking combinators leave the cursor untouched on
    /// failure; plain sequencing may leave it after a partial match.
    fn parse(&self, state: &mut S) -> ParseResult<Self::Output>;
}

impl<S: Cursor, P: Parser<S> + ?Sized> Parser<S> for &P {
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        (**self).parse(state)
    }
}

impl<S: Cursor, P: Parser<S> + ?Sized> Parser<S> for Box<P> {
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        (**self).parse(state)
    }
}

impl<S: Cursor, P: Parser<S> + ?Sized> Parser<S> for Rc<P> {
    type Output = P::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        (**self).parse(state)
    }
}

/// A type-erased parser
pub type BoxedParser<'a, S, O> = Box<dyn Parser<S, Output = O> + 'a>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Combinator + Sized {
    fn boxed<'a, S>(self) -> BoxedParser<'a, S, <Self as Parser<S>>::Output>
    where
        S: Cursor,
        Self: Parser<S> + 'a,
    {
        Box::new(self)
    }
}

impl<P: Combinator> BoxedExt for P {}

/// Parser built from a plain function over the cursor
#[derive(Clone)]
pub struct FromFn<F> {
    function: F,
}

impl<S, O, F> Parser<S> for FromFn<F>
where
    S: Cursor,
    F: Fn(&mut S) -> ParseResult<O>,
{
    type Output = O;

    fn parse(&self, state: &mut S) -> ParseResult<O> {
        (self.function)(state)
    }
}

impl<F> Combinator for FromFn<F> {}

/// Wrap a custom parsing function
///
/// The function gets full access to the cursor and the user state. It should
/// restore the position itself if it fails after consuming.
pub fn from_fn<S, O, F>(function: F) -> FromFn<F>
where
    S: Cursor,
    F: Fn(&mut S) -> ParseResult<O>,
{
    FromFn { function }
}

/// Run a parser over `input` and report where it stopped
pub fn invoke<'code, I, P>(parser: &P, input: I) -> (usize, ParseResult<P::Output>)
where
    I: Input<'code>,
    P: Parser<State<'code, I::Element, (), I::Conversion>>,
{
    let (state, result) = invoke_with_state(parser, input, ());
    (state.position(), result)
}

/// Run a parser over `input` with an initial user state, returning the final state
pub fn invoke_with_state<'code, I, U, P>(
    parser: &P,
    input: I,
    user_state: U,
) -> (
    State<'code, I::Element, U, I::Conversion>,
    ParseResult<P::Output>,
)
where
    I: Input<'code>,
    P: Parser<State<'code, I::Element, U, I::Conversion>>,
{
    let mut state = State::new(input.elements(), user_state);
    trace!(end = state.end(), "parse started");

    let result = parser.parse(&mut state);
    match &result {
        Ok(_) => trace!(position = state.position(), end = state.end(), "parse finished"),
        Err(error) => debug!(position = state.position(), %error, "parse failed"),
    }

    (state, result)
}

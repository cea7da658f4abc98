use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::{Combinator, Parser};
use crate::range::RangeParser;
use std::ops::Range;

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// On failure the cursor is restored to where `open` started.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
#[derive(Debug, Clone, Copy)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<S, P1, P2, P3> Parser<S> for Between<P1, P2, P3>
where
    S: Cursor,
    P1: Parser<S>,
    P2: Parser<S>,
    P3: Parser<S>,
{
    type Output = P2::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let result = self
            .open
            .parse(state)
            .and_then(|_| self.content.parse(state))
            .and_then(|value| self.close.parse(state).map(|_| value));

        if result.is_err() {
            state.set_position(start);
        }
        result
    }
}

impl<P1, P2, P3> Combinator for Between<P1, P2, P3> {}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3> {
    Between {
        open,
        content,
        close,
    }
}

/// A bracket marker recognised at an absolute index
pub trait Marker<S: Cursor> {
    /// Length of the marker if it occurs at `index`
    fn matches_at(&self, state: &S, index: usize) -> Option<usize>;
}

#[derive(Debug, Clone, Copy)]
pub struct ItemMarker<T>(T);

impl<S: Cursor<Element = T>, T: PartialEq> Marker<S> for ItemMarker<T> {
    fn matches_at(&self, state: &S, index: usize) -> Option<usize> {
        (state.get(index)? == self.0).then_some(1)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SequenceMarker<L>(L);

impl<S: Cursor, L: AsRef<[S::Element]>> Marker<S> for SequenceMarker<L> {
    fn matches_at(&self, state: &S, index: usize) -> Option<usize> {
        let marker = self.0.as_ref();
        if marker.is_empty() {
            return None;
        }
        marker
            .iter()
            .enumerate()
            .all(|(k, expected)| state.get(index + k) == Some(*expected))
            .then_some(marker.len())
    }
}

/// Parser extracting the content between an open and a close marker
///
/// Without `nested()` the first close marker ends the match. With it, inner
/// open markers raise the depth so that only the balancing close marker ends
/// it. When open and close are the same marker, the close check wins and
/// nesting has no effect.
#[derive(Debug, Clone, Copy)]
pub struct Brackets<O, C> {
    open: O,
    close: C,
    nested: bool,
    include: bool,
}

impl<O, C> Brackets<O, C> {
    pub fn new(open: O, close: C) -> Self {
        Brackets {
            open,
            close,
            nested: false,
            include: false,
        }
    }

    /// Track open/close depth
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Return the markers along with the content
    pub fn include(mut self) -> Self {
        self.include = true;
        self
    }
}

impl<S, O, C> RangeParser<S> for Brackets<O, C>
where
    S: Cursor,
    O: Marker<S>,
    C: Marker<S>,
{
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>> {
        let start = state.position();
        let open_len = self
            .open
            .matches_at(state, start)
            .ok_or_else(|| ParseError::with_message("expected opening bracket"))?;

        let mut index = start + open_len;
        let mut depth = 1usize;
        let closing = loop {
            if index >= state.end() {
                return Err(ParseError::with_message("unbalanced brackets"));
            }
            if let Some(len) = self.close.matches_at(state, index) {
                depth -= 1;
                if depth == 0 {
                    break index..index + len;
                }
                index += len;
            } else if let Some(len) = self.open.matches_at(state, index).filter(|_| self.nested) {
                depth += 1;
                index += len;
            } else {
                index += 1;
            }
        };

        state.advance(closing.end - start);
        if self.include {
            Ok(start..closing.end)
        } else {
            Ok(start + open_len..closing.start)
        }
    }
}

impl<S, O, C> Parser<S> for Brackets<O, C>
where
    S: Cursor,
    O: Marker<S>,
    C: Marker<S>,
{
    type Output = S::Converted;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let range = self.parse_range(state)?;
        Ok(state.convert(range.start, range.end))
    }
}

impl<O, C> Combinator for Brackets<O, C> {}

/// Extract what lies between the `open` and `close` elements
pub fn between_items<T>(open: T, close: T) -> Brackets<ItemMarker<T>, ItemMarker<T>> {
    Brackets::new(ItemMarker(open), ItemMarker(close))
}

/// Extract what lies between the `open` and `close` runs of elements
pub fn between_sequences<L1, L2>(
    open: L1,
    close: L2,
) -> Brackets<SequenceMarker<L1>, SequenceMarker<L2>> {
    Brackets::new(SequenceMarker(open), SequenceMarker(close))
}

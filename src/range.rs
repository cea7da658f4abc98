use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::{Combinator, Parser};
use std::ops::Range;

/// Parsers whose match is a contiguous range of the input
///
/// Every primitive that returns converted input (`sequence`, `consume`,
/// `until_*`, `while_*`, `between_*`) implements this, which lets [`within`]
/// re-parse the matched range in place.
pub trait RangeParser<S: Cursor> {
    /// Match and return the absolute `[start, end)` of the interesting range
    ///
    /// The range need not coincide with what was consumed: bracket
    /// extraction returns the content without its markers.
    fn parse_range(&self, state: &mut S) -> ParseResult<Range<usize>>;
}

/// Parser that runs `inner` on the range matched by `outer`
#[derive(Debug, Clone, Copy)]
pub struct Within<P1, P2> {
    outer: P1,
    inner: P2,
}

impl<S, P1, P2> Parser<S> for Within<P1, P2>
where
    S: Cursor,
    P1: RangeParser<S>,
    P2: Parser<S>,
{
    type Output = P2::Output;

    fn parse(&self, state: &mut S) -> ParseResult<Self::Output> {
        let start = state.position();
        let range = self.outer.parse_range(state)?;
        let after = state.position();
        let end = state.end();

        state.set_position(range.start);
        state.set_end(range.end);
        let result = self.inner.parse(state);
        state.set_end(end);

        match result {
            Ok(value) => {
                state.set_position(after);
                Ok(value)
            }
            Err(error) => {
                state.set_position(start);
                Err(error)
            }
        }
    }
}

impl<P1, P2> Combinator for Within<P1, P2> {}

/// Parse the range matched by `outer` with `inner`
///
/// `inner` sees only that range, its end included; it does not have to
/// consume all of it. Afterwards the cursor sits wherever `outer` left it.
pub fn within<P1, P2>(outer: P1, inner: P2) -> Within<P1, P2> {
    Within { outer, inner }
}

//! # monacomb - Generic Parser Combinators
//!
//! monacomb builds recursive-descent parsers by composing small parsing
//! functions. Parsers are ordinary values: combine them with `and`, `or`,
//! `bind`, `lift` or `many`, then run the result with [`invoke`] or
//! [`invoke_with_state`].
//!
//! - **Any element type**: bytes, `char`s, or your own token enum, as long as
//!   it implements [`Atomic`]
//! - **User state**: an arbitrary value threaded through the parse and
//!   reachable from any parser
//! - **No phantom consumption**: primitives and backtracking combinators
//!   leave the cursor untouched when they fail
//! - **Bounded repetition**: a repetition whose item matches nothing stops
//!   instead of looping
//!
//! Error messages are controlled by the `diagnostics` feature (on by
//! default). Without it [`ParseError`] is zero-sized and no message is ever
//! formatted.
//!
//! ```
//! use monacomb::prelude::*;
//!
//! let list = between(
//!     item(b'['),
//!     many(integer::<i32>()).separated_by(item(b',').skip(whitespace())),
//!     item(b']'),
//! );
//!
//! let (position, result) = invoke(&list, "[1, -2, 3]");
//! assert_eq!(result.unwrap(), vec![1, -2, 3]);
//! assert_eq!(position, 10);
//! ```

pub mod and;
pub mod ascii;
pub mod atomic;
pub mod between;
pub mod bind;
pub mod chain;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod item;
pub mod lazy;
pub mod lift;
pub mod lookahead;
pub mod many;
pub mod map;
pub mod map_err;
pub mod optional;
pub mod or;
pub mod parser;
pub mod position;
pub mod pure;
pub mod range;
pub mod recursive;
pub mod sequence;
pub mod take_while;
pub mod until;
pub mod user_state;

pub use atomic::Atomic;
pub use cursor::Cursor;
pub use cursors::{Conversion, Input, Owned, Slices, State, Text};
pub use error::{ParseError, ParseResult};
pub use parser::{BoxedParser, Combinator, Parser, invoke, invoke_with_state};
pub use position::Span;

/// Everything needed to write a grammar
pub mod prelude {
    pub use crate::and::{AndExt, and, skip, then};
    pub use crate::ascii::{digit, floating, integer, whitespace};
    pub use crate::between::{between, between_items, between_sequences};
    pub use crate::bind::{BindExt, bind};
    pub use crate::chain::chain;
    pub use crate::filter::{FilterExt, constrain, not_empty};
    pub use crate::item::{any_item, item, item_if, item_if_not, item_range};
    pub use crate::lazy::lazy;
    pub use crate::lift::lift;
    pub use crate::lookahead::{LookAheadExt, attempt, look_ahead, not};
    pub use crate::many::{
        fold, many, many_count, many_f, many_general, many_into, many_state, many_to_array,
        many_to_map, many_to_state, many_to_state_direct, some,
    };
    pub use crate::map::{MapExt, map};
    pub use crate::map_err::{MapErrExt, change_error, map_err};
    pub use crate::optional::{OptionalExt, optional, succeed};
    pub use crate::or::{OrExt, first, or, probe};
    pub use crate::parser::{BoxedExt, from_fn};
    pub use crate::position::{PositionExt, get_parsed, spanned};
    pub use crate::pure::{cond, empty, fail, pure, success};
    pub use crate::range::within;
    pub use crate::recursive::{Recursive, RecursiveHandle, recursive};
    pub use crate::sequence::{consume, rest, sequence};
    pub use crate::take_while::{while_if, while_in};
    pub use crate::until::{until, until_if, until_item, until_sequence};
    pub use crate::user_state::{
        apply_to_state, emplace_to_state, emplace_to_state_direct, modify_state, set_in_state,
    };
    pub use crate::{
        Atomic, BoxedParser, Combinator, Cursor, ParseError, ParseResult, Parser, Span, State,
        Text, invoke, invoke_with_state,
    };
}

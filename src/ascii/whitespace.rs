use crate::atomic::Atomic;
use crate::take_while::{WhileIf, while_if};

fn is_whitespace<T: Atomic>(element: T) -> bool {
    matches!(element.as_ascii(), Some(b' ' | b'\t' | b'\n' | b'\r'))
}

/// Parser that skips ASCII whitespace (space, tab, newline, carriage return)
///
/// Always succeeds and returns the skipped run.
pub fn whitespace<T: Atomic>() -> WhileIf<fn(T) -> bool> {
    while_if(is_whitespace::<T> as fn(T) -> bool)
}

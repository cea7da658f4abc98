use crate::atomic::Atomic;
use crate::item::{ItemIf, item_if};

fn is_digit<T: Atomic>(element: T) -> bool {
    element.as_ascii().is_some_and(|b| b.is_ascii_digit())
}

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<T: Atomic>() -> ItemIf<fn(T) -> bool> {
    item_if(is_digit::<T> as fn(T) -> bool)
}

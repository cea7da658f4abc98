use crate::atomic::Atomic;

/// Generic cursor trait for parser combinators
///
/// A cursor is a position over a finite, randomly addressable sequence of
/// elements, bounded by `end`, together with the caller's user state. Every
/// parser receives the cursor by `&mut` and moves it forward as it consumes
/// input; backtracking combinators save `position()` and restore it with
/// `set_position()`, which is a plain `usize` copy.
pub trait Cursor {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// What `convert` materializes a sub-range into
    type Converted;

    /// Auxiliary state threaded through the whole parse
    type UserState;

    /// Get the current position in the sequence
    fn position(&self) -> usize;

    /// Jump to a previously saved position
    ///
    /// Only backtracking combinators should move the cursor backwards.
    fn set_position(&mut self, position: usize);

    /// Upper bound of the addressable input
    fn end(&self) -> usize;

    /// Narrow (or widen back) the addressable window
    fn set_end(&mut self, end: usize);

    /// Element at an absolute index, if it lies before `end`
    fn get(&self, index: usize) -> Option<Self::Element>;

    /// Elements between the current position and `end`
    fn remaining(&self) -> &[Self::Element];

    /// Materialize `[begin, end)` through the cursor's conversion policy
    fn convert(&self, begin: usize, end: usize) -> Self::Converted;

    fn user_state_mut(&mut self) -> &mut Self::UserState;

    /// Check if the cursor is at the end of the sequence
    fn is_empty(&self) -> bool {
        self.position() >= self.end()
    }

    fn has_at_least(&self, n: usize) -> bool {
        self.end().saturating_sub(self.position()) >= n
    }

    /// Peek at the current element
    fn front(&self) -> Option<Self::Element> {
        self.get(self.position())
    }

    /// Move forward by `n` elements, never past `end`
    fn advance(&mut self, n: usize) {
        let target = (self.position() + n).min(self.end());
        self.set_position(target);
    }
}

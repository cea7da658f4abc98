use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::conversion::{Conversion, Slices};
use std::marker::PhantomData;

/// Parse state: a cursor over borrowed input plus the caller's user state
///
/// `T` is the element type, `U` the user state and `C` the conversion policy
/// used by range-returning parsers.
#[derive(Debug)]
pub struct State<'code, T, U = (), C = Slices> {
    input: &'code [T],
    position: usize,
    end: usize,
    user_state: U,
    _conversion: PhantomData<C>,
}

impl<'code, T, U, C> State<'code, T, U, C> {
    pub fn new(input: &'code [T], user_state: U) -> Self {
        Self {
            input,
            position: 0,
            end: input.len(),
            user_state,
            _conversion: PhantomData,
        }
    }

    /// The whole input, regardless of position
    pub fn input(&self) -> &'code [T] {
        self.input
    }

    pub fn user_state(&self) -> &U {
        &self.user_state
    }

    pub fn into_user_state(self) -> U {
        self.user_state
    }
}

impl<'code, T, U, C> Cursor for State<'code, T, U, C>
where
    T: Atomic,
    C: Conversion<'code, T>,
{
    type Element = T;
    type Converted = C::Output;
    type UserState = U;

    fn position(&self) -> usize {
        self.position
    }

    fn set_position(&mut self, position: usize) {
        debug_assert!(position <= self.end, "cursor moved past end");
        self.position = position.min(self.end);
    }

    fn end(&self) -> usize {
        self.end
    }

    fn set_end(&mut self, end: usize) {
        self.end = end.min(self.input.len());
        self.position = self.position.min(self.end);
    }

    fn get(&self, index: usize) -> Option<T> {
        if index < self.end {
            self.input.get(index).copied()
        } else {
            None
        }
    }

    fn remaining(&self) -> &[T] {
        &self.input[self.position..self.end]
    }

    fn convert(&self, begin: usize, end: usize) -> C::Output {
        C::convert(&self.input[begin..end])
    }

    fn user_state_mut(&mut self) -> &mut U {
        &mut self.user_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::conversion::Text;

    #[test]
    fn test_basic_operations_u8() {
        let mut state: State<u8> = State::new(b"hello", ());

        assert_eq!(state.front(), Some(b'h'));
        state.advance(1);
        assert_eq!(state.front(), Some(b'e'));
        assert_eq!(state.position(), 1);
        assert_eq!(state.remaining(), b"ello");
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut state: State<u8> = State::new(b"ab", ());

        assert!(state.has_at_least(2));
        assert!(!state.has_at_least(3));
        state.advance(2);
        assert!(state.is_empty());
        assert_eq!(state.front(), None);
    }

    #[test]
    fn test_empty_data_u8() {
        let state: State<u8> = State::new(b"", ());

        assert!(state.is_empty());
        assert!(state.has_at_least(0));
        assert_eq!(state.front(), None);
    }

    #[test]
    fn test_save_and_restore() {
        let mut state: State<u8> = State::new(b"abcd", ());

        let saved = state.position();
        state.advance(3);
        assert_eq!(state.front(), Some(b'd'));
        state.set_position(saved);
        assert_eq!(state.front(), Some(b'a'));
    }

    #[test]
    fn test_narrowed_window() {
        let mut state: State<u8> = State::new(b"abcdef", ());

        state.advance(1);
        state.set_end(3);
        assert_eq!(state.remaining(), b"bc");
        assert_eq!(state.get(3), None);
        state.advance(10);
        assert_eq!(state.position(), 3);

        state.set_end(6);
        assert_eq!(state.remaining(), b"def");
    }

    #[test]
    fn test_convert_policies() {
        let slices: State<u8> = State::new(b"abc", ());
        assert_eq!(slices.convert(1, 3), b"bc");

        let text: State<u8, (), Text> = State::new(b"abc", ());
        assert_eq!(text.convert(0, 2), "ab");
    }

    #[test]
    fn test_user_state() {
        let mut state: State<u32, Vec<u32>> = State::new(&[1, 2, 3], Vec::new());

        state.user_state_mut().push(7);
        assert_eq!(state.user_state(), &vec![7]);
        assert_eq!(state.into_user_state(), vec![7]);
    }
}

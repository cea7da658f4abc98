use crate::atomic::Atomic;
use crate::cursors::conversion::{Conversion, Slices, Text};

/// Something a parser can be invoked on
///
/// Text inputs parse as bytes and convert matched ranges to text; slice and
/// array inputs convert matched ranges to sub-slices.
pub trait Input<'code> {
    type Element: Atomic;
    type Conversion: Conversion<'code, Self::Element>;

    fn elements(self) -> &'code [Self::Element];
}

impl<'code> Input<'code> for &'code str {
    type Element = u8;
    type Conversion = Text;

    fn elements(self) -> &'code [u8] {
        self.as_bytes()
    }
}

impl<'code> Input<'code> for &'code String {
    type Element = u8;
    type Conversion = Text;

    fn elements(self) -> &'code [u8] {
        self.as_bytes()
    }
}

impl<'code, T: Atomic> Input<'code> for &'code [T] {
    type Element = T;
    type Conversion = Slices;

    fn elements(self) -> &'code [T] {
        self
    }
}

impl<'code, T: Atomic, const N: usize> Input<'code> for &'code [T; N] {
    type Element = T;
    type Conversion = Slices;

    fn elements(self) -> &'code [T] {
        self
    }
}

impl<'code, T: Atomic> Input<'code> for &'code Vec<T> {
    type Element = T;
    type Conversion = Slices;

    fn elements(self) -> &'code [T] {
        self
    }
}

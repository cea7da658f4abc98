/// Trait for atomic elements that can be used in parsing
///
/// Anything `Copy + PartialEq + Debug` can be an element. Token enums only
/// need an empty `impl Atomic for Token {}`; the ASCII view is what the
/// numeric and whitespace parsers look at.
pub trait Atomic: Copy + PartialEq + std::fmt::Debug {
    /// The element as an ASCII byte, if it represents one
    fn as_ascii(self) -> Option<u8> {
        None
    }

    /// Convert a slice of elements to a displayable string for error reporting
    fn slice_to_string(slice: &[Self]) -> String {
        format!("{:?}", slice)
    }
}

impl Atomic for u8 {
    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    fn as_ascii(self) -> Option<u8> {
        self.is_ascii().then_some(self as u8)
    }

    fn slice_to_string(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atomic for u32 {}
impl Atomic for i32 {}
impl Atomic for i64 {}

use std::borrow::Cow;

/// Policy turning a matched sub-range of the input into a value
///
/// Range-returning parsers (`sequence`, `until_item`, `while_if`, ...) hand
/// their match to the cursor, which converts it through this policy. The
/// policy is a type parameter of [`State`](super::State), so it is fixed for
/// a whole parse and costs nothing at run time.
pub trait Conversion<'code, T> {
    type Output;

    fn convert(slice: &'code [T]) -> Self::Output;
}

/// Borrow the matched elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slices;

/// Copy the matched elements into a `Vec`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Owned;

/// View the matched elements as text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl<'code, T: 'code> Conversion<'code, T> for Slices {
    type Output = &'code [T];

    fn convert(slice: &'code [T]) -> Self::Output {
        slice
    }
}

impl<'code, T: Clone> Conversion<'code, T> for Owned {
    type Output = Vec<T>;

    fn convert(slice: &'code [T]) -> Self::Output {
        slice.to_vec()
    }
}

impl<'code> Conversion<'code, u8> for Text {
    type Output = Cow<'code, str>;

    /// Invalid UTF-8 is replaced rather than rejected; input coming from a
    /// `&str` is always borrowed.
    fn convert(slice: &'code [u8]) -> Self::Output {
        String::from_utf8_lossy(slice)
    }
}

impl<'code> Conversion<'code, char> for Text {
    type Output = Cow<'code, str>;

    fn convert(slice: &'code [char]) -> Self::Output {
        Cow::Owned(slice.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_borrow() {
        let data = [1u32, 2, 3];
        let out = <Slices as Conversion<u32>>::convert(&data[1..]);
        assert_eq!(out, &[2, 3]);
    }

    #[test]
    fn test_owned_copies() {
        let data = b"abc";
        let out: Vec<u8> = <Owned as Conversion<u8>>::convert(&data[..2]);
        assert_eq!(out, b"ab".to_vec());
    }

    #[test]
    fn test_text_from_bytes_borrows() {
        let data = "héllo".as_bytes();
        let out = <Text as Conversion<u8>>::convert(data);
        assert!(matches!(out, Cow::Borrowed("héllo")));
    }

    #[test]
    fn test_text_from_chars() {
        let data = ['o', 'k'];
        let out = <Text as Conversion<char>>::convert(&data);
        assert_eq!(out, "ok");
    }
}

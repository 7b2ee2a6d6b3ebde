//! msgbind-runtime - Support items for generated bindings
//!
//! Code generated by `msgbind` refers to this crate for:
//! - [`is_none_or_empty`], the skip predicate of optional arrays
//! - [`UnknownDiscriminantError`], raised when decoding an unmapped enum code
//! - [`TryFromResponseError`], raised when a response is not the expected one

mod error;

pub use error::{TryFromResponseError, UnknownDiscriminantError};

/// Skip predicate for optional sequences.
///
/// An empty sequence is left out of the encoded message just like an absent
/// one, so after a round trip both decode as `None`.
pub fn is_none_or_empty<T>(f: &Option<Vec<T>>) -> bool {
    f.as_ref().is_none_or(|v| v.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn is_none_or_empty___none___is_true() {
        assert!(is_none_or_empty::<u8>(&None));
    }

    #[test]
    fn is_none_or_empty___empty___is_true() {
        assert!(is_none_or_empty::<u8>(&Some(vec![])));
    }

    #[test]
    fn is_none_or_empty___populated___is_false() {
        assert!(!is_none_or_empty(&Some(vec![1])));
    }

    #[test]
    fn is_none_or_empty___nested_empty_inner___is_false() {
        assert!(!is_none_or_empty::<Vec<u8>>(&Some(vec![vec![]])));
    }
}

/*!
Small utilities over anything iterable.

These helpers are deliberately generic: a [`Sequence`] is anything that can be
turned into an iterator, which includes the zero-or-one-element view over an
[`Either`](crate::Either). [`once`] goes the other way, wrapping a single value as a
sequence so it can meet APIs that only speak in iterables.
*/

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::string::String;

/**
Emptiness and formatting helpers for anything iterable.
*/
pub trait Sequence: IntoIterator + Sized {
    /**
    Whether the sequence has no elements.
    */
    fn none(self) -> bool {
        self.into_iter().next().is_none()
    }

    /**
    Whether no element satisfies the predicate.
    */
    fn none_where(self, predicate: impl FnMut(Self::Item) -> bool) -> bool {
        !self.into_iter().any(predicate)
    }

    /**
    Join the rendered elements with a separator.
    */
    #[cfg(feature = "alloc")]
    fn join_with(self, separator: &str) -> String
    where
        Self::Item: fmt::Display,
    {
        use core::fmt::Write;

        let mut joined = String::new();
        let mut first = true;

        for item in self {
            if !first {
                joined.push_str(separator);
            }

            // Writing into a `String` can't fail
            let _ = write!(joined, "{}", item);
            first = false;
        }

        joined
    }

    /**
    Join the rendered elements as `'a', 'b', 'c'`.

    An empty sequence produces an empty string, not a pair of quotes.
    */
    #[cfg(feature = "alloc")]
    fn single_quoted(self) -> String
    where
        Self::Item: fmt::Display,
    {
        let joined = self.join_with("', '");

        if joined.is_empty() {
            joined
        } else {
            alloc::format!("'{}'", joined)
        }
    }
}

impl<I: IntoIterator> Sequence for I {}

/**
Wrap a single value as a one-element sequence.
*/
pub fn once<T>(value: T) -> Once<T> {
    Once(value)
}

/**
A sequence of exactly one element.

Iterates by value or by reference; iterating by reference can be repeated any
number of times.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Once<T>(T);

impl<T> Once<T> {
    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> IntoIterator for Once<T> {
    type Item = T;
    type IntoIter = core::iter::Once<T>;

    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(self.0)
    }
}

impl<'a, T> IntoIterator for &'a Once<T> {
    type Item = &'a T;
    type IntoIter = core::iter::Once<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        core::iter::once(&self.0)
    }
}

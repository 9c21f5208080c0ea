/*!
Construction of [`Either`] values.

A bare value lifts into an [`Either`] three ways:

- Through the enum variants, when the full type is already known.
- Through [`IntoEither::as_left`] / [`IntoEither::as_right`] at the head of a
  fluent chain, where only the missing side needs naming.
- Through the [`Left`] and [`Right`] wrappers, which tag a value with its side
  before the full `Either` type exists. The tag keeps construction unambiguous
  even when both sides share a type, where an untagged lift could silently
  populate the wrong branch.
*/

use core::fmt;

use crate::either::Either;

/**
A value tagged as the left side of an [`Either`] it hasn't been lifted into yet.

Consumed by the `From` conversion that finishes the lift.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Left<T>(pub T);

/**
A value tagged as the right side of an [`Either`] it hasn't been lifted into yet.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Right<T>(pub T);

impl<L, R> From<Left<L>> for Either<L, R> {
    fn from(tagged: Left<L>) -> Self {
        Either::Left(tagged.0)
    }
}

impl<L, R> From<Right<R>> for Either<L, R> {
    fn from(tagged: Right<R>) -> Self {
        Either::Right(tagged.0)
    }
}

impl<T: fmt::Display> fmt::Display for Left<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Left({})", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for Right<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Right({})", self.0)
    }
}

/**
Lift any value into an [`Either`], naming the side it lands on.

Implemented for every sized type, so a chain can start from a bare value:

```
# use twofold::IntoEither;
let ok = 10.0.as_right::<&str>();
let failed = "bad input".as_left::<f64>();

assert!(ok.is_right());
assert!(failed.is_left());
```
*/
pub trait IntoEither: Sized {
    fn as_left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    fn as_right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

impl<T> IntoEither for T {}

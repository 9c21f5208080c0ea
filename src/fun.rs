/*!
Fluent helpers for chaining plain values and actions.

[`Tee::tee`] lets a chain observe a value without consuming it, and the
[`to_fn`] family lifts an action into a function returning [`Unit`], so effects
slot in wherever a combinator expects a result-producing function.
*/

use crate::unit::Unit;

/**
Fluent access to any sized value.
*/
pub trait Tee: Sized {
    /**
    Run an action against the value, then pass the value along unchanged.

    Keeps a chain intact while something on the side observes it: logging,
    capturing into an outer variable, an assertion in a test.
    */
    fn tee(self, action: impl FnOnce(&Self)) -> Self {
        action(&self);
        self
    }

    /**
    Apply a function to the value in pipeline position.
    */
    fn pipe<U>(self, f: impl FnOnce(Self) -> U) -> U {
        f(self)
    }
}

impl<T> Tee for T {}

/**
Lift a zero-argument action into a function returning [`Unit`].
*/
pub fn to_fn0(mut action: impl FnMut()) -> impl FnMut() -> Unit {
    move || {
        action();
        Unit
    }
}

/**
Lift a one-argument action into a function returning [`Unit`].
*/
pub fn to_fn<T>(mut action: impl FnMut(T)) -> impl FnMut(T) -> Unit {
    move |value| {
        action(value);
        Unit
    }
}

/**
Lift a two-argument action into a function returning [`Unit`].
*/
pub fn to_fn2<T, U>(mut action: impl FnMut(T, U)) -> impl FnMut(T, U) -> Unit {
    move |first, second| {
        action(first, second);
        Unit
    }
}

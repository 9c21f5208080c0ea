/*!
The [`Either`] type.

An [`Either`] holds exactly one of two payloads: a `Left` value, conventionally
carrying failure or diagnostic data, or a `Right` value carrying the result of a
computation that succeeded. Once constructed, a value never changes state; every
combinator consumes its input and produces a new value.

Failures travel through a pipeline as ordinary `Left` data. The combinators
never branch on state at the call site: [`Either::map`] and [`Either::and_then`]
pass `Left` values through untouched, and [`Either::fold`] is the single point
where both states must be handled to get a plain value back out.
*/

use core::fmt;

use crate::{
    fun::to_fn,
    iter::{IntoIter, Iter},
    unit::Unit,
};

/**
A value that is exactly one of two things.

`Left` conventionally carries failure information and `Right` carries success,
which is the reading the combinators commit to: [`Either::map`] and
[`Either::and_then`] operate on the `Right` payload and propagate `Left`
untouched.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /**
    Whether this value is in the `Left` state.
    */
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /**
    Whether this value is in the `Right` state.
    */
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /**
    The `Left` payload, if there is one.
    */
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(left) => Some(left),
            Either::Right(_) => None,
        }
    }

    /**
    The `Right` payload, if there is one.
    */
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(right) => Some(right),
        }
    }

    /**
    The `Left` payload.

    # Panics

    Panics if the value is in the `Right` state. Calling this method asserts
    the state is already known; when it isn't, use [`Either::fold`] or
    [`Either::left`] instead.
    */
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(left) => left,
            Either::Right(_) => {
                panic!("cannot access the left value of an `Either` in the right state")
            }
        }
    }

    /**
    The `Right` payload.

    # Panics

    Panics if the value is in the `Left` state.
    */
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => {
                panic!("cannot access the right value of an `Either` in the left state")
            }
            Either::Right(right) => right,
        }
    }

    /**
    Borrow the live payload, keeping the state.
    */
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(right),
        }
    }

    /**
    Consume the value by handling both states.

    Exactly one of `on_left` and `on_right` runs, selected by the current
    state, and its result is returned. This is the catamorphism the other
    combinators are defined through, and the only total way to get a plain
    value back out of an `Either`.
    */
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(left) => on_left(left),
            Either::Right(right) => on_right(right),
        }
    }

    /**
    Consume the value by running one of two actions, selected by state.

    The side-effecting form of [`Either::fold`].
    */
    pub fn visit(self, on_left: impl FnMut(L), on_right: impl FnMut(R)) -> Unit {
        self.fold(to_fn(on_left), to_fn(on_right))
    }

    /**
    Transform the `Right` payload, passing `Left` through untouched.

    `f` is never invoked in the `Left` state.
    */
    pub fn map<R2>(self, f: impl FnOnce(R) -> R2) -> Either<L, R2> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => Either::Right(f(right)),
        }
    }

    /**
    Transform whichever payload is live.
    */
    pub fn map_both<L2, R2>(
        self,
        fl: impl FnOnce(L) -> L2,
        fr: impl FnOnce(R) -> R2,
    ) -> Either<L2, R2> {
        match self {
            Either::Left(left) => Either::Left(fl(left)),
            Either::Right(right) => Either::Right(fr(right)),
        }
    }

    /**
    Chain a dependent computation that may itself fail.

    In the `Left` state the original payload is propagated and `f` is never
    invoked. In the `Right` state `f`'s result is returned directly, not
    re-wrapped, so a `Left` produced by `f` flows forward. The first `Left` in
    a chain of `and_then` calls short-circuits the rest.
    */
    pub fn and_then<R2>(self, f: impl FnOnce(R) -> Either<L, R2>) -> Either<L, R2> {
        match self {
            Either::Left(left) => Either::Left(left),
            Either::Right(right) => f(right),
        }
    }

    /**
    Run an action over the `Right` payload, keeping the pipeline alive.

    A no-op in the `Left` state. On `Right` the action consumes the payload
    and the result carries [`Unit`], so further combinators can still run.
    */
    pub fn for_each(self, action: impl FnMut(R)) -> Either<L, Unit> {
        self.map(to_fn(action))
    }

    /**
    A lazy sequence view over the `Right` payload.

    Yields nothing in the `Left` state and exactly one element in the `Right`
    state. The view borrows, so it can be taken any number of times with the
    same result.
    */
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.as_ref().right())
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.right())
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(left) => write!(f, "Left({})", left),
            Either::Right(right) => write!(f, "Right({})", right),
        }
    }
}

#[cfg(feature = "serde")]
impl<L: serde::Serialize, R: serde::Serialize> serde::Serialize for Either<L, R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Either::Left(left) => serializer.serialize_newtype_variant("Either", 0, "Left", left),
            Either::Right(right) => {
                serializer.serialize_newtype_variant("Either", 1, "Right", right)
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, L: serde::Deserialize<'de>, R: serde::Deserialize<'de>> serde::Deserialize<'de>
    for Either<L, R>
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use core::marker::PhantomData;

        use serde::de::{self, EnumAccess, VariantAccess, Visitor};

        const VARIANTS: &[&str] = &["Left", "Right"];

        enum Variant {
            Left,
            Right,
        }

        impl<'de> serde::Deserialize<'de> for Variant {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct VariantVisitor;

                impl<'de> Visitor<'de> for VariantVisitor {
                    type Value = Variant;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str("`Left` or `Right`")
                    }

                    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Variant, E> {
                        match value {
                            0 => Ok(Variant::Left),
                            1 => Ok(Variant::Right),
                            _ => Err(de::Error::invalid_value(
                                de::Unexpected::Unsigned(value),
                                &self,
                            )),
                        }
                    }

                    fn visit_str<E: de::Error>(self, value: &str) -> Result<Variant, E> {
                        match value {
                            "Left" => Ok(Variant::Left),
                            "Right" => Ok(Variant::Right),
                            _ => Err(de::Error::unknown_variant(value, VARIANTS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(VariantVisitor)
            }
        }

        struct EitherVisitor<L, R>(PhantomData<(L, R)>);

        impl<'de, L: serde::Deserialize<'de>, R: serde::Deserialize<'de>> Visitor<'de>
            for EitherVisitor<L, R>
        {
            type Value = Either<L, R>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an `Either` value")
            }

            fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
                match data.variant()? {
                    (Variant::Left, variant) => variant.newtype_variant().map(Either::Left),
                    (Variant::Right, variant) => variant.newtype_variant().map(Either::Right),
                }
            }
        }

        deserializer.deserialize_enum("Either", VARIANTS, EitherVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lift::IntoEither;

    #[test]
    fn construction_sets_the_state() {
        let right = 10.0.as_right::<&str>();
        assert!(right.is_right());
        assert!(!right.is_left());
        assert_eq!(Some(10.0), right.right());

        let left = "bad input".as_left::<f64>();
        assert!(left.is_left());
        assert!(!left.is_right());
        assert_eq!(Some("bad input"), left.left());
    }

    #[test]
    fn unwrap_in_the_live_state_returns_the_payload() {
        assert_eq!(10.0, 10.0.as_right::<&str>().unwrap_right());
        assert_eq!("bad input", "bad input".as_left::<f64>().unwrap_left());
    }

    #[test]
    #[should_panic(expected = "left value")]
    fn unwrap_left_panics_in_the_right_state() {
        10.0.as_right::<&str>().unwrap_left();
    }

    #[test]
    #[should_panic(expected = "right value")]
    fn unwrap_right_panics_in_the_left_state() {
        "bad input".as_left::<f64>().unwrap_right();
    }

    #[test]
    fn map_passes_left_through() {
        let left = "bad".as_left::<f64>();

        let result = left.map(|x| x * 5.0).map(|x| x + 5.0);

        assert_eq!(Either::Left("bad"), result);
    }

    #[test]
    fn map_transforms_right() {
        let result = 10.0.as_right::<&str>().map(|x| x * 10.0 + 1.0);

        assert_eq!(Either::Right(101.0), result);
    }

    #[test]
    fn map_identity_preserves_the_value() {
        let right = 10.0.as_right::<&str>();
        let left = "bad".as_left::<f64>();

        assert_eq!(right, right.map(|x| x));
        assert_eq!(left, left.map(|x| x));
    }

    #[test]
    fn map_composes() {
        let f = |x: f64| x * 2.0;
        let g = |x: f64| x - 3.0;

        let value = 10.0.as_right::<&str>();

        assert_eq!(value.map(f).map(g), value.map(|x| g(f(x))));
    }

    #[test]
    fn map_both_transforms_the_live_side() {
        let left = "bad".as_left::<f64>().map_both(|l| l.len(), |r| r * 2.0);
        assert_eq!(Either::Left(3), left);

        let right = 10.0.as_right::<&str>().map_both(|l| l.len(), |r| r * 2.0);
        assert_eq!(Either::Right(20.0), right);
    }

    #[test]
    fn and_then_chains_successes() {
        let a = 10.0.as_right::<&str>();
        let b = 20.0.as_right::<&str>();

        let result = a.and_then(|x| b.map(|y| y + x));

        assert_eq!(Either::Right(30.0), result);
    }

    #[test]
    fn and_then_propagates_a_left_from_the_continuation() {
        let a = 10.0.as_right::<&str>();
        let b = "fail".as_left::<f64>();

        let result = a.and_then(|x| b.map(|y| y + x));

        assert_eq!(Either::Left("fail"), result);
    }

    #[test]
    fn and_then_short_circuits_on_left() {
        let mut calls = 0;

        let result = "bad".as_left::<f64>().and_then(|x: f64| {
            calls += 1;
            (x * 2.0).as_right()
        });

        assert_eq!(Either::Left("bad"), result);
        assert_eq!(0, calls);
    }

    #[test]
    fn and_then_invokes_the_continuation_exactly_once() {
        let mut calls = 0;

        let result = 10.0.as_right::<&str>().and_then(|x| {
            calls += 1;
            (x + 1.0).as_right()
        });

        assert_eq!(Either::Right(11.0), result);
        assert_eq!(1, calls);
    }

    #[test]
    fn fold_runs_only_the_left_branch_on_left() {
        let result = "left!"
            .as_left::<f64>()
            .fold(|l| l.len(), |_| panic!("the right branch must not run"));

        assert_eq!(5, result);
    }

    #[test]
    fn fold_runs_only_the_right_branch_on_right() {
        let result = 10.0
            .as_right::<&str>()
            .fold(|_| panic!("the left branch must not run"), |r| r as usize);

        assert_eq!(10, result);
    }

    #[test]
    fn visit_runs_exactly_one_action() {
        let mut seen = None;

        10.0.as_right::<&str>().visit(
            |_| panic!("the left action must not run"),
            |r| seen = Some(r),
        );

        assert_eq!(Some(10.0), seen);
    }

    #[test]
    fn for_each_observes_right_and_keeps_the_pipeline_alive() {
        let mut seen = 0.0;

        let result = 10.0.as_right::<&str>().for_each(|x| seen = x);

        assert_eq!(10.0, seen);
        assert_eq!(Either::Right(Unit), result);
    }

    #[test]
    fn for_each_is_a_no_op_on_left() {
        let result = "bad".as_left::<f64>().for_each(|_| panic!("must not run"));

        assert_eq!(Either::Left("bad"), result);
    }

    #[test]
    fn iter_yields_nothing_on_left() {
        let left = "bad".as_left::<f64>();

        assert_eq!(0, left.iter().count());
    }

    #[test]
    fn iter_yields_the_right_payload_once() {
        let right = 10.0.as_right::<&str>();

        let collected = right.iter().collect::<Vec<_>>();

        assert_eq!(vec![&10.0], collected);
    }

    #[test]
    fn iter_is_restartable() {
        let right = 10.0.as_right::<&str>();

        assert_eq!(right.iter().count(), right.iter().count());
        assert_eq!(Some(&10.0), right.iter().next());
        assert_eq!(Some(&10.0), right.iter().next());
    }

    #[test]
    fn renders_the_state_and_payload() {
        assert_eq!("Right(10)", 10.0.as_right::<&str>().to_string());
        assert_eq!("Left(bad)", "bad".as_left::<f64>().to_string());
    }
}

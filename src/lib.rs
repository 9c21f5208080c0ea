/*!
Two-state `Either` values and the combinators to chain them.

`twofold` lets fallible computations hand failure information around as
ordinary data instead of unwinding or returning sentinels. A computation
produces an [`Either`]: a `Left` payload describing what went wrong, or a
`Right` payload carrying the result. Downstream code transforms the value
through [`Either::map`], [`Either::and_then`] and friends without ever
branching on its state, until a final [`Either::fold`] resolves it back into a
plain value:

```
use twofold::IntoEither;

fn halve(x: f64) -> twofold::Either<String, f64> {
    if x % 2.0 == 0.0 {
        (x / 2.0).as_right()
    } else {
        format!("{} is odd", x).as_left()
    }
}

let message = 10.0
    .as_right::<String>()
    .and_then(halve)
    .map(|x| x + 1.0)
    .fold(|err| err, |ok| format!("got {}", ok));

assert_eq!("got 6", message);
```

The first `Left` in a chain short-circuits everything after it; the only
recovery mechanism is the caller handling it in `fold`.
*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod either;
pub mod fun;
pub mod iter;
pub mod lift;
pub mod seq;
pub mod unit;

pub use self::{
    either::Either,
    fun::{to_fn, to_fn0, to_fn2, Tee},
    lift::{IntoEither, Left, Right},
    seq::{once, Once, Sequence},
    unit::Unit,
};

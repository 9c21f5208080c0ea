/*!
The [`Unit`] type.

A [`Unit`] carries no information. It stands in as the result of an action
lifted into a function, so "do something and produce nothing" has the same
shape as "produce a value" everywhere a pipeline expects one.
*/

use core::fmt;

/**
A value with no information. All `Unit`s are equal and interchangeable.
*/
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit_struct("Unit")
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UnitVisitor;

        impl<'de> serde::de::Visitor<'de> for UnitVisitor {
            type Value = Unit;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("unit struct `Unit`")
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Unit, E> {
                Ok(Unit)
            }
        }

        deserializer.deserialize_unit_struct("Unit", UnitVisitor)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    use serde_test::{assert_tokens, Token};

    #[test]
    fn serializes_as_a_unit_struct() {
        assert_tokens(&Unit, &[Token::UnitStruct { name: "Unit" }]);
    }
}

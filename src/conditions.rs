//! Predicates over bound values.
//!
//! A [`Condition`] is checked with [`Parameter::satisfies`], or enforced with
//! [`Parameter::require`], which invalidates the parameter when the condition
//! fails. Any `Fn(&T) -> bool` closure is a condition; the numeric checks
//! below cover the common cases. The sign checks work for every numeric type,
//! so the type to check against has to be named at the call site.
//!
//! ```
//! use sovran_kwargs::conditions::{InRange, Positive};
//! use sovran_kwargs::Keyword;
//!
//! static RATE: Keyword<f64> = Keyword::new("rate", 0.5);
//!
//! let ok = RATE.bind(0.75).require(InRange::new(0.0, 1.0));
//! assert_eq!(ok.get::<f64>(), Ok(0.75));
//!
//! let bad = RATE.bind(-2.0).require::<f64, _>(Positive);
//! assert!(bad.get::<f64>().unwrap_err().is_invalid());
//! ```

use crate::parameter::Parameter;

/// A check on a value of type `T`
pub trait Condition<T> {
    fn holds(&self, value: &T) -> bool;

    /// The reason recorded on a parameter that fails this condition
    fn failure_message(&self, parameter: &Parameter) -> String {
        format!(
            "value {} of '{}' doesn't satisfy the condition",
            parameter.repr(),
            parameter.keyword()
        )
    }
}

impl<T, F> Condition<T> for F
where
    F: Fn(&T) -> bool,
{
    fn holds(&self, value: &T) -> bool {
        self(value)
    }
}

/// Numeric types with a zero, for the sign conditions
pub trait Zero {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(impl Zero for $ty {
            const ZERO: Self = $zero;
        })*
    };
}

impl_zero!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

/// Holds for `lower <= value < upper`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InRange<T> {
    pub lower: T,
    pub upper: T,
}

impl<T> InRange<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }
}

impl<T: PartialOrd + std::fmt::Debug> Condition<T> for InRange<T> {
    fn holds(&self, value: &T) -> bool {
        *value >= self.lower && *value < self.upper
    }

    fn failure_message(&self, parameter: &Parameter) -> String {
        format!(
            "value {} of '{}' is not in [{:?}, {:?})",
            parameter.repr(),
            parameter.keyword(),
            self.lower,
            self.upper
        )
    }
}

macro_rules! comparison_condition {
    ($(#[$doc:meta])* $name:ident, $op:tt, $describe:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T: PartialOrd + std::fmt::Debug> Condition<T> for $name<T> {
            fn holds(&self, value: &T) -> bool {
                *value $op self.0
            }

            fn failure_message(&self, parameter: &Parameter) -> String {
                format!(
                    concat!("value {} of '{}' is not ", $describe, " {:?}"),
                    parameter.repr(),
                    parameter.keyword(),
                    self.0
                )
            }
        }
    };
}

comparison_condition!(
    /// Holds for values equal to the given one
    Equal, ==, "equal to"
);
comparison_condition!(
    /// Holds for values different from the given one
    NotEqual, !=, "different from"
);
comparison_condition!(
    /// Holds for values strictly greater than the given bound
    Greater, >, "greater than"
);
comparison_condition!(
    /// Holds for values strictly less than the given bound
    Lesser, <, "less than"
);

macro_rules! sign_condition {
    ($(#[$doc:meta])* $name:ident, $op:tt, $describe:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T: PartialOrd + Zero> Condition<T> for $name {
            fn holds(&self, value: &T) -> bool {
                *value $op T::ZERO
            }

            fn failure_message(&self, parameter: &Parameter) -> String {
                format!(
                    concat!("value {} of '{}' is not ", $describe),
                    parameter.repr(),
                    parameter.keyword()
                )
            }
        }
    };
}

sign_condition!(Positive, >, "positive");
sign_condition!(NonNegative, >=, "non-negative");
sign_condition!(Negative, <, "negative");
sign_condition!(NonPositive, <=, "non-positive");

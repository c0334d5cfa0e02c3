use crate::any_value::AnyValue;
use std::fmt::{self, Debug};

const UNINITIALIZED_REPR: &str = "<uninitialized>";

/// A type-erased holder of at most one value of any type
///
/// A `ValueKeeper` is either uninitialized or owns exactly one value, along
/// with the type that value was stored as. Reading back is only possible
/// with that exact type; any other type reads as "no value".
///
/// Cloning a keeper deep-copies the stored value, so two keepers never
/// share state.
///
/// # Examples
///
/// ```
/// use sovran_kwargs::ValueKeeper;
///
/// let keeper = ValueKeeper::new(vec![1, 2, 3]);
/// assert_eq!(keeper.get_value::<Vec<i32>>(), Some(vec![1, 2, 3]));
/// assert_eq!(keeper.get_value::<Vec<i64>>(), None);
/// assert_eq!(keeper.repr(), "[1, 2, 3]");
///
/// let empty = ValueKeeper::empty();
/// assert!(!empty.is_initialized());
/// assert_eq!(empty.get_value::<i32>(), None);
/// ```
#[derive(Clone, Default)]
pub struct ValueKeeper {
    slot: Option<AnyValue>,
}

impl ValueKeeper {
    /// Stores a private copy of `value`, rendered with `Debug` by [`repr`](Self::repr)
    pub fn new<T>(value: T) -> Self
    where
        T: Clone + Debug + Send + Sync + 'static,
    {
        Self {
            slot: Some(AnyValue::new(value)),
        }
    }

    /// Stores a private copy of `value` for a type with no textual form
    ///
    /// [`repr`](Self::repr) reports a fixed placeholder for such values.
    ///
    /// Rendering is chosen by the constructor rather than detected from `T`,
    /// since stable Rust can't ask whether an arbitrary type implements
    /// `Debug`. A `Debug` type stored through `opaque` renders as the
    /// placeholder too; type checks and reads behave the same either way.
    pub fn opaque<T>(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self {
            slot: Some(AnyValue::opaque(value)),
        }
    }

    /// Creates an uninitialized keeper
    pub fn empty() -> Self {
        Self { slot: None }
    }

    /// Returns true if a value is stored
    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns true if a value is stored and its type is exactly `T`
    pub fn is_type_correct<T: 'static>(&self) -> bool {
        self.slot.as_ref().is_some_and(AnyValue::is_type::<T>)
    }

    /// The name of the stored value's type, if any
    pub fn type_name(&self) -> Option<&'static str> {
        self.slot.as_ref().map(|v| v.type_name)
    }

    /// Returns a copy of the stored value if it is of type `T`
    pub fn get_value<T: Clone + 'static>(&self) -> Option<T> {
        self.value_ref::<T>().cloned()
    }

    /// Returns a reference to the stored value if it is of type `T`
    pub fn value_ref<T: 'static>(&self) -> Option<&T> {
        self.slot.as_ref()?.downcast_ref::<T>()
    }

    /// Returns a mutable reference to the stored value if it is of type `T`
    pub fn value_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.slot.as_mut()?.downcast_mut::<T>()
    }

    /// Applies `predicate` to the stored value
    ///
    /// Returns false when the keeper is uninitialized or holds another type.
    pub fn satisfies<T, F>(&self, predicate: F) -> bool
    where
        T: 'static,
        F: FnOnce(&T) -> bool,
    {
        self.value_ref::<T>().is_some_and(predicate)
    }

    /// A best-effort textual rendering of the stored value
    pub fn repr(&self) -> String {
        match &self.slot {
            Some(value) => value.render(),
            None => UNINITIALIZED_REPR.to_string(),
        }
    }
}

impl Debug for ValueKeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => f
                .debug_struct("ValueKeeper")
                .field("type", &value.type_name)
                .field("value", &value.render())
                .finish(),
            None => f.write_str("ValueKeeper(<uninitialized>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any_value::OPAQUE_REPR;

    #[derive(Clone, PartialEq)]
    struct NoDebug(u8);

    #[test]
    fn test_exact_type_recovery() {
        let keeper = ValueKeeper::new(42i32);

        assert!(keeper.is_initialized());
        assert!(keeper.is_type_correct::<i32>());
        assert!(!keeper.is_type_correct::<i64>());
        assert!(!keeper.is_type_correct::<u32>());
        assert_eq!(keeper.get_value::<i32>(), Some(42));
        assert_eq!(keeper.get_value::<i64>(), None);
        assert_eq!(keeper.get_value::<String>(), None);
        assert_eq!(keeper.type_name(), Some("i32"));
    }

    #[test]
    fn test_no_coercion_between_string_types() {
        let keeper = ValueKeeper::new("text");
        assert_eq!(keeper.get_value::<&str>(), Some("text"));
        assert_eq!(keeper.get_value::<String>(), None);
    }

    #[test]
    fn test_uninitialized() {
        let keeper = ValueKeeper::default();

        assert!(!keeper.is_initialized());
        assert!(!keeper.is_type_correct::<()>());
        assert_eq!(keeper.get_value::<()>(), None);
        assert!(!keeper.satisfies(|_: &()| true));
        assert_eq!(keeper.type_name(), None);
        assert_eq!(keeper.repr(), "<uninitialized>");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = ValueKeeper::new(vec![1, 2, 3]);
        let copy = original.clone();

        if let Some(values) = original.value_mut::<Vec<i32>>() {
            values.push(4);
        }

        assert_eq!(original.get_value::<Vec<i32>>(), Some(vec![1, 2, 3, 4]));
        assert_eq!(copy.get_value::<Vec<i32>>(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_assignment_replaces_value_and_type() {
        let mut keeper = ValueKeeper::new(1u8);
        let other = ValueKeeper::new(String::from("replaced"));
        assert_eq!(keeper.get_value::<u8>(), Some(1));

        keeper = other.clone();

        assert_eq!(keeper.get_value::<u8>(), None);
        assert_eq!(keeper.get_value::<String>(), Some("replaced".to_string()));
        assert_eq!(other.get_value::<String>(), Some("replaced".to_string()));
    }

    #[test]
    fn test_satisfies() {
        let keeper = ValueKeeper::new(2.5f64);

        assert!(keeper.satisfies(|v: &f64| *v > 2.0));
        assert!(!keeper.satisfies(|v: &f64| *v > 3.0));
        assert!(!keeper.satisfies(|_: &f32| true));
    }

    #[test]
    fn test_repr() {
        assert_eq!(ValueKeeper::new(7u16).repr(), "7");
        assert_eq!(ValueKeeper::new("hi".to_string()).repr(), "\"hi\"");
        assert_eq!(ValueKeeper::opaque(NoDebug(3)).repr(), OPAQUE_REPR);
    }

    #[test]
    fn test_opaque_values_are_recoverable() {
        let keeper = ValueKeeper::opaque(NoDebug(9));
        let copy = keeper.clone();

        assert!(copy.get_value::<NoDebug>() == Some(NoDebug(9)));
        assert!(copy.value_ref::<u8>().is_none());
    }
}

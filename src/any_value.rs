use std::any::{Any, TypeId};
use std::fmt::{self, Debug};

/// Placeholder rendering for values whose type has no textual form
pub(crate) const OPAQUE_REPR: &str = "<opaque>";

/// The operations every stored type provides to its container
///
/// Implemented once per stored type through [`Rendered`] or [`Opaque`];
/// which of the two is used decides, per type, whether values can be
/// rendered as text.
pub(crate) trait Stored: Send + Sync {
    fn fetch(&self) -> &dyn Any;
    fn fetch_mut(&mut self) -> &mut dyn Any;
    fn clone_boxed(&self) -> Box<dyn Stored>;
    fn render(&self) -> String;
}

/// Storage for types that render through `Debug`
struct Rendered<T>(T);

/// Storage for types without a textual form
struct Opaque<T>(T);

impl<T> Stored for Rendered<T>
where
    T: Clone + Debug + Send + Sync + 'static,
{
    fn fetch(&self) -> &dyn Any {
        &self.0
    }

    fn fetch_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn clone_boxed(&self) -> Box<dyn Stored> {
        Box::new(Rendered(self.0.clone()))
    }

    fn render(&self) -> String {
        format!("{:?}", self.0)
    }
}

impl<T> Stored for Opaque<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fetch(&self) -> &dyn Any {
        &self.0
    }

    fn fetch_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn clone_boxed(&self) -> Box<dyn Stored> {
        Box::new(Opaque(self.0.clone()))
    }

    fn render(&self) -> String {
        OPAQUE_REPR.to_string()
    }
}

/// A container for type-erased values that preserves type information
pub(crate) struct AnyValue {
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) value: Box<dyn Stored>,
}

impl AnyValue {
    /// Create a new AnyValue whose value renders through `Debug`
    pub(crate) fn new<T: Clone + Debug + Send + Sync + 'static>(value: T) -> Self {
        Self::from_stored::<T>(Box::new(Rendered(value)))
    }

    /// Create a new AnyValue whose value renders as a placeholder
    pub(crate) fn opaque<T: Clone + Send + Sync + 'static>(value: T) -> Self {
        Self::from_stored::<T>(Box::new(Opaque(value)))
    }

    fn from_stored<T: 'static>(value: Box<dyn Stored>) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value,
        }
    }

    /// Check if the contained value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.value.fetch().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.value.fetch_mut().downcast_mut::<T>()
    }

    pub(crate) fn render(&self) -> String {
        self.value.render()
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            value: self.value.clone_boxed(),
        }
    }
}

impl Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_name", &self.type_name)
            .field("value", &self.render())
            .finish()
    }
}

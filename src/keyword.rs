use crate::parameter::Parameter;
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The identity of a keyword, independent of its value type
///
/// Two keywords are the same keyword if and only if their identifiers are
/// equal. `KeywordId` borrows as `str`, so a [`ParameterSet`](crate::ParameterSet)
/// can be queried with a plain name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeywordId(Cow<'static, str>);

impl KeywordId {
    /// Creates an identifier from a static string without allocating
    pub const fn from_static(identifier: &'static str) -> Self {
        Self(Cow::Borrowed(identifier))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for KeywordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeywordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for KeywordId {
    fn from(identifier: &'static str) -> Self {
        Self::from_static(identifier)
    }
}

impl From<String> for KeywordId {
    fn from(identifier: String) -> Self {
        Self(Cow::Owned(identifier))
    }
}

impl PartialEq<str> for KeywordId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for KeywordId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A named, typed keyword with a declared default value
///
/// Keywords are usually declared once as `static` items and shared by every
/// caller and callee of a function:
///
/// ```
/// use sovran_kwargs::{Keyword, ParameterSet};
///
/// static WIDTH: Keyword<u32> = Keyword::new("width", 80);
///
/// let set = ParameterSet::from(WIDTH.bind(120));
/// assert_eq!(set.get(&WIDTH), 120);
/// assert_eq!(ParameterSet::new().get(&WIDTH), 80);
/// ```
///
/// Equality, ordering and hashing only look at the identifier. Declaring two
/// keywords with the same identifier but different value types makes them
/// collide in a set.
#[derive(Clone, Debug)]
pub struct Keyword<T> {
    identifier: KeywordId,
    default: T,
}

impl<T> Keyword<T> {
    /// Creates a keyword with a static identifier
    pub const fn new(identifier: &'static str, default: T) -> Self {
        Self {
            identifier: KeywordId::from_static(identifier),
            default,
        }
    }

    /// Creates a keyword from any identifier, including one built at runtime
    pub fn with_identifier(identifier: impl Into<KeywordId>, default: T) -> Self {
        Self {
            identifier: identifier.into(),
            default,
        }
    }

    /// The identity of this keyword
    pub fn identifier(&self) -> &KeywordId {
        &self.identifier
    }

    /// A reference to the declared default
    pub fn default_ref(&self) -> &T {
        &self.default
    }

    /// Returns a copy of the declared default
    pub fn default_value(&self) -> T
    where
        T: Clone,
    {
        self.default.clone()
    }

    /// Binds this keyword to an uninitialized value
    ///
    /// Reading the resulting parameter fails with
    /// [`ParamError::Missing`](crate::ParamError::Missing) until it is seeded
    /// with [`Parameter::with_default`].
    pub fn unset(&self) -> Parameter {
        Parameter::unset(self.identifier.clone())
    }
}

impl<T> Keyword<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    /// Binds this keyword to a value
    pub fn bind(&self, value: T) -> Parameter {
        Parameter::new(self.identifier.clone(), value)
    }

    /// Binds this keyword to its declared default explicitly
    pub fn take_default(&self) -> Parameter {
        self.bind(self.default.clone())
    }
}

impl<T> Keyword<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Binds this keyword to a value whose type has no `Debug` rendering
    pub fn bind_opaque(&self, value: T) -> Parameter {
        Parameter::opaque(self.identifier.clone(), value)
    }

    /// Binds this keyword to its declared default, for types without `Debug`
    pub fn take_opaque_default(&self) -> Parameter {
        self.bind_opaque(self.default.clone())
    }
}

impl<T, U> PartialEq<Keyword<U>> for Keyword<T> {
    fn eq(&self, other: &Keyword<U>) -> bool {
        self.identifier == other.identifier
    }
}

impl<T> Eq for Keyword<T> {}

impl<T, U> PartialOrd<Keyword<U>> for Keyword<T> {
    fn partial_cmp(&self, other: &Keyword<U>) -> Option<Ordering> {
        Some(self.identifier.cmp(&other.identifier))
    }
}

impl<T> Ord for Keyword<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identifier.cmp(&other.identifier)
    }
}

impl<T> Hash for Keyword<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl<T> fmt::Display for Keyword<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.identifier, f)
    }
}

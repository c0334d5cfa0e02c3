use crate::error::ParamError;
use crate::keyword::{Keyword, KeywordId};
use crate::parameter::Parameter;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt::Debug;
use std::ops::Index;

/// A keyword-indexed collection of parameters
///
/// `ParameterSet` holds at most one parameter per keyword. Adding a keyword
/// that is already present replaces the earlier parameter and records the
/// keyword as a duplicate; duplicates are only reported when [`check`](Self::check)
/// is called.
///
/// # Examples
///
/// ```
/// use sovran_kwargs::{kwargs, Keyword, ParameterSet, ParamError};
///
/// static A: Keyword<i32> = Keyword::new("A", 1);
/// static B: Keyword<i32> = Keyword::new("B", 2);
///
/// fn sum(params: ParameterSet) -> Result<i32, ParamError> {
///     params.check()?;
///     Ok(params[&A] + params[&B])
/// }
///
/// assert_eq!(sum(kwargs([A.bind(10)]))?, 12);
/// assert_eq!(sum(A.bind(10).and(B.bind(20)))?, 30);
/// assert!(sum(kwargs([A.bind(1), A.bind(2)])).is_err());
/// # Ok::<(), ParamError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParameterSet {
    pmap: BTreeMap<KeywordId, Parameter>,
    duplicates: Vec<KeywordId>,
}

impl ParameterSet {
    /// Creates a new, empty ParameterSet
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any parameter bound to the same keyword
    ///
    /// Replacing records the keyword in the duplicates list, so a later
    /// [`check`](Self::check) reports it.
    pub fn add(&mut self, parameter: Parameter) {
        let keyword = parameter.keyword().clone();
        if self.pmap.contains_key(&keyword) {
            tracing::debug!(keyword = %keyword, "duplicate parameter, keeping the latest");
            self.duplicates.push(keyword.clone());
        }
        self.pmap.insert(keyword, parameter);
    }

    /// Adds a parameter and returns the set, for chaining
    pub fn and(mut self, parameter: Parameter) -> Self {
        self.add(parameter);
        self
    }

    /// Returns true if a parameter is bound to `name`
    pub fn contains(&self, name: &str) -> bool {
        self.pmap.contains_key(name)
    }

    /// Returns the number of bound keywords
    pub fn len(&self) -> usize {
        self.pmap.len()
    }

    /// Returns true if no keyword is bound
    pub fn is_empty(&self) -> bool {
        self.pmap.is_empty()
    }

    /// The parameter bound to `name`, if any
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.pmap.get(name)
    }

    /// Keywords that were bound more than once, one entry per extra binding
    pub fn duplicates(&self) -> &[KeywordId] {
        &self.duplicates
    }

    /// The bound keywords, in identifier order
    pub fn keywords(&self) -> impl Iterator<Item = &KeywordId> {
        self.pmap.keys()
    }

    /// The bound parameters, in identifier order
    pub fn iter(&self) -> btree_map::Values<'_, KeywordId, Parameter> {
        self.pmap.values()
    }

    /// Copies in every parameter of `other` whose keyword isn't bound here
    ///
    /// Parameters already in this set always win. Duplicates recorded in
    /// `other` are not carried over.
    pub fn merge(&mut self, other: &ParameterSet) {
        let mut copied = 0usize;
        for (keyword, parameter) in &other.pmap {
            if !self.pmap.contains_key(keyword) {
                self.pmap.insert(keyword.clone(), parameter.clone());
                copied += 1;
            }
        }
        tracing::trace!(copied, skipped = other.len() - copied, "merged parameter sets");
    }

    /// Reports keywords that were bound more than once
    ///
    /// # Errors
    ///
    /// Returns `ParamError::Multiple` listing every duplicate binding, in the
    /// order they were added.
    pub fn check(&self) -> Result<(), ParamError> {
        if self.duplicates.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = self.duplicates.len(), "parameter set has duplicates");
        Err(ParamError::Multiple {
            keywords: self.duplicates.clone(),
        })
    }

    /// Looks up `keyword`, falling back to its default
    ///
    /// The default is used when the keyword is unbound, and also when the
    /// bound parameter can't be read as `T` for any reason.
    pub fn get<T>(&self, keyword: &Keyword<T>) -> T
    where
        T: Clone + 'static,
    {
        match self.try_get(keyword) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(keyword = %keyword.identifier(), %error, "using default value");
                keyword.default_value()
            }
        }
    }

    /// Looks up `keyword`, falling back to its default only when it is unbound
    ///
    /// # Errors
    ///
    /// Fails like [`Parameter::get`] when a parameter is bound to `keyword`
    /// but can't be read as `T`.
    pub fn try_get<T>(&self, keyword: &Keyword<T>) -> Result<T, ParamError>
    where
        T: Clone + 'static,
    {
        match self.pmap.get(keyword.identifier()) {
            Some(parameter) => parameter.get::<T>(),
            None => {
                tracing::trace!(keyword = %keyword.identifier(), "parameter not bound, using default");
                Ok(keyword.default_value())
            }
        }
    }

    /// Looks up the parameter bound to `name`, which must be present
    ///
    /// # Errors
    ///
    /// Returns `ParamError::Missing` if nothing is bound to `name`.
    pub fn require(&self, name: &str) -> Result<&Parameter, ParamError> {
        self.pmap.get(name).ok_or_else(|| ParamError::Missing {
            keyword: KeywordId::from(name.to_string()),
        })
    }

    /// The parameter bound to `keyword`, seeded with the keyword's default
    ///
    /// An unbound keyword yields a fresh parameter holding the default.
    pub fn resolve<T>(&self, keyword: &Keyword<T>) -> Parameter
    where
        T: Clone + Debug + Send + Sync + 'static,
    {
        self.pmap
            .get(keyword.identifier())
            .cloned()
            .unwrap_or_else(|| keyword.unset())
            .with_default(keyword.default_value())
    }

    /// Same as [`resolve`](Self::resolve), for keywords whose type has no `Debug` rendering
    pub fn resolve_opaque<T>(&self, keyword: &Keyword<T>) -> Parameter
    where
        T: Clone + Send + Sync + 'static,
    {
        self.pmap
            .get(keyword.identifier())
            .cloned()
            .unwrap_or_else(|| keyword.unset())
            .with_opaque_default(keyword.default_value())
    }
}

/// Folds one ordered sequence of bindings into a [`ParameterSet`]
///
/// Later bindings of the same keyword win, and are reported by
/// [`ParameterSet::check`].
pub fn kwargs<I>(bindings: I) -> ParameterSet
where
    I: IntoIterator<Item = Parameter>,
{
    bindings.into_iter().collect()
}

impl<T> Index<&'static Keyword<T>> for ParameterSet
where
    T: 'static,
{
    type Output = T;

    /// Borrows the value bound to a `static` keyword, or its default
    fn index(&self, keyword: &'static Keyword<T>) -> &T {
        self.pmap
            .get(keyword.identifier())
            .and_then(|parameter| parameter.value_ref::<T>().ok())
            .unwrap_or_else(|| keyword.default_ref())
    }
}

impl From<Parameter> for ParameterSet {
    fn from(parameter: Parameter) -> Self {
        Self::new().and(parameter)
    }
}

impl<const N: usize> From<[Parameter; N]> for ParameterSet {
    fn from(parameters: [Parameter; N]) -> Self {
        parameters.into_iter().collect()
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Parameter> for ParameterSet {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        for parameter in iter {
            self.add(parameter);
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = btree_map::Values<'a, KeywordId, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

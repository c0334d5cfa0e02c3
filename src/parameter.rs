use crate::conditions::Condition;
use crate::error::ParamError;
use crate::keeper::ValueKeeper;
use crate::keyword::KeywordId;
use crate::set::ParameterSet;
use std::fmt::{self, Debug};

/// Whether a parameter may still be read, and why not if it can't
///
/// Validity only moves one way: once a reason is recorded the parameter stays
/// invalid, and later reasons are appended to the earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Valid,
    Invalid(Vec<String>),
}

impl Validity {
    /// Returns true if no invalidation reason was recorded
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The recorded reasons, oldest first
    pub fn reasons(&self) -> &[String] {
        match self {
            Validity::Valid => &[],
            Validity::Invalid(reasons) => reasons,
        }
    }

    fn record(&mut self, reason: String) {
        match self {
            Validity::Valid => *self = Validity::Invalid(vec![reason]),
            Validity::Invalid(reasons) => reasons.push(reason),
        }
    }
}

/// One keyword bound to one value
///
/// Parameters are normally produced by [`Keyword::bind`](crate::Keyword::bind)
/// and folded into a [`ParameterSet`]. Reading a parameter back is type
/// checked:
///
/// ```
/// use sovran_kwargs::{Parameter, ParamError};
///
/// let p = Parameter::new("retries", 3u32);
/// assert_eq!(p.get::<u32>()?, 3);
/// assert!(p.get::<i32>().unwrap_err().is_type_error());
/// assert!(p.is(&3u32));
/// # Ok::<(), ParamError>(())
/// ```
#[derive(Clone)]
pub struct Parameter {
    keyword: KeywordId,
    keeper: ValueKeeper,
    validity: Validity,
}

impl Parameter {
    /// Binds `keyword` to `value`
    pub fn new<T>(keyword: impl Into<KeywordId>, value: T) -> Self
    where
        T: Clone + Debug + Send + Sync + 'static,
    {
        Self::with_keeper(keyword.into(), ValueKeeper::new(value))
    }

    /// Binds `keyword` to a value whose type has no `Debug` rendering
    pub fn opaque<T>(keyword: impl Into<KeywordId>, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::with_keeper(keyword.into(), ValueKeeper::opaque(value))
    }

    /// Binds `keyword` without a value
    pub fn unset(keyword: impl Into<KeywordId>) -> Self {
        Self::with_keeper(keyword.into(), ValueKeeper::empty())
    }

    fn with_keeper(keyword: KeywordId, keeper: ValueKeeper) -> Self {
        Self {
            keyword,
            keeper,
            validity: Validity::Valid,
        }
    }

    /// The identity of the bound keyword
    pub fn keyword(&self) -> &KeywordId {
        &self.keyword
    }

    /// The keeper holding the bound value
    pub fn keeper(&self) -> &ValueKeeper {
        &self.keeper
    }

    /// Whether the parameter may still be read
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Returns true if the parameter was never invalidated
    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    /// Returns true if a value is bound
    pub fn is_initialized(&self) -> bool {
        self.keeper.is_initialized()
    }

    /// Reads the bound value as `T`
    ///
    /// # Errors
    ///
    /// - Returns `ParamError::Invalid` if the parameter was invalidated
    /// - Returns `ParamError::Missing` if no value was ever bound
    /// - Returns `ParamError::WrongType` if the value was bound as another type
    pub fn get<T: Clone + 'static>(&self) -> Result<T, ParamError> {
        self.value_ref::<T>().cloned()
    }

    /// Borrows the bound value as `T`, failing the same way as [`get`](Self::get)
    pub fn value_ref<T: 'static>(&self) -> Result<&T, ParamError> {
        if let Validity::Invalid(reasons) = &self.validity {
            return Err(ParamError::Invalid {
                keyword: self.keyword.clone(),
                reasons: reasons.join("; "),
            });
        }
        let Some(found) = self.keeper.type_name() else {
            return Err(ParamError::Missing {
                keyword: self.keyword.clone(),
            });
        };
        self.keeper
            .value_ref::<T>()
            .ok_or_else(|| ParamError::WrongType {
                keyword: self.keyword.clone(),
                expected: std::any::type_name::<T>(),
                found,
            })
    }

    /// Seeds the value if none was bound yet; a bound value is left alone
    pub fn with_default<T>(mut self, value: T) -> Self
    where
        T: Clone + Debug + Send + Sync + 'static,
    {
        if !self.keeper.is_initialized() {
            self.keeper = ValueKeeper::new(value);
        }
        self
    }

    /// Same as [`with_default`](Self::with_default), for types without a `Debug` rendering
    pub fn with_opaque_default<T>(mut self, value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        if !self.keeper.is_initialized() {
            self.keeper = ValueKeeper::opaque(value);
        }
        self
    }

    /// Returns true if the value is a `T` equal to `value`
    ///
    /// A value of another type is simply not equal; this never fails.
    pub fn is<T: PartialEq + 'static>(&self, value: &T) -> bool {
        self.keeper.value_ref::<T>() == Some(value)
    }

    /// Returns true if the value is a `T` for which `condition` holds
    pub fn satisfies<T, C>(&self, condition: &C) -> bool
    where
        T: 'static,
        C: Condition<T> + ?Sized,
    {
        self.keeper.satisfies(|value: &T| condition.holds(value))
    }

    /// Invalidates the parameter unless `condition` holds for its value
    ///
    /// The condition's failure message becomes an invalidation reason, and
    /// every later typed read fails with [`ParamError::Invalid`].
    pub fn require<T, C>(mut self, condition: C) -> Self
    where
        T: 'static,
        C: Condition<T>,
    {
        if !self.satisfies::<T, C>(&condition) {
            let reason = condition.failure_message(&self);
            self.invalidate(reason);
        }
        self
    }

    /// Records `reason` and marks the parameter invalid for good
    pub fn invalidate(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::debug!(keyword = %self.keyword, %reason, "parameter invalidated");
        self.validity.record(reason);
    }

    /// A best-effort textual rendering of the bound value
    pub fn repr(&self) -> String {
        self.keeper.repr()
    }

    /// Folds this parameter and `other` into a new set
    pub fn and(self, other: Parameter) -> ParameterSet {
        ParameterSet::from(self).and(other)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.keyword, self.keeper.repr())
    }
}

impl Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("keyword", &self.keyword.as_str())
            .field("value", &self.keeper)
            .field("validity", &self.validity)
            .finish()
    }
}

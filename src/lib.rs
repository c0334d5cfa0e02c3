//! # sovran-kwargs
//!
//! Type-checked keyword arguments for Rust functions.
//!
//! `sovran-kwargs` lets callers attach named values of any type to a call, and
//! lets the callee read them back by keyword with runtime type checks and a
//! declared default for anything the caller left out. Values of unrelated
//! types live side by side in one [`ParameterSet`] without sharing a trait.
//!
//! ## Key Features
//!
//! - **Type-safe**: Values can only be read back as the exact type they were bound as
//! - **Defaults**: Every [`Keyword`] declares a default used when it isn't bound
//! - **Value semantics**: Cloning a set deep-copies every value; nothing is shared
//! - **Deferred duplicate checks**: Rebinding a keyword overrides it, and
//!   [`ParameterSet::check`] reports it when asked
//! - **No macros**: Pure runtime solution without complex macro magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_kwargs::{kwargs, Keyword, ParameterSet};
//!
//! static BIAS: Keyword<f64> = Keyword::new("bias", 0.0);
//! static SCALE: Keyword<f64> = Keyword::new("scale", 1.0);
//! static LABEL: Keyword<String> = Keyword::new("label", String::new());
//!
//! fn describe(value: f64, params: ParameterSet) -> String {
//!     let scaled = value * params.get(&SCALE) + params.get(&BIAS);
//!     format!("{}{}", params.get(&LABEL), scaled)
//! }
//!
//! // Only pass what differs from the defaults
//! assert_eq!(describe(2.0, kwargs([SCALE.bind(3.0)])), "6");
//! assert_eq!(
//!     describe(2.0, kwargs([LABEL.bind("x=".to_string()), BIAS.bind(0.5)])),
//!     "x=2.5"
//! );
//! assert_eq!(describe(2.0, ParameterSet::new()), "2");
//! ```
//!
//! ### Explicit Defaults and Chaining
//!
//! ```rust
//! use sovran_kwargs::{Keyword, ParameterSet};
//!
//! static A: Keyword<f32> = Keyword::new("A float", 1.0);
//! static B: Keyword<i32> = Keyword::new("B int", 2);
//! static C: Keyword<f64> = Keyword::new("C double", 3.0);
//!
//! fn sum(bias: f64, params: ParameterSet) -> f64 {
//!     bias + f64::from(params[&A]) + f64::from(params[&B]) + params[&C]
//! }
//!
//! let params = A.take_default().and(B.bind(2)).and(C.bind(3.0));
//! assert_eq!(sum(4.0, params), 10.0);
//! ```
//!
//! ### Error Handling
//!
//! Lookups through [`ParameterSet::get`] never fail. When the callee wants to
//! know about problems, it uses the fallible lookups instead:
//!
//! ```rust
//! use sovran_kwargs::{kwargs, Keyword, ParamError, Parameter};
//!
//! static COUNT: Keyword<i64> = Keyword::new("count", 0);
//!
//! let params = kwargs([Parameter::new("count", "ten".to_string())]);
//!
//! // Bound as a String, so it can't be read as an i64
//! match params.try_get(&COUNT) {
//!     Ok(count) => println!("Count: {}", count),
//!     Err(ParamError::WrongType { expected, found, .. }) => {
//!         println!("Expected {}, found {}", expected, found)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // A keyword nobody bound
//! match params.require("limit") {
//!     Ok(p) => println!("Limit: {}", p),
//!     Err(ParamError::Missing { keyword }) => println!("{} is required", keyword),
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // The same keyword bound twice
//! let twice = kwargs([COUNT.bind(1), COUNT.bind(2)]);
//! assert_eq!(twice.get(&COUNT), 2);
//! assert!(matches!(twice.check(), Err(ParamError::Multiple { .. })));
//! ```
//!
//! ### Conditions
//!
//! ```rust
//! use sovran_kwargs::conditions::InRange;
//! use sovran_kwargs::{Keyword, ParameterSet};
//!
//! static RATIO: Keyword<f64> = Keyword::new("ratio", 0.5);
//!
//! let params = ParameterSet::from(RATIO.bind(1.5).require(InRange::new(0.0, 1.0)));
//!
//! // The bound value failed its condition, so the default is used
//! assert_eq!(params.get(&RATIO), 0.5);
//! assert!(params.try_get(&RATIO).unwrap_err().is_invalid());
//! ```

mod any_value;
pub mod conditions;
mod error;
mod keeper;
mod keyword;
mod parameter;
mod set;

pub use error::ParamError;
pub use keeper::ValueKeeper;
pub use keyword::{Keyword, KeywordId};
pub use parameter::{Parameter, Validity};
pub use set::{kwargs, ParameterSet};

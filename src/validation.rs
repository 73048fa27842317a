//! Validation type for accumulating field errors
//!
//! `Validation` is similar to `Result` but combining two failures keeps both
//! errors instead of stopping at the first. The contact form relies on this:
//! a submission shows every failing field at once.
//!
//! # Examples
//!
//! ## Combining validations
//!
//! ```
//! use brochure::Validation;
//!
//! let v1 = Validation::<_, Vec<&str>>::success("Jo");
//! let v2 = Validation::<_, Vec<&str>>::success("jo@example.com");
//! assert_eq!(v1.and(v2), Validation::Success(("Jo", "jo@example.com")));
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use brochure::Validation;
//!
//! let v1 = Validation::<(), _>::failure(vec!["Name is required"]);
//! let v2 = Validation::<(), _>::failure(vec!["Email is required"]);
//! assert_eq!(
//!     v1.and(v2),
//!     Validation::Failure(vec!["Name is required", "Email is required"])
//! );
//! ```
//!
//! ## Validating tuples
//!
//! ```
//! use brochure::{Validation, validation::ValidateAll};
//!
//! let result = (
//!     Validation::<i32, Vec<&str>>::success(1),
//!     Validation::<i32, Vec<&str>>::failure(vec!["Email is required"]),
//!     Validation::<i32, Vec<&str>>::failure(vec!["Message is required"]),
//! ).validate_all();
//!
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec!["Email is required", "Message is required"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine all validations in a tuple
    ///
    /// Delegates to [`ValidateAll`]. Implemented for the three-field tuple the
    /// contact form validates.
    pub fn all<V, E2>(validations: V) -> Validation<V::Output, E2>
    where
        E2: Semigroup,
        V: ValidateAll<E2>,
    {
        validations.validate_all()
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Errors from `self` come before errors from `other`, so combining in
    /// document order keeps the accumulated errors in document order.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }
}

/// Trait for combining multiple validations in a tuple
///
/// Only the three-field tuple is supported:
///
/// ```compile_fail
/// use brochure::{Validation, validation::ValidateAll};
///
/// let pair = (
///     Validation::<i32, Vec<&str>>::success(1),
///     Validation::<i32, Vec<&str>>::success(2),
/// );
/// let _ = pair.validate_all();
/// ```
pub trait ValidateAll<E: Semigroup> {
    /// The output type when all validations succeed
    type Output;

    /// Combine all validations, accumulating errors
    fn validate_all(self) -> Validation<Self::Output, E>;
}

impl<E: Semigroup, T1, T2, T3> ValidateAll<E>
    for (Validation<T1, E>, Validation<T2, E>, Validation<T3, E>)
{
    type Output = (T1, T2, T3);

    fn validate_all(self) -> Validation<Self::Output, E> {
        let (a, b, c) = self;
        a.and(b).and(c).map(|((a, b), c)| (a, b, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result_failure() {
        let v = Validation::<i32, _>::failure("Name is required");
        assert_eq!(v.into_result(), Err("Name is required"));
    }

    #[test]
    fn test_map_on_failure_keeps_error() {
        let v = Validation::<i32, _>::failure(vec!["error"]);
        assert_eq!(v.map(|x| x + 1), Validation::Failure(vec!["error"]));
    }

    #[test]
    fn test_and_both_failure_keeps_order() {
        let v1 = Validation::<(), _>::failure(vec!["first"]);
        let v2 = Validation::<(), _>::failure(vec!["second"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["first", "second"]));
    }

    #[test]
    fn test_and_second_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["second"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["second"]));
    }

    #[test]
    fn test_all_three_success() {
        let result = Validation::<(i32, i32, i32), Vec<&str>>::all((
            Validation::<_, Vec<&str>>::success(1),
            Validation::<_, Vec<&str>>::success(2),
            Validation::<_, Vec<&str>>::success(3),
        ));
        assert_eq!(result, Validation::Success((1, 2, 3)));
    }

    #[test]
    fn test_all_three_collects_every_failure() {
        let result = (
            Validation::<(), _>::failure(vec!["a"]),
            Validation::<(), Vec<&str>>::success(()),
            Validation::<(), _>::failure(vec!["c"]),
        )
            .validate_all();
        assert_eq!(result, Validation::Failure(vec!["a", "c"]));
    }
}

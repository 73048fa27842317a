//! Semigroup trait for accumulating validation errors
//!
//! A Semigroup is a type with an associative binary operation. Submitting the
//! contact form validates every field and needs to report every failure at
//! once, so error collections combine instead of short-circuiting.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use brochure::Semigroup;
//!
//! let v1 = vec!["Name is required"];
//! let v2 = vec!["Email is required"];
//! assert_eq!(v1.combine(v2), vec!["Name is required", "Email is required"]);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value. Clone first if the original is still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

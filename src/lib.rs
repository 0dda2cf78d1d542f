//! # strcalc
//!
//! A calculator over string-encoded number lists.
//!
//! Input is a list of integers separated by the default comma, or by one or
//! more custom delimiters declared in a `//<delims>\n` header line. Values in
//! `[0, 1000]` are summed; larger values and non-numeric tokens are ignored;
//! any negative value invalidates the whole input and forces the result to 0.
//!
//! ```
//! assert_eq!(strcalc::sum(Some("1,2,3")), 6);
//! assert_eq!(strcalc::sum(Some("//;\n1;3;4")), 8);
//! assert_eq!(strcalc::sum(None), 0);
//! ```

pub mod calc;

pub use calc::engine::sum;

//! Delimiter resolution for calculator input
//!
//! An input may open with a custom-delimiter header:
//!
//! ```text
//! //<delimiter>\n<numbers>
//! //<delim1>,<delim2>,...\n<numbers>
//! ```
//!
//! This module turns the raw input into the effective splitting rule and the
//! numeric body. Resolution is pure and total: an input without a header
//! always falls back to the default comma, and a header always yields a
//! usable specification.
//!
//! Declared delimiters are literal text, never a pattern language. A
//! multi-character delimiter such as `xc` or `..` splits as a whole string,
//! not as a class over its characters. Because the comma separates
//! declarations, a delimiter containing a comma cannot be expressed.

use regex::Regex;

/// Marker that introduces a custom-delimiter header.
const MARKER: &str = "//";

/// Separator used when no header is present.
const DEFAULT_DELIMITER: &str = ",";

/// The literal separator(s) in effect for one input.
///
/// A specification is resolved once per input and applies uniformly to the
/// entire numeric body; it never changes mid-parse.
#[derive(Debug, Clone)]
pub enum DelimiterSpec {
    /// A single literal separator.
    Single(String),
    /// A set of literal separators; any of them, wherever found, acts as a
    /// token boundary.
    Set {
        /// The declared literals, in declaration order.
        delimiters: Vec<String>,
        /// The splitting rule compiled from them, built once at resolution.
        splitter: Regex,
    },
}

/// Equality is over the declared separators; the compiled splitter is
/// derived state.
impl PartialEq for DelimiterSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DelimiterSpec::Single(a), DelimiterSpec::Single(b)) => a == b,
            (
                DelimiterSpec::Set { delimiters: a, .. },
                DelimiterSpec::Set { delimiters: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

impl DelimiterSpec {
    /// Build a delimiter-set specification, compiling its splitter once.
    pub fn set(delimiters: Vec<String>) -> Self {
        // Escaped literals always compile.
        let splitter = Regex::new(&alternation_pattern(&delimiters)).unwrap();
        DelimiterSpec::Set {
            delimiters,
            splitter,
        }
    }

    /// Split a numeric body into tokens on this specification.
    ///
    /// Tokens may be empty, whitespace-padded, or non-numeric; filtering is
    /// the summation engine's job, not the splitter's.
    pub fn split<'a>(&self, body: &'a str) -> Vec<&'a str> {
        match self {
            DelimiterSpec::Single(delimiter) => body.split(delimiter.as_str()).collect(),
            DelimiterSpec::Set { splitter, .. } => splitter.split(body).collect(),
        }
    }
}

/// Resolve the raw input into a delimiter specification and the numeric body.
///
/// With a `//` header, the header is everything before the first line break
/// and the body everything after it. A header containing commas declares
/// multiple delimiters; otherwise the whole header is one literal delimiter.
/// Without a header, the body is the entire input and the delimiter is the
/// default comma.
pub fn resolve(input: &str) -> (DelimiterSpec, &str) {
    let header = match input.strip_prefix(MARKER) {
        Some(rest) => rest,
        None => return (DelimiterSpec::Single(DEFAULT_DELIMITER.to_string()), input),
    };

    // A header with no line break leaves an empty body.
    let (header, body) = match header.split_once('\n') {
        Some((header, body)) => (header, body),
        None => (header, ""),
    };

    let spec = if header.contains(',') {
        DelimiterSpec::set(header.split(',').map(str::to_string).collect())
    } else {
        DelimiterSpec::Single(header.to_string())
    };

    (spec, body)
}

/// Build an alternation of escaped literals for a delimiter set.
///
/// Branches are ordered longest first so that a delimiter which is a prefix
/// of another never shadows the longer one (`xc` must win over `x`).
fn alternation_pattern(delimiters: &[String]) -> String {
    let mut ordered: Vec<&str> = delimiters.iter().map(String::as_str).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    ordered
        .iter()
        .map(|d| regex::escape(d))
        .collect::<Vec<_>>()
        .join("|")
}

//! Core functionality for the greeter.
//!
//! Holds the single formatting operation used by the `greeter` binary. It is
//! a pure function with no state, so it can be called from any thread.

/// Name greeted when the binary runs without input.
pub const DEFAULT_NAME: &str = "World";

/// Formats a greeting for `name`.
///
/// The name is inserted verbatim; empty, whitespace and non-ASCII values are
/// all accepted.
///
/// ```
/// use greeter_core::greet;
///
/// assert_eq!(greet("World"), "Hello, World!");
/// assert_eq!(greet("Alice"), "Hello, Alice!");
/// ```
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

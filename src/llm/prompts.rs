//! The fixed instruction strings, one per command.
//!
//! Trailing spaces matter: the diff content is appended directly, with no
//! separator added by the builders.

pub const DOCUMENTATION: &str = "Document the following code ";

pub const RELEASE_NOTES: &str = "Write release notes for ";

pub const WRITE_A_FUNCTION: &str =
    "Please help write a function to calculate the min of two numbers";

pub const OPTIMIZE: &str = "Please optimize this code ";

pub const OPTIMIZE_SECURITY: &str = "Please optimize this code to make it more secure ";

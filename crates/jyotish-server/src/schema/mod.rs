//! API schema types for request/response definitions.

pub mod calculate;
pub mod common;

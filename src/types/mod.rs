//! Assorted general types.

pub mod err;

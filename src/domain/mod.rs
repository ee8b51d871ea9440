//! Domain types and field rules.

pub mod student;

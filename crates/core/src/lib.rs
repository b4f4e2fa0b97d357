//! Domain types and rules shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod credentials;
pub mod error;
pub mod note;
pub mod types;

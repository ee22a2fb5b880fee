//! Game implementations.

pub mod trick;

//! Game implementations.

pub mod noughts_crosses;

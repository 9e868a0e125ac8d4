//! FAQ records and their collections.

pub mod collection;
pub mod entities;

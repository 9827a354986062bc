//! Store requests split into focused modules. Each method issues exactly one request.

pub mod aggregation;
pub mod documents;
pub mod explain;
pub mod indexes;

//! Utils module providing shared datatypes for tagsim
//! Includes the tag alphabet, tags, ordered ranges, and quality strings

pub mod allowed_agctn;
pub mod contains;
pub mod ord_pair;
pub mod quality;
pub mod tag;

// Re-export public utility types and functions to expose the utils API
pub use allowed_agctn::*;
pub use contains::*;
pub use ord_pair::*;
pub use quality::*;
pub use tag::*;

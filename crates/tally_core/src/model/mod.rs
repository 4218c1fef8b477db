//! Ledger records and the drafts they are created from

mod draft;
mod ids;
mod income;
mod investment;

pub use draft::*;
pub use ids::*;
pub use income::*;
pub use investment::*;

pub mod income;
pub mod investments;
pub mod overview;

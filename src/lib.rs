pub mod aggregate;
pub mod contact;
pub mod error;
pub mod graph;
pub mod minter;
pub mod model;

// src/lib.rs

pub mod classifier;
pub mod config;
pub mod disambig;
pub mod error;
pub mod knowledge;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use resolver::{ResolvedInfo, Resolver};

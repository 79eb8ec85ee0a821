//! Low-level utilities shared across the crate
//!
//! - [`constants`] - unit conventions, sentinel values, reference masses
//! - [`rng`] - deterministic RNG for reproducible scenarios

pub mod constants;
pub mod rng;

pub use rng::SimpleRng;

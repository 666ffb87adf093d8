//! Quote rotation
//!
//! Quotes are fetched once per session as a JSON array and held in memory:
//! - Draws are uniformly random, rejection-sampled so the same quote never
//!   shows twice in a row
//! - A single-quote board returns that quote without sampling
//! - An empty board draws nothing

pub mod board;

pub use board::{Quote, QuoteBoard};

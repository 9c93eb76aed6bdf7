//! Command implementations

pub mod encode;
pub mod evaluate;
pub mod solve;

pub use encode::{EncodeResult, decode_payload, encode_puzzle};
pub use evaluate::{EncodingStats, evaluate_encodings};
pub use solve::solve_puzzle;

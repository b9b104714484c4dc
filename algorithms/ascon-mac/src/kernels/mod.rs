//! Ascon Kernels
//!
//! The permutation and the byte/word codec it is fed through.

pub mod codec;
pub mod constants;
pub mod permutation;

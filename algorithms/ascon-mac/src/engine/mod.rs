//! Execution Engine
//!
//! Sequences the sponge phases of one MAC computation.

pub mod driver;

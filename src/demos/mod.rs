//! Console drivers for the three pattern families.
//!
//! Each `run` function writes its transcript through the given
//! [`Transcript`](crate::core::Transcript); the binaries under `demos/` pass
//! one that echoes to stdout.

pub mod behavioral;
pub mod creational;
pub mod structural;

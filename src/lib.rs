pub mod behavioral;
pub mod core;
pub mod creational;
pub mod demos;
pub mod structural;

// Re-export commonly used types
pub use crate::core::{PizzeriaConfig, PizzeriaError, Result, Transcript};

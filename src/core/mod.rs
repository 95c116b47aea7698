pub mod config;
pub mod errors;
pub mod transcript;
pub mod types;

pub use config::PizzeriaConfig;
pub use errors::{PizzeriaError, Result};
pub use transcript::Transcript;
pub use types::{ListenerId, OrderId};

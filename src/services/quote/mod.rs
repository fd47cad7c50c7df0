pub mod common;
pub mod context;
pub mod error;
pub mod types;
pub mod wire;

pub use context::QuoteContext;
pub use error::QuoteError;
pub use types::*;

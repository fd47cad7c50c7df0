pub mod envelope;
pub mod kline;

pub use envelope::*;
pub use kline::*;

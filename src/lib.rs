pub mod config;
pub mod design;
pub mod discrete;
pub mod error;
pub mod output;
pub mod response;
pub mod signal;
pub mod transfer_function;

pub use error::{FilterError, Result};
pub use transfer_function::TransferFunction;

pub mod copy;
pub mod error;
pub mod io;
pub mod lang;
pub mod paths;
pub mod plan;
pub mod prompt;
pub mod provision;

pub use error::{Result, SdpError};

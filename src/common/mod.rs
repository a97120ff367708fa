pub mod bit_utils;
pub mod codec;
pub mod error;
pub mod iter;
pub mod metadata;

pub use bit_utils::*;
pub use error::*;
pub use iter::*;
pub use metadata::*;

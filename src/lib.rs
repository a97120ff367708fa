//! # qrsketch
//!
//! A Rust library for generating simplified QR-style matrix symbols from
//! text, with byte mode encoding and image rendering.
//!
//! The generated symbols carry the classic structural landmarks of a QR
//! code (finder, timing and alignment patterns) and a byte mode bitstream
//! with deterministic padding, but no error correction codewords, masking
//! or format information. They are not decodable by standard QR readers.
//!
//! ## Quick Start
//!
//! ### Simple symbol generation
//!
//! ```rust
//! use qrsketch::SymbolBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Provide only data; the smallest fitting version is chosen.
//! let symbol = SymbolBuilder::new(b"Hello, World!").build()?;
//!
//! let img = symbol.to_image(4); // 4x scale factor
//! assert_eq!(img.width(), symbol.width() as u32 * 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full configuration
//!
//! ```rust,no_run
//! use qrsketch::{ECLevel, SymbolBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = SymbolBuilder::new(b"Hello, World!")
//!     .version(Version::new(2)) // Symbol version (size); selected automatically if not provided
//!     .ec_level(ECLevel::M)     // Capacity level; defaults to ECLevel::L
//!     .build()?;
//!
//! let img = symbol.to_image(4);
//! img.save("symbol.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Symbol components
//!
//! ### Versions
//! - Versions 1-40, with sizes from 21x21 to 177x177 modules; capacities
//!   are tabulated for versions 1-5 and extrapolated beyond.
//!
//! ### Capacity levels
//! - **L (Low)**, **M (Medium)**, **Q (Quartile)**, **H (High)**: nominal
//!   error correction levels keying the capacity table. No redundancy
//!   codewords are generated.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Symbol, SymbolBuilder};
pub use common::codec::fit_version;
pub use common::error::{SymbolError, SymbolResult};
pub use common::metadata::{ECLevel, Version};

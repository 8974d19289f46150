#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod endpoint;
pub mod error_metric;
pub mod search;
pub mod table;

pub use endpoint::EndpointPrecision;
pub use error_metric::{candidate_error, lerp13};
pub use search::{generate_table_with, BestPair, INTENSITY_COUNT};
pub use table::{ConstantColorTable, TableVariant};

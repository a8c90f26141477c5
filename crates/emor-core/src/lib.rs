//! Conversion of EMoR sensor response parameter files into C++ array headers.

pub mod config;
pub mod convert;
pub mod domain;
pub mod emit;
pub mod keys;
pub mod parser;

pub use config::ConverterConfig;
pub use convert::{ConversionReport, convert_basename, run_conversions};
pub use domain::{EmorError, EmorErrorCategory, EmorResult, ParameterTable};

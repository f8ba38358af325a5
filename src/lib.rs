//! Parameter optimization for 3D-printable Gray code encoder disks.
//!
//! The crate models an absolute rotary encoder disk as a flat parameter
//! record, checks it against geometric, encoding, and FDM printing
//! constraints, and searches the parameter space with a genetic
//! algorithm driven by a multi-criterion fitness function.

pub mod config;
pub mod engines;
pub mod error;
pub mod gray;
pub mod params;
pub mod report;

pub use error::{GraydiskError, Result};
pub use params::EncoderParameters;
pub use report::OptimizationResult;

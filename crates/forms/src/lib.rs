//! Custom Form Library
//!
//! Builds custom form payloads for clients and validates the positional
//! responses they send back, remapping them onto labelled fields.
//! The `customform` binary exposes the same operations on definition files.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;

pub use config::Config;
pub use error::{ValidationError, ValidationResult};
pub use form::{CustomForm, Element, FormBuilder, FormResponse, FormValue, FormValues, Numeric};

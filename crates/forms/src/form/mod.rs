//! Custom forms: typed element descriptors, response validation, and
//! remapping of positional client responses onto labelled fields.
//!
//! The form system supports:
//! - Building forms from ordered element declarations
//! - Loading form definitions from TOML files
//! - Per-element validation of submitted values
//! - Completion callbacks receiving the processed response

pub mod definition;
mod builder;
mod response;
mod service;
mod types;
mod validator;

pub use builder::{CUSTOM_FORM_TYPE, FormBuilder, Slot};
pub use definition::{ElementDefinition, FormDefinition};
pub use response::{FormResponse, FormValues};
pub use service::{CompletionCallback, CustomForm};
pub use types::{Element, FormValue, Numeric, json_kind};
pub use validator::Validator;

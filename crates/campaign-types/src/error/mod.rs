//! Typed error definitions for local validation.
//!
//! Validation errors never reach the network: they are raised by the
//! view-models before a request is issued. Transport and HTTP failures live
//! in `campaign-client` as `RequestError`.

mod validation;

pub use validation::ValidationError;

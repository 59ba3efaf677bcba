//! Random token generation over a configurable alphabet, with the HTTP
//! surface in the `tokengen` binary.

pub mod batch;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod page;
pub mod token;

pub use error::{ClipboardError, TokenError};
pub use form::{generate_batch, TokenConfig, TokenForm};
pub use token::{Charset, TokenGenerator};

//! Core library for decoding Donut invoice model output.
//!
//! This crate provides:
//! - Sanitation of raw generated text (junk prefixes, delimiter artifacts)
//! - Two-level tag-pair extraction into a key/value FieldMap
//! - Projection onto a fixed header/items/summary invoice record
//!
//! Image acquisition, model inference, and presentation are external
//! collaborators: the library takes one decoded string and returns one
//! record.

pub mod decode;
pub mod error;
pub mod models;

pub use decode::{DecodeResult, DonutDecoder, FieldMap, OutputDecoder, decode};
pub use error::{DonexError, Result};
pub use models::config::DonexConfig;
pub use models::invoice::{FieldValue, Invoice, InvoiceHeader, InvoiceSummary, LineItem};

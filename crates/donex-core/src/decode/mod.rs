//! Decode pipeline: raw model output to structured invoice record.
//!
//! Three chained, pure stages: [`sanitize`] cleans generation artifacts,
//! [`extract`] folds matched tag pairs into a [`FieldMap`], and
//! [`project`] maps that onto the fixed record shape. Every stage is
//! total; malformed input degrades to absent fields, never to an error.

mod patterns;
mod sanitize;
mod schema;
mod tags;

pub use patterns::TAG_PREFIX;
pub use sanitize::sanitize;
pub use schema::project;
pub use tags::{FieldMap, extract};

use std::time::Instant;

use tracing::debug;

use crate::models::invoice::Invoice;

/// Result of decoding one raw model output.
#[derive(Debug, Clone)]
pub struct DecodeResult {
    /// Decoded invoice record.
    pub invoice: Invoice,
    /// Sanitized text the tags were extracted from.
    pub sanitized_text: String,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for model-output decoders.
pub trait OutputDecoder {
    /// Decode raw model output into a structured record.
    fn decode(&self, raw: &str) -> DecodeResult;
}

/// Decoder for Donut-style pseudo-XML invoice output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DonutDecoder;

impl DonutDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl OutputDecoder for DonutDecoder {
    fn decode(&self, raw: &str) -> DecodeResult {
        let start = Instant::now();

        let sanitized_text = sanitize(raw);
        let fields = extract(&sanitized_text);
        debug!(
            "Extracted {} field tags from {} characters of output",
            fields.len(),
            raw.len()
        );

        let invoice = project(&fields);

        DecodeResult {
            invoice,
            sanitized_text,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Decode raw model output with the default decoder.
pub fn decode(raw: &str) -> Invoice {
    DonutDecoder::new().decode(raw).invoice
}

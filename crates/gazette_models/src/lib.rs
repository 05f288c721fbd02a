//! Generative backend integrations for gazette.
//!
//! Currently one provider: Google Gemini. Article and metadata text go
//! through the `gemini-rust` SDK; image generation calls the REST
//! `generateContent` endpoint directly, since the SDK does not cover
//! image-output models.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiWriter;

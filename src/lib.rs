//! blogweaver - turns a topic and a few descriptive choices into an
//! AI-written blog article with a matching hero image.
//!
//! Two prompts are composed from the request, Gemini is asked for
//! JSON-structured article text and a 16:9 JPEG hero image concurrently,
//! both responses are decoded, and the results are rendered and exported as
//! local files.

pub mod ai;
pub mod app;
pub mod decode;
pub mod error;
pub mod export;
pub mod models;
pub mod prompts;
pub mod render;

pub use error::{Error, Result};

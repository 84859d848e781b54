//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::report::Report;
use anyhow::{anyhow, Result};

/// Trait for rendering a finished Report into a specific output format.
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

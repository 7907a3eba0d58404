/// A single-pass translator from restricted Markdown to an HTML-like subset
pub mod error;
pub mod marker;
pub mod translator;

pub use error::{Error, Result};
pub use marker::Marker;
use translator::Translator;

/// Translate restricted Markdown text into HTML-like markup
pub fn translate(source: &str) -> Result<String> {
    let translator = Translator::new();
    translator.translate(source)
}

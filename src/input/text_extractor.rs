//! Text extraction from various file formats

use crate::error::{Result, SkillFitError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncReadExt;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            SkillFitError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Flatten Markdown to plain text, keeping the line structure section
/// detection relies on: headings stay on their own `#` line after a blank
/// line, list items become `- ` lines.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(..)) => {
                ensure_newlines(&mut out, 2);
                out.push_str("# ");
            }
            Event::End(Tag::Heading(..)) => ensure_newlines(&mut out, 1),
            Event::Start(Tag::Item) => {
                ensure_newlines(&mut out, 1);
                out.push_str("- ");
            }
            Event::End(Tag::Item) => ensure_newlines(&mut out, 1),
            Event::End(Tag::Paragraph) | Event::End(Tag::List(_)) => ensure_newlines(&mut out, 2),
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => ensure_newlines(&mut out, 2),
            _ => {}
        }
    }

    out.trim().to_string()
}

fn ensure_newlines(out: &mut String, count: usize) {
    if out.is_empty() {
        return;
    }
    let existing = out.chars().rev().take_while(|&c| c == '\n').count();
    for _ in existing..count {
        out.push('\n');
    }
}

/// Read all of standard input.
pub async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

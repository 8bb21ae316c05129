//! File export of a finished generation round: the article as text, the hero
//! image as JPEG, and an HTML preview embedding the image as a data URI.
//!
//! File names derive from the sanitized title, with fixed fallbacks when the
//! title sanitizes to nothing.

use crate::ai::mime::detect_image_mime;
use crate::models::{ArticlePackage, PARAGRAPH_SEPARATOR};
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ARTICLE_NAME: &str = "blog-post";
pub const DEFAULT_IMAGE_NAME: &str = "blog-image";

/// Lower-case, collapse whitespace runs to single hyphens, and strip every
/// character outside `[a-z0-9-]`.
pub fn sanitize_file_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

fn file_stem(title: &str, fallback: &str) -> String {
    let sanitized = sanitize_file_name(title);
    if sanitized.is_empty() {
        fallback.to_string()
    } else {
        sanitized
    }
}

/// Write `<title>\n\n<content>` to `<sanitized-title>.txt`.
pub fn save_article_text(output_dir: &Path, package: &ArticlePackage) -> Result<PathBuf> {
    let path = output_dir.join(format!(
        "{}.txt",
        file_stem(&package.title, DEFAULT_ARTICLE_NAME)
    ));
    let body = format!(
        "{}{}{}",
        package.title, PARAGRAPH_SEPARATOR, package.content
    );
    fs::write(&path, body)?;
    Ok(path)
}

/// Write the hero image bytes to `<sanitized-title>.jpeg`.
pub fn save_article_image(output_dir: &Path, package: &ArticlePackage) -> Result<PathBuf> {
    let mime = detect_image_mime(&package.image_bytes);
    if mime != "image/jpeg" {
        tracing::warn!(
            "Provider returned a {} payload; saving with a .jpeg extension anyway",
            mime
        );
    }

    let path = output_dir.join(format!(
        "{}.jpeg",
        file_stem(&package.title, DEFAULT_IMAGE_NAME)
    ));
    fs::write(&path, &package.image_bytes)?;
    Ok(path)
}

/// Write a standalone HTML preview to `<sanitized-title>.html`: hero image as
/// a data URI, then the title and paragraphs.
pub fn save_article_preview(output_dir: &Path, package: &ArticlePackage) -> Result<PathBuf> {
    let path = output_dir.join(format!(
        "{}.html",
        file_stem(&package.title, DEFAULT_ARTICLE_NAME)
    ));
    fs::write(&path, render_preview(package))?;
    Ok(path)
}

fn render_preview(package: &ArticlePackage) -> String {
    let title = html_escape::encode_text(&package.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n</head>\n<body>\n", title));
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\">\n",
        package.image_data_uri(),
        html_escape::encode_double_quoted_attribute(&package.title)
    ));
    html.push_str(&format!("<h1>{}</h1>\n", title));
    for paragraph in package.paragraphs() {
        html.push_str(&format!("<p>{}</p>\n", html_escape::encode_text(paragraph)));
    }
    html.push_str("</body>\n</html>\n");

    html
}

//! Bundled resources shipped inside the binary: the page template with
//! its substitution markers, and the DOGE engine runtime that the
//! published page loads next to `index.html`.

pub const PAGE_TEMPLATE: &str = include_str!("page.html");

pub const ENGINE_JS: &str = include_str!("doge.js");

/// Filename the engine runtime is published under, referenced by the
/// `<script src>` tag in the page template.
pub const ENGINE_FILE_NAME: &str = "doge.js";

//! Marker substitution in the page template.
//!
//! The template carries three literal marker tokens. Each substitution
//! replaces every occurrence of one marker with the joined fragment text
//! and errors if the marker never appears, rather than silently passing
//! the template through unchanged.

use crate::error::{BuildError, Result};

pub const PRELOAD_MARKER: &str = "__DOGE_PRELOAD__";
pub const OBJECTS_MARKER: &str = "__DOGE_OBJECTS__";
pub const CREATE_MARKER: &str = "__DOGE_CREATE__";

/// Replace all occurrences of `marker` with `fragment`.
pub fn substitute(
    template: &str,
    marker: &'static str,
    fragment: &str,
) -> Result<String> {
    if !template.contains(marker) {
        return Err(BuildError::MissingMarker(marker));
    }
    Ok(template.replace(marker, fragment))
}

/// Splice all three fragment sets into the template. Fragments are joined
/// by newlines; an empty set becomes an empty replacement.
pub fn compose(
    template: &str,
    preload: &[String],
    objects: &[String],
    create: &[String],
) -> Result<String> {
    let page = substitute(template, PRELOAD_MARKER, &preload.join("\n"))?;
    let page = substitute(&page, OBJECTS_MARKER, &objects.join("\n"))?;
    substitute(&page, CREATE_MARKER, &create.join("\n"))
}

//! Slug normalization for values ingested at the API boundary.
//!
//! Facet and filter matching is case-sensitive identity on slugs; the CMS is
//! assumed to serve pre-normalized values. Callers ingesting free-form input
//! (search boxes, URL segments) normalize here, once, instead of scattering
//! lowercasing through the pipeline.

/// Lowercase, trim, and collapse whitespace/underscores into single hyphens.
pub fn normalize(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        for lower in ch.to_lowercase() {
            slug.push(lower);
        }
    }
    slug
}

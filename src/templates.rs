//! Embedded template resources.
//! The whole template tree ships inside the binary; resources are addressed
//! by their path relative to `src/templates`.

use include_dir::{include_dir, Dir};

use crate::error::{Error, Result};

static TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/templates");

/// Looks up an embedded text template by resource id.
pub fn template_text(resource_id: &str) -> Result<&'static str> {
    TEMPLATES
        .get_file(resource_id)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| {
            Error::Template(format!("embedded template '{}' not found", resource_id))
        })
}

/// Looks up an embedded binary resource (the build-wrapper jar) by id.
pub fn template_bytes(resource_id: &str) -> Result<&'static [u8]> {
    TEMPLATES
        .get_file(resource_id)
        .map(|file| file.contents())
        .ok_or_else(|| {
            Error::Template(format!("embedded resource '{}' not found", resource_id))
        })
}

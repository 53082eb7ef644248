//! Asset reference resolution.
//!
//! Content payloads refer to images and logos in three forms: absolute URLs,
//! absolute paths (`/logo.png`, `/uploads/x.png`) and bare filenames
//! (`x.png`). Bare filenames are uploads; uploads live on the backend and get
//! the API base prepended. Every other path is a frontend static asset and is
//! returned untouched.

use crate::config::ApiBase;

/// Returned when a reference is absent or empty.
pub const PLACEHOLDER: &str = "/placeholder.svg";

/// Path prefix of files served by the backend's upload storage.
pub const UPLOADS_PREFIX: &str = "/uploads/";

/// Resolves asset references against a fixed API base.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    base: ApiBase,
}

impl AssetResolver {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// See [`resolve_asset`].
    pub fn resolve(&self, reference: Option<&str>) -> String {
        resolve_asset(&self.base, reference)
    }

    /// Same contract as [`resolve`](Self::resolve); kept separate for call sites
    /// that render logos.
    pub fn resolve_logo(&self, reference: Option<&str>) -> String {
        resolve_logo_asset(&self.base, reference)
    }
}

/// Maps an asset reference to a URL usable directly as a resource source.
///
/// # Examples
///
/// With base `https://api.example.com`:
/// - `None` / `""` → `/placeholder.svg`
/// - `https://cdn.x.com/a.png` → unchanged
/// - `hero.jpg` → `https://api.example.com/uploads/hero.jpg`
/// - `/uploads/hero.jpg` → `https://api.example.com/uploads/hero.jpg`
/// - `/logo.png` → unchanged
pub fn resolve_asset(base: &ApiBase, reference: Option<&str>) -> String {
    let reference = match reference {
        Some(r) if !r.is_empty() => r,
        _ => return PLACEHOLDER.to_string(),
    };
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    let path = if reference.starts_with('/') {
        reference.to_string()
    } else {
        format!("{}{}", UPLOADS_PREFIX, reference)
    };

    if path.starts_with(UPLOADS_PREFIX) {
        base.join(&path)
    } else {
        path
    }
}

/// Alias of [`resolve_asset`] for logos.
pub fn resolve_logo_asset(base: &ApiBase, reference: Option<&str>) -> String {
    resolve_asset(base, reference)
}

//! `folio resolve <ref>...` – print resolved asset URLs.

use folio_core::config::FolioConfig;
use folio_core::AssetResolver;

pub fn run_resolve(cfg: &FolioConfig, refs: &[String], logo: bool) {
    let resolver = AssetResolver::new(cfg.api_base.clone());
    for r in refs {
        let reference = Some(r.as_str());
        let url = if logo {
            resolver.resolve_logo(reference)
        } else {
            resolver.resolve(reference)
        };
        println!("{}", url);
    }
}

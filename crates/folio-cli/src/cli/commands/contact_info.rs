//! `folio contact-info` – backend contact details, or the localized fallback.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::content::ContactInfo;
use folio_core::i18n::{translate, Language};
use folio_core::DataClient;

fn fallback(lang: Language) -> ContactInfo {
    ContactInfo {
        location: translate(lang, "contact.locationValue").to_string(),
        email: translate(lang, "contact.emailValue").to_string(),
        phone: translate(lang, "contact.phoneValue").to_string(),
        ..Default::default()
    }
}

pub async fn run_contact_info(cfg: &FolioConfig, lang: Language) -> Result<()> {
    let client = DataClient::new(cfg.api_base.clone());
    let info = match client.contact_info().await {
        Some(info) => info,
        None => {
            tracing::info!("contact info unavailable; using {} fallback", lang);
            fallback(lang)
        }
    };
    println!("{:<10} {}", translate(lang, "contact.location"), info.location);
    println!(
        "{:<10} {}  <{}>",
        translate(lang, "contact.emailLabel"),
        info.email,
        info.mailto()
    );
    println!(
        "{:<10} {}  <{}>",
        translate(lang, "contact.phone"),
        info.phone,
        info.tel()
    );
    Ok(())
}

//! `folio contact` – submit the contact form.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::contact::{ContactClient, ContactSubmission};
use folio_core::i18n::translate;

pub async fn run_contact(cfg: &FolioConfig, sub: ContactSubmission) -> Result<()> {
    let lang = cfg.default_language;
    let client = ContactClient::new(cfg.api_base.clone(), cfg.relay.clone());
    eprintln!("{}", translate(lang, "contact.sending"));
    let delivery = client.submit_async(sub).await?;
    println!("{}", translate(lang, "contact.success"));
    if !delivery.backend_recorded {
        tracing::warn!("message delivered by relay only; backend copy not stored");
    }
    Ok(())
}

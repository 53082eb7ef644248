//! `folio news [--slug <slug>]` – list articles or show one.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::i18n::translate;
use folio_core::DataClient;

pub async fn run_news(cfg: &FolioConfig, slug: Option<&str>) -> Result<()> {
    let client = DataClient::new(cfg.api_base.clone());
    let assets = client.assets();
    let unavailable = translate(cfg.default_language, "status.unavailable");

    if let Some(slug) = slug {
        match client.news_article(slug).await {
            Some(a) => {
                println!("{}", a.title);
                println!(
                    "{} · {}",
                    a.date.as_deref().unwrap_or("-"),
                    a.category.as_deref().unwrap_or("-")
                );
                println!("{}", assets.resolve(a.image.as_deref()));
                println!();
                println!("{}", a.content.as_deref().unwrap_or(a.display_desc()));
            }
            None => println!("{}", unavailable),
        }
        return Ok(());
    }

    match client.news().await {
        Some(list) if !list.is_empty() => {
            for a in &list {
                println!(
                    "{:<12} {:<32} {}",
                    a.date.as_deref().unwrap_or("-"),
                    a.slug.as_deref().unwrap_or("-"),
                    a.title
                );
            }
        }
        _ => println!("{}", unavailable),
    }
    Ok(())
}

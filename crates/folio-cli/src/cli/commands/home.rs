//! `folio home` - print the home page data.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::home::HomeView;
use folio_core::i18n::translate;
use folio_core::icon::IconTag;
use folio_core::DataClient;

pub async fn run_home(cfg: &FolioConfig) -> Result<()> {
    let client = DataClient::new(cfg.api_base.clone());
    let view = HomeView::load(&client).await;
    if view == HomeView::default() {
        println!("{}", translate(cfg.default_language, "status.unavailable"));
        return Ok(());
    }

    if !view.roles.is_empty() {
        println!("Roles: {}", view.roles.join(" | "));
    }
    for s in &view.hero_slides {
        println!("[slide] {} - {}  ({})", s.title, s.subtitle, s.image);
    }
    for s in &view.services {
        let icon = IconTag::from_name(s.icon_name.as_deref());
        println!("[service:{}] {} - {}", icon, s.title, s.desc);
    }
    for p in &view.latest_projects {
        println!("[project] {} [{}] -> {}", p.title, p.tags.join(", "), p.link);
    }
    for n in &view.tech_news {
        println!(
            "[news] {} {} -> {}",
            n.date.as_deref().unwrap_or("-"),
            n.title,
            n.link
        );
    }
    Ok(())
}

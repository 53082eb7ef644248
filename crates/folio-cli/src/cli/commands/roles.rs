//! `folio roles` – typewriter animation of the home page roles.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::typewriter::Typewriter;
use folio_core::DataClient;
use std::io::Write;

const FALLBACK_ROLE: &str = "Software Engineer";

/// Non-blank roles from the backend, or the single fallback role.
fn playable_roles(fetched: Option<Vec<String>>) -> Vec<String> {
    let roles: Vec<String> = fetched
        .unwrap_or_default()
        .into_iter()
        .filter(|r| !r.trim().is_empty())
        .collect();
    if roles.is_empty() {
        vec![FALLBACK_ROLE.to_string()]
    } else {
        roles
    }
}

pub async fn run_roles(cfg: &FolioConfig, cycles: usize) -> Result<()> {
    let client = DataClient::new(cfg.api_base.clone());
    let roles = playable_roles(client.home().await.map(|h| h.roles));

    let mut tw = Typewriter::new(&roles);
    let mut stderr = std::io::stderr();
    while tw.cycles_completed() < cycles {
        let frame = tw.tick();
        write!(stderr, "\r\x1b[2K{}|", frame.text)?;
        stderr.flush()?;
        tokio::time::sleep(frame.delay).await;
    }
    writeln!(stderr)?;
    Ok(())
}

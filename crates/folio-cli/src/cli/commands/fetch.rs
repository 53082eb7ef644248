//! `folio fetch <path>` – GET a backend path and pretty-print it.

use anyhow::Result;
use folio_core::config::FolioConfig;
use folio_core::DataClient;
use serde_json::Value;

pub async fn run_fetch(cfg: &FolioConfig, path: &str, verbose: bool) -> Result<()> {
    let client = DataClient::new(cfg.api_base.clone());
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if verbose {
        match client.try_fetch_json_async::<Value>(&path).await {
            Ok(v) => println!("{}", serde_json::to_string_pretty(&v)?),
            Err(e) => println!("{}: unavailable ({})", client.url_for(&path), e),
        }
        return Ok(());
    }

    match client.fetch_json_async::<Value>(&path).await {
        Some(v) => println!("{}", serde_json::to_string_pretty(&v)?),
        None => println!("{}: unavailable", client.url_for(&path)),
    }
    Ok(())
}

//! Core of the folio portfolio client: asset URL resolution, JSON content
//! fetching with absorbed failures, and contact form delivery.

pub mod config;
pub mod logging;

pub mod asset;
pub mod client;
pub mod contact;
pub mod content;
pub mod home;
pub mod i18n;
pub mod icon;
pub mod typewriter;

pub use asset::{resolve_asset, resolve_logo_asset, AssetResolver};
pub use client::{DataClient, FetchError};
pub use config::{ApiBase, FolioConfig};

//! Typed fetchers for the backend's content endpoints.

use serde_json::Value;

use super::DataClient;
use crate::content::{ContactInfo, Endpoint, HomeContent, NewsArticle, Project, ServiceItem};

impl DataClient {
    pub async fn home(&self) -> Option<HomeContent> {
        self.fetch_json_async(&Endpoint::Home.path()).await
    }

    /// About page payload; shape is page-specific and not validated.
    pub async fn about(&self) -> Option<Value> {
        self.fetch_json_async(&Endpoint::About.path()).await
    }

    pub async fn projects(&self) -> Option<Vec<Project>> {
        self.fetch_json_async(&Endpoint::Projects.path()).await
    }

    pub async fn services(&self) -> Option<Vec<ServiceItem>> {
        self.fetch_json_async(&Endpoint::Services.path()).await
    }

    pub async fn skills(&self) -> Option<Value> {
        self.fetch_json_async(&Endpoint::Skills.path()).await
    }

    pub async fn resume(&self) -> Option<Value> {
        self.fetch_json_async(&Endpoint::Resume.path()).await
    }

    pub async fn news(&self) -> Option<Vec<NewsArticle>> {
        self.fetch_json_async(&Endpoint::News.path()).await
    }

    pub async fn news_article(&self, slug: &str) -> Option<NewsArticle> {
        self.fetch_json_async(&Endpoint::NewsBySlug(slug.to_string()).path())
            .await
    }

    pub async fn contact_info(&self) -> Option<ContactInfo> {
        self.fetch_json_async(&Endpoint::ContactInfo.path()).await
    }
}

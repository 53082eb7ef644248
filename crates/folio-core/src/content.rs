//! Backend payloads and the endpoint catalog.
//!
//! Payloads are decoded leniently: every field has a default, `null` counts
//! as absent, and unknown fields are ignored, so a partially filled record
//! still renders.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend resources, rendered to paths relative to the API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Home,
    About,
    Projects,
    Services,
    Skills,
    Resume,
    News,
    NewsBySlug(String),
    ContactInfo,
    /// POST target for contact submissions.
    Contact,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Home => "/api/home".to_string(),
            Endpoint::About => "/api/about".to_string(),
            Endpoint::Projects => "/api/projects".to_string(),
            Endpoint::Services => "/api/services".to_string(),
            Endpoint::Skills => "/api/skills".to_string(),
            Endpoint::Resume => "/api/resume".to_string(),
            Endpoint::News => "/api/news".to_string(),
            Endpoint::NewsBySlug(slug) => format!("/api/news/slug/{}", encode_segment(slug)),
            Endpoint::ContactInfo => "/api/contact_info/".to_string(),
            Endpoint::Contact => "/api/contact/".to_string(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-encodes `s` as a single path segment.
fn encode_segment(s: &str) -> String {
    // Url::path_segments_mut applies the path-segment encode set.
    let mut url = match url::Url::parse("http://segment.invalid/") {
        Ok(u) => u,
        Err(_) => return s.to_string(),
    };
    match url.path_segments_mut() {
        Ok(mut segs) => {
            segs.clear().push(s);
        }
        Err(()) => return s.to_string(),
    }
    url.path().trim_start_matches('/').to_string()
}

/// Decodes `null` as the type's default instead of failing.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSlide {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    pub image: Option<String>,
    pub cta: Option<String>,
}

/// A service card. The backend uses `title`/`desc` on the home page and
/// `name`/`description` on `/api/services`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub desc: Option<String>,
    pub image: Option<String>,
    pub icon_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<String>,
}

impl ServiceItem {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    pub fn display_desc(&self) -> &str {
        self.desc
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    pub desc: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Technology list used by home-page project cards instead of `tags`.
    #[serde(deserialize_with = "null_as_default")]
    pub tech: Vec<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub category: Option<String>,
}

impl Project {
    pub fn display_desc(&self) -> &str {
        self.desc
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }

    /// `tech` when present, else `tags`.
    pub fn display_tags(&self) -> &[String] {
        if self.tech.is_empty() {
            &self.tags
        } else {
            &self.tech
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub slug: Option<String>,
    pub desc: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub link: Option<String>,
}

impl NewsArticle {
    pub fn display_desc(&self) -> &str {
        self.desc
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesSection {
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<ServiceItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub news: Vec<NewsArticle>,
}

/// `/api/home`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hero_slides: Vec<HeroSlide>,
    pub services_section: Option<ServicesSection>,
    pub latest_projects_section: Option<ProjectsSection>,
    pub tech_news_section: Option<NewsSection>,
}

/// `/api/contact_info/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    pub created_at: Option<String>,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with whitespace removed from the number.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }
}

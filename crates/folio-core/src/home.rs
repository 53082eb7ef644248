//! Home page data: `/api/home` and `/api/news` shaped into render-ready cards.

use serde::Serialize;

use crate::asset::AssetResolver;
use crate::client::DataClient;
use crate::content::{HomeContent, NewsArticle};

/// How many news cards the home page shows.
pub const HOME_NEWS_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlideCard {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceCard {
    pub title: String,
    pub desc: String,
    pub image: String,
    pub icon_name: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub desc: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsCard {
    pub title: String,
    pub desc: String,
    pub image: String,
    pub date: Option<String>,
    pub category: Option<String>,
    pub link: String,
}

/// Everything the home page renders. Empty lists mean "use fallback content".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeView {
    pub roles: Vec<String>,
    pub hero_slides: Vec<SlideCard>,
    pub services: Vec<ServiceCard>,
    pub latest_projects: Vec<ProjectCard>,
    pub tech_news: Vec<NewsCard>,
}

impl HomeView {
    /// Fetches `/api/home` and `/api/news` concurrently and shapes them.
    pub async fn load(client: &DataClient) -> HomeView {
        let (home, news) = tokio::join!(client.home(), client.news());
        let view = HomeView::build(&client.assets(), home.as_ref(), news.as_deref());
        tracing::debug!(
            "home view: {} slides, {} services, {} projects, {} news",
            view.hero_slides.len(),
            view.services.len(),
            view.latest_projects.len(),
            view.tech_news.len()
        );
        view
    }

    /// Pure shaping step of [`load`](Self::load).
    ///
    /// News comes from the standalone list when it is non-empty, otherwise
    /// from the home payload's own news section.
    pub fn build(
        assets: &AssetResolver,
        home: Option<&HomeContent>,
        news: Option<&[NewsArticle]>,
    ) -> HomeView {
        let mut view = HomeView::default();

        if let Some(home) = home {
            view.roles = home.roles.clone();
            view.hero_slides = home
                .hero_slides
                .iter()
                .map(|s| SlideCard {
                    title: s.title.clone(),
                    subtitle: s.subtitle.clone(),
                    image: assets.resolve(s.image.as_deref()),
                    cta: s.cta.clone(),
                })
                .collect();
            if let Some(sec) = &home.services_section {
                view.services = sec
                    .services
                    .iter()
                    .map(|s| ServiceCard {
                        title: s.display_title().to_string(),
                        desc: s.display_desc().to_string(),
                        image: assets.resolve(s.image.as_deref()),
                        icon_name: s.icon_name.clone(),
                        items: s.items.clone(),
                    })
                    .collect();
            }
            if let Some(sec) = &home.latest_projects_section {
                view.latest_projects = sec
                    .projects
                    .iter()
                    .map(|p| ProjectCard {
                        title: p.title.clone(),
                        desc: p.display_desc().to_string(),
                        image: assets.resolve(p.image.as_deref()),
                        tags: p.display_tags().to_vec(),
                        link: p.link.clone().unwrap_or_else(|| "/projects".to_string()),
                    })
                    .collect();
            }
        }

        view.tech_news = match news {
            Some(list) if !list.is_empty() => list
                .iter()
                .take(HOME_NEWS_LIMIT)
                .map(|n| news_card(assets, n, article_link(n)))
                .collect(),
            _ => home
                .and_then(|h| h.tech_news_section.as_ref())
                .map(|sec| {
                    sec.news
                        .iter()
                        .take(HOME_NEWS_LIMIT)
                        .map(|n| {
                            let link = n.link.clone().unwrap_or_else(|| "/news".to_string());
                            news_card(assets, n, link)
                        })
                        .collect()
                })
                .unwrap_or_default(),
        };

        view
    }
}

fn article_link(n: &NewsArticle) -> String {
    match n.slug.as_deref() {
        Some(slug) if !slug.is_empty() => format!("/news/{}", slug),
        _ => "/news".to_string(),
    }
}

fn news_card(assets: &AssetResolver, n: &NewsArticle, link: String) -> NewsCard {
    NewsCard {
        title: n.title.clone(),
        desc: n.display_desc().to_string(),
        image: assets.resolve(n.image.as_deref()),
        date: n.date.clone(),
        category: n.category.clone(),
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiBase;

    fn assets() -> AssetResolver {
        AssetResolver::new(ApiBase::new("https://api.example.com"))
    }

    fn home() -> HomeContent {
        serde_json::from_value(serde_json::json!({
            "roles": ["AI Engineer", "Data Scientist"],
            "hero_slides": [{"title": "Hello", "subtitle": "world", "image": "hero.jpg"}],
            "services_section": {"services": [{"name": "ML", "description": "models", "icon_name": "brain"}]},
            "latest_projects_section": {"projects": [{"title": "P1", "desc": "d", "tech": ["rust"], "image": "/uploads/p1.png"}]},
            "tech_news_section": {"news": [
                {"title": "A", "description": "a"},
                {"title": "B", "link": "https://blog.example.com/b"},
                {"title": "C"},
                {"title": "D"}
            ]}
        }))
        .unwrap()
    }

    #[test]
    fn no_home_payload_gives_empty_view() {
        assert_eq!(HomeView::build(&assets(), None, None), HomeView::default());
    }

    #[test]
    fn images_are_resolved() {
        let view = HomeView::build(&assets(), Some(&home()), None);
        assert_eq!(view.hero_slides[0].image, "https://api.example.com/uploads/hero.jpg");
        assert_eq!(view.services[0].image, "/placeholder.svg");
        assert_eq!(
            view.latest_projects[0].image,
            "https://api.example.com/uploads/p1.png"
        );
    }

    #[test]
    fn services_and_projects_use_fallback_fields() {
        let view = HomeView::build(&assets(), Some(&home()), None);
        assert_eq!(view.services[0].title, "ML");
        assert_eq!(view.services[0].desc, "models");
        assert_eq!(view.latest_projects[0].tags, vec!["rust"]);
        assert_eq!(view.latest_projects[0].link, "/projects");
    }

    #[test]
    fn news_list_wins_over_home_section() {
        let news: Vec<NewsArticle> = (1..=5)
            .map(|i| NewsArticle {
                title: format!("N{}", i),
                slug: Some(format!("n-{}", i)),
                ..Default::default()
            })
            .collect();
        let view = HomeView::build(&assets(), Some(&home()), Some(&news));
        assert_eq!(view.tech_news.len(), 3);
        assert_eq!(view.tech_news[0].title, "N1");
        assert_eq!(view.tech_news[2].link, "/news/n-3");
    }

    #[test]
    fn empty_news_list_falls_back_to_home_section() {
        let view = HomeView::build(&assets(), Some(&home()), Some(&[][..]));
        let titles: Vec<_> = view.tech_news.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
        assert_eq!(view.tech_news[0].desc, "a");
        assert_eq!(view.tech_news[0].link, "/news");
        assert_eq!(view.tech_news[1].link, "https://blog.example.com/b");
    }
}

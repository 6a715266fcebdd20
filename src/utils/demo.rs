use chrono::{DateTime, Duration, Utc};

use crate::models::news::{
    Article, ArticleSource, Category, NewsResult, Origin, ResultStatus,
};

/// Demo results never exceed this many articles.
pub const MAX_DEMO_ARTICLES: u32 = 20;

pub const DEMO_MESSAGE: &str = "Demo data (the news API may be unavailable)";

struct DemoEntry {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    image_url: &'static str,
    days_ago: i64,
    source: &'static str,
}

const CATALOG: [DemoEntry; 6] = [
    DemoEntry {
        title: "New technologies in medicine: a breakthrough in cancer treatment",
        description: "Scientists have developed an innovative method of treating cancer using nanoparticles.",
        url: "https://example.com/tech-medicine",
        image_url: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=600&h=400&fit=crop",
        days_ago: 0,
        source: "Medical News",
    },
    DemoEntry {
        title: "Cryptocurrencies show record growth",
        description: "The digital asset market grew 30% over the past week and Bitcoin set a new all-time high.",
        url: "https://example.com/crypto-growth",
        image_url: "https://images.unsplash.com/photo-1620336655055-bd87c5d1d73f?w=600&h=400&fit=crop",
        days_ago: 1,
        source: "Financial Herald",
    },
    DemoEntry {
        title: "New space mission to Mars launched",
        description: "A launch vehicle put a research probe into orbit to study the surface of Mars.",
        url: "https://example.com/space-mission",
        image_url: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=600&h=400&fit=crop",
        days_ago: 2,
        source: "Space Exploration",
    },
    DemoEntry {
        title: "Russian athletes win gold at the world championship",
        description: "The national team posted the best result in the track and field finals.",
        url: "https://example.com/sports-gold",
        image_url: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=600&h=400&fit=crop",
        days_ago: 3,
        source: "Sports News",
    },
    DemoEntry {
        title: "Artificial intelligence creates realistic images",
        description: "A new neural network can generate photorealistic images from a text description.",
        url: "https://example.com/ai-images",
        image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=400&fit=crop",
        days_ago: 4,
        source: "Future Tech",
    },
    DemoEntry {
        title: "Ecologists sound the alarm: ocean levels keep rising",
        description: "New research shows the rise of the world ocean level is accelerating.",
        url: "https://example.com/climate-change",
        image_url: "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=600&h=400&fit=crop",
        days_ago: 5,
        source: "Environmental Monitor",
    },
];

fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::All => &[],
        Category::Business => &["cryptocurrenc", "market", "financ"],
        Category::Technology => &["technolog", "artificial", "neural network"],
        Category::Sports => &["athletes", "championship", "gold"],
        Category::Science => &["space", "research", "scientists"],
        Category::Health => &["medicine", "treatment", "disease"],
        Category::Entertainment => &["cinema", "music", "culture"],
    }
}

fn matches(entry: &DemoEntry, keywords: &[&str]) -> bool {
    let title = entry.title.to_lowercase();
    let description = entry.description.to_lowercase();
    keywords
        .iter()
        .any(|keyword| title.contains(keyword) || description.contains(keyword))
}

/// Catalog entries for a category, capped at `min(page_size, 20)`, in catalog order.
pub fn demo_articles(category: Category, page_size: u32, now: DateTime<Utc>) -> Vec<Article> {
    let keywords = keywords(category);
    let limit = page_size.min(MAX_DEMO_ARTICLES) as usize;

    CATALOG
        .iter()
        .filter(|entry| keywords.is_empty() || matches(entry, keywords))
        .take(limit)
        .map(|entry| Article {
            title: entry.title.to_string(),
            description: Some(entry.description.to_string()),
            url: Some(entry.url.to_string()),
            image_url: Some(entry.image_url.to_string()),
            published_at: Some(now - Duration::days(entry.days_ago)),
            source: ArticleSource {
                name: entry.source.to_string(),
            },
        })
        .collect()
}

/// Demo results are a single page; `page_size` reports the truncation size,
/// `min(page_size, 20)`, so it stays positive when nothing matches.
pub fn demo_result(
    category: Category,
    page_size: u32,
    now: DateTime<Utc>,
    message: String,
) -> NewsResult {
    let articles = demo_articles(category, page_size, now);

    NewsResult {
        status: ResultStatus::Success,
        origin: Origin::Demo,
        total_results: articles.len() as u64,
        articles,
        page: 1,
        page_size: page_size.clamp(1, MAX_DEMO_ARTICLES),
        message: Some(message),
    }
}

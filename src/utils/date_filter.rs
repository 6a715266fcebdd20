use chrono::{DateTime, Duration, Months, NaiveDate, Utc};

use crate::models::news::{Article, DateFilter};

/// Lower bound on publish time for a date filter. The upstream search
/// endpoint gets the date-only rendering, local filtering compares against
/// the exact instant so `today` means the trailing 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBound {
    since: DateTime<Utc>,
}

impl DateBound {
    pub fn compute(filter: DateFilter, now: DateTime<Utc>) -> Option<Self> {
        let since = match filter {
            DateFilter::All => return None,
            DateFilter::Today => now - Duration::days(1),
            DateFilter::Week => now - Duration::days(7),
            DateFilter::Month => now.checked_sub_months(Months::new(1))?,
        };
        Some(Self { since })
    }

    pub fn date(&self) -> NaiveDate {
        self.since.date_naive()
    }

    /// `YYYY-MM-DD`, as sent in the upstream `from` parameter.
    pub fn query_value(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    /// Articles without a publish time never pass.
    pub fn admits(&self, published_at: Option<DateTime<Utc>>) -> bool {
        published_at.is_some_and(|ts| ts >= self.since)
    }
}

pub fn filter_articles(articles: Vec<Article>, bound: Option<DateBound>) -> Vec<Article> {
    match bound {
        Some(bound) => articles
            .into_iter()
            .filter(|article| bound.admits(article.published_at))
            .collect(),
        None => articles,
    }
}

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub published: DateTime<FixedOffset>,
    pub title: String,
    pub url: String,
}

impl Video {
    pub fn new(published: DateTime<FixedOffset>, title: String, url: String) -> Self {
        Self {
            published,
            title,
            url,
        }
    }
}

// Ordered by publish time first, title and url break ties
impl Ord for Video {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.published, &self.title, &self.url).cmp(&(
            &other.published,
            &other.title,
            &other.url,
        ))
    }
}

impl PartialOrd for Video {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

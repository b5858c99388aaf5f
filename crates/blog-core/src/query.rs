//! Blog list query: filtering, search and pagination parameters.
//!
//! Raw query-string values arrive as [`BlogListParams`] and are parsed into a
//! typed [`BlogQuery`] that every repository evaluates the same way:
//!
//! - a publish-time range applies only when both report dates are given, and
//!   the upper bound is widened by one day so the end date is inclusive;
//! - `topic` restricts to blogs related to that topic;
//! - `q` matches case-insensitively on title, description or any related
//!   topic name, each blog counted once;
//! - structured filters and search are combined with AND.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Blog;
use crate::error::DomainError;

/// Page size used when the request does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Seconds added to `reported_date_to` so the whole end date is covered.
pub const DAY_SECONDS: i64 = 86_400;

/// Query-string parameters of the blog list endpoint, as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListParams {
    pub reported_date_from: Option<String>,
    pub reported_date_to: Option<String>,
    pub topic: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Inclusive publish-time bounds, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedRange {
    pub from: i64,
    pub to: i64,
}

impl PublishedRange {
    /// Range covering `from` up to the end of the day starting at `to`.
    pub fn from_report_dates(from: i64, to: i64) -> Self {
        Self {
            from,
            to: to.saturating_add(DAY_SECONDS),
        }
    }

    pub fn contains(&self, published_time: i64) -> bool {
        self.from <= published_time && published_time <= self.to
    }
}

/// Structured filters and free-text search over blogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    pub published: Option<PublishedRange>,
    pub topic: Option<Uuid>,
    pub search: Option<String>,
}

impl BlogFilter {
    /// Whether `blog` passes this filter.
    ///
    /// `topic_names` are the names of the blog's related topics.
    pub fn matches<S: AsRef<str>>(&self, blog: &Blog, topic_names: &[S]) -> bool {
        if let Some(range) = self.published {
            if !range.contains(blog.published_time) {
                return false;
            }
        }

        if let Some(topic) = self.topic {
            if !blog.related_topics.contains(&topic) {
                return false;
            }
        }

        match &self.search {
            Some(term) => {
                let needle = term.to_lowercase();
                blog.title.to_lowercase().contains(&needle)
                    || blog.description.to_lowercase().contains(&needle)
                    || topic_names
                        .iter()
                        .any(|name| name.as_ref().to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}

/// 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A parsed blog list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogQuery {
    pub filter: BlogFilter,
    pub page: PageRequest,
}

impl BlogListParams {
    /// Parse the raw parameters. Empty values count as absent.
    pub fn into_query(self) -> Result<BlogQuery, DomainError> {
        let from = parse_int::<i64>("reported_date_from", present(self.reported_date_from))?;
        let to = parse_int::<i64>("reported_date_to", present(self.reported_date_to))?;
        let published = match (from, to) {
            (Some(from), Some(to)) => Some(PublishedRange::from_report_dates(from, to)),
            _ => None,
        };

        let topic = present(self.topic)
            .map(|raw| {
                Uuid::parse_str(raw.trim()).map_err(|_| {
                    DomainError::BadRequest(format!("Invalid topic id: {}", raw))
                })
            })
            .transpose()?;

        let page = parse_int::<u64>("page", present(self.page))?.unwrap_or(1);
        let page_size =
            parse_int::<u64>("page_size", present(self.page_size))?.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 {
            return Err(DomainError::BadRequest("Invalid page.".to_string()));
        }
        if page_size == 0 {
            return Err(DomainError::BadRequest(
                "page_size must be a positive integer".to_string(),
            ));
        }

        Ok(BlogQuery {
            filter: BlogFilter {
                published,
                topic,
                search: present(self.q),
            },
            page: PageRequest { page, page_size },
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_int<T: std::str::FromStr>(
    name: &str,
    value: Option<String>,
) -> Result<Option<T>, DomainError> {
    value
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                DomainError::BadRequest(format!("{} must be an integer, got {:?}", name, raw))
            })
        })
        .transpose()
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records matching the filter across all pages.
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.count.div_ceil(self.page_size).max(1)
    }

    pub fn next_page(&self) -> Option<u64> {
        (self.page < self.total_pages()).then_some(self.page + 1)
    }

    pub fn previous_page(&self) -> Option<u64> {
        (self.page > 1).then_some(self.page - 1)
    }

    /// Pages past the last one are rejected. An empty result is always page 1.
    pub fn ensure_in_range(&self) -> Result<(), DomainError> {
        if self.page > self.total_pages() {
            return Err(DomainError::BadRequest("Invalid page.".to_string()));
        }
        Ok(())
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

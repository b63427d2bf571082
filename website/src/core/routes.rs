//! Route table
//!
//! Static mapping from URL paths to page views. Matching is by path equality,
//! except `{name}` segments which bind one path segment. Built once, never
//! mutated.

use serde::Serialize;
use std::sync::OnceLock;

use crate::core::content::{BRAND, PortfolioCategory, ServiceKind};

static STANDARD_ROUTES: OnceLock<RouteTable> = OnceLock::new();

/// A resolved page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "view", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    Services,
    ServiceDetail(ServiceKind),
    Portfolio,
    PortfolioCategory(PortfolioCategory),
    Contact,
}

impl Route {
    /// Canonical path of this view
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail(kind) => format!("/services/{}", kind.id()),
            Route::Portfolio => "/portfolio".to_string(),
            Route::PortfolioCategory(category) => format!("/portfolio/{}", category.id()),
            Route::Contact => "/contact".to_string(),
        }
    }

    /// Document title
    pub fn title(&self) -> String {
        match self {
            Route::Home => BRAND.to_string(),
            Route::Services => format!("Services | {BRAND}"),
            Route::ServiceDetail(kind) => format!("{} | {BRAND}", kind.summary().title),
            Route::Portfolio => format!("Portfolio | {BRAND}"),
            Route::PortfolioCategory(category) => format!("{} Portfolio | {BRAND}", category.label()),
            Route::Contact => format!("Contact | {BRAND}"),
        }
    }
}

/// Builds the view for a matched pattern; receives the bound segment, if any
type Binder = fn(Option<&str>) -> Option<Route>;

/// One row of the table
#[derive(Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    bind: Binder,
}

impl RouteEntry {
    const fn new(pattern: &'static str, bind: Binder) -> Self {
        Self { pattern, bind }
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry").field("pattern", &self.pattern).finish()
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// The site's routes
    pub fn standard() -> &'static RouteTable {
        STANDARD_ROUTES.get_or_init(|| RouteTable {
            entries: vec![
                RouteEntry::new("/", |_| Some(Route::Home)),
                RouteEntry::new("/services", |_| Some(Route::Services)),
                RouteEntry::new("/services/real-estate", |_| {
                    Some(Route::ServiceDetail(ServiceKind::RealEstate))
                }),
                RouteEntry::new("/services/videography", |_| {
                    Some(Route::ServiceDetail(ServiceKind::Videography))
                }),
                RouteEntry::new("/services/mapping", |_| {
                    Some(Route::ServiceDetail(ServiceKind::Mapping))
                }),
                RouteEntry::new("/services/garden", |_| {
                    Some(Route::ServiceDetail(ServiceKind::Garden))
                }),
                RouteEntry::new("/portfolio", |_| Some(Route::Portfolio)),
                RouteEntry::new("/portfolio/{category}", |segment| {
                    segment
                        .and_then(PortfolioCategory::from_id)
                        .map(Route::PortfolioCategory)
                }),
                RouteEntry::new("/contact", |_| Some(Route::Contact)),
            ],
        })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.pattern)
    }

    /// Resolve a request path to exactly one view, or `None` when nothing
    /// matches (including a bound segment with no static data behind it)
    pub fn resolve(&self, path: &str) -> Option<Route> {
        self.entries.iter().find_map(|entry| {
            let bound = match_pattern(entry.pattern, path)?;
            (entry.bind)(bound)
        })
    }
}

/// `Some(bound)` when `path` fits `pattern`; `bound` is the `{..}` segment if present
fn match_pattern<'p>(pattern: &str, path: &'p str) -> Option<Option<&'p str>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut bound = None;

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(bound),
            (Some(expected), Some(actual)) => {
                if expected.starts_with('{') && expected.ends_with('}') {
                    if actual.is_empty() {
                        return None;
                    }
                    bound = Some(actual);
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

//! Navigation helper
//!
//! Leaving one page view for another always does two things in a fixed order:
//! the viewport jumps to the top, then the route transition runs, so the next
//! view mounts already scrolled to the top.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::errors::{SharedError, SharedResult};

const LOCAL_ORIGIN: &str = "http://localhost/";

/// Viewport scroll position in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_top(&self) -> bool {
        *self == Self::TOP
    }
}

/// Something that can be scrolled
pub trait Viewport {
    /// Immediate jump, no animation
    fn scroll_to(&mut self, x: f64, y: f64);

    fn scroll_offset(&self) -> ScrollOffset;
}

/// Reset `viewport` to (0, 0), then hand `path` to `navigate`.
///
/// Failures inside `navigate` (an unknown route, say) are the route table's
/// concern.
pub fn navigate_and_scroll_top<V, F>(viewport: &mut V, navigate: F, path: &str)
where
    V: Viewport + ?Sized,
    F: FnOnce(&str),
{
    viewport.scroll_to(0.0, 0.0);
    navigate(path);
}

/// Site-relative location: a path plus decoded query pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    /// Parse a site-relative target such as `/services?category=garden`.
    /// Targets pointing at another origin are rejected.
    pub fn parse(target: &str) -> SharedResult<Self> {
        let invalid = || SharedError::InvalidLocation { input: target.to_string() };

        let base = Url::parse(LOCAL_ORIGIN).map_err(|_| invalid())?;
        let url = base.join(target.trim()).map_err(|_| invalid())?;
        if url.origin() != base.origin() {
            return Err(invalid());
        }

        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    pub fn root() -> Self {
        Self { path: "/".to_string(), query: Vec::new() }
    }

    /// First value for `key`
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}

impl FromStr for Location {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingViewport<'a> {
        calls: &'a RefCell<Vec<String>>,
        offset: ScrollOffset,
    }

    impl Viewport for RecordingViewport<'_> {
        fn scroll_to(&mut self, x: f64, y: f64) {
            self.calls.borrow_mut().push(format!("scroll({x},{y})"));
            self.offset = ScrollOffset::new(x, y);
        }

        fn scroll_offset(&self) -> ScrollOffset {
            self.offset
        }
    }

    #[test]
    fn test_scroll_reset_precedes_navigation() {
        let calls = RefCell::new(Vec::new());
        let mut viewport = RecordingViewport {
            calls: &calls,
            offset: ScrollOffset::new(0.0, 840.0),
        };

        navigate_and_scroll_top(
            &mut viewport,
            |path| calls.borrow_mut().push(format!("navigate({path})")),
            "/contact",
        );

        assert_eq!(*calls.borrow(), vec!["scroll(0,0)", "navigate(/contact)"]);
        assert!(viewport.scroll_offset().is_top());
    }

    #[test]
    fn test_navigate_runs_after_exactly_one_scroll() {
        let calls = RefCell::new(Vec::new());
        let mut viewport = RecordingViewport {
            calls: &calls,
            offset: ScrollOffset::new(12.0, 300.0),
        };
        let mut recorded_before_navigate = None;

        navigate_and_scroll_top(
            &mut viewport,
            |_| recorded_before_navigate = Some(calls.borrow().clone()),
            "/portfolio",
        );

        assert_eq!(recorded_before_navigate, Some(vec!["scroll(0,0)".to_string()]));
    }

    #[test]
    fn test_location_parses_path_and_query() {
        let location = Location::parse("/services?category=real-estate").unwrap();

        assert_eq!(location.path, "/services");
        assert_eq!(location.query_param("category"), Some("real-estate"));
        assert_eq!(location.query_param("missing"), None);
        assert_eq!(location.to_string(), "/services?category=real-estate");
    }

    #[test]
    fn test_location_decodes_query_values() {
        let location: Location = "/contact?note=hello%20there".parse().unwrap();

        assert_eq!(location.query_param("note"), Some("hello there"));
    }

    #[test]
    fn test_location_rejects_foreign_origin() {
        assert!(Location::parse("https://example.com/contact").is_err());
        assert!(Location::parse("//example.com/contact").is_err());
    }

    #[test]
    fn test_root_location() {
        assert_eq!(Location::root().to_string(), "/");
        assert_eq!(Location::parse("").unwrap().path, "/");
    }
}

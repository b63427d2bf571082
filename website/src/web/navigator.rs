//! Navigation by HTTP redirect
//!
//! After a form post the browser is sent somewhere else with a 303. The
//! scroll reset that precedes every transition becomes the `#top` fragment
//! on the redirect target.

use axum::response::Redirect;
use shared::{ScrollOffset, Viewport, navigate_and_scroll_top};

/// Viewport of a browser about to follow a redirect. Its position is unknown
/// until a scroll is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RedirectViewport {
    requested: Option<ScrollOffset>,
}

impl RedirectViewport {
    /// Fragment that makes the browser land where the scroll was requested
    pub fn fragment(&self) -> &'static str {
        match self.requested {
            Some(offset) if offset.is_top() => "#top",
            _ => "",
        }
    }
}

impl Viewport for RedirectViewport {
    fn scroll_to(&mut self, x: f64, y: f64) {
        self.requested = Some(ScrollOffset::new(x, y));
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.requested.unwrap_or_default()
    }
}

/// Location the browser is sent to for `path`
pub fn redirect_location(path: &str) -> String {
    let mut viewport = RedirectViewport::default();
    let mut location = String::new();
    navigate_and_scroll_top(&mut viewport, |target| location = target.to_string(), path);
    location.push_str(viewport.fragment());
    location
}

/// 303 to `path`, landing at the top of the page
pub fn navigate_to(path: &str) -> Redirect {
    Redirect::to(&redirect_location(path))
}

//! Server-side HTML rendering
//!
//! Views are plain functions from static content and form state to markup.
//! Every user-supplied string passes through [`escape`].

pub mod contact;
pub mod layout;
pub mod pages;
pub mod sections;

pub use contact::{ContactFormView, FormNotice};
pub use pages::{render_not_found, render_route};

use crate::core::session::SiteAction;

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Anchor for a view action
pub fn action_link(action: SiteAction, class: &str) -> String {
    format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        class,
        escape(&action.target()),
        escape(action.label())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ServiceKind;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape(r#"<b a="1">Tom & 'Jerry'</b>"#), "&lt;b a=&quot;1&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_action_link_uses_target() {
        let html = action_link(SiteAction::FooterService(ServiceKind::Garden), "footer-link");

        assert_eq!(html, r#"<a class="footer-link" href="/services?category=garden">Garden &amp; Landscape</a>"#);
    }
}

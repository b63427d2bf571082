//! Page chrome: document head, navbar and footer

use chrono::{Datelike, Utc};

use super::{action_link, escape};
use crate::core::content::{BRAND, CONTACT_INFO, FOOTER_BLURB, ServiceKind};
use crate::core::routes::Route;
use crate::core::session::{NavLink, SiteAction};

/// Wrap `main` in the full document
pub fn page(title: &str, route: Option<Route>, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/site.css">
</head>
<body>
<div id="top"></div>
{navbar}
<main>
{main}
</main>
{footer}
</body>
</html>
"#,
        title = escape(title),
        navbar = navbar(route),
        main = main,
        footer = footer(),
    )
}

fn navbar(route: Option<Route>) -> String {
    let links: String = NavLink::ALL
        .into_iter()
        .map(|link| {
            let class = if link.is_active_for(route) { "nav-link active" } else { "nav-link" };
            action_link(SiteAction::Nav(link), class)
        })
        .collect();

    format!(
        r#"<header class="navbar"><a class="brand" href="/">{}</a><nav>{}</nav></header>"#,
        escape(BRAND),
        links
    )
}

fn footer() -> String {
    let services: String = ServiceKind::ALL
        .into_iter()
        .map(|kind| format!("<li>{}</li>", action_link(SiteAction::FooterService(kind), "footer-link")))
        .collect();

    let quick_links: String = NavLink::ALL
        .into_iter()
        .map(|link| format!("<li>{}</li>", action_link(SiteAction::Nav(link), "footer-link")))
        .collect();

    let contact: String = CONTACT_INFO
        .iter()
        .map(|info| format!("<li>{}: {}</li>", escape(info.title), escape(info.content)))
        .collect();

    format!(
        r#"<footer class="footer">
<section><h3>{brand}</h3><p>{blurb}</p></section>
<section><h3>Services</h3><ul>{services}</ul></section>
<section><h3>Quick Links</h3><ul>{quick_links}</ul></section>
<section><h3>Contact</h3><ul>{contact}</ul></section>
<p class="copyright">&copy; {year} {brand}. All rights reserved.</p>
</footer>"#,
        brand = escape(BRAND),
        blurb = escape(FOOTER_BLURB),
        services = services,
        quick_links = quick_links,
        contact = contact,
        year = Utc::now().year(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_follows_route() {
        let html = page("Services | DroneVista", Some(Route::ServiceDetail(ServiceKind::Mapping)), "");

        assert!(html.contains(r#"<a class="nav-link active" href="/services">Services</a>"#));
        assert!(html.contains(r#"<a class="nav-link" href="/">Home</a>"#));
    }

    #[test]
    fn test_footer_links_select_service_category() {
        let html = page("DroneVista", Some(Route::Home), "");

        for kind in ServiceKind::ALL {
            assert!(html.contains(&format!("/services?category={}", kind.id())));
        }
    }

    #[test]
    fn test_title_is_escaped() {
        let html = page("<script>", None, "");

        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }
}

//! Full pages, one per route

use shared::{Location, SiteLogger};

use super::contact::{ContactFormView, contact_section};
use super::sections::{hero, portfolio, project_card, services};
use super::{action_link, escape, layout};
use crate::core::carousel::HeroCarousel;
use crate::core::content::{BRAND, HERO_SLIDES, PortfolioCategory, ServiceKind};
use crate::core::routes::Route;
use crate::core::session::{NavLink, SiteAction, highlighted_service};

/// Render `route` as a complete document
pub fn render_route(logger: &SiteLogger, route: Route, location: &Location, form: &ContactFormView<'_>) -> String {
    let main = match route {
        Route::Home => {
            let slide = location
                .query_param("slide")
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(0);
            let carousel = HeroCarousel::starting_at(HERO_SLIDES.len(), slide);
            [hero(&carousel), services(logger, None), portfolio(), contact_section(form)].concat()
        }
        Route::Services => services(logger, highlighted_service(Some(route), location)),
        Route::ServiceDetail(kind) => service_detail(kind),
        Route::Portfolio => portfolio(),
        Route::PortfolioCategory(category) => portfolio_category(category),
        Route::Contact => contact_section(form),
    };

    layout::page(&route.title(), Some(route), &main)
}

pub fn render_not_found(location: &Location) -> String {
    let main = format!(
        r#"<section class="not-found">
<h1>404</h1>
<p>Page not found</p>
<p class="path">{}</p>
{}
</section>"#,
        escape(&location.path),
        action_link(SiteAction::Nav(NavLink::Home), "button primary")
    );

    layout::page(&format!("Page not found | {BRAND}"), None, &main)
}

fn service_detail(kind: ServiceKind) -> String {
    let detail = kind.detail();
    let features: String = detail
        .features
        .iter()
        .map(|feature| format!("<li>{}</li>", escape(feature)))
        .collect();

    format!(
        r#"<section class="service-detail">
<p class="eyebrow">{eyebrow}</p>
<h1>{headline}</h1>
<p>{summary}</p>
<img src="{image}" alt="{eyebrow}">
<h2>What We Offer</h2>
<ul class="features">{features}</ul>
{start}{back}
</section>"#,
        eyebrow = escape(detail.eyebrow),
        headline = escape(detail.headline),
        summary = escape(detail.summary),
        image = escape(detail.image_url),
        features = features,
        start = action_link(SiteAction::StartProject, "button primary"),
        back = action_link(SiteAction::BackToServices, "button secondary"),
    )
}

fn portfolio_category(category: PortfolioCategory) -> String {
    let cards: String = category.projects().map(project_card).collect();

    format!(
        r#"<section class="portfolio-category">
<p class="eyebrow">{label}</p>
<h1>{heading}</h1>
<p>{blurb}</p>
<div class="card-grid">{cards}</div>
{quote}{back}
</section>"#,
        label = escape(&category.label()),
        heading = escape(category.heading()),
        blurb = escape(category.blurb()),
        cards = cards,
        quote = action_link(SiteAction::GetQuote, "button primary"),
        back = action_link(SiteAction::ViewPortfolio, "button secondary"),
    )
}

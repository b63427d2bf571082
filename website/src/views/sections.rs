//! Page sections built from static content

use serde_json::json;
use shared::SiteLogger;

use super::{action_link, escape};
use crate::core::carousel::{HERO_ROTATE_INTERVAL, HeroCarousel};
use crate::core::content::{
    HERO_BLURB, HERO_HEADING, HERO_SLIDES, PORTFOLIO_BLURB, PORTFOLIO_EYEBROW, PORTFOLIO_HEADING, PROJECTS, Project,
    SERVICES, SERVICES_BLURB, SERVICES_EYEBROW, SERVICES_HEADING, ServiceKind,
};
use crate::core::session::SiteAction;

/// Hero with the slide at `carousel.current()` and links to its neighbours
pub fn hero(carousel: &HeroCarousel) -> String {
    let slide = HERO_SLIDES.get(carousel.current()).map(|slide| {
        format!(
            r#"<img class="hero-image" src="{}" alt="{}">"#,
            escape(slide.src),
            escape(slide.alt)
        )
    });

    let dots: String = (0..carousel.len())
        .map(|index| {
            let class = if index == carousel.current() { "dot active" } else { "dot" };
            format!(r#"<a class="{class}" href="/?slide={index}" aria-label="Slide {}"></a>"#, index + 1)
        })
        .collect();

    format!(
        r#"<section class="hero" data-interval-ms="{interval}">
{image}
<a class="hero-prev" href="/?slide={prev}" aria-label="Previous slide">&lsaquo;</a>
<a class="hero-next" href="/?slide={next}" aria-label="Next slide">&rsaquo;</a>
<div class="hero-dots">{dots}</div>
<div class="hero-copy">
<h1>{heading}</h1>
<p>{blurb}</p>
{get_in_touch}{view_portfolio}
</div>
</section>"#,
        interval = HERO_ROTATE_INTERVAL.as_millis(),
        image = slide.unwrap_or_default(),
        prev = carousel.prev_index(),
        next = carousel.next_index(),
        dots = dots,
        heading = escape(HERO_HEADING),
        blurb = escape(HERO_BLURB),
        get_in_touch = action_link(SiteAction::GetInTouch, "button primary"),
        view_portfolio = action_link(SiteAction::ViewPortfolio, "button secondary"),
    )
}

/// Services grid. The highlighted card gets the `highlighted` class.
pub fn services(logger: &SiteLogger, highlighted: Option<ServiceKind>) -> String {
    logger.debug("Services component rendered", Some(json!({ "servicesCount": SERVICES.len() })));

    let cards: String = SERVICES
        .iter()
        .map(|service| {
            let class = if highlighted == Some(service.kind) {
                "service-card highlighted"
            } else {
                "service-card"
            };
            format!(
                r#"<article id="{id}" class="{class}">
<img src="{image}" alt="{title}">
<h3>{title}</h3>
<p>{description}</p>
{learn_more}
</article>"#,
                id = service.kind.id(),
                class = class,
                image = escape(service.image_url),
                title = escape(service.title),
                description = escape(service.description),
                learn_more = action_link(SiteAction::LearnMore(service.kind), "button link"),
            )
        })
        .collect();

    format!(
        r#"<section id="services" class="services">
<p class="eyebrow">{}</p>
<h2>{}</h2>
<p>{}</p>
<div class="card-grid">{}</div>
</section>"#,
        escape(SERVICES_EYEBROW),
        escape(SERVICES_HEADING),
        escape(SERVICES_BLURB),
        cards
    )
}

pub fn project_card(project: &Project) -> String {
    format!(
        r#"<article class="project-card">
<img src="{image}" alt="{title}">
<h3>{title}</h3>
<p>{description}</p>
{details}
</article>"#,
        image = escape(project.image_url),
        title = escape(project.title),
        description = escape(project.description),
        details = action_link(SiteAction::ViewDetails(project.category), "button link"),
    )
}

pub fn portfolio() -> String {
    let cards: String = PROJECTS.iter().map(project_card).collect();

    format!(
        r#"<section id="portfolio" class="portfolio">
<p class="eyebrow">{}</p>
<h2>{}</h2>
<p>{}</p>
<div class="card-grid">{}</div>
{}
</section>"#,
        escape(PORTFOLIO_EYEBROW),
        escape(PORTFOLIO_HEADING),
        escape(PORTFOLIO_BLURB),
        cards,
        action_link(SiteAction::GetQuote, "button primary")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{LogLevel, LoggerConfig};

    fn logger(development: bool) -> SiteLogger {
        let config = if development { LoggerConfig::development() } else { LoggerConfig::production() };
        SiteLogger::new(config)
    }

    #[test]
    fn test_hero_links_wrap() {
        let html = hero(&HeroCarousel::starting_at(HERO_SLIDES.len(), 0));

        assert!(html.contains(r#"href="/?slide=2" aria-label="Previous slide""#));
        assert!(html.contains(r#"href="/?slide=1" aria-label="Next slide""#));
        assert!(html.contains(r#"<a class="button primary" href="/contact">Get in Touch</a>"#));
    }

    #[test]
    fn test_hero_carries_rotate_interval() {
        let html = hero(&HeroCarousel::new(HERO_SLIDES.len()));

        assert!(html.contains(r#"<section class="hero" data-interval-ms="5000">"#));
    }

    #[test]
    fn test_single_service_highlighted() {
        let html = services(&logger(false), Some(ServiceKind::Mapping));

        assert_eq!(html.matches("highlighted").count(), 1);
        assert!(html.contains(r#"<article id="mapping" class="service-card highlighted">"#));
    }

    #[test]
    fn test_services_render_logged_in_development() {
        let logger = logger(true);

        services(&logger, None);

        let entries = logger.get_logs();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Debug);
        assert_eq!(entries[0].message, "Services component rendered");
        assert_eq!(entries[0].data, Some(json!({ "servicesCount": SERVICES.len() })));
    }

    #[test]
    fn test_services_render_not_logged_in_production() {
        let logger = logger(false);

        services(&logger, None);

        assert!(logger.is_empty());
    }

    #[test]
    fn test_portfolio_cards_link_to_categories() {
        let html = portfolio();

        for project in &PROJECTS {
            assert!(html.contains(&format!(r#"href="/portfolio/{}""#, project.category.id())));
        }
    }
}

//! Browsing session
//!
//! Headless model of one visitor moving through the site: the current
//! location, the history of visited locations, and the viewport scroll
//! offset. View actions go through the navigation helper and land at the top
//! of the new view. Footer service links are plain links and keep the offset.

use serde::Serialize;
use serde_json::json;
use shared::{Location, ScrollOffset, SiteLogger, Viewport, navigate_and_scroll_top};
use tracing::warn;

use crate::core::content::{PortfolioCategory, ServiceKind};
use crate::core::routes::{Route, RouteTable};

/// Things a visitor can click that move them somewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "snake_case")]
pub enum SiteAction {
    /// Navbar entry
    Nav(NavLink),
    /// Hero call to action
    GetInTouch,
    /// Hero secondary call to action
    ViewPortfolio,
    /// Services grid card
    LearnMore(ServiceKind),
    /// Portfolio card
    ViewDetails(PortfolioCategory),
    /// Service detail page call to action
    StartProject,
    BackToServices,
    /// Portfolio page call to action
    GetQuote,
    /// Footer service link
    FooterService(ServiceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavLink {
    Home,
    Services,
    Portfolio,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [NavLink::Home, NavLink::Services, NavLink::Portfolio, NavLink::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Services => "Services",
            NavLink::Portfolio => "Portfolio",
            NavLink::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            NavLink::Home => "/",
            NavLink::Services => "/services",
            NavLink::Portfolio => "/portfolio",
            NavLink::Contact => "/contact",
        }
    }

    /// Whether this link should be marked active while `route` is shown
    pub fn is_active_for(self, route: Option<Route>) -> bool {
        matches!(
            (self, route),
            (NavLink::Home, Some(Route::Home))
                | (NavLink::Services, Some(Route::Services | Route::ServiceDetail(_)))
                | (NavLink::Portfolio, Some(Route::Portfolio | Route::PortfolioCategory(_)))
                | (NavLink::Contact, Some(Route::Contact))
        )
    }
}

impl SiteAction {
    pub fn label(&self) -> &'static str {
        match self {
            SiteAction::Nav(link) => link.label(),
            SiteAction::GetInTouch => "Get in Touch",
            SiteAction::ViewPortfolio => "View Portfolio",
            SiteAction::LearnMore(_) => "Learn More",
            SiteAction::ViewDetails(_) => "View Details",
            SiteAction::StartProject => "Start Your Project",
            SiteAction::BackToServices => "Back to Services",
            SiteAction::GetQuote => "Get a Quote",
            SiteAction::FooterService(kind) => kind.summary().title,
        }
    }

    /// Where the action leads
    pub fn target(&self) -> String {
        match self {
            SiteAction::Nav(link) => link.path().to_string(),
            SiteAction::GetInTouch | SiteAction::StartProject | SiteAction::GetQuote => {
                Route::Contact.path()
            }
            SiteAction::ViewPortfolio => Route::Portfolio.path(),
            SiteAction::LearnMore(kind) => Route::ServiceDetail(*kind).path(),
            SiteAction::ViewDetails(category) => Route::PortfolioCategory(*category).path(),
            SiteAction::BackToServices => Route::Services.path(),
            SiteAction::FooterService(kind) => format!("/services?category={}", kind.id()),
        }
    }

    /// Run the action against a session, including its diagnostic trace
    pub fn perform(&self, session: &mut Session) {
        if let SiteAction::LearnMore(kind) = self {
            session.logger.info(
                format!("Navigating to service: {}", kind.id()),
                Some(json!({ "serviceId": kind.id() })),
            );
        }
        match self {
            SiteAction::FooterService(_) => session.follow_link(&self.target()),
            _ => session.go(&self.target()),
        }
    }
}

/// Viewport of a headless session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageViewport {
    offset: ScrollOffset,
}

impl Viewport for PageViewport {
    fn scroll_to(&mut self, x: f64, y: f64) {
        self.offset = ScrollOffset::new(x, y);
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }
}

/// Visited locations and the view currently shown
#[derive(Debug, Clone)]
struct History {
    current: Location,
    route: Option<Route>,
    previous: Vec<Location>,
}

impl History {
    fn starting_at(routes: &RouteTable, location: Location) -> Self {
        Self {
            route: routes.resolve(&location.path),
            current: location,
            previous: Vec::new(),
        }
    }

    fn transition(&mut self, routes: &RouteTable, target: &str) {
        match Location::parse(target) {
            Ok(location) => {
                self.route = routes.resolve(&location.path);
                self.previous.push(std::mem::replace(&mut self.current, location));
            }
            Err(e) => warn!("Ignoring navigation to {}: {}", target, e),
        }
    }
}

pub struct Session {
    viewport: PageViewport,
    history: History,
    routes: &'static RouteTable,
    logger: SiteLogger,
}

impl Session {
    /// A session that has just landed on the home page
    pub fn new(logger: SiteLogger) -> Self {
        Self::landing_on(logger, Location::root())
    }

    /// A session whose first page is `target`; an unusable target lands on home
    pub fn start_at(logger: SiteLogger, target: &str) -> Self {
        let location = Location::parse(target).unwrap_or_else(|e| {
            warn!("Ignoring landing target {}: {}", target, e);
            Location::root()
        });
        Self::landing_on(logger, location)
    }

    fn landing_on(logger: SiteLogger, location: Location) -> Self {
        let routes = RouteTable::standard();
        Self {
            viewport: PageViewport::default(),
            history: History::starting_at(routes, location),
            routes,
            logger,
        }
    }

    /// Navigate to `target`, landing at the top of the new view
    pub fn go(&mut self, target: &str) {
        let routes = self.routes;
        navigate_and_scroll_top(&mut self.viewport, |path| self.history.transition(routes, path), target);
    }

    /// Plain link: change location without touching the scroll offset
    pub fn follow_link(&mut self, target: &str) {
        self.history.transition(self.routes, target);
    }

    pub fn perform(&mut self, action: SiteAction) {
        action.perform(self);
    }

    /// Visitor scrolls within the current view
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        self.viewport.scroll_to(x, y);
    }

    pub fn scroll_offset(&self) -> ScrollOffset {
        self.viewport.scroll_offset()
    }

    pub fn location(&self) -> &Location {
        &self.history.current
    }

    /// The view on screen; `None` means the not-found view
    pub fn route(&self) -> Option<Route> {
        self.history.route
    }

    /// Number of locations visited, the current one included
    pub fn history_len(&self) -> usize {
        self.history.previous.len() + 1
    }

    /// Service picked out by `/services?category=<id>`
    pub fn highlighted_service(&self) -> Option<ServiceKind> {
        highlighted_service(self.route(), self.location())
    }

    pub fn logger(&self) -> &SiteLogger {
        &self.logger
    }
}

/// Service selected by the `category` query parameter on the services page
pub fn highlighted_service(route: Option<Route>, location: &Location) -> Option<ServiceKind> {
    match route {
        Some(Route::Services) => location.query_param("category").and_then(ServiceKind::from_id),
        _ => None,
    }
}

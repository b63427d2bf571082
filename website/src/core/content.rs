//! Static marketing content
//!
//! Copy, image URLs and identifiers rendered by the views. Nothing here is
//! mutated at runtime.

use serde::Serialize;

pub const BRAND: &str = "DroneVista";
pub const FOOTER_BLURB: &str =
    "Professional drone photography and videography services for properties and landscapes.";

const IMG_LUXURY_HOME: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2073&q=80";
const IMG_AERIAL_LANDSCAPE: &str = "https://images.unsplash.com/photo-1506947411487-a56738267384?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
const IMG_MAPPING: &str = "https://images.unsplash.com/photo-1523961131990-5ea7c61b2107?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2074&q=80";
const IMG_GARDEN: &str = "https://images.unsplash.com/photo-1558904541-efa843a96f01?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
const IMG_DRONE_IN_ACTION: &str = "https://images.unsplash.com/photo-1473968512647-3e447244af8f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
const IMG_DRONE_PHOTOGRAPHY: &str = "https://images.unsplash.com/photo-1519125323398-675f0ddb6308?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";

/// Services offered, each with its own detail page under `/services/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    RealEstate,
    Videography,
    Mapping,
    Garden,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::RealEstate,
        ServiceKind::Videography,
        ServiceKind::Mapping,
        ServiceKind::Garden,
    ];

    /// URL segment and section anchor
    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::RealEstate => "real-estate",
            ServiceKind::Videography => "videography",
            ServiceKind::Mapping => "mapping",
            ServiceKind::Garden => "garden",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn summary(self) -> &'static Service {
        &SERVICES[self as usize]
    }

    pub fn detail(self) -> &'static ServiceDetail {
        &SERVICE_DETAILS[self as usize]
    }
}

/// Card shown in the services section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SERVICES_EYEBROW: &str = "Our Services";
pub const SERVICES_HEADING: &str = "Professional Aerial Photography & Videography Services";
pub const SERVICES_BLURB: &str = "We offer a range of aerial photography and videography services to help you capture stunning perspectives from above.";

/// Ordered like [`ServiceKind::ALL`]
pub static SERVICES: [Service; 4] = [
    Service {
        kind: ServiceKind::RealEstate,
        title: "Real Estate Photography",
        description: "Stunning aerial views of properties that showcase their full potential and surroundings.",
        image_url: IMG_LUXURY_HOME,
    },
    Service {
        kind: ServiceKind::Videography,
        title: "Aerial Videography",
        description: "Cinematic aerial footage for real estate, events, and commercial projects.",
        image_url: IMG_AERIAL_LANDSCAPE,
    },
    Service {
        kind: ServiceKind::Mapping,
        title: "Property Mapping",
        description: "Detailed aerial mapping for construction, agriculture, and land development.",
        image_url: IMG_MAPPING,
    },
    Service {
        kind: ServiceKind::Garden,
        title: "Garden & Landscape",
        description: "Beautiful aerial photography of gardens and landscapes to showcase their natural beauty.",
        image_url: IMG_GARDEN,
    },
];

/// Content of a `/services/{id}` page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDetail {
    pub kind: ServiceKind,
    pub eyebrow: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub image_url: &'static str,
}

/// Ordered like [`ServiceKind::ALL`]
pub static SERVICE_DETAILS: [ServiceDetail; 4] = [
    ServiceDetail {
        kind: ServiceKind::RealEstate,
        eyebrow: "Real Estate Photography",
        headline: "Show Every Property at Its Best",
        summary: "Aerial photography that presents homes and estates together with their grounds, neighbourhood and views.",
        features: &[
            "High-resolution stills of the property and its grounds",
            "Golden-hour and twilight shoots on request",
            "Neighbourhood and amenity context shots",
            "Edited, listing-ready images",
            "Licensed drone pilots with years of experience",
        ],
        image_url: IMG_LUXURY_HOME,
    },
    ServiceDetail {
        kind: ServiceKind::Videography,
        eyebrow: "Aerial Videography",
        headline: "Cinematic Aerial Videos That Tell Your Story",
        summary: "Our aerial videography service provides stunning cinematic footage that captures the essence of your property, event, or project from breathtaking perspectives.",
        features: &[
            "Cinematic aerial footage for any project",
            "Smooth, professional drone movements",
            "4K high-resolution video quality",
            "Custom editing and post-production",
            "Perfect for events, properties, and marketing",
            "Licensed drone pilots with years of experience",
        ],
        image_url: IMG_AERIAL_LANDSCAPE,
    },
    ServiceDetail {
        kind: ServiceKind::Mapping,
        eyebrow: "Property Mapping",
        headline: "Accurate Aerial Maps for Planning and Development",
        summary: "Detailed aerial mapping for construction, agriculture, and land development, delivered in formats your team can use.",
        features: &[
            "Orthomosaic maps of large sites",
            "Progress surveys for construction projects",
            "Crop and field overviews for agriculture",
            "Boundary and access documentation",
            "Licensed drone pilots with years of experience",
        ],
        image_url: IMG_MAPPING,
    },
    ServiceDetail {
        kind: ServiceKind::Garden,
        eyebrow: "Garden & Landscape",
        headline: "Gardens and Landscapes From Above",
        summary: "Beautiful aerial photography of gardens and landscapes that reveals the design and natural beauty only visible from the air.",
        features: &[
            "Seasonal shoots that follow your garden through the year",
            "Design overviews for landscape architects",
            "Estate and park photography",
            "Print-ready high-resolution images",
            "Licensed drone pilots with years of experience",
        ],
        image_url: IMG_GARDEN,
    },
];

/// Portfolio categories, each with a page under `/portfolio/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortfolioCategory {
    RealEstate,
    Commercial,
    Garden,
    Mapping,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 4] = [
        PortfolioCategory::RealEstate,
        PortfolioCategory::Commercial,
        PortfolioCategory::Garden,
        PortfolioCategory::Mapping,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PortfolioCategory::RealEstate => "real-estate",
            PortfolioCategory::Commercial => "commercial",
            PortfolioCategory::Garden => "garden",
            PortfolioCategory::Mapping => "mapping",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }

    /// Id with its first letter capitalised, e.g. `Real-estate`
    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            PortfolioCategory::RealEstate => "Luxury Real Estate Photography",
            PortfolioCategory::Commercial => "Commercial Property Videography",
            PortfolioCategory::Garden => "Landscape Garden Photography",
            PortfolioCategory::Mapping => "Property Mapping Services",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            PortfolioCategory::RealEstate => "Explore our stunning aerial photography of luxury properties and estates.",
            PortfolioCategory::Commercial => "Discover our professional aerial videography services for commercial properties.",
            PortfolioCategory::Garden => "View our beautiful aerial photography of meticulously designed landscape gardens.",
            PortfolioCategory::Mapping => "Learn about our detailed aerial mapping services for property development.",
        }
    }

    pub fn projects(self) -> impl Iterator<Item = &'static Project> {
        PROJECTS.iter().filter(move |project| project.category == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: PortfolioCategory,
}

pub const PORTFOLIO_EYEBROW: &str = "Our Portfolio";
pub const PORTFOLIO_HEADING: &str = "Stunning Aerial Photography & Videography";
pub const PORTFOLIO_BLURB: &str = "Explore our portfolio of aerial photography and videography projects showcasing properties, landscapes, and commercial spaces.";

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Luxury Real Estate",
        description: "Aerial photography showcasing a stunning luxury property with expansive grounds.",
        image_url: IMG_LUXURY_HOME,
        category: PortfolioCategory::RealEstate,
    },
    Project {
        title: "Commercial Property",
        description: "Aerial videography of a commercial property highlighting its strategic location.",
        image_url: IMG_AERIAL_LANDSCAPE,
        category: PortfolioCategory::Commercial,
    },
    Project {
        title: "Landscape Garden",
        description: "Beautiful aerial photography of a meticulously designed landscape garden.",
        image_url: IMG_GARDEN,
        category: PortfolioCategory::Garden,
    },
    Project {
        title: "Property Mapping",
        description: "Detailed aerial mapping of a large property for development planning.",
        image_url: IMG_MAPPING,
        category: PortfolioCategory::Mapping,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const HERO_HEADING: &str = "Aerial Photography for Real Estate & Gardens";
pub const HERO_BLURB: &str = "Professional drone photography services that showcase properties and landscapes from stunning aerial perspectives.";

pub static HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide { src: IMG_DRONE_IN_ACTION, alt: "Drone in action" },
    HeroSlide { src: IMG_AERIAL_LANDSCAPE, alt: "Aerial view of landscape" },
    HeroSlide { src: IMG_DRONE_PHOTOGRAPHY, alt: "Drone photography" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
}

pub const CONTACT_EYEBROW: &str = "Get in Touch";
pub const CONTACT_HEADING: &str = "Contact Us";
pub const CONTACT_BLURB: &str =
    "Ready to capture your property from above? Contact us today to discuss your project";

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo { title: "Email", content: "info@dronevista.com", link: "mailto:info@dronevista.com" },
    ContactInfo { title: "Phone", content: "+1 (555) 123-4567", link: "tel:+15551234567" },
    ContactInfo { title: "Location", content: "San Francisco, CA", link: "#" },
];

pub static OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: Closed",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_line_up_with_kinds() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.summary().kind, kind);
            assert_eq!(kind.detail().kind, kind);
            assert_eq!(ServiceKind::from_id(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_every_category_has_projects() {
        for category in PortfolioCategory::ALL {
            assert!(category.projects().count() > 0, "{category:?} has no projects");
            assert_eq!(PortfolioCategory::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn test_category_label_capitalises_first_letter() {
        assert_eq!(PortfolioCategory::RealEstate.label(), "Real-estate");
        assert_eq!(PortfolioCategory::Garden.label(), "Garden");
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(ServiceKind::from_id("weddings"), None);
        assert_eq!(PortfolioCategory::from_id("Garden"), None);
    }
}

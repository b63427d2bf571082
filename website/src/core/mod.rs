//! Core site logic
//!
//! Static content, routing, the browsing session and the contact form. Nothing
//! here touches the network or the filesystem.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod routes;
pub mod session;

// Re-export commonly used types
pub use carousel::HeroCarousel;
pub use contact::{
    ContactForm, ContactFormData, ContactFormState, ContactSubmission, DeliveryOutcome, FormField, SubmitOutcome,
    ValidationError, ValidationErrors,
};
pub use routes::{Route, RouteTable};
pub use session::{NavLink, Session, SiteAction};

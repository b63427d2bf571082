//! Test fixtures for website integration tests

use serde_json::{Value, json};

/// Url-encoded form that passes validation
pub const VALID_FORM: &str = "name=Ada&email=ada%40x.com&phone=&message=Hello";

/// Url-encoded form failing name, email and message
pub const INVALID_FORM: &str = "name=&email=bad&phone=&message=";

pub const SITE_CSS: &str = "body { margin: 0; }\n";

pub fn valid_json_form() -> Value {
    json!({ "name": "Ada", "email": "ada@x.com", "phone": "", "message": "Hello" })
}

pub fn invalid_json_form() -> Value {
    json!({ "name": "", "email": "bad", "message": "" })
}

/// Every page path the route table knows
pub fn page_paths() -> Vec<&'static str> {
    vec![
        "/",
        "/services",
        "/services/real-estate",
        "/services/videography",
        "/services/mapping",
        "/services/garden",
        "/portfolio",
        "/portfolio/real-estate",
        "/portfolio/commercial",
        "/portfolio/garden",
        "/portfolio/mapping",
        "/contact",
    ]
}

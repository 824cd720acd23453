//! Network and asset path constants for the TechStore storefront.

/// Default REST API base URL (the storefront's development server).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "TECHSTORE_API_URL";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "TECHSTORE_TIMEOUT_SECS";

/// Static path product images are served from, keyed by filename.
pub const PRODUCT_IMAGE_PATH: &str = "/static/images/products";

/// Image used when a product has no filename.
pub const DEFAULT_PRODUCT_IMAGE: &str = "default.png";

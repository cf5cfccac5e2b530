//! SEO metadata (title, description, OG/Twitter cards).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seo {
    /// Page title; falls back to the business name when absent.
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    /// Image URL for og:image / twitter:image.
    pub og_image: Option<String>,
}

//! JSON-LD structured data for post and site pages.
//!
//! Pure field mapping into fixed schema.org shapes. Values go through
//! serde_json so quotes and control characters are escaped, and `</` is
//! escaped so no value can terminate the surrounding script element.

use crate::structured_data::error::StructuredDataError;
use crate::types::SiteConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StructuredDataError {
        #[error("invalid structured data input: {0}")]
        Parse(#[from] serde_json::Error),
    }
}

/// Front matter of a post as needed by the BlogPosting schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub author: String,
    pub pub_date: String,
}

/// Either a bare URL or an image object carrying `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Object { src: String },
    Url(String),
}

impl ImageRef {
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Object { src } => src,
            ImageRef::Url(url) => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredData {
    Post { pathname: String, post: PostMeta },
    WebSite { name: String, url: String },
}

/// Data object accepted for the `post` kind.
#[derive(Deserialize)]
struct PostData {
    pathname: String,
    post: PostMeta,
}

impl StructuredData {
    pub fn website(site: &SiteConfig) -> Self {
        StructuredData::WebSite {
            name: site.title.clone(),
            url: site.url.clone(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            StructuredData::Post { pathname, post } => json!({
                "@context": "https://schema.org",
                "@type": "BlogPosting",
                "mainEntityOfPage": {
                    "@type": "WebPage",
                    "@id": pathname,
                },
                "headline": post.title,
                "description": post.description,
                "image": post.image.src(),
                "author": {
                    "@type": "Person",
                    "name": post.author,
                },
                "datePublished": post.pub_date,
            }),
            StructuredData::WebSite { name, url } => json!({
                "@context": "https://schema.org/",
                "@type": "WebSite",
                "name": name,
                "url": url,
            }),
        }
    }

    pub fn to_script_tag(&self) -> String {
        let body = format!("{:#}", self.to_json());
        format!(
            "<script type=\"application/ld+json\">\n{}\n</script>",
            body.replace("</", "<\\/")
        )
    }
}

/// Renders the script tag for a page kind.
///
/// `post` reads `{pathname, post}` from `data`; `website` takes everything
/// from `site` and ignores `data`. Any other kind renders nothing.
pub fn json_ld(kind: &str, data: &Value, site: &SiteConfig) -> Result<String, StructuredDataError> {
    match kind {
        "post" => {
            let PostData { pathname, post } = PostData::deserialize(data)?;
            Ok(StructuredData::Post { pathname, post }.to_script_tag())
        }
        "website" => Ok(StructuredData::website(site).to_script_tag()),
        other => {
            log::debug!("no structured data for page kind '{other}'");
            Ok(String::new())
        }
    }
}

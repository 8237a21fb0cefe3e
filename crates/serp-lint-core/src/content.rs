//! Product content types.
//!
//! [`ProductContent`] is the scorers' input, built once from a catalog
//! export. The catalog carries keywords as one comma-separated string and
//! the description as raw HTML; both are normalized here so the scoring
//! modules stay free of boundary parsing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::keyphrase;

/// A product image reference. Only the alt text matters to scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImageRef {
    /// The image's alt attribute, if any.
    pub alt_text: Option<String>,
}

impl ImageRef {
    /// Whether this image has non-empty alt text.
    pub fn has_alt(&self) -> bool {
        self.alt_text
            .as_deref()
            .is_some_and(|alt| !alt.trim().is_empty())
    }
}

/// Textual content of a product page, as the scorers see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProductContent {
    /// Product title.
    pub title: String,
    /// URL slug, possibly with category segments (`books/fiction/the-sea`).
    pub slug: String,
    /// Raw HTML description.
    pub description_html: String,
    /// SEO title override; falls back to `title` when empty.
    pub meta_title: String,
    /// Meta description shown on result pages.
    pub meta_description: String,
    /// Keyphrases; first is primary, second (if any) secondary.
    pub keyphrases: Vec<String>,
    /// Images referenced by the page.
    pub images: Vec<ImageRef>,
}

/// Wire shape of one product in a catalog export.
#[derive(Debug, Deserialize)]
struct CatalogProduct {
    #[serde(default)]
    title: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    meta_title: String,
    #[serde(default)]
    meta_description: String,
    #[serde(default)]
    keywords: String,
    #[serde(default)]
    images: Vec<ImageRef>,
}

impl From<CatalogProduct> for ProductContent {
    fn from(raw: CatalogProduct) -> Self {
        Self {
            title: raw.title,
            slug: raw.slug,
            description_html: raw.description,
            meta_title: raw.meta_title,
            meta_description: raw.meta_description,
            keyphrases: keyphrase::parse_list(&raw.keywords),
            images: raw.images,
        }
    }
}

impl ProductContent {
    /// Parse a single product from catalog-export JSON.
    pub fn from_json(json: &str) -> ContentResult<Self> {
        let raw: CatalogProduct = serde_json::from_str(json)?;
        Ok(raw.into())
    }

    /// Parse a catalog export: either one product object or an array.
    pub fn from_json_catalog(json: &str) -> ContentResult<Vec<Self>> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            let raw: Vec<CatalogProduct> = serde_json::from_value(value)?;
            if raw.is_empty() {
                return Err(ContentError::EmptyCatalog);
            }
            Ok(raw.into_iter().map(Into::into).collect())
        } else {
            let raw: CatalogProduct = serde_json::from_value(value)?;
            Ok(vec![raw.into()])
        }
    }

    /// The primary keyphrase, trimmed and lowercased. `None` when unset.
    pub fn primary_keyphrase(&self) -> Option<String> {
        normalized_keyphrase(self.keyphrases.first()?)
    }

    /// The secondary keyphrase, trimmed and lowercased. `None` when unset.
    pub fn secondary_keyphrase(&self) -> Option<String> {
        normalized_keyphrase(self.keyphrases.get(1)?)
    }

    /// The title used on result pages: `meta_title`, or `title` when the
    /// override is empty.
    pub fn seo_title(&self) -> &str {
        if self.meta_title.trim().is_empty() {
            &self.title
        } else {
            &self.meta_title
        }
    }
}

fn normalized_keyphrase(raw: &str) -> Option<String> {
    let kp = raw.trim().to_lowercase();
    if kp.is_empty() { None } else { Some(kp) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "title": "35 Inspiring Stories",
        "slug": "books/35-inspiring-stories",
        "description": "<p>A collection of stories.</p>",
        "meta_title": "",
        "meta_description": "Stories to lift your day.",
        "keywords": "35 Inspiring Stories, short fiction",
        "images": [{"alt_text": "Book cover"}, {"alt_text": null}]
    }"#;

    #[test]
    fn parses_single_product() {
        let product = ProductContent::from_json(PRODUCT_JSON).unwrap();
        assert_eq!(product.title, "35 Inspiring Stories");
        assert_eq!(product.description_html, "<p>A collection of stories.</p>");
        assert_eq!(product.keyphrases.len(), 2);
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn keyphrases_are_normalized_on_access() {
        let product = ProductContent::from_json(PRODUCT_JSON).unwrap();
        assert_eq!(
            product.primary_keyphrase().as_deref(),
            Some("35 inspiring stories")
        );
        assert_eq!(product.secondary_keyphrase().as_deref(), Some("short fiction"));
    }

    #[test]
    fn missing_fields_default() {
        let product = ProductContent::from_json(r#"{"title": "Bare"}"#).unwrap();
        assert!(product.keyphrases.is_empty());
        assert!(product.images.is_empty());
        assert!(product.primary_keyphrase().is_none());
    }

    #[test]
    fn seo_title_falls_back_to_title() {
        let product = ProductContent::from_json(PRODUCT_JSON).unwrap();
        assert_eq!(product.seo_title(), "35 Inspiring Stories");

        let with_meta = ProductContent {
            meta_title: "Buy 35 Inspiring Stories Online".to_string(),
            ..product
        };
        assert_eq!(with_meta.seo_title(), "Buy 35 Inspiring Stories Online");
    }

    #[test]
    fn catalog_accepts_array_or_object() {
        let one = ProductContent::from_json_catalog(PRODUCT_JSON).unwrap();
        assert_eq!(one.len(), 1);

        let many =
            ProductContent::from_json_catalog(&format!("[{PRODUCT_JSON},{PRODUCT_JSON}]")).unwrap();
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn empty_catalog_errors() {
        let result = ProductContent::from_json_catalog("[]");
        assert!(matches!(result, Err(ContentError::EmptyCatalog)));
    }

    #[test]
    fn invalid_json_errors() {
        assert!(ProductContent::from_json("not json").is_err());
    }

    #[test]
    fn image_alt_presence() {
        assert!(ImageRef { alt_text: Some("cover".to_string()) }.has_alt());
        assert!(!ImageRef { alt_text: Some("  ".to_string()) }.has_alt());
        assert!(!ImageRef { alt_text: None }.has_alt());
    }
}

//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category. The slug doubles as filter key and route segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// Category description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            image: None,
        }
    }

    /// Storefront route for this category.
    pub fn path(&self) -> String {
        format!("/shop/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let cat = Category::new("1", "Silk Hijabs", "silk-hijabs");
        assert_eq!(cat.path(), "/shop/silk-hijabs");
        assert!(cat.description.is_none());
    }

    #[test]
    fn test_optional_fields_deserialize() {
        let cat: Category =
            serde_json::from_str(r#"{"id":"2","name":"Cotton","slug":"cotton-hijabs"}"#).unwrap();
        assert_eq!(cat.slug, "cotton-hijabs");
        assert!(cat.image.is_none());
    }
}

//! Category DTOs

use budgetd_types::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Display name
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[schema(example = "Food")]
    pub name: String,
    /// Optional emoji shown next to the name
    #[serde(default)]
    #[validate(length(max = 16, message = "Emoji must be at most 16 characters"))]
    #[schema(example = "🍔")]
    pub emoji: Option<String>,
}

/// Category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            emoji: category.emoji,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_rules() {
        let ok = CreateCategoryRequest { name: "Food".to_string(), emoji: None };
        assert!(ok.validate().is_ok());

        let empty = CreateCategoryRequest { name: String::new(), emoji: None };
        assert!(empty.validate().is_err());

        let long = CreateCategoryRequest { name: "x".repeat(101), emoji: None };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_emoji_is_optional() {
        let request: CreateCategoryRequest = serde_json::from_str(r#"{"name":"Rent"}"#).unwrap();
        assert!(request.emoji.is_none());
        assert!(request.validate().is_ok());
    }
}

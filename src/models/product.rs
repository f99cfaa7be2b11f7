use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, FieldErrors};

/// Productized offering. Price stays a display string; nothing in the system
/// does arithmetic on it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub features: Vec<String>,
    pub image_url: String,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub features: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_popular: Option<bool>,
}

pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub features: Vec<String>,
    pub image_url: String,
    pub is_popular: bool,
}

impl ProductDraft {
    pub fn validate(self) -> Result<NewProduct, ApiError> {
        let mut errors = FieldErrors::new();
        let name = errors.require_text("name", self.name);
        let description = errors.require_text("description", self.description);
        let category = errors.require_text("category", self.category);
        let price = errors.require_text("price", self.price);
        let features = errors.require_list("features", self.features);
        let image_url = errors.require_url("imageUrl", self.image_url);
        errors.finish("Invalid product data")?;

        Ok(NewProduct {
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            category: category.unwrap_or_default(),
            price: price.unwrap_or_default(),
            features: features.unwrap_or_default(),
            image_url: image_url.unwrap_or_default(),
            is_popular: self.is_popular.unwrap_or(false),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub features: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_popular: Option<bool>,
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.check_present_text("name", self.name.as_ref());
        errors.check_present_text("description", self.description.as_ref());
        errors.check_present_text("category", self.category.as_ref());
        errors.check_present_text("price", self.price.as_ref());
        errors.check_present_url("imageUrl", self.image_url.as_ref());
        errors.finish("Invalid product data")
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(v) = self.name {
            product.name = v;
        }
        if let Some(v) = self.description {
            product.description = v;
        }
        if let Some(v) = self.category {
            product.category = v;
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.features {
            product.features = v;
        }
        if let Some(v) = self.image_url {
            product.image_url = v;
        }
        if let Some(v) = self.is_popular {
            product.is_popular = v;
        }
    }
}

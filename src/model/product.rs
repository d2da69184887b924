use super::Entity;
use crate::service::{FieldRule, RequestValidator, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAME: FieldRule = FieldRule::required("name").length(5, 20);
const CLIENT: FieldRule = FieldRule::optional("client");

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ProductBody {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub client: Option<Value>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct ProductChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl Entity for Product {
    const COLLECTION: &'static str = "products";

    type Body = ProductBody;
    type Changes = ProductChanges;

    fn from_body(body: ProductBody) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = RequestValidator::check(&NAME, body.name.as_ref(), &mut errors);
        let client = RequestValidator::check(&CLIENT, body.client.as_ref(), &mut errors);
        match name {
            Some(name) if errors.is_empty() => Ok(Product { name, client }),
            _ => Err(errors),
        }
    }

    fn changes_from_body(body: ProductBody) -> Result<ProductChanges, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = RequestValidator::check_partial(&NAME, body.name.as_ref(), &mut errors);
        let client = RequestValidator::check_partial(&CLIENT, body.client.as_ref(), &mut errors);
        errors.finish(|| ProductChanges { name, client })
    }
}

use super::Entity;
use crate::service::{FieldRule, RequestValidator, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAME: FieldRule = FieldRule::required("name").length(5, 20);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct DepartmentBody {
    #[serde(default)]
    pub name: Option<Value>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct DepartmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Department {
    const COLLECTION: &'static str = "departments";

    type Body = DepartmentBody;
    type Changes = DepartmentChanges;

    fn from_body(body: DepartmentBody) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        match RequestValidator::check(&NAME, body.name.as_ref(), &mut errors) {
            Some(name) => Ok(Department { name }),
            None => Err(errors),
        }
    }

    fn changes_from_body(body: DepartmentBody) -> Result<DepartmentChanges, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = RequestValidator::check_partial(&NAME, body.name.as_ref(), &mut errors);
        errors.finish(|| DepartmentChanges { name })
    }
}

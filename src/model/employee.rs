use super::Entity;
use crate::service::{FieldRule, RequestValidator, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIRST_NAME: FieldRule = FieldRule::required("firstName").length(2, 20);
const LAST_NAME: FieldRule = FieldRule::required("lastName").length(2, 20);
const DEPARTMENT: FieldRule = FieldRule::required("department").length(2, 20);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    /// Free-text label, not a reference to a department record.
    pub department: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub department: Option<Value>,
}

#[derive(Serialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Entity for Employee {
    const COLLECTION: &'static str = "employees";

    type Body = EmployeeBody;
    type Changes = EmployeeChanges;

    fn from_body(body: EmployeeBody) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let first_name = RequestValidator::check(&FIRST_NAME, body.first_name.as_ref(), &mut errors);
        let last_name = RequestValidator::check(&LAST_NAME, body.last_name.as_ref(), &mut errors);
        let department = RequestValidator::check(&DEPARTMENT, body.department.as_ref(), &mut errors);
        match (first_name, last_name, department) {
            (Some(first_name), Some(last_name), Some(department)) if errors.is_empty() => Ok(Employee {
                first_name,
                last_name,
                department,
            }),
            _ => Err(errors),
        }
    }

    fn changes_from_body(body: EmployeeBody) -> Result<EmployeeChanges, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let first_name = RequestValidator::check_partial(&FIRST_NAME, body.first_name.as_ref(), &mut errors);
        let last_name = RequestValidator::check_partial(&LAST_NAME, body.last_name.as_ref(), &mut errors);
        let department = RequestValidator::check_partial(&DEPARTMENT, body.department.as_ref(), &mut errors);
        errors.finish(|| EmployeeChanges {
            first_name,
            last_name,
            department,
        })
    }
}

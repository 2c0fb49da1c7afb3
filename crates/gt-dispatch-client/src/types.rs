//! Wire types for the dispatch backend.
//!
//! Request bodies are snake_case. Every submission endpoint answers with the
//! same envelope: `{ success, message, data?, errors? }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope shared by the submission endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

/// Flatten a backend `errors` value into `field -> messages`.
///
/// Field values may be a single string or a list of strings. A bare string
/// or list at the top level is filed under `non_field_errors`.
pub fn field_errors(errors: Option<&serde_json::Value>) -> BTreeMap<String, Vec<String>> {
    use serde_json::Value;

    fn messages(value: &Value) -> Vec<String> {
        match value {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items.iter().flat_map(messages).collect(),
            Value::Null => Vec::new(),
            other => vec![other.to_string()],
        }
    }

    let mut out = BTreeMap::new();
    match errors {
        Some(Value::Object(map)) => {
            for (field, value) in map {
                let msgs = messages(value);
                if !msgs.is_empty() {
                    out.insert(field.clone(), msgs);
                }
            }
        }
        Some(value @ (Value::String(_) | Value::Array(_))) => {
            let msgs = messages(value);
            if !msgs.is_empty() {
                out.insert("non_field_errors".to_string(), msgs);
            }
        }
        _ => {}
    }
    out
}

/// `POST /api/v1/dispatch/contact/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmissionRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// `POST /api/v1/dispatch/claim/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSubmissionRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    pub age_of_mc_authority: u32,
}

/// Fields every signup carries regardless of account type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupCommon {
    pub motor_carrier_no: String,
    pub authority_age: u32,
    pub number_of_trucks: String,
    pub truck_type: String,
    pub operation_area: String,
    pub first_name: String,
    pub last_name: String,
    pub contact_number: String,
    pub communication_method: String,
    pub email: String,
    pub password: String,
}

/// `POST /api/v1/dispatch/signup/`, tagged by `signup_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signup_type")]
pub enum SignupSubmissionRequest {
    #[serde(rename = "company")]
    Company {
        company_name: String,
        company_email: String,
        company_contact_number: String,
        #[serde(flatten)]
        common: SignupCommon,
    },
    #[serde(rename = "owner-operator")]
    OwnerOperator {
        owner_name: String,
        owner_email: String,
        owner_contact_number: String,
        #[serde(flatten)]
        common: SignupCommon,
    },
}

impl SignupSubmissionRequest {
    pub fn signup_type(&self) -> &'static str {
        match self {
            Self::Company { .. } => "company",
            Self::OwnerOperator { .. } => "owner-operator",
        }
    }
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Submission {
    /// Backend confirmation message, when it sent one.
    pub message: Option<String>,
    /// Record echoed back by the backend.
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
}

/// Answer of `GET /api/v1/dispatch/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub message: String,
    pub status: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn common() -> SignupCommon {
        SignupCommon {
            motor_carrier_no: "MC123456".into(),
            authority_age: 2,
            number_of_trucks: "0-7".into(),
            truck_type: "Reefer".into(),
            operation_area: "Midwest".into(),
            first_name: "Ana".into(),
            last_name: "Diaz".into(),
            contact_number: "555-0100".into(),
            communication_method: "Email".into(),
            email: "ana@example.com".into(),
            password: "hunter22!".into(),
        }
    }

    #[test]
    fn signup_is_tagged_and_flattened() {
        let req = SignupSubmissionRequest::OwnerOperator {
            owner_name: "Ana Diaz".into(),
            owner_email: "ana@example.com".into(),
            owner_contact_number: "555-0100".into(),
            common: common(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["signup_type"], "owner-operator");
        assert_eq!(value["owner_name"], "Ana Diaz");
        assert_eq!(value["motor_carrier_no"], "MC123456");
        assert_eq!(value["authority_age"], 2);
        assert!(value.get("common").is_none());
        assert!(value.get("confirm_password").is_none());
        assert_eq!(req.signup_type(), "owner-operator");
    }

    #[test]
    fn envelope_tolerates_missing_fields() {
        let env: ApiEnvelope = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(env.success);
        assert!(env.message.is_none());
        assert!(env.data.is_none());
    }

    #[test]
    fn field_errors_from_object() {
        let errors = json!({
            "email": ["Enter a valid email address."],
            "message": "Message must be at least 10 characters long.",
            "phone": [],
        });
        let map = field_errors(Some(&errors));
        assert_eq!(map.len(), 2);
        assert_eq!(map["email"], vec!["Enter a valid email address."]);
        assert_eq!(
            map["message"],
            vec!["Message must be at least 10 characters long."]
        );
    }

    #[test]
    fn field_errors_from_bare_list() {
        let map = field_errors(Some(&json!(["Duplicate submission"])));
        assert_eq!(map["non_field_errors"], vec!["Duplicate submission"]);
        assert!(field_errors(None).is_empty());
        assert!(field_errors(Some(&json!(null))).is_empty());
    }
}

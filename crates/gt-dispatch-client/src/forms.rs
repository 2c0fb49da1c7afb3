//! Site form payloads.
//!
//! The site posts camelCase JSON. Each form validates itself, reporting the
//! first rule that fails, and converts into the backend's snake_case request
//! with strings trimmed and e-mails lowercased.

use gt_core::{is_valid_email, normalize_email, ValidationError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::{
    ClaimSubmissionRequest, ContactSubmissionRequest, SignupCommon, SignupSubmissionRequest,
};

pub const TRUCK_TYPES: [&str; 6] = [
    "Dry Van",
    "Reefer",
    "Flatbed",
    "Box Truck",
    "Hotshot",
    "Power Only",
];
pub const OPERATION_AREAS: [&str; 4] = ["Southeast", "Midwest", "Coastal", "Southwest"];
pub const COMMUNICATION_METHODS: [&str; 4] = ["Email", "Phone", "SMS", "WhatsApp"];
pub const TRUCK_COUNT_BUCKETS: [&str; 3] = ["0-7", "8-15", "20+"];

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const PHONE_MAX: usize = 20;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 5000;
const PASSWORD_MIN: usize = 8;

/// Choice lists offered by the signup form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupOptions {
    pub truck_types: Vec<String>,
    pub operation_areas: Vec<String>,
    pub communication_methods: Vec<String>,
    pub truck_counts: Vec<String>,
}

impl SignupOptions {
    pub fn current() -> Self {
        let owned = |options: &[&str]| -> Vec<String> {
            options.iter().map(|s| s.to_string()).collect()
        };
        Self {
            truck_types: owned(&TRUCK_TYPES[..]),
            operation_areas: owned(&OPERATION_AREAS[..]),
            communication_methods: owned(&COMMUNICATION_METHODS[..]),
            truck_counts: owned(&TRUCK_COUNT_BUCKETS[..]),
        }
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn max_len(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

fn email(
    value: &str,
    field: &'static str,
    description: &'static str,
) -> Result<(), ValidationError> {
    let trimmed = required(value, field)?;
    if !is_valid_email(trimmed) {
        return Err(ValidationError::InvalidEmail(description));
    }
    max_len(trimmed, field, EMAIL_MAX)
}

fn choice(value: &str, field: &'static str, options: &[&str]) -> Result<(), ValidationError> {
    let trimmed = required(value, field)?;
    if options.contains(&trimmed) {
        Ok(())
    } else {
        Err(ValidationError::unknown_option(field, options))
    }
}

fn positive(value: i64, field: &'static str) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    u32::try_from(value).map_err(|_| ValidationError::TooLarge {
        field,
        max: u64::from(u32::MAX),
    })
}

fn optional_phone(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ── Contact ────────────────────────────────────────────────────────────

/// Contact page form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let first = required(&self.first_name, "First name")?;
        max_len(first, "First name", NAME_MAX)?;
        let last = required(&self.last_name, "Last name")?;
        max_len(last, "Last name", NAME_MAX)?;
        email(&self.email, "Email", "email address")?;
        if let Some(phone) = optional_phone(self.phone.as_deref()) {
            max_len(&phone, "Phone", PHONE_MAX)?;
        }
        let message = required(&self.message, "Message")?;
        let len = message.chars().count();
        if len < MESSAGE_MIN {
            return Err(ValidationError::TooShort {
                field: "Message",
                min: MESSAGE_MIN,
            });
        }
        if len > MESSAGE_MAX {
            return Err(ValidationError::TooLong {
                field: "Message",
                max: MESSAGE_MAX,
            });
        }
        Ok(())
    }

    /// Normalized backend request, or the first validation failure.
    pub fn to_request(&self) -> Result<ContactSubmissionRequest, ValidationError> {
        self.validate()?;
        Ok(ContactSubmissionRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: normalize_email(&self.email),
            phone: optional_phone(self.phone.as_deref()),
            message: self.message.trim().to_string(),
        })
    }
}

// ── Claim ──────────────────────────────────────────────────────────────

/// "Claim your dispatcher" modal on the home page.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company_name: String,
    pub preferred_route: String,
    #[serde(alias = "ageOfMCAuthority")]
    pub age_of_mc_authority: i64,
}

impl ClaimForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.full_name, "Full name")?;
        email(&self.email, "Email", "email address")?;
        required(&self.company_name, "Company name")?;
        required(&self.preferred_route, "Preferred route")?;
        positive(self.age_of_mc_authority, "Age of MC authority")?;
        Ok(())
    }

    /// Normalized backend request, or the first validation failure.
    pub fn to_request(&self) -> Result<ClaimSubmissionRequest, ValidationError> {
        self.validate()?;
        Ok(ClaimSubmissionRequest {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            phone: optional_phone(self.phone.as_deref()),
            company_name: self.company_name.trim().to_string(),
            preferred_route: self.preferred_route.trim().to_string(),
            age_of_mc_authority: positive(self.age_of_mc_authority, "Age of MC authority")?,
        })
    }
}

// ── Signup ─────────────────────────────────────────────────────────────

/// Which signup flow the form was filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum SignupType {
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "owner-operator")]
    OwnerOperator,
}

/// Carrier signup form. Company and owner-operator signups share one
/// payload; the identity fields used depend on `signup_type`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub signup_type: SignupType,

    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_email: String,
    #[serde(default)]
    pub company_contact_number: String,

    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
    #[serde(default)]
    pub owner_contact_number: String,

    #[serde(default)]
    pub motor_carrier_no: String,
    #[serde(default)]
    pub authority_age: i64,
    #[serde(default)]
    pub number_of_trucks: String,
    #[serde(default)]
    pub truck_type: String,
    #[serde(default)]
    pub operation_area: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub communication_method: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub agree_to_terms: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("Password"));
        }
        if self.password.chars().count() < PASSWORD_MIN {
            return Err(ValidationError::TooShort {
                field: "Password",
                min: PASSWORD_MIN,
            });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::Mismatch("Passwords do not match"));
        }
        if !self.agree_to_terms {
            return Err(ValidationError::NotAccepted(
                "You must agree to the terms and conditions",
            ));
        }

        match self.signup_type {
            SignupType::Company => {
                required(&self.company_name, "Company name")?;
                email(&self.company_email, "Company email", "company email address")?;
                required(&self.company_contact_number, "Company contact number")?;
            }
            SignupType::OwnerOperator => {
                required(&self.owner_name, "Owner name")?;
                email(&self.owner_email, "Owner email", "owner email address")?;
                required(&self.owner_contact_number, "Owner contact number")?;
            }
        }

        required(&self.motor_carrier_no, "Motor Carrier Number")?;
        positive(self.authority_age, "Authority age")?;
        choice(&self.number_of_trucks, "Number of trucks", &TRUCK_COUNT_BUCKETS)?;
        choice(&self.truck_type, "Truck type", &TRUCK_TYPES)?;
        choice(&self.operation_area, "Operation area", &OPERATION_AREAS)?;
        required(&self.first_name, "Contact person first name")?;
        required(&self.last_name, "Contact person last name")?;
        required(&self.contact_number, "Contact person number")?;
        choice(
            &self.communication_method,
            "Communication method",
            &COMMUNICATION_METHODS,
        )?;
        email(
            &self.email,
            "Contact person email",
            "contact person email address",
        )?;
        Ok(())
    }

    /// Normalized backend request, or the first validation failure.
    ///
    /// The password confirmation and terms flag stay on this side.
    pub fn to_request(&self) -> Result<SignupSubmissionRequest, ValidationError> {
        self.validate()?;
        let common = SignupCommon {
            motor_carrier_no: self.motor_carrier_no.trim().to_string(),
            authority_age: positive(self.authority_age, "Authority age")?,
            number_of_trucks: self.number_of_trucks.trim().to_string(),
            truck_type: self.truck_type.trim().to_string(),
            operation_area: self.operation_area.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            communication_method: self.communication_method.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password.clone(),
        };
        Ok(match self.signup_type {
            SignupType::Company => SignupSubmissionRequest::Company {
                company_name: self.company_name.trim().to_string(),
                company_email: normalize_email(&self.company_email),
                company_contact_number: self.company_contact_number.trim().to_string(),
                common,
            },
            SignupType::OwnerOperator => SignupSubmissionRequest::OwnerOperator {
                owner_name: self.owner_name.trim().to_string(),
                owner_email: normalize_email(&self.owner_email),
                owner_contact_number: self.owner_contact_number.trim().to_string(),
                common,
            },
        })
    }
}

//! User and KYC domain models.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    Investor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Investor => "INVESTOR",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "INVESTOR" => Ok(UserRole::Investor),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(Error::invalid_input(format!("Unknown user role '{}'", other))),
        }
    }
}

/// Know-your-customer verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::NotStarted => "NOT_STARTED",
            KycStatus::Pending => "PENDING",
            KycStatus::Approved => "APPROVED",
            KycStatus::Rejected => "REJECTED",
        }
    }

    /// Documents can be (re)submitted before the first attempt or after a rejection.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, KycStatus::NotStarted | KycStatus::Rejected)
    }
}

impl FromStr for KycStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NOT_STARTED" => Ok(KycStatus::NotStarted),
            "PENDING" => Ok(KycStatus::Pending),
            "APPROVED" => Ok(KycStatus::Approved),
            "REJECTED" => Ok(KycStatus::Rejected),
            other => Err(Error::invalid_input(format!("Unknown KYC status '{}'", other))),
        }
    }
}

/// Domain model representing a registered user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub kyc_status: KycStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Input model for creating a new user. `password_hash` is a PHC string
/// produced by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_email(&self.email)?;
        if self.full_name.trim().is_empty() {
            return Err(Error::invalid_input("Full name cannot be empty"));
        }
        if self.password_hash.is_empty() {
            return Err(Error::invalid_input("Password hash is missing"));
        }
        Ok(())
    }
}

/// Login lookup result.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    pub document_type: String,
    pub document_number: String,
    pub date_of_birth: NaiveDate,
}

impl KycSubmission {
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        if self.document_type.trim().is_empty() {
            return Err(Error::invalid_input("Document type cannot be empty"));
        }
        if self.document_number.trim().chars().count() < 4 {
            return Err(Error::invalid_input("Document number is too short"));
        }
        if self.date_of_birth >= today {
            return Err(Error::invalid_input("Date of birth must be in the past"));
        }
        Ok(())
    }
}

/// Stored KYC dossier of a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    pub user_id: String,
    pub document_type: String,
    pub document_number: String,
    pub date_of_birth: NaiveDate,
    pub status: KycStatus,
    pub review_note: Option<String>,
    pub submitted_at: NaiveDateTime,
    pub reviewed_at: Option<NaiveDateTime>,
}

impl KycRecord {
    /// Copy safe to return to clients: all but the last four document characters masked.
    pub fn masked(&self) -> Self {
        let visible = self.document_number.chars().count().saturating_sub(4);
        let document_number = self
            .document_number
            .chars()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { c })
            .collect();
        Self {
            document_number,
            ..self.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KycReview {
    pub approve: bool,
    pub note: Option<String>,
}

pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(Error::invalid_input(format!("'{}' is not a valid email", email)));
    }
    Ok(())
}

/// Checked before hashing, so the plain password never reaches the service.
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(Error::invalid_input(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kyc_status_round_trips_through_str() {
        for status in [
            KycStatus::NotStarted,
            KycStatus::Pending,
            KycStatus::Approved,
            KycStatus::Rejected,
        ] {
            assert_eq!(KycStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_kyc_status_serialization() {
        assert_eq!(
            serde_json::to_string(&KycStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
    }

    #[test]
    fn test_accepts_submission() {
        assert!(KycStatus::NotStarted.accepts_submission());
        assert!(KycStatus::Rejected.accepts_submission());
        assert!(!KycStatus::Pending.accepts_submission());
        assert!(!KycStatus::Approved.accepts_submission());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("investor@example.com").is_ok());
        assert!(validate_email("investor@example").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("investor.example.com").is_err());
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
    }

    #[test]
    fn test_masked_document_keeps_last_four() {
        let record = KycRecord {
            user_id: "u1".to_string(),
            document_type: "PAN".to_string(),
            document_number: "ABCDE1234F".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            status: KycStatus::Pending,
            review_note: None,
            submitted_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            reviewed_at: None,
        };
        assert_eq!(record.masked().document_number, "******234F");
    }
}

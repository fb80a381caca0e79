//! Database models for users and KYC dossiers.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use log::error;
use propvest_core::users::{KycRecord, KycStatus, NewUser, User, UserCredentials, UserRole};
use serde::{Deserialize, Serialize};

#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub kyc_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_kyc_status(value: &str, owner: &str) -> KycStatus {
    value.parse().unwrap_or_else(|_| {
        error!("Unknown KYC status '{}' for user {}", value, owner);
        KycStatus::NotStarted
    })
}

impl UserDB {
    pub fn from_new(id: String, new_user: NewUser, now: NaiveDateTime) -> Self {
        Self {
            id,
            email: new_user.email,
            full_name: new_user.full_name,
            phone: new_user.phone,
            password_hash: new_user.password_hash,
            role: new_user.role.as_str().to_string(),
            kyc_status: KycStatus::NotStarted.as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn credentials(&self) -> UserCredentials {
        UserCredentials {
            user_id: self.id.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
        }
    }
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        let role = db.role.parse().unwrap_or_else(|_| {
            error!("Unknown role '{}' for user {}", db.role, db.id);
            UserRole::Investor
        });
        User {
            kyc_status: parse_kyc_status(&db.kyc_status, &db.id),
            role,
            id: db.id,
            email: db.email,
            full_name: db.full_name,
            phone: db.phone,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(primary_key(user_id))]
#[diesel(table_name = crate::schema::kyc_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct KycRecordDB {
    pub user_id: String,
    pub document_type: String,
    pub document_number: String,
    pub date_of_birth: NaiveDate,
    pub status: String,
    pub review_note: Option<String>,
    pub submitted_at: NaiveDateTime,
    pub reviewed_at: Option<NaiveDateTime>,
}

impl From<KycRecordDB> for KycRecord {
    fn from(db: KycRecordDB) -> Self {
        KycRecord {
            status: parse_kyc_status(&db.status, &db.user_id),
            user_id: db.user_id,
            document_type: db.document_type,
            document_number: db.document_number,
            date_of_birth: db.date_of_birth,
            review_note: db.review_note,
            submitted_at: db.submitted_at,
            reviewed_at: db.reviewed_at,
        }
    }
}

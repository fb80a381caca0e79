use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use propvest_core::users::{
    KycRecord, KycStatus, KycSubmission, NewUser, ProfileUpdate, User, UserCredentials,
    UserRepositoryTrait,
};
use propvest_core::{DatabaseError, Error, Result};

use super::model::{KycRecordDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{kyc_records, users};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }

    fn find_row_by_email(&self, email: &str) -> Result<Option<UserDB>> {
        let mut conn = get_connection(&self.pool)?;
        users::table
            .filter(users::email.eq(email))
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()
    }
}

fn set_user_kyc_status(conn: &mut SqliteConnection, user_id: &str, status: KycStatus) -> Result<()> {
    let updated = diesel::update(users::table.find(user_id))
        .set((
            users::kyc_status.eq(status.as_str()),
            users::updated_at.eq(Utc::now().naive_utc()),
        ))
        .execute(conn)
        .into_core()?;
    if updated == 0 {
        return Err(diesel::result::Error::NotFound).into_core();
    }
    Ok(())
}

/// KYC status of the user as seen by the caller's transaction.
pub(crate) fn current_kyc_status(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<KycStatus> {
    let raw: String = users::table
        .find(user_id)
        .select(users::kyc_status)
        .first(conn)
        .into_core()?;
    KycStatus::from_str(&raw)
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .into_core()?;
        Ok(User::from(row))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.find_row_by_email(email)?.map(User::from))
    }

    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(self.find_row_by_email(email)?.map(|row| row.credentials()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let row = UserDB::from_new(Uuid::new_v4().to_string(), new_user, Utc::now().naive_utc());
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(inserted))
            })
            .await
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let updated = diesel::update(users::table.find(&user_id))
                    .set((
                        users::full_name.eq(update.full_name),
                        users::phone.eq(update.phone),
                        users::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(User::from(updated))
            })
            .await
    }

    fn get_kyc(&self, user_id: &str) -> Result<Option<KycRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let row = kyc_records::table
            .find(user_id)
            .select(KycRecordDB::as_select())
            .first::<KycRecordDB>(&mut conn)
            .optional()
            .into_core()?;
        Ok(row.map(KycRecord::from))
    }

    async fn save_kyc_submission(
        &self,
        user_id: &str,
        submission: KycSubmission,
    ) -> Result<KycRecord> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<KycRecord> {
                let current = current_kyc_status(conn, &user_id)?;
                if !current.accepts_submission() {
                    return Err(Error::ConstraintViolation(format!(
                        "KYC cannot be submitted while status is {}",
                        current.as_str()
                    )));
                }
                set_user_kyc_status(conn, &user_id, KycStatus::Pending)?;
                let row = KycRecordDB {
                    user_id,
                    document_type: submission.document_type,
                    document_number: submission.document_number,
                    date_of_birth: submission.date_of_birth,
                    status: KycStatus::Pending.as_str().to_string(),
                    review_note: None,
                    submitted_at: Utc::now().naive_utc(),
                    reviewed_at: None,
                };
                // A resubmission after rejection overwrites the previous dossier.
                diesel::replace_into(kyc_records::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                Ok(KycRecord::from(row))
            })
            .await
    }

    async fn set_kyc_status(
        &self,
        user_id: &str,
        status: KycStatus,
        note: Option<String>,
    ) -> Result<KycRecord> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<KycRecord> {
                // Only a pending dossier may change, so a second review loses.
                let updated = diesel::update(
                    kyc_records::table
                        .filter(kyc_records::user_id.eq(&user_id))
                        .filter(kyc_records::status.eq(KycStatus::Pending.as_str())),
                )
                .set((
                    kyc_records::status.eq(status.as_str()),
                    kyc_records::review_note.eq(note),
                    kyc_records::reviewed_at.eq(Some(Utc::now().naive_utc())),
                ))
                .returning(KycRecordDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?;
                let Some(updated) = updated else {
                    let exists = kyc_records::table
                        .find(&user_id)
                        .select(kyc_records::user_id)
                        .first::<String>(conn)
                        .optional()
                        .into_core()?
                        .is_some();
                    if !exists {
                        return Err(Error::Database(DatabaseError::NotFound(format!(
                            "KYC record for user {}",
                            user_id
                        ))));
                    }
                    return Err(Error::ConstraintViolation(format!(
                        "KYC for user {} is not pending review",
                        user_id
                    )));
                };
                set_user_kyc_status(conn, &user_id, status)?;
                Ok(KycRecord::from(updated))
            })
            .await
    }
}

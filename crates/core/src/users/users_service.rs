use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;

use super::users_model::{
    normalize_email, KycRecord, KycStatus, KycSubmission, NewUser, ProfileUpdate, User,
    UserCredentials, UserRole,
};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result};

/// Service for registration, profiles and KYC
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    admin_emails: HashSet<String>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self {
            repository,
            admin_emails: HashSet::new(),
        }
    }

    /// Emails that are registered with the `ADMIN` role.
    pub fn with_admin_emails<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.admin_emails = emails
            .into_iter()
            .map(|e| normalize_email(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        self
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, mut new_user: NewUser) -> Result<User> {
        new_user.email = normalize_email(&new_user.email);
        new_user.full_name = new_user.full_name.trim().to_string();
        new_user.validate()?;

        if self.repository.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "An account with email {} already exists",
                new_user.email
            )));
        }
        if self.admin_emails.contains(&new_user.email) {
            new_user.role = UserRole::Admin;
        }

        let user = self.repository.create(new_user).await?;
        info!("Registered user {} as {}", user.id, user.role.as_str());
        Ok(user)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_by_id(user_id).map_err(|e| {
            if e.is_not_found() {
                Error::NotFound(format!("User {}", user_id))
            } else {
                e
            }
        })
    }

    fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        self.repository.get_credentials(&normalize_email(email))
    }

    async fn update_profile(&self, user_id: &str, mut update: ProfileUpdate) -> Result<User> {
        update.full_name = update.full_name.trim().to_string();
        if update.full_name.is_empty() {
            return Err(Error::invalid_input("Full name cannot be empty"));
        }
        self.get_user(user_id)?;
        self.repository.update_profile(user_id, update).await
    }

    fn get_kyc(&self, user_id: &str) -> Result<Option<KycRecord>> {
        self.repository.get_kyc(user_id)
    }

    async fn submit_kyc(&self, user_id: &str, mut submission: KycSubmission) -> Result<KycRecord> {
        submission.document_type = submission.document_type.trim().to_string();
        submission.document_number = submission.document_number.trim().to_string();
        submission.validate(Utc::now().date_naive())?;
        let user = self.get_user(user_id)?;
        if !user.kyc_status.accepts_submission() {
            return Err(Error::ConstraintViolation(format!(
                "KYC cannot be submitted while status is {}",
                user.kyc_status.as_str()
            )));
        }
        debug!("KYC submitted for user {}", user_id);
        self.repository.save_kyc_submission(user_id, submission).await
    }

    async fn review_kyc(
        &self,
        reviewer_id: &str,
        user_id: &str,
        approve: bool,
        note: Option<String>,
    ) -> Result<KycRecord> {
        self.require_admin(reviewer_id)?;
        let user = self.get_user(user_id)?;
        if user.kyc_status != KycStatus::Pending {
            return Err(Error::ConstraintViolation(format!(
                "Only pending KYC can be reviewed, status is {}",
                user.kyc_status.as_str()
            )));
        }
        let status = if approve {
            KycStatus::Approved
        } else {
            KycStatus::Rejected
        };
        let record = self.repository.set_kyc_status(user_id, status, note).await?;
        info!(
            "KYC for user {} marked {} by {}",
            user_id,
            status.as_str(),
            reviewer_id
        );
        Ok(record)
    }

    fn require_admin(&self, user_id: &str) -> Result<User> {
        let user = self.get_user(user_id)?;
        if !user.is_admin() {
            return Err(Error::PermissionDenied(
                "Administrator role required".to_string(),
            ));
        }
        Ok(user)
    }
}

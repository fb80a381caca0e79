use crate::errors::Result;
use crate::users::users_model::{
    KycRecord, KycStatus, KycSubmission, NewUser, ProfileUpdate, User, UserCredentials,
};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
    fn get_kyc(&self, user_id: &str) -> Result<Option<KycRecord>>;
    /// Stores the dossier and moves the user to `PENDING` in one transaction.
    /// `ConstraintViolation` unless the stored status still accepts a submission.
    async fn save_kyc_submission(
        &self,
        user_id: &str,
        submission: KycSubmission,
    ) -> Result<KycRecord>;
    /// Records a review outcome on both the dossier and the user.
    /// `ConstraintViolation` unless the dossier is still `PENDING`.
    async fn set_kyc_status(
        &self,
        user_id: &str,
        status: KycStatus,
        note: Option<String>,
    ) -> Result<KycRecord>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, new_user: NewUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_credentials(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User>;
    fn get_kyc(&self, user_id: &str) -> Result<Option<KycRecord>>;
    async fn submit_kyc(&self, user_id: &str, submission: KycSubmission) -> Result<KycRecord>;
    async fn review_kyc(
        &self,
        reviewer_id: &str,
        user_id: &str,
        approve: bool,
        note: Option<String>,
    ) -> Result<KycRecord>;
    /// Loads the user and fails unless it is an admin.
    fn require_admin(&self, user_id: &str) -> Result<User>;
}

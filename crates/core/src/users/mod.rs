//! Users module - registration, profiles and KYC verification.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{
    normalize_email, validate_email, validate_password, KycRecord, KycReview, KycStatus,
    KycSubmission, NewUser, ProfileUpdate, User, UserCredentials, UserRole,
};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};

pub use super::application::Entity as Application;
pub use super::company::Entity as Company;
pub use super::job::Entity as Job;
pub use super::job_category::Entity as JobCategory;
pub use super::password_reset_token::Entity as PasswordResetToken;
pub use super::pending_signup::Entity as PendingSignup;
pub use super::user::Entity as User;

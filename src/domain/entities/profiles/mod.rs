pub mod user_profile;
pub mod auth_link;
pub mod email_record;

pub use user_profile::UserProfile;
pub use auth_link::AuthLink;
pub use email_record::EmailRecord;

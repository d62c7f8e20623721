pub mod profile_repo;
pub mod auth_link_repo;
pub mod email_repo;

pub use profile_repo::ProfileRepository;
pub use auth_link_repo::AuthLinkRepository;
pub use email_repo::EmailRepository;

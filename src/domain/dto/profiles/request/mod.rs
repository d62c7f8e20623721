pub mod update_profile_request;

pub use update_profile_request::UpdateProfileRequest;

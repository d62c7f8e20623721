pub mod profile_patch;
pub mod photo_target;
pub mod updated_profile;

pub use profile_patch::ProfilePatch;
pub use photo_target::PhotoTarget;
pub use updated_profile::UpdatedProfile;

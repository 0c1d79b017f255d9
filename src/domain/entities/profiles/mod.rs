//! Profiles Entity Module

pub mod profile;

pub use profile::{Education, Experience, FieldChange, Profile, ProfileChanges, SocialLinkChanges, SocialLinks};

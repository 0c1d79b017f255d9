pub mod token;

pub use token::{ClaimUser, TokenClaims};

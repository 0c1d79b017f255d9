//! # Post Data Transfer Objects

pub mod request;
pub mod response;

pub use request::{CommentPath, CommentRequest, CreatePostRequest};
pub use response::{CommentResponse, PostResponse};

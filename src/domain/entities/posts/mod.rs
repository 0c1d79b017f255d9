//! Posts Entity Module

pub mod post;

pub use post::{Comment, Post};

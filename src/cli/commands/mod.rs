//! Command implementations

pub mod init;
pub mod patterns;
pub mod prepare;
pub mod validate;

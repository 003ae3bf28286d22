//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64, constant-time compare)
//! - Password hashing (Argon2id with optional pepper)
//! - Signed bearer tokens (HS256 compact JWT)
//! - Admin shared-key middleware

pub mod admin_key;
pub mod crypto;
pub mod password;
pub mod token;

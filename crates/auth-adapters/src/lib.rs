//! # auth-adapters
//!
//! Implementations of `AccessTokenVerifier`. Issuing tokens and hashing
//! passwords belong to the identity service that mints the tokens, not here.

#[cfg(feature = "auth-jwt")]
pub mod jwt;

#[cfg(feature = "auth-jwt")]
pub use jwt::{AccessClaims, JwtAccessTokenVerifier};

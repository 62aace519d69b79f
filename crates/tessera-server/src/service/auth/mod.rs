//! Token-based authentication.

mod authenticator;
mod password;

pub use authenticator::{AuthError, IssuedCredential, TokenAuthenticator};
pub use password::PasswordHasher;

//! Shared constants for portal test setup.
//!
//! These values are placeholders used across tests; none of them are real
//! credentials.

/// JWT signing secret for test tokens.
///
/// Integration tests build their `AppState` with this secret so tokens issued
/// by the auth service during a test can be validated within the same test.
pub static TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Plaintext password behind every fixture user.
///
/// [`insert_user`](crate::fixtures::portal::PortalFixtures::insert_user)
/// stores the bcrypt hash of this value, so login tests can authenticate any
/// fixture account with it.
pub static TEST_PASSWORD: &str = "Password123!";

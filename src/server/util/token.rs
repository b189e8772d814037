use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{Rng, RngCore};

/// Length of one-time passwords sent during email verification.
const OTP_LENGTH: usize = 6;

/// Generates a one-time password of [`OTP_LENGTH`] ASCII digits.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();

    (0..OTP_LENGTH)
        .map(|_| rng.random_range(0..10).to_string())
        .collect()
}

/// Generates the opaque ID identifying a pending signup.
pub fn generate_signup_id() -> String {
    random_token(24)
}

/// Generates a password reset token.
pub fn generate_reset_token() -> String {
    random_token(32)
}

/// URL-safe base64 of `len` random bytes.
fn random_token(len: usize) -> String {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);

    URL_SAFE_NO_PAD.encode(buf)
}

//! Wallet generation for scaffolded projects.
//! Password generation happens here; the keystore file itself (encryption,
//! key derivation) is delegated to the eth-keystore primitive.

use std::path::Path;

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

use crate::error::{Error, Result};

const PASSWORD_LENGTH: usize = 20;

/// A generated keystore file plus the credentials that protect it.
///
/// Created only when wallet generation is requested, written once per run
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProjectWallet {
    /// File name of the keystore inside the wallet directory
    pub wallet_name: String,
    /// Plaintext password protecting the keystore
    pub password: String,
    /// Name of the sibling file the password is written to
    pub password_file_name: String,
}

/// Produces a random password meeting the minimum-strength policy:
/// at least one lowercase letter, one uppercase letter and one digit.
pub fn generate_wallet_password() -> String {
    loop {
        let candidate: String = (&mut OsRng)
            .sample_iter(Alphanumeric)
            .take(PASSWORD_LENGTH)
            .map(char::from)
            .collect();
        if meets_strength_policy(&candidate) {
            return candidate;
        }
    }
}

fn meets_strength_policy(password: &str) -> bool {
    password.len() >= 16
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Creates a password-protected keystore file inside `wallet_dir`.
///
/// Any failure of the keystore primitive is fatal; there is no
/// partial-wallet recovery.
pub fn generate_wallet(wallet_dir: &Path) -> Result<ProjectWallet> {
    let password = generate_wallet_password();
    let (_secret, wallet_name) =
        eth_keystore::new(wallet_dir, &mut OsRng, password.as_bytes(), None)
            .map_err(|e| Error::Crypto(e.to_string()))?;
    let password_file_name = format!("{}.password", wallet_name);

    Ok(ProjectWallet { wallet_name, password, password_file_name })
}

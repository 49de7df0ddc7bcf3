//! Credential cipher for the login payload.
//!
//! The API requires the user's email, password, and date of birth to be
//! encrypted with a key derived from the account's shared encryption key:
//! PBKDF2-HMAC-SHA1 over the secret with a fixed 16-byte salt and 1000
//! rounds produces 48 bytes of key material, split into a 16-byte IV and a
//! 32-byte AES-256 key; the plaintext is then AES-256-CBC encrypted with
//! PKCS#7 padding and base64 encoded.
//!
//! The salt and IV are fixed, so identical `(secret, plaintext)` pairs
//! always produce identical ciphertext. The server derives the same key
//! from the shared secret to decrypt.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

use crate::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Fixed PBKDF2 salt; the server uses the same bytes.
const KDF_SALT: [u8; 16] = [
    83, 71, 26, 58, 54, 35, 22, 11, 83, 71, 26, 58, 54, 35, 22, 11,
];

const KDF_ROUNDS: u32 = 1000;

/// Encrypt a credential field for transmission.
///
/// # Errors
///
/// Returns [`Error::Cipher`] if the derived key material cannot be used to
/// initialize the cipher.
///
/// # Example
///
/// ```
/// use fivepaisa_rs::auth::cipher;
///
/// let ciphertext = cipher::encrypt("shared-secret", "user@example.com").unwrap();
/// // Deterministic: the server derives the same key from the shared secret.
/// assert_eq!(ciphertext, cipher::encrypt("shared-secret", "user@example.com").unwrap());
/// ```
pub fn encrypt(secret: &str, plaintext: &str) -> Result<String> {
    let mut material = [0u8; 48];
    pbkdf2_hmac::<Sha1>(secret.as_bytes(), &KDF_SALT, KDF_ROUNDS, &mut material);
    let (iv, key) = material.split_at(16);

    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| Error::Cipher(format!("key setup failed: {e}")))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(BASE64.encode(ciphertext))
}

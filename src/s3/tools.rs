use base64ct::{Base64, Encoding};
use ring::{digest, hmac};
use std::fmt::Write;

#[must_use]
pub fn sha256_digest(input: impl AsRef<[u8]>) -> digest::Digest {
    digest::digest(&digest::SHA256, input.as_ref())
}

/// Hex encoded SHA-256, the form `SigV4` wants for payloads and requests
#[must_use]
pub fn sha256_digest_string(input: impl AsRef<[u8]>) -> String {
    write_hex_bytes(sha256_digest(input).as_ref())
}

#[must_use]
pub fn base64_md5(input: impl AsRef<[u8]>) -> String {
    let md5_digest = md5::compute(input);
    Base64::encode_string(md5_digest.as_ref())
}

#[must_use]
pub fn sha256_hmac(key: &[u8], msg: &[u8]) -> hmac::Tag {
    let s_key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&s_key, msg)
}

#[must_use]
pub fn write_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, byte| {
            // writing into a String can't fail
            let _ = write!(s, "{byte:02x}");
            s
        })
}

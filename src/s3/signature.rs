//!  S3 signature v4
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html>

use crate::s3::S3;
use crate::s3::tools::{sha256_digest_string, sha256_hmac, write_hex_bytes};
use chrono::{DateTime, Utc};
use http::Method;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use ring::hmac;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug)]
pub struct Signature<'a> {
    // S3
    auth: &'a S3,
    // service name used in the credential scope
    service: &'a str,
    // The HTTPRequestMethod
    http_method: Method,
    // The HTTP request headers
    headers: BTreeMap<String, String>,
    // current date & time
    datetime: DateTime<Utc>,
}

impl<'a> Signature<'a> {
    #[must_use]
    pub fn new(s3: &'a S3, service: &'a str, method: Method) -> Self {
        Self {
            auth: s3,
            service,
            http_method: method,
            headers: BTreeMap::new(),
            datetime: Utc::now(),
        }
    }

    /// Sign as if the request was made at `datetime`
    #[must_use]
    pub fn at(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = datetime;
        self
    }

    /// Need the the HexEncode(Hash(RequestPayload))
    pub fn sign(
        &mut self,
        url: &Url,
        digest: &str,
        digest_b64_md5: Option<&str>,
        length: Option<usize>,
        custom_headers: Option<BTreeMap<&str, &str>>,
    ) -> BTreeMap<String, String> {
        let current_date = self.datetime.format("%Y%m%d").to_string();
        let current_datetime = self.datetime.format("%Y%m%dT%H%M%SZ").to_string();

        self.add_header("host", &host(url));
        self.add_header("x-amz-date", &current_datetime);
        self.add_header("x-amz-content-sha256", digest);

        if let Some(length) = length {
            self.add_header("content-length", &length.to_string());
        }

        if let Some(md5) = digest_b64_md5 {
            self.add_header("content-md5", md5);
        }

        if let Some(custom_headers) = custom_headers {
            for (k, v) in custom_headers {
                self.add_header(k, v);
            }
        }

        let signed_headers = signed_headers(&self.headers);

        // https://docs.aws.amazon.com/general/latest/gr/sigv4_signing.html
        // 1. Create a canonical request for Signature Version 4
        //
        //     CanonicalRequest =
        //         HTTPRequestMethod + '\n' +
        //         CanonicalURI + '\n' +
        //         CanonicalQueryString + '\n' +
        //         CanonicalHeaders + '\n' +
        //         SignedHeaders + '\n' +
        //         HexEncode(Hash(RequestPayload))
        let canonical_request = format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.http_method,
            canonical_uri(url),
            canonical_query_string(url),
            canonical_headers(&self.headers),
            signed_headers,
            digest
        );

        log::debug!("canonical request:\n{canonical_request}");

        // 2. Create a string to sign for Signature Version 4
        //
        //     StringToSign =
        //         Algorithm + \n +
        //         RequestDateTime + \n +
        //         CredentialScope + \n +
        //         HashedCanonicalRequest
        let scope = format!(
            "{}/{}/{}/aws4_request",
            current_date,
            self.auth.region().name(),
            self.service
        );
        let string_to_sign = string_to_sign(
            &current_datetime,
            &scope,
            &sha256_digest_string(&canonical_request),
        );

        // 3. Calculate the signature for AWS Signature Version 4
        let signing_key = signature_key(
            self.auth.credentials().expose_secret(),
            &current_date,
            self.auth.region().name(),
            self.service,
        );
        let signature = sha256_hmac(signing_key.as_ref(), string_to_sign.as_bytes());

        // 4. Add the signature to the HTTP request
        let authorization_header = format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            self.auth.credentials().aws_access_key_id(),
            scope,
            signed_headers,
            write_hex_bytes(signature.as_ref())
        );
        self.add_header("authorization", &authorization_header);

        self.headers.clone()
    }

    pub fn add_header(&mut self, key: &str, value: &str) {
        self.headers
            .insert(key.to_ascii_lowercase(), value.trim().to_string());
    }
}

// host[:port], the port only when it is not the scheme default
fn host(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    url.port()
        .map_or_else(|| host.to_string(), |port| format!("{host}:{port}"))
}

// CanonicalURI is the URI-encoded version of the absolute path component of the URI, `Url`
// keeps the path already encoded so it is decoded first to avoid encoding twice.
// URI encode every byte except the unreserved characters:
// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
#[must_use]
pub fn canonical_uri(uri: &Url) -> String {
    const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'/')
        .remove(b'-')
        .remove(b'.')
        .remove(b'_')
        .remove(b'~');
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();
    utf8_percent_encode(&path, FRAGMENT).to_string()
}

// CanonicalQueryString specifies the URI-encoded query string parameters. You URI-encode name and
// values individually. You must also sort the parameters in the canonical query string
// alphabetically by key name. The sorting occurs after encoding.
#[must_use]
pub fn canonical_query_string(uri: &Url) -> String {
    const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'.')
        .remove(b'_')
        .remove(b'~');
    let mut pairs = uri
        .query_pairs()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(&key, FRAGMENT),
                utf8_percent_encode(&value, FRAGMENT)
            )
        })
        .collect::<Vec<String>>();
    pairs.sort();
    pairs.join("&")
}

fn canonical_headers(headers: &BTreeMap<String, String>) -> String {
    headers
        .iter()
        .map(|(key, value)| format!("{key}:{value}\n"))
        .collect::<Vec<String>>()
        .concat()
}

// Create a string to sign for Signature Version 4
// https://docs.aws.amazon.com/general/latest/gr/sigv4-create-string-to-sign.html
#[must_use]
pub fn string_to_sign(timestamp: &str, scope: &str, hashed_canonical_request: &str) -> String {
    format!("AWS4-HMAC-SHA256\n{timestamp}\n{scope}\n{hashed_canonical_request}")
}

fn signed_headers(headers: &BTreeMap<String, String>) -> String {
    headers.keys().map(String::as_str).collect::<Vec<&str>>().join(";")
}

fn signature_key(secret_access_key: &str, date: &str, region: &str, service: &str) -> hmac::Tag {
    let k_date = sha256_hmac(
        format!("AWS4{secret_access_key}").as_bytes(),
        date.as_bytes(),
    );
    let k_region = sha256_hmac(k_date.as_ref(), region.as_bytes());
    let k_service = sha256_hmac(k_region.as_ref(), service.as_bytes());
    sha256_hmac(k_service.as_ref(), b"aws4_request")
}

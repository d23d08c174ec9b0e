use crate::domain::key_pair::{KeyIdentifier, KeyPairRecord};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use openssl::asn1::{Asn1Time, Asn1TimeRef};
use openssl::x509::{X509NameRef, X509};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

fn key_file_error(path: &Path, reason: impl Display) -> AppError {
    AppError::KeyFile {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Reads the PEM certificate at `public_file` into a key pair record.
pub fn load_key_pair(public_file: &Path, have_private_key: bool) -> Result<KeyPairRecord, AppError> {
    let pem = fs::read(public_file).map_err(|e| AppError::Io {
        path: public_file.to_path_buf(),
        source: e,
    })?;
    parse_key_pair(&pem, public_file, have_private_key)
}

pub fn parse_key_pair(
    pem: &[u8],
    public_file: &Path,
    have_private_key: bool,
) -> Result<KeyPairRecord, AppError> {
    let cert = X509::from_pem(pem)
        .map_err(|e| key_file_error(public_file, format!("not a PEM x509 certificate ({})", e)))?;

    let serial = cert
        .serial_number()
        .to_bn()
        .map_err(|e| key_file_error(public_file, e))?;

    Ok(KeyPairRecord::new(
        KeyIdentifier::from_signed_serial_bytes(serial.is_negative(), &serial.to_vec()),
        subject_attributes(cert.subject_name()),
        have_private_key,
        asn1_to_utc(cert.not_before(), public_file)?,
        asn1_to_utc(cert.not_after(), public_file)?,
        public_file.to_path_buf(),
    ))
}

fn subject_attributes(name: &X509NameRef) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for entry in name.entries() {
        let key = entry
            .object()
            .nid()
            .short_name()
            .map(str::to_string)
            .unwrap_or_else(|_| entry.object().to_string());
        let value = String::from_utf8_lossy(entry.data().as_slice()).into_owned();
        attributes.insert(key, value);
    }
    attributes
}

fn asn1_to_utc(time: &Asn1TimeRef, public_file: &Path) -> Result<DateTime<Utc>, AppError> {
    let epoch = Asn1Time::from_unix(0).map_err(|e| key_file_error(public_file, e))?;
    let diff = epoch
        .diff(time)
        .map_err(|e| key_file_error(public_file, e))?;
    let seconds = i64::from(diff.days) * 86_400 + i64::from(diff.secs);
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| key_file_error(public_file, format!("validity time {} out of range", time)))
}

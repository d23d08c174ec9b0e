use crate::error::AppError;
use chrono::{DateTime, Utc};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Certificate serial number rendered as colon-separated hex octets.
///
/// Compared and hashed as an opaque token; no numeric meaning is attached.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Formats big-endian serial bytes as `0a:1b:2c`. An empty slice is the
    /// zero serial.
    pub fn from_serial_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self("00".to_string());
        }
        let octets: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(octets.join(":"))
    }

    /// Same as [`Self::from_serial_bytes`], with a leading `-` for a negative
    /// serial so it never collides with its positive counterpart.
    pub fn from_signed_serial_bytes(negative: bool, bytes: &[u8]) -> Self {
        let magnitude = Self::from_serial_bytes(bytes);
        if negative {
            Self(format!("-{}", magnitude.0))
        } else {
            magnitude
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPairRecord {
    id: KeyIdentifier,
    subject: BTreeMap<String, String>,
    have_private_key: bool,
    not_before: DateTime<Utc>,
    not_after: DateTime<Utc>,
    public_key_file: PathBuf,
}

impl KeyPairRecord {
    pub fn new(
        id: KeyIdentifier,
        subject: BTreeMap<String, String>,
        have_private_key: bool,
        not_before: DateTime<Utc>,
        not_after: DateTime<Utc>,
        public_key_file: PathBuf,
    ) -> Self {
        Self {
            id,
            subject,
            have_private_key,
            not_before,
            not_after,
            public_key_file,
        }
    }

    pub fn id(&self) -> &KeyIdentifier {
        &self.id
    }

    pub fn subject(&self) -> &BTreeMap<String, String> {
        &self.subject
    }

    pub fn have_private_key(&self) -> bool {
        self.have_private_key
    }

    pub fn not_before(&self) -> DateTime<Utc> {
        self.not_before
    }

    pub fn not_after(&self) -> DateTime<Utc> {
        self.not_after
    }

    pub fn public_key_file(&self) -> &Path {
        &self.public_key_file
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.not_after < now
    }
}

/// Key pairs read from one directory, keyed by serial number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStore {
    pairs: BTreeMap<KeyIdentifier, KeyPairRecord>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. A serial number may only appear once per store.
    pub fn insert(&mut self, pair: KeyPairRecord) -> Result<(), AppError> {
        match self.pairs.entry(pair.id.clone()) {
            btree_map::Entry::Occupied(_) => Err(AppError::DuplicateKey {
                id: pair.id,
                path: pair.public_key_file,
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(pair);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &KeyIdentifier) -> Option<&KeyPairRecord> {
        self.pairs.get(id)
    }

    pub fn contains(&self, id: &KeyIdentifier) -> bool {
        self.pairs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Records in ascending serial-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyIdentifier, &KeyPairRecord)> {
        self.pairs.iter()
    }
}

use crate::domain::key_pair::KeyPairRecord;

/// A key pair annotated with whether the runtime's trusted-key directory
/// holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledEntry {
    pub pair: KeyPairRecord,
    pub trusted: bool,
}

impl ReconciledEntry {
    pub fn new(pair: KeyPairRecord, trusted: bool) -> Self {
        Self { pair, trusted }
    }
}

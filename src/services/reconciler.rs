use crate::domain::key_pair::{KeyIdentifier, KeyStore};
use crate::domain::trust::ReconciledEntry;
use std::collections::HashSet;

/// Merges the developer's key pairs with the runtime's trusted key pairs.
///
/// Every developer pair yields one entry, trusted when the trusted store
/// holds the same serial number. Trusted pairs the developer does not hold
/// follow, all marked trusted. Each serial number appears exactly once, and
/// within each group entries are ordered by serial number.
pub fn reconcile(developer: &KeyStore, trusted: &KeyStore) -> Vec<ReconciledEntry> {
    let mut entries = Vec::with_capacity(developer.len() + trusted.len());
    let mut matched: HashSet<&KeyIdentifier> = HashSet::new();

    for (id, pair) in developer.iter() {
        let is_trusted = trusted.contains(id);
        if is_trusted {
            matched.insert(id);
        }
        entries.push(ReconciledEntry::new(pair.clone(), is_trusted));
    }

    for (id, pair) in trusted.iter() {
        if !matched.contains(id) {
            entries.push(ReconciledEntry::new(pair.clone(), true));
        }
    }

    entries
}

pub mod key_pair;
pub mod trust;

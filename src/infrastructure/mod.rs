pub mod crypto;
pub mod key_store_reader;

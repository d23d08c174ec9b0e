use std::path::{Path, PathBuf};

pub const PUBLIC_KEY_SUFFIX: &str = "-public.pem";
pub const PRIVATE_KEY_SUFFIX: &str = "-private.key";

/// Returns the key pair stem of a `<stem>-public.pem` file name.
pub fn public_key_stem(path: &Path) -> Option<&str> {
    let file_name = path.file_name().and_then(|s| s.to_str())?;
    file_name
        .strip_suffix(PUBLIC_KEY_SUFFIX)
        .filter(|stem| !stem.is_empty())
}

/// Path where the private half of the pair `stem` lives in `dir`.
pub fn private_key_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}{}", stem, PRIVATE_KEY_SUFFIX))
}

pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

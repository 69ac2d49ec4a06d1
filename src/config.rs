// src/config.rs

/// Feedbin account credentials plus run options, built once in `main` and
/// passed by reference everywhere authenticated access is needed.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub base_url: String,
    /// When set, removals are decided and logged but no DELETE is issued.
    pub dry_run: bool,
}

impl Credentials {
    pub fn new(username: String, password: String, base_url: String, dry_run: bool) -> Self {
        Self {
            username,
            password,
            base_url,
            dry_run,
        }
    }
}

use anyhow::{Context, Result};

/// bcrypt cost factor applied to every stored password
pub const PASSWORD_HASH_COST: u32 = 8;

/// Hashes a plaintext password with a fresh random salt
///
/// bcrypt is CPU bound, so the work runs on tokio's blocking pool rather
/// than on an async worker. Hashing the same input twice yields two
/// different hashes, both of which verify against the original plaintext.
pub async fn hash_password(plain: String) -> Result<String> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(plain, PASSWORD_HASH_COST))
        .await
        .context("password hashing task failed")?
        .context("hashing password")?;
    Ok(hash)
}

//! Filesystem ownership lookup, the last-resort responsible party.

use std::io;
use std::path::Path;

/// Resolves the owning user of a path.
///
/// Abstracted so the problem detector can be tested without depending on
/// the host's user database, and substituted per target platform.
pub trait OwnerLookup {
    fn owner_of(&self, path: &Path) -> io::Result<String>;
}

/// Owner lookup backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOwner;

#[cfg(unix)]
impl OwnerLookup for FsOwner {
    fn owner_of(&self, path: &Path) -> io::Result<String> {
        use std::os::unix::fs::MetadataExt;
        let uid = std::fs::metadata(path)?.uid();
        Ok(user_name(uid).unwrap_or_else(|| format!("uid:{}", uid)))
    }
}

#[cfg(not(unix))]
impl OwnerLookup for FsOwner {
    fn owner_of(&self, _path: &Path) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "filesystem owner lookup is only supported on Unix",
        ))
    }
}

/// Resolve a uid to a user name via the passwd database.
#[cfg(unix)]
fn user_name(uid: u32) -> Option<String> {
    let passwd = std::fs::read_to_string("/etc/passwd").ok()?;
    for line in passwd.lines() {
        let mut fields = line.split(':');
        let (Some(name), Some(_), Some(uid_field)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if uid_field.parse() == Ok(uid) {
            return Some(name.to_string());
        }
    }
    None
}

// crates/infra/src/metadata.rs
//! Listing metadata for a single file.
//!
//! `lstat` is used so a file swapped for a symlink between the walk and the
//! stat is never followed.

use std::{collections::HashMap, io, path::Path};

use chrono::{DateTime, Local};
use pdf_sizes_ports::filesystem::ScannedFile;

/// Memoised uid/gid → name lookups for one scan.
#[derive(Debug, Default)]
pub struct OwnerNames {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl OwnerNames {
    pub fn user(&mut self, uid: u32) -> String {
        self.users.entry(uid).or_insert_with(|| lookup_user(uid)).clone()
    }

    pub fn group(&mut self, gid: u32) -> String {
        self.groups.entry(gid).or_insert_with(|| lookup_group(gid)).clone()
    }
}

pub fn stat_file(path: &Path, owners: &mut OwnerNames) -> io::Result<ScannedFile> {
    let metadata = std::fs::symlink_metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no longer a regular file"));
    }

    let mtime = metadata.modified().ok().map(DateTime::<Local>::from);
    let listing = listing_fields(&metadata, owners);
    Ok(ScannedFile {
        path: path.to_path_buf(),
        size: metadata.len(),
        mode: listing.mode,
        links: listing.links,
        owner: listing.owner,
        group: listing.group,
        mtime,
    })
}

struct ListingFields {
    mode: u32,
    links: u64,
    owner: String,
    group: String,
}

#[cfg(unix)]
fn listing_fields(metadata: &std::fs::Metadata, owners: &mut OwnerNames) -> ListingFields {
    use std::os::unix::fs::MetadataExt;

    ListingFields {
        mode: metadata.mode(),
        links: metadata.nlink(),
        owner: owners.user(metadata.uid()),
        group: owners.group(metadata.gid()),
    }
}

#[cfg(not(unix))]
fn listing_fields(metadata: &std::fs::Metadata, _owners: &mut OwnerNames) -> ListingFields {
    let permissions = if metadata.permissions().readonly() { 0o444 } else { 0o644 };
    ListingFields {
        mode: 0o100_000 | permissions,
        links: 1,
        owner: "-".to_string(),
        group: "-".to_string(),
    }
}

// Unknown ids fall back to the number, as `ls` does.
#[cfg(unix)]
fn lookup_user(uid: u32) -> String {
    use nix::unistd::{Uid, User};

    match User::from_uid(Uid::from_raw(uid)) {
        Ok(Some(user)) => user.name,
        _ => uid.to_string(),
    }
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> String {
    use nix::unistd::{Gid, Group};

    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(Some(group)) => group.name,
        _ => gid.to_string(),
    }
}

#[cfg(not(unix))]
fn lookup_user(uid: u32) -> String {
    uid.to_string()
}

#[cfg(not(unix))]
fn lookup_group(gid: u32) -> String {
    gid.to_string()
}

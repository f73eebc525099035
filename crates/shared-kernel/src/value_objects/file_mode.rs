// crates/shared-kernel/src/value_objects/file_mode.rs
use std::fmt;

use serde::{Deserialize, Serialize};

const S_IFMT: u32 = 0o170_000;
const S_IFSOCK: u32 = 0o140_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;
const S_IFBLK: u32 = 0o060_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFCHR: u32 = 0o020_000;
const S_IFIFO: u32 = 0o010_000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Raw `st_mode` bits of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileMode(u32);

impl FileMode {
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Mode of a regular file with the given permission bits.
    pub const fn regular(permissions: u32) -> Self {
        Self(S_IFREG | (permissions & 0o7777))
    }

    fn type_char(self) -> char {
        match self.0 & S_IFMT {
            S_IFREG => '-',
            S_IFDIR => 'd',
            S_IFLNK => 'l',
            S_IFCHR => 'c',
            S_IFBLK => 'b',
            S_IFIFO => 'p',
            S_IFSOCK => 's',
            _ => '?',
        }
    }

    /// Ten-character `ls -l` notation, e.g. `-rw-r--r--`.
    pub fn symbolic(self) -> String {
        let bits = self.0;
        let mut out = String::with_capacity(10);
        out.push(self.type_char());

        let triads = [(0o400, 0o200, 0o100, S_ISUID, 's'), (0o040, 0o020, 0o010, S_ISGID, 's'), (
            0o004, 0o002, 0o001, S_ISVTX, 't',
        )];
        for (r, w, x, special, mark) in triads {
            out.push(if bits & r != 0 { 'r' } else { '-' });
            out.push(if bits & w != 0 { 'w' } else { '-' });
            out.push(match (bits & x != 0, bits & special != 0) {
                (true, true) => mark,
                (false, true) => mark.to_ascii_uppercase(),
                (true, false) => 'x',
                (false, false) => '-',
            });
        }
        out
    }
}

impl From<u32> for FileMode {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.symbolic())
    }
}

//! On-disk layout of a vault directory.

use std::path::{Path, PathBuf};

use super::name::EntryName;

pub const SALT_FILE_NAME: &str = "salt";
pub const MASTER_FILE_NAME: &str = "master.hash";
pub const ENTRY_EXTENSION: &str = "hush";

/// Paths inside one vault root.
#[derive(Debug, Clone)]
pub struct VaultLayout {
    root: PathBuf,
}

impl VaultLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn salt_path(&self) -> PathBuf {
        self.root.join(SALT_FILE_NAME)
    }

    pub fn master_path(&self) -> PathBuf {
        self.root.join(MASTER_FILE_NAME)
    }

    pub fn entry_path(&self, name: &EntryName) -> PathBuf {
        self.root.join(format!("{}.{}", name.as_str(), ENTRY_EXTENSION))
    }

    /// Map a directory entry's file name back to an entry name, if it is one.
    pub fn entry_name_from_file(file_name: &str) -> Option<EntryName> {
        let stem = file_name.strip_suffix(&format!(".{}", ENTRY_EXTENSION))?;
        let name = EntryName::parse(stem).ok()?;
        (name.as_str() == stem).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_path() {
        let layout = VaultLayout::new("/tmp/vault");
        let name = EntryName::parse("github").unwrap();
        assert_eq!(
            layout.entry_path(&name),
            PathBuf::from("/tmp/vault/github.hush")
        );
        assert_eq!(layout.salt_path(), PathBuf::from("/tmp/vault/salt"));
        assert_eq!(
            layout.master_path(),
            PathBuf::from("/tmp/vault/master.hash")
        );
    }

    #[test]
    fn test_entry_name_from_file() {
        assert_eq!(
            VaultLayout::entry_name_from_file("bank.hush").map(|n| n.to_string()),
            Some("bank".to_string())
        );
        assert!(VaultLayout::entry_name_from_file("salt").is_none());
        assert!(VaultLayout::entry_name_from_file("master.hash").is_none());
        assert!(VaultLayout::entry_name_from_file("bank.hush.tmp").is_none());
        assert!(VaultLayout::entry_name_from_file(".hush").is_none());
        assert!(VaultLayout::entry_name_from_file(" bank.hush").is_none());
    }
}

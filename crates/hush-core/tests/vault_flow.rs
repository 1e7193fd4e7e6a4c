use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use hush_core::{EntryStore, FileVault, HushError};
use secrecy::ExposeSecret;

const MASTER: &str = "strongMasterPassword123!";

struct TempVault {
    path: PathBuf,
}

impl TempVault {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let dirname = format!("{}_{}_{}", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(dirname).join(".hush");
        Self { path }
    }

    fn vault(&self) -> FileVault {
        FileVault::new(&self.path)
    }
}

impl Drop for TempVault {
    fn drop(&mut self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }
}

#[test]
fn test_end_to_end_scenario() {
    let temp = TempVault::new("hush_end_to_end");
    let vault = temp.vault();

    vault.init(MASTER).expect("init should succeed");
    vault
        .put("testname", "testPassword123!", MASTER)
        .expect("put should succeed");

    let value = vault.get("testname", MASTER).expect("get should succeed");
    assert_eq!(value.expose_secret(), "testPassword123!");

    let result = vault.get("testname", "wrongMasterPassword123!");
    assert!(matches!(result, Err(HushError::IncorrectMasterPassword)));

    vault
        .remove("testname", MASTER)
        .expect("remove should succeed");
    let result = vault.get("testname", MASTER);
    assert!(matches!(result, Err(HushError::EntryNotFound(_))));
}

#[test]
fn test_implode_leaves_no_trace() {
    let temp = TempVault::new("hush_implode");
    let vault = temp.vault();

    vault.init(MASTER).expect("init should succeed");
    vault
        .put("testname", "testPassword123!", MASTER)
        .expect("put should succeed");

    vault.implode(MASTER).expect("implode should succeed");
    assert!(!temp.path.exists());
    assert!(!vault.is_initialized());

    assert!(matches!(
        vault.get("testname", MASTER),
        Err(HushError::NotInitialized)
    ));
    assert!(matches!(
        vault.put("testname", "testPassword123!", MASTER),
        Err(HushError::NotInitialized)
    ));
}

#[test]
fn test_vault_reopens_from_disk() {
    let temp = TempVault::new("hush_reopen");
    temp.vault().init(MASTER).expect("init should succeed");
    temp.vault()
        .put("mail.example", "Secret42", MASTER)
        .expect("put should succeed");

    let reopened = temp.vault();
    assert!(reopened.is_initialized());
    assert_eq!(
        reopened.list().expect("list should succeed"),
        vec!["mail.example".to_string()]
    );
    let value = reopened
        .get(" mail.example ", MASTER)
        .expect("get should succeed");
    assert_eq!(value.expose_secret(), "Secret42");
}

#[test]
fn test_entries_do_not_contain_plaintext() {
    let temp = TempVault::new("hush_no_plaintext");
    let vault = temp.vault();
    vault.init(MASTER).expect("init should succeed");
    vault
        .put("marker", "PLAINTEXT_MARKER_123x", MASTER)
        .expect("put should succeed");

    for file_name in ["salt", "master.hash", "marker.hush"] {
        let on_disk = fs::read_to_string(temp.path.join(file_name)).expect("read should succeed");
        assert!(!on_disk.contains("PLAINTEXT_MARKER_123x"));
        assert!(!on_disk.contains(MASTER));
    }
}

#[test]
fn test_path_traversal_names_never_touch_disk() {
    let temp = TempVault::new("hush_traversal");
    let vault = temp.vault();
    vault.init(MASTER).expect("init should succeed");

    for name in ["../escape", "a/b", ".hidden", "", "  "] {
        let result = vault.put(name, "testPassword123!", MASTER);
        assert!(matches!(result, Err(HushError::InvalidName(_))), "{name:?}");
    }

    let parent = temp.path.parent().expect("vault should have a parent");
    assert!(!parent.join("escape.hush").exists());
    assert!(vault.list().expect("list should succeed").is_empty());
}

#[test]
fn test_replaced_master_file_rejects_everything() {
    let temp = TempVault::new("hush_master_swap");
    let vault = temp.vault();
    vault.init(MASTER).expect("init should succeed");
    vault
        .put("testname", "testPassword123!", MASTER)
        .expect("put should succeed");

    fs::write(temp.path.join("master.hash"), "bm90IGEgYmxvYg==").expect("write should succeed");

    assert!(matches!(
        vault.get("testname", MASTER),
        Err(HushError::IncorrectMasterPassword)
    ));
}

#[test]
fn test_missing_salt_is_not_initialized() {
    let temp = TempVault::new("hush_missing_salt");
    let vault = temp.vault();
    vault.init(MASTER).expect("init should succeed");

    fs::remove_file(temp.path.join("salt")).expect("remove should succeed");

    assert!(!vault.is_initialized());
    assert!(matches!(vault.list(), Err(HushError::NotInitialized)));
}

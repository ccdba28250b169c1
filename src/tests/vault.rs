use super::{suggest_paths, template_choices, vault_path, DocumentStore, FsVault, MemoryVault};
use std::fs;
use tempfile::TempDir;

fn sample_vault() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Daily")).unwrap();
    fs::create_dir_all(dir.path().join(".obsidian")).unwrap();
    fs::write(dir.path().join("Daily/2024-05-02.md"), "# Daily\nworked out").unwrap();
    fs::write(dir.path().join("Daily/2024-05-01.md"), "# Daily\nslept well").unwrap();
    fs::write(dir.path().join("index.md"), "# Index").unwrap();
    fs::write(dir.path().join("notes.txt"), "# Not a note").unwrap();
    fs::write(dir.path().join(".obsidian/hidden.md"), "# Hidden").unwrap();
    dir
}

#[test]
fn test_vault_path_normalisation() {
    assert_eq!(vault_path("Daily/a.md"), "/Daily/a.md");
    assert_eq!(vault_path("/Daily/a.md"), "/Daily/a.md");
    assert_eq!(vault_path("//Daily\\a.md"), "/Daily/a.md");
    assert_eq!(vault_path(""), "/");
}

#[test]
fn test_vault_path_resolves_dot_segments() {
    assert_eq!(vault_path("a/./b/../c.md"), "/a/c.md");
    assert_eq!(vault_path("/../x.md"), "/x.md");
    assert_eq!(vault_path("../../x.md"), "/x.md");
}

#[test]
fn test_fs_vault_stays_inside_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("vault");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("inside.md"), "# Daily\ninside").unwrap();
    fs::write(dir.path().join("outside.md"), "# Daily\noutside").unwrap();
    let vault = FsVault::new(&root, vec!["md".to_string()]);

    assert!(vault.resolve("/../outside.md").is_none());
    assert!(vault.read("/../outside.md").is_err());
    assert_eq!(
        vault.resolve("/Daily/../inside.md").as_deref(),
        Some("/inside.md")
    );
}

#[test]
fn test_fs_vault_lists_notes_sorted() {
    let dir = sample_vault();
    let vault = FsVault::new(dir.path(), vec!["md".to_string()]);

    let paths = vault.paths().unwrap();

    assert_eq!(
        paths,
        vec!["/Daily/2024-05-01.md", "/Daily/2024-05-02.md", "/index.md"]
    );
}

#[test]
fn test_fs_vault_respects_extensions() {
    let dir = sample_vault();
    let vault = FsVault::new(dir.path(), vec!["txt".to_string()]);

    assert_eq!(vault.paths().unwrap(), vec!["/notes.txt"]);
}

#[test]
fn test_fs_vault_read_and_resolve() {
    let dir = sample_vault();
    let vault = FsVault::new(dir.path(), vec!["md".to_string()]);

    assert_eq!(
        vault.read("/Daily/2024-05-01.md").unwrap(),
        "# Daily\nslept well"
    );
    assert_eq!(
        vault.resolve("Daily/2024-05-01.md").as_deref(),
        Some("/Daily/2024-05-01.md")
    );
    assert!(vault.resolve("/Daily/missing.md").is_none());
    assert!(vault.resolve("/Daily").is_none());
    assert!(vault.read("/Daily/missing.md").is_err());
}

#[test]
fn test_fs_vault_locates_file_paths() {
    let dir = sample_vault();
    let vault = FsVault::new(dir.path(), vec!["md".to_string()]);
    let on_disk = dir.path().join("Daily/2024-05-02.md");

    assert_eq!(
        vault.locate(&on_disk.to_string_lossy()).unwrap(),
        "/Daily/2024-05-02.md"
    );
    assert_eq!(vault.locate("/index.md").unwrap(), "/index.md");
    assert!(vault.locate("/nowhere.md").is_err());
}

#[test]
fn test_memory_vault_insert_replaces() {
    let mut vault = MemoryVault::new().with("a.md", "one");
    vault.insert("/a.md", "two");

    assert_eq!(vault.paths().unwrap(), vec!["/a.md"]);
    assert_eq!(vault.read("a.md").unwrap(), "two");
}

#[test]
fn test_suggest_paths_is_case_insensitive_prefix() {
    let vault = MemoryVault::new()
        .with("/Daily/2024-05-01.md", "")
        .with("/daily-notes.md", "")
        .with("/Projects/plan.md", "");

    assert_eq!(
        suggest_paths(&vault, "dai").unwrap(),
        vec!["/Daily/2024-05-01.md", "/daily-notes.md"]
    );
    assert_eq!(
        suggest_paths(&vault, "/PROJ").unwrap(),
        vec!["/Projects/plan.md"]
    );
    assert_eq!(suggest_paths(&vault, "").unwrap().len(), 3);
    assert!(suggest_paths(&vault, "plan").unwrap().is_empty());
}

#[test]
fn test_template_choices_strip_markdown_suffix() {
    let vault = MemoryVault::new()
        .with("/Templates/summary.md", "")
        .with("/readme.txt", "");

    let choices = template_choices(&vault).unwrap();

    assert_eq!(
        choices,
        vec![
            (
                "/Templates/summary.md".to_string(),
                "/Templates/summary".to_string()
            ),
            ("/readme.txt".to_string(), "/readme.txt".to_string()),
        ]
    );
}

#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn skillsmith(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("skillsmith").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write_skill(dir: &TempDir, name: &str, content: &str) {
    let folder = dir.path().join(name);
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("SKILL.md"), content).unwrap();
}

// ---------------------------------------------------------------------------
// skillsmith new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_standard_structure() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir).args(["new", "my-skill"]).assert().success();

    assert!(dir.path().join("my-skill/SKILL.md").exists());
    assert!(dir.path().join("my-skill/scripts/.gitkeep").exists());
    assert!(dir.path().join("my-skill/references/.gitkeep").exists());
}

#[test]
fn new_minimal_creates_only_skill_md() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "my-skill", "--minimal"])
        .assert()
        .success();

    assert!(dir.path().join("my-skill/SKILL.md").exists());
    assert!(!dir.path().join("my-skill/scripts").exists());
}

#[test]
fn new_mcp_seeds_api_guide() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "my-skill", "--mcp", "github"])
        .assert()
        .success();

    let guide =
        std::fs::read_to_string(dir.path().join("my-skill/references/api-guide.md")).unwrap();
    assert!(guide.contains("github"));
    let skill_md = std::fs::read_to_string(dir.path().join("my-skill/SKILL.md")).unwrap();
    assert!(skill_md.contains("mcp-server: github"));
}

#[test]
fn new_mcp_conflicts_with_minimal() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "my-skill", "--mcp", "github", "--minimal"])
        .assert()
        .failure();
}

#[test]
fn new_uppercase_name_rejected_with_suggestion() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "My-Skill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try: my-skill"));
    assert!(!dir.path().join("My-Skill").exists());
}

#[test]
fn new_spaces_rejected_with_hyphen_suggestion() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "my skill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("try: my-skill"));
}

#[test]
fn new_underscore_warns_but_creates() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "my_skill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-skill"));
    assert!(dir.path().join("my_skill/SKILL.md").exists());
}

#[test]
fn new_reserved_name_rejected() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["new", "claude-helper"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn new_existing_folder_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("my-skill")).unwrap();
    skillsmith(&dir)
        .args(["new", "my-skill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// skillsmith validate
// ---------------------------------------------------------------------------

#[test]
fn scaffolded_skill_validates_clean() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir).args(["new", "my-skill"]).assert().success();
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill validation passed"));
}

#[test]
fn validate_accepts_skill_md_path() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir).args(["new", "my-skill"]).assert().success();
    skillsmith(&dir)
        .args(["validate", "my-skill/SKILL.md"])
        .assert()
        .success();
}

#[test]
fn validate_missing_path_fails() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir)
        .args(["validate", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn validate_missing_skill_md_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("empty-skill")).unwrap();
    skillsmith(&dir)
        .args(["validate", "empty-skill"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("SKILL.md not found"));
}

#[test]
fn validate_wrong_case_named_in_error() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("my-skill");
    std::fs::create_dir_all(&folder).unwrap();
    std::fs::write(folder.join("skill.md"), "x").unwrap();
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("case-sensitive"));
}

#[test]
fn validate_missing_delimiters_fails() {
    let dir = TempDir::new().unwrap();
    write_skill(&dir, "my-skill", "name: my-skill\ndescription: x\n");
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Missing YAML delimiters"));
}

#[test]
fn validate_unclosed_single_quote_fails() {
    let dir = TempDir::new().unwrap();
    write_skill(
        &dir,
        "my-skill",
        "---\nname: my-skill\ndescription: Use when user says Tom's thing.\n---\n\nBody content long enough to avoid the short-body warning in this test run.\n",
    );
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unclosed single quote"));
}

#[test]
fn validate_long_description_reports_count() {
    let dir = TempDir::new().unwrap();
    let long = "a".repeat(1100);
    write_skill(
        &dir,
        "my-skill",
        &format!("---\nname: my-skill\ndescription: {long}\n---\n\nBody content long enough to avoid the short-body warning in this test run.\n"),
    );
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("exceeds 1024 chars (1100 chars)"));
}

#[test]
fn validate_json_emits_report() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir).args(["new", "my-skill"]).assert().success();
    let output = skillsmith(&dir)
        .args(["validate", "my-skill", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(report["errors"].as_array().unwrap().is_empty());
    assert!(!report["passed"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// skillsmith package
// ---------------------------------------------------------------------------

fn archive_entries(path: &Path) -> Vec<String> {
    let file = std::fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive.file_names().map(String::from).collect()
}

fn only_zip_in(dir: &Path) -> std::path::PathBuf {
    let mut zips: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|e| e == "zip"))
        .collect();
    assert_eq!(zips.len(), 1, "expected exactly one archive in {dir:?}");
    zips.remove(0)
}

#[test]
fn package_excludes_git_and_readme() {
    let dir = TempDir::new().unwrap();
    write_skill(
        &dir,
        "my-skill",
        "---\nname: my-skill\ndescription: Use when packaging.\n---\nbody",
    );
    let folder = dir.path().join("my-skill");
    std::fs::create_dir_all(folder.join(".git")).unwrap();
    std::fs::write(folder.join(".git/config"), "git").unwrap();
    std::fs::write(folder.join("README.md"), "readme").unwrap();

    skillsmith(&dir)
        .args(["package", "my-skill", "-o", "dist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: my-skill/SKILL.md"));

    let entries = archive_entries(&only_zip_in(&dir.path().join("dist")));
    assert!(entries.contains(&"my-skill/SKILL.md".to_string()));
    assert!(entries.iter().all(|e| !e.contains(".git")));
    assert!(entries.iter().all(|e| !e.contains("README.md")));
}

#[test]
fn package_defaults_to_parent_directory() {
    let dir = TempDir::new().unwrap();
    write_skill(
        &dir,
        "my-skill",
        "---\nname: my-skill\ndescription: Use when packaging.\n---\nbody",
    );
    skillsmith(&dir)
        .args(["package", "my-skill"])
        .assert()
        .success();

    let archive = only_zip_in(dir.path());
    let name = archive.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("my-skill-"));
}

#[test]
fn package_honors_config_output_dir_and_excludes() {
    let dir = TempDir::new().unwrap();
    write_skill(
        &dir,
        "my-skill",
        "---\nname: my-skill\ndescription: Use when packaging.\n---\nbody",
    );
    std::fs::write(dir.path().join("my-skill/notes.draft"), "wip").unwrap();
    std::fs::write(
        dir.path().join("skillsmith.yaml"),
        "output_dir: dist\nexclude:\n  - '*.draft'\n",
    )
    .unwrap();

    skillsmith(&dir)
        .args(["package", "my-skill"])
        .assert()
        .success();

    let entries = archive_entries(&only_zip_in(&dir.path().join("dist")));
    assert!(entries.contains(&"my-skill/SKILL.md".to_string()));
    assert!(entries.iter().all(|e| !e.ends_with(".draft")));
}

#[test]
fn package_missing_skill_md_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("not-a-skill")).unwrap();
    skillsmith(&dir)
        .args(["package", "not-a-skill"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SKILL.md not found"));
}

#[test]
fn package_non_directory_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("file.txt"), "x").unwrap();
    skillsmith(&dir)
        .args(["package", "file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

// ---------------------------------------------------------------------------
// round-trip
// ---------------------------------------------------------------------------

#[test]
fn scaffold_then_package_roundtrip() {
    let dir = TempDir::new().unwrap();
    skillsmith(&dir).args(["new", "my-skill"]).assert().success();
    skillsmith(&dir)
        .args(["validate", "my-skill"])
        .assert()
        .success();
    skillsmith(&dir)
        .args(["package", "my-skill", "-o", "dist"])
        .assert()
        .success();

    let entries = archive_entries(&only_zip_in(&dir.path().join("dist")));
    assert!(entries.contains(&"my-skill/SKILL.md".to_string()));
}

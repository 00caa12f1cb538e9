use assert_cmd::Command;
use predicates::prelude::*;

fn bookstall(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bookstall").unwrap();
    cmd.env("BOOKSTALL_HOME", home);
    cmd
}

#[test]
fn add_list_delete_cycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .args(["add", "The Ramayana", "--khr", "4,000 KHR"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added: The Ramayana"));

    // USD is derived from KHR at the fixed 4000 rate.
    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("The Ramayana"))
        .stdout(predicates::str::contains("4000 KHR"))
        .stdout(predicates::str::contains("$1.00"));

    bookstall(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted: The Ramayana"));

    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No books found."));
}

#[test]
fn new_additions_come_first() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .args(["add", "First"])
        .assert()
        .success();
    bookstall(temp_dir.path())
        .args(["add", "Second"])
        .assert()
        .success();

    let output = bookstall(temp_dir.path()).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("First").unwrap();
    let second = stdout.find("Second").unwrap();
    assert!(second < first, "newest addition should be listed first");
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .args(["add", "Khmer Folk Tales", "--khr", "8000"])
        .assert()
        .success();

    bookstall(temp_dir.path())
        .args(["search", "FOLK"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Khmer Folk Tales"));

    bookstall(temp_dir.path())
        .args(["search", "xyz-not-present"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No matches"));
}

#[test]
fn import_export_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = temp_dir.path().join("inventory.csv");
    std::fs::write(
        &source,
        "Book Title,Price/Unit,USD\n\"Tales, Collected\",\"4,000 KHR\",\nReamker,1234,\n",
    )
    .unwrap();

    bookstall(temp_dir.path())
        .args(["import", source.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Imported 2 record(s)"));

    let exported = temp_dir.path().join("out.csv");
    bookstall(temp_dir.path())
        .args(["export", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 2 record(s)"));

    let csv = std::fs::read_to_string(&exported).unwrap();
    assert!(csv.starts_with("Book Title,Price/Unit,USD\n"));
    assert!(csv.contains("\"Tales, Collected\",\"4000\",\"1.00\""));
    assert!(csv.contains("\"Reamker\",\"1234\",\"0.31\""));

    // Re-importing its own export is a fixed point.
    bookstall(temp_dir.path())
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .success();
    bookstall(temp_dir.path())
        .args(["export", exported.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&exported).unwrap(), csv);
}

#[test]
fn export_of_empty_inventory_produces_no_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let target = temp_dir.path().join("out.csv");

    bookstall(temp_dir.path())
        .args(["export", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Nothing to export."));
    assert!(!target.exists());
}

#[test]
fn bootstrap_seeds_only_an_empty_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("books.csv"),
        "Book Title,Price/Unit,USD\nSeeded,4000,\n",
    )
    .unwrap();

    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Seeded"));

    // User edits survive the next startup; the seed never overwrites.
    bookstall(temp_dir.path())
        .args(["add", "Manual"])
        .assert()
        .success();
    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Manual").and(predicates::str::contains("Seeded")));
}

#[test]
fn corrupt_persisted_state_reads_as_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("books.json"), "{{ not json").unwrap();

    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No books found."));
}

#[test]
fn theme_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("light"));

    bookstall(temp_dir.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Theme set to dark"));

    bookstall(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicates::str::contains("dark"));

    bookstall(temp_dir.path())
        .args(["theme", "blue"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown theme"));
}

#[test]
fn config_changes_the_default_export_target() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .args(["add", "Alpha", "--khr", "4000"])
        .assert()
        .success();

    bookstall(temp_dir.path())
        .args(["config", "export-file", "inventory.csv"])
        .assert()
        .success()
        .stdout(predicates::str::contains("export-file set to inventory.csv"));

    bookstall(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("export-file = inventory.csv"));

    // A pathless export now writes the configured filename.
    bookstall(temp_dir.path())
        .current_dir(temp_dir.path())
        .arg("export")
        .assert()
        .success();
    let csv = std::fs::read_to_string(temp_dir.path().join("inventory.csv")).unwrap();
    assert!(csv.contains("Alpha"));

    bookstall(temp_dir.path())
        .args(["config", "bogus"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown config key"));
}

#[test]
fn edit_rederives_usd_from_khr() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookstall(temp_dir.path())
        .args(["add", "Alpha", "--khr", "4000"])
        .assert()
        .success();
    bookstall(temp_dir.path())
        .args(["edit", "1", "--khr", "8000"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated (1): Alpha"));

    bookstall(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("$2.00"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rutils_cmd() -> Command {
    Command::cargo_bin("rutils").unwrap()
}

fn create_listing_structure(temp: &TempDir) {
    let root = temp.path();

    fs::create_dir_all(root.join("alpha")).unwrap();
    fs::create_dir_all(root.join("beta")).unwrap();

    fs::write(root.join("file1.txt"), "content").unwrap();
    fs::write(root.join("file2.txt"), "content").unwrap();
    fs::write(root.join("alpha/inner.txt"), "content").unwrap();
    fs::write(root.join("beta/other.txt"), "content").unwrap();
}

// --- ls ---

#[test]
fn ls_lists_immediate_children_only() {
    let temp = TempDir::new().unwrap();
    create_listing_structure(&temp);

    let output = rutils_cmd().arg("ls").arg(temp.path()).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("alpha"));
    assert!(stdout.contains("beta"));
    assert!(stdout.contains("file1.txt"));
    assert!(stdout.contains("file2.txt"));

    // Default walk stays at the top level.
    assert!(!stdout.contains("inner.txt"));
    assert!(!stdout.contains("other.txt"));
}

#[test]
fn ls_hides_dotfiles_by_default() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join(".hidden"), "content").unwrap();
    fs::write(root.join("visible.txt"), "content").unwrap();

    rutils_cmd()
        .arg("ls")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("visible.txt"))
        .stdout(predicate::str::contains(".hidden").not());
}

#[test]
fn ls_all_includes_dotfiles() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join(".hidden"), "content").unwrap();
    fs::write(root.join("visible.txt"), "content").unwrap();

    rutils_cmd()
        .arg("ls")
        .arg("-a")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".hidden"))
        .stdout(predicate::str::contains("visible.txt"));
}

#[test]
fn ls_recursive_covers_every_sibling_subtree() {
    let temp = TempDir::new().unwrap();
    create_listing_structure(&temp);

    let output = rutils_cmd()
        .arg("ls")
        .arg("-R")
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    // Both sibling subtrees are flattened into the listing.
    assert!(stdout.contains("alpha"));
    assert!(stdout.contains("inner.txt"));
    assert!(stdout.contains("beta"));
    assert!(stdout.contains("other.txt"));
}

#[test]
fn ls_detail_prints_table_then_names() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("solo.txt"), "twelve bytes").unwrap();

    let output = rutils_cmd()
        .arg("ls")
        .arg("-l")
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Name"));
    assert!(stdout.contains("Size"));
    assert!(stdout.contains("Owner"));
    assert!(stdout.contains("Group"));
    assert!(stdout.contains("Last Modified"));
    assert!(stdout.contains("12"));

    // Detail mode is additive: table row plus the plain name list.
    assert_eq!(stdout.matches("solo.txt").count(), 2);
}

#[test]
fn ls_single_file_root_prints_the_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("single_file.txt");
    fs::write(&file_path, "content").unwrap();

    rutils_cmd()
        .arg("ls")
        .arg(&file_path)
        .assert()
        .success()
        .stdout(predicate::eq("single_file.txt\n"));
}

#[test]
fn ls_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("test.txt"), "content").unwrap();

    rutils_cmd()
        .arg("ls")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("test.txt"));
}

#[test]
fn ls_missing_path_reports_on_stdout() {
    rutils_cmd()
        .arg("ls")
        .arg("/nonexistent/path/that/does/not/exist")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No such file or directory"));
}

// --- cat ---

#[test]
fn cat_concatenates_in_argument_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "first\n").unwrap();
    fs::write(temp.path().join("b.txt"), "second\n").unwrap();

    rutils_cmd()
        .arg("cat")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success()
        .stdout(predicate::eq("first\nsecond\n"));
}

#[test]
fn cat_numbers_lines_across_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "one\ntwo\n").unwrap();
    fs::write(temp.path().join("b.txt"), "three\n").unwrap();

    rutils_cmd()
        .arg("cat")
        .arg("-n")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success()
        .stdout(predicate::eq("1      one\n2      two\n3      three\n"));
}

#[test]
fn cat_missing_file_fails_with_message() {
    rutils_cmd()
        .arg("cat")
        .arg("/no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rutils:"))
        .stderr(predicate::str::contains("cannot open"));
}

// --- sort ---

#[test]
fn sort_merges_and_orders_lines() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "pear\napple\n").unwrap();
    fs::write(temp.path().join("b.txt"), "mango\n").unwrap();

    rutils_cmd()
        .arg("sort")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .assert()
        .success()
        .stdout(predicate::eq("apple\nmango\npear\n"));
}

#[test]
fn sort_reverse_descends() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "apple\npear\nmango\n").unwrap();

    rutils_cmd()
        .arg("sort")
        .arg("-r")
        .arg(temp.path().join("a.txt"))
        .assert()
        .success()
        .stdout(predicate::eq("pear\nmango\napple\n"));
}

#[test]
fn sort_line_flag_numbers_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "b\na\n").unwrap();

    rutils_cmd()
        .arg("sort")
        .arg("-n")
        .arg(temp.path().join("a.txt"))
        .assert()
        .success()
        .stdout(predicate::eq("  1 a\n  2 b\n"));
}

// --- wc ---

#[test]
fn wc_prints_header_and_counts() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a.txt");
    fs::write(&path, "hello world\nsecond line here\n").unwrap();

    let output = rutils_cmd().arg("wc").arg(&path).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("lines words chars Filename\n"));
    assert!(stdout.contains("2     5     29    "));
    assert!(stdout.contains("a.txt"));
}

#[test]
fn wc_header_appears_once_for_many_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "x\n").unwrap();
    fs::write(temp.path().join("b.txt"), "y z\n").unwrap();

    let output = rutils_cmd()
        .arg("wc")
        .arg(temp.path().join("a.txt"))
        .arg(temp.path().join("b.txt"))
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(stdout.matches("Filename").count(), 1);
    assert_eq!(stdout.lines().count(), 3);
}

// --- cal ---

#[test]
fn cal_prints_the_requested_month() {
    rutils_cmd()
        .args(["cal", "-y", "2021", "-m", "2"])
        .assert()
        .success()
        .stdout(predicate::eq(concat!(
            "   February 2021\n",
            "Mo Tu We Th Fr Sa Su\n",
            " 1  2  3  4  5  6  7\n",
            " 8  9 10 11 12 13 14\n",
            "15 16 17 18 19 20 21\n",
            "22 23 24 25 26 27 28\n",
        )));
}

#[test]
fn cal_rejects_month_out_of_range() {
    rutils_cmd()
        .args(["cal", "-m", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("13"));
}

// --- shared surface ---

#[test]
fn help_lists_every_subcommand() {
    rutils_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ls"))
        .stdout(predicate::str::contains("cat"))
        .stdout(predicate::str::contains("sort"))
        .stdout(predicate::str::contains("wc"))
        .stdout(predicate::str::contains("cal"));
}

#[test]
fn ls_help_shows_all_flags() {
    rutils_cmd()
        .args(["ls", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-l"))
        .stdout(predicate::str::contains("--detail"))
        .stdout(predicate::str::contains("-a"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("-R"))
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn unknown_flag_shows_error() {
    rutils_cmd()
        .args(["ls", "--unknown-flag"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("--unknown-flag"));
}

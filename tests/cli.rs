#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FAMILIES: &[(&str, &str)] = &[
    ("Roboto", "sans-serif"),
    ("Open Sans", "sans-serif"),
    ("Lora", "serif"),
    ("Merriweather", "serif"),
    ("Dancing Script", "handwriting"),
    ("Fira Code", "monospace"),
    ("Abril Fatface", "display"),
];

fn fontlabs_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("fontlabs"));
    cmd.env("FONTLABS_HOME", home.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("FONTLABS_LOG");
    cmd
}

fn write_webfonts(dir: &Path, filler: usize) -> PathBuf {
    let mut items: Vec<String> = FAMILIES
        .iter()
        .map(|(family, category)| {
            format!(
                r#"{{"family":"{}","variants":["regular","700"],"subsets":["latin"],"category":"{}"}}"#,
                family, category
            )
        })
        .collect();
    items.extend((0..filler).map(|i| {
        format!(
            r#"{{"family":"Filler {}","variants":["regular"],"subsets":["latin"],"category":"sans-serif"}}"#,
            i
        )
    }));
    let path = dir.join("webfonts.json");
    fs::write(
        &path,
        format!(r#"{{"kind":"webfonts#webfontList","items":[{}]}}"#, items.join(",")),
    )
    .unwrap();
    path
}

fn populated_home(filler: usize) -> TempDir {
    let temp = TempDir::new().unwrap();
    let file = write_webfonts(temp.path(), filler);
    fontlabs_cmd(temp.path())
        .args(["populate", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Successfully populated {} fonts from Google Fonts",
            FAMILIES.len() + filler
        )));
    temp
}

#[test]
fn test_browse_pages_through_the_catalog() {
    let home = populated_home(30);

    fontlabs_cmd(home.path())
        .args(["browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 16 fonts, more available."));

    fontlabs_cmd(home.path())
        .args(["browse", "--pages", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("End of list (37 fonts)."));
}

#[test]
fn test_browse_category_is_one_page() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["browse", "--category", "serif"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lora"))
        .stdout(predicate::str::contains("Merriweather"))
        .stdout(predicate::str::contains("Roboto").not())
        .stdout(predicate::str::contains("End of list (2 fonts)."));

    fontlabs_cmd(home.path())
        .args(["browse", "--category", "blackletter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: blackletter"));
}

#[test]
fn test_empty_catalog() {
    let home = TempDir::new().unwrap();

    fontlabs_cmd(home.path())
        .args(["browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No fonts found in the catalog."));
}

#[test]
fn test_search_and_show() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["search", "sans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open Sans"))
        .stdout(predicate::str::contains("Lora").not());

    fontlabs_cmd(home.path())
        .args(["show", "dancing-script"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dancing Script"))
        .stdout(predicate::str::contains("script"))
        .stdout(predicate::str::contains("Google Fonts"));

    fontlabs_cmd(home.path())
        .args(["show", "comic-sans"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No font with slug 'comic-sans'"));
}

#[test]
fn test_links_list_each_family_once() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["show", "open-sans", "--links"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400&display=swap",
        ));

    let output = fontlabs_cmd(home.path())
        .args(["trending", "--links"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let links = stdout
        .lines()
        .filter(|line| line.starts_with("https://fonts.googleapis.com/css2"))
        .count();
    assert_eq!(links, FAMILIES.len());
}

#[test]
fn test_favorites_require_a_user() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["fav", "lora"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please sign in to save favorites"));

    fontlabs_cmd(home.path())
        .args(["config", "user", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user set to ada"));

    fontlabs_cmd(home.path())
        .args(["fav", "lora"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites: Lora"));

    fontlabs_cmd(home.path())
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lora"))
        .stdout(predicate::str::contains("Roboto").not());

    fontlabs_cmd(home.path())
        .args(["fav", "lora"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites: Lora"));

    fontlabs_cmd(home.path())
        .args(["favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn test_config_roundtrip() {
    let home = TempDir::new().unwrap();

    fontlabs_cmd(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 16"))
        .stdout(predicate::str::contains("trending-limit = 50"));

    fontlabs_cmd(home.path())
        .args(["config", "page-size", "4"])
        .assert()
        .success();

    fontlabs_cmd(home.path())
        .args(["config", "page-size"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4"));

    fontlabs_cmd(home.path())
        .args(["config", "page-size", "zero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("must be a positive number"));
}

#[test]
fn test_populate_respects_limit_and_skips_duplicates() {
    let temp = TempDir::new().unwrap();
    let file = write_webfonts(temp.path(), 0);

    fontlabs_cmd(temp.path())
        .args(["populate", file.to_str().unwrap(), "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully populated 3 fonts"));

    fontlabs_cmd(temp.path())
        .args(["populate", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully populated 4 fonts"))
        .stdout(predicate::str::contains("Skipped 3 fonts already in the catalog"));
}

#[test]
fn test_download_moves_a_font_up_the_ranking() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("webfonts.json");
    fs::write(
        &file,
        r#"{"kind":"webfonts#webfontList","items":[{"family":"Lora","category":"serif"}]}"#,
    )
    .unwrap();
    fontlabs_cmd(home.path())
        .args(["populate", file.to_str().unwrap()])
        .assert()
        .success();

    let before: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(home.path().join("fonts.json")).unwrap())
            .unwrap();
    let downloads = before[0]["downloads"].as_u64().unwrap();

    fontlabs_cmd(home.path())
        .args(["download", "lora"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Download started: Lora ({} downloads)",
            downloads + 1
        )));

    fontlabs_cmd(home.path())
        .args(["download", "comic-sans"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No font with slug 'comic-sans'"));
}

#[test]
fn test_category_rejects_pages() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["browse", "--category", "serif", "--pages", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_browse_marks_favorites() {
    let home = populated_home(0);

    fontlabs_cmd(home.path())
        .args(["browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("♥").not());

    fontlabs_cmd(home.path())
        .args(["config", "user", "ada"])
        .assert()
        .success();
    fontlabs_cmd(home.path())
        .args(["fav", "lora"])
        .assert()
        .success();

    let output = fontlabs_cmd(home.path()).args(["browse"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let marked: Vec<_> = stdout.lines().filter(|line| line.contains('♥')).collect();
    assert_eq!(marked.len(), 1);
    assert!(marked[0].contains("Lora"));
}

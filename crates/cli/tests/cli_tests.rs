use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("product-catalog").unwrap();
    cmd.env_remove("PRODUCT_CATALOG_PATH").env_remove("PRODUCT_API_MAX_LIMIT");
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Demo product catalog API"));
}

#[test]
fn test_cli_serve_help() {
    cli().arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_list_sorted_page() {
    let output = cli()
        .args(["list", "--sort-by", "price", "--order", "asc", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["total"], 6);
    assert_eq!(body["count"], 2);
    assert_eq!(body["products"][0]["id"], 3);
    assert_eq!(body["products"][1]["id"], 6);
}

#[test]
fn test_cli_list_unknown_sort_keeps_catalog_order() {
    let output = cli().args(["list", "--sort-by", "category", "--order", "desc"]).output().unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<i64> =
        body["products"].as_array().unwrap().iter().map(|p| p["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_cli_list_rejects_bad_limit() {
    cli()
        .args(["list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit must be greater than 0"));
}

#[test]
fn test_cli_get() {
    cli()
        .args(["get", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ノイズキャンセリングヘッドホン"));
}

#[test]
fn test_cli_get_not_found() {
    cli()
        .args(["get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 42"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 9, "name": "Standing Desk", "price": 52000, "category": "office"}}]"#)
        .unwrap();
    cli()
        .arg("--catalog")
        .arg(file.path())
        .args(["get", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standing Desk"));
}

#[test]
fn test_cli_invalid_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 0, "name": "Ghost", "price": 1, "category": "x"}}]"#).unwrap();
    cli()
        .arg("--catalog")
        .arg(file.path())
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

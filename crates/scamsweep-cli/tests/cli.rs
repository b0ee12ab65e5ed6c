use assert_cmd::cargo::cargo_bin_cmd;
use rusqlite::Connection;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

fn run(home: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("scamsweep")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_json(home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(home, &full);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

fn seed_sorac(path: &Path) {
    let conn = Connection::open(path).expect("create db");
    conn.execute_batch(
        "CREATE TABLE \"User\" (id INTEGER PRIMARY KEY, number TEXT, fullName TEXT);
         INSERT INTO \"User\" (number, fullName) VALUES ('0987654321', 'Giả mạo công an');
         INSERT INTO \"User\" (number, fullName) VALUES ('+84 912 345 678', 'Shopee giao hàng');
         INSERT INTO \"User\" (number, fullName) VALUES ('123', 'Lừa đảo');
         INSERT INTO \"User\" (number, fullName) VALUES (NULL, 'spam');
         INSERT INTO \"User\" (number, fullName) VALUES ('0241234567', NULL);",
    )
    .expect("seed db");
}

#[test]
fn classify_reports_tags_and_descriptions() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json(
        temp.path(),
        &["classify", "Giả mạo công an", "Ngân hàng dịch vụ", "random unrecognized text"],
    );
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["category"], "fake_police");
    assert_eq!(items[0]["description"], "Giả mạo công an / dịch vụ công");
    assert_eq!(items[1]["category"], "fake_bank_credit_securities");
    assert_eq!(items[2]["category"], "other");
    assert_eq!(items[2]["description"], "Khác");
}

#[test]
fn check_reports_validity_and_canonical_form() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json(temp.path(), &["check", "0987654321", "+84912345678", "123"]);
    let items = value.as_array().expect("array");
    assert_eq!(items[0]["valid"], true);
    assert_eq!(items[0]["formatted"], "84987654321");
    assert_eq!(items[1]["formatted"], "84912345678");
    assert_eq!(items[2]["valid"], false);
    assert_eq!(items[2]["formatted"], "123");

    let output = run(temp.path(), &["check", "091 234 5678"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim(), "091 234 5678 -> 84912345678");
}

#[test]
fn db_cleans_named_source() {
    let temp = TempDir::new().expect("temp dir");
    let data = temp.path().join("data");
    let out = temp.path().join("out");
    fs::create_dir_all(&data).expect("data dir");
    seed_sorac(&data.join("sorac.db"));

    let value = run_json(
        temp.path(),
        &[
            "--data-dir",
            data.to_str().expect("data path"),
            "--out-dir",
            out.to_str().expect("out path"),
            "db",
            "sorac",
        ],
    );
    let report = &value["sources"][0];
    assert_eq!(report["source"], "sorac");
    assert_eq!(report["total"], 5);
    assert_eq!(report["valid"], 3);
    assert_eq!(report["invalid"], 1);
    assert_eq!(report["skipped"], 1);
    assert!(value["failures"].as_array().expect("failures").is_empty());

    let contents = fs::read_to_string(out.join("sorac_clean.csv")).expect("read output");
    assert_eq!(
        contents,
        "number,type,locker_type\n\
         84987654321,Giả mạo công an,fake_police\n\
         84912345678,Shopee giao hàng,online_delivery\n\
         84241234567,unknown,other\n"
    );
}

#[test]
fn csv_uses_config_file_sources() {
    let temp = TempDir::new().expect("temp dir");
    let data = temp.path().join("raw");
    let out = temp.path().join("clean");
    fs::create_dir_all(&data).expect("data dir");
    fs::write(
        data.join("reports.csv"),
        "phone,label\n0912345678,Bảo hiểm Prudential\n0412345678,spam\n",
    )
    .expect("write csv");

    let config_path = temp.path().join("scamsweep.toml");
    fs::write(
        &config_path,
        format!(
            "data_dir = {:?}\noutput_dir = {:?}\nlocker_type = \"description\"\n\n[[csv_sources]]\nname = \"reports\"\nfile = \"reports.csv\"\nnumber_field = \"phone\"\ntype_field = \"label\"\n",
            data.to_str().expect("data path"),
            out.to_str().expect("out path"),
        ),
    )
    .expect("write config");

    let output = run(
        temp.path(),
        &["--config", config_path.to_str().expect("config path"), "csv"],
    );
    assert!(output.status.success(), "command failed: {:?}", output);

    let contents = fs::read_to_string(out.join("reports.csv")).expect("read output");
    assert_eq!(
        contents,
        "number,type,locker_type\n84912345678,Bảo hiểm Prudential,Bảo hiểm\n"
    );
}

#[test]
fn db_list_prints_configured_names() {
    let temp = TempDir::new().expect("temp dir");
    let value = run_json(temp.path(), &["db", "--list"]);
    assert_eq!(value, serde_json::json!(["sorac", "ntrust", "cleancall"]));
}

#[test]
fn unknown_source_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(temp.path(), &["db", "nope"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("database source nope"));
}

#[test]
fn missing_database_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let data = temp.path().join("data");
    let output = run(
        temp.path(),
        &["--data-dir", data.to_str().expect("data path"), "db", "ntrust"],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn default_run_continues_past_failures() {
    let temp = TempDir::new().expect("temp dir");
    let data = temp.path().join("data");
    let out = temp.path().join("out");
    fs::create_dir_all(&data).expect("data dir");
    seed_sorac(&data.join("sorac.db"));

    let output = run(
        temp.path(),
        &[
            "--json",
            "--data-dir",
            data.to_str().expect("data path"),
            "--out-dir",
            out.to_str().expect("out path"),
        ],
    );
    assert_eq!(output.status.code(), Some(1));
    let value: Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["sources"].as_array().expect("sources").len(), 1);
    assert_eq!(value["failures"].as_array().expect("failures").len(), 2);
    assert!(out.join("sorac_clean.csv").exists());
}

#[test]
fn locker_type_flag_overrides_config() {
    let temp = TempDir::new().expect("temp dir");
    let data = temp.path().join("data");
    let out = temp.path().join("out");
    fs::create_dir_all(&data).expect("data dir");
    seed_sorac(&data.join("sorac.db"));

    let output = run(
        temp.path(),
        &[
            "--data-dir",
            data.to_str().expect("data path"),
            "--out-dir",
            out.to_str().expect("out path"),
            "--locker-type",
            "Description",
            "db",
            "sorac",
        ],
    );
    assert!(output.status.success(), "command failed: {:?}", output);

    let contents = fs::read_to_string(out.join("sorac_clean.csv")).expect("read output");
    assert!(contents.contains("84987654321,Giả mạo công an,Giả mạo công an / dịch vụ công\n"));
    assert!(contents.contains("84241234567,unknown,Khác\n"));
}

#[test]
fn unknown_locker_type_exits_invalid_input() {
    let temp = TempDir::new().expect("temp dir");
    let output = run(temp.path(), &["--locker-type", "emoji", "db", "sorac"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("--locker-type"));
}

#[test]
fn sources_reports_written_csv_file_name() {
    let temp = TempDir::new().expect("temp dir");
    let config_path = temp.path().join("scamsweep.toml");
    fs::write(
        &config_path,
        "[[csv_sources]]\nname = \"nested\"\nfile = \"exports/2024/calls.csv\"\nnumber_field = \"phone\"\ntype_field = \"label\"\n",
    )
    .expect("write config");

    let value = run_json(
        temp.path(),
        &["--config", config_path.to_str().expect("config path"), "sources"],
    );
    let nested = value
        .as_array()
        .expect("array")
        .iter()
        .find(|item| item["name"] == "nested")
        .expect("nested source");
    assert_eq!(nested["kind"], "csv");
    assert_eq!(nested["input"], "exports/2024/calls.csv");
    assert_eq!(nested["output"], "calls.csv");
}

//! End-to-end tests for the `folio` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CERTIFICATE: &str = r#"{
    "DocumentMetadata": {"Pages": 1},
    "Blocks": [
        {"BlockType": "PAGE", "Id": "1"},
        {"BlockType": "LINE", "Text": "OFICINA DE REGISTRO DE INSTRUMENTOS PUBLICOS"},
        {"BlockType": "LINE", "Text": "Nro Matrícula: 50C-123456"},
        {"BlockType": "LINE", "Text": "Impreso el 12 de enero de 2023 a las 09:41:12 AM"},
        {"BlockType": "LINE", "Text": "Circulo Registral: 50C - BOGOTA Depto: CUNDINAMARCA Municipio: SOACHA Vereda: CHUSACA"},
        {"BlockType": "LINE", "Text": "ESTADO DEL FOLIO:"},
        {"BlockType": "LINE", "Text": " ACTIVO "},
        {"BlockType": "WORD", "Text": "ACTIVO"}
    ]
}"#;

const SECOND: &str = r#"{"Blocks": [
    {"BlockType": "LINE", "Text": "Nro Matricula: 370-98765"},
    {"BlockType": "LINE", "Text": "impreso el 5 de marzo de 2024"}
]}"#;

fn folio(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_INPUT_PATH")
        .env_remove("FOLIO_OUTPUT_PATH")
        .env_remove("input_path")
        .env_remove("output_path")
        .env("XDG_CONFIG_HOME", config_dir)
        .env("HOME", config_dir);
    cmd
}

fn setup() -> (TempDir, TempDir) {
    let input = tempfile::tempdir().unwrap();
    fs::write(input.path().join("a.json"), CERTIFICATE).unwrap();
    fs::write(input.path().join("b.json"), SECOND).unwrap();
    fs::write(input.path().join("readme.txt"), "ignored").unwrap();
    let work = tempfile::tempdir().unwrap();
    (input, work)
}

#[test]
fn batch_writes_one_row_per_document() {
    let (input, work) = setup();
    let output = work.path().join("out.csv");

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    let csv = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "registration_number,print_date,department,municipality,rural_subdivision,folio_status",
            "50C-123456,2023-01-12,CUNDINAMARCA,SOACHA,CHUSACA,ACTIVO",
            "370-98765,2024-03-05,,,,",
        ]
    );
}

#[test]
fn batch_reads_paths_from_environment() {
    let (input, work) = setup();
    let output = work.path().join("env.csv");

    folio(work.path())
        .env("input_path", input.path())
        .env("output_path", &output)
        .args(["batch", "--legacy-headers", "--include-source"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with(
        "source,Numero_de_matricula,Fecha_de_impresion,Departamento,Municipio,Vereda,Estado_de_folio\n"
    ));
    assert!(csv.contains("a.json,50C-123456,"));
    assert!(csv.contains("b.json,370-98765,"));
}

#[test]
fn batch_without_json_files_writes_nothing() {
    let input = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let output = work.path().join("out.csv");

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("No JSON files found"));

    assert!(!output.exists());
}

#[test]
fn batch_aborts_on_bad_document() {
    let (input, work) = setup();
    fs::write(input.path().join("c.json"), "[not a document").unwrap();
    let output = work.path().join("out.csv");

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("c.json"));

    assert!(!output.exists());
}

#[test]
fn batch_continue_on_error_skips_bad_document() {
    let (input, work) = setup();
    fs::write(input.path().join("c.json"), r#"{"Blocks": {}}"#).unwrap();
    let output = work.path().join("out.csv");

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .arg("--continue-on-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 1 failed"))
        .stdout(predicate::str::contains("Failed files:"));

    let csv = fs::read_to_string(&output).unwrap();
    assert_eq!(csv.lines().count(), 3);
}

#[test]
fn batch_strict_rejects_untyped_blocks() {
    let input = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    fs::write(
        input.path().join("x.json"),
        r#"{"Blocks": [{"Text": "Nro Matricula: 1"}]}"#,
    )
    .unwrap();
    let output = work.path().join("out.csv");

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    folio(work.path())
        .arg("batch")
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no BlockType"));
}

#[test]
fn batch_requires_input_directory() {
    let work = tempfile::tempdir().unwrap();

    folio(work.path())
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input directory"));
}

#[test]
fn process_prints_json() {
    let (input, work) = setup();

    folio(work.path())
        .arg("process")
        .arg(input.path().join("a.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""registration_number": "50C-123456""#))
        .stdout(predicate::str::contains(r#""folio_status": "ACTIVO""#));
}

#[test]
fn process_writes_csv_file() {
    let (input, work) = setup();
    let output = work.path().join("one.csv");

    folio(work.path())
        .arg("process")
        .arg(input.path().join("b.json"))
        .args(["-f", "csv", "-o"])
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.ends_with("370-98765,2024-03-05,,,,\n"));
}

#[test]
fn process_csv_honours_include_source() {
    let (input, work) = setup();
    let config = work.path().join("folio.json");
    fs::write(&config, r#"{"output": {"include_source": true}}"#).unwrap();

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .arg("process")
        .arg(input.path().join("b.json"))
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source,registration_number,"))
        .stdout(predicate::str::contains("b.json,370-98765,2024-03-05,,,,"));
}

#[test]
fn process_validate_reports_missing_fields() {
    let (input, work) = setup();

    folio(work.path())
        .arg("process")
        .arg(input.path().join("b.json"))
        .arg("--validate")
        .assert()
        .success()
        .stderr(predicate::str::contains("Validation issues:"))
        .stderr(predicate::str::contains("location"));
}

#[test]
fn process_missing_file_fails() {
    let work = tempfile::tempdir().unwrap();

    folio(work.path())
        .args(["process", "/no/such/document.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn config_init_then_get() {
    let work = tempfile::tempdir().unwrap();
    let config = work.path().join("folio.json");

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "output.column_names", "legacy"])
        .assert()
        .success();

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.column_names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legacy\""));

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_file_controls_batch_output() {
    let (input, work) = setup();
    let config = work.path().join("folio.json");
    let output = work.path().join("from-config.csv");

    fs::write(
        &config,
        serde_json::json!({
            "paths": {"input": input.path(), "output": &output},
            "output": {"column_names": "legacy"}
        })
        .to_string(),
    )
    .unwrap();

    folio(work.path())
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("Numero_de_matricula,"));
}

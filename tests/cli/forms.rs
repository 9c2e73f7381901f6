use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const CAPTURED: &str = r#"{
  "form": "frmMain",
  "controls": {
    "frmMain": "Main window",
    "frmMain_pnlTop_btnOpen": "Open",
    "frmMain_pnlTop_lblStatus": "Label1",
    "frmMain_txtName": "Alice"
  },
  "toolTips": {
    "frmMain_pnlTop_btnOpen": "Open a file"
  }
}"#;

/// The same form after a designer wrapped the top panel's controls in two
/// more containers.
const REDESIGNED: &str = r#"{
  "form": "frmMain",
  "controls": {
    "frmMain": "Main window",
    "frmMain_pnlTop_grpFile_tabMain_btnOpen": "Open",
    "frmMain_pnlTop_grpFile_tabMain_lblStatus": "Ready",
    "frmMain_txtName": "Alice"
  },
  "toolTips": {
    "frmMain_pnlTop_grpFile_tabMain_btnOpen": "Open a file"
  }
}"#;

const FRENCH: &str = r#"{
  "Main window": "Fenêtre principale",
  "Open": "Ouvrir",
  "Open a file": "Ouvrir un fichier",
  "Ready": "Prêt"
}"#;

fn setup(test: &CliTest) -> Result<()> {
    test.write_file("forms/main.json", CAPTURED)?;
    test.write_file("forms/main.v2.json", REDESIGNED)?;
    test.write_file("translations/fr.json", FRENCH)?;
    test.write_file(".glossaignore", "%_txt%\n")?;
    test.run(&["capture", "forms/main.json"])?;
    test.run(&["ignore", "--apply"])?;
    test.run(&["import", "translations/fr.json"])?;
    Ok(())
}

#[test]
fn test_capture_summary() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("forms/main.json", CAPTURED)?;

    let output = test.run(&["capture", "forms/main.json"])?;
    assert_eq!(
        stdout(&output),
        "✓ Captured 5 controls for frmMain (4 static, 1 dynamic, 0 kept DoNotTranslate, 4 new ids)"
    );

    Ok(())
}

#[test]
fn test_capture_seeds_source_bundle() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("forms/main.json", CAPTURED)?;
    test.run(&["capture", "forms/main.json"])?;

    let output = test.run(&["export", "-l", "en", "-o", "-"])?;
    let bundle: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        bundle,
        json!({
            "Alice": "Alice",
            "Main window": "Main window",
            "Open": "Open",
            "Open a file": "Open a file"
        })
    );

    Ok(())
}

#[test]
fn test_recapture_keeps_ignored_controls() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;

    let output = test.run(&["capture", "forms/main.json"])?;
    assert!(stdout(&output).contains("1 kept DoNotTranslate"), "{}", stdout(&output));

    let ignored = test.run(&["ignore"])?;
    assert!(stdout(&ignored).contains("1 already ignored"));

    Ok(())
}

#[test]
fn test_apply_translates_exact_matches() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;

    let output = test.run(&["apply", "forms/main.json", "-l", "fr"])?;
    let translated: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        translated,
        json!({
            "form": "frmMain",
            "controls": {
                "frmMain": "Fenêtre principale",
                "frmMain_pnlTop_btnOpen": "Ouvrir",
                "frmMain_pnlTop_lblStatus": "Label1",
                "frmMain_txtName": "Alice"
            },
            "toolTips": {
                "frmMain_pnlTop_btnOpen": "Ouvrir un fichier"
            }
        })
    );
    assert!(
        stderr(&output).contains("Translated 3 texts into fr (1 untranslated, 0 unresolved, 0 ambiguous, 1 skipped)"),
        "{}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_apply_follows_hierarchy_drift() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;

    test.run(&["apply", "forms/main.v2.json", "-l", "fr", "-o", "out/main.fr.json"])?;
    let translated: Value = serde_json::from_str(&test.read_file("out/main.fr.json")?)?;
    assert_eq!(
        translated["controls"],
        json!({
            "frmMain": "Fenêtre principale",
            "frmMain_pnlTop_grpFile_tabMain_btnOpen": "Ouvrir",
            "frmMain_pnlTop_grpFile_tabMain_lblStatus": "Prêt",
            "frmMain_txtName": "Alice"
        })
    );
    assert_eq!(
        translated["toolTips"]["frmMain_pnlTop_grpFile_tabMain_btnOpen"],
        "Ouvrir un fichier"
    );

    Ok(())
}

#[test]
fn test_apply_round_trips_back_to_source() -> Result<()> {
    let test = CliTest::with_config()?;
    setup(&test)?;
    test.write_file("translations/en.json", r#"{ "Ready": "Ready" }"#)?;
    test.run(&["import", "translations/en.json"])?;

    test.run(&["apply", "forms/main.v2.json", "-l", "fr", "-o", "out/main.fr.json"])?;
    let output = test.run(&["apply", "out/main.fr.json", "-l", "en"])?;
    let restored: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        restored["controls"]["frmMain_pnlTop_grpFile_tabMain_lblStatus"],
        "Ready"
    );

    Ok(())
}

#[test]
fn test_apply_missing_snapshot_is_an_error() -> Result<()> {
    let test = CliTest::with_config()?;

    let output = test
        .command()
        .args(["apply", "forms/missing.json", "-l", "fr"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read snapshot"));

    Ok(())
}

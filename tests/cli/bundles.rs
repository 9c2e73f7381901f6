use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup_bundles(test: &CliTest) -> Result<()> {
    test.write_file(
        "translations/fr.json",
        r#"{
  "File": "Fichier",
  "Open": "Ouvrir",
  "Say \"hi\"": "Dis \"salut\"",
  "Untranslated": ""
}"#,
    )?;
    test.write_file(
        "translations/en.json",
        r#"{
  "File": "File",
  "Open": "Open"
}"#,
    )
}

#[test]
fn test_import_reports_each_bundle() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_bundles(&test)?;

    let output = test.run(&["import", "translations/*.json"])?;
    let out = stdout(&output);
    assert!(out.contains("Imported 2 translations (en)"), "{}", out);
    assert!(out.contains("Imported 3 translations (fr)"), "{}", out);

    Ok(())
}

#[test]
fn test_translate_forward_and_reverse() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_bundles(&test)?;
    test.run(&["import", "translations/*.json"])?;

    let forward = test.run(&["translate", "File", "-l", "fr"])?;
    assert_eq!(stdout(&forward), "Fichier");

    let reverse = test.run(&["translate", "Fichier", "-l", "en"])?;
    assert_eq!(stdout(&reverse), "File");

    let quoted = test.run(&["translate", "Say \"hi\"", "-l", "fr"])?;
    assert_eq!(stdout(&quoted), "Dis \"salut\"");

    let unknown = test.run(&["translate", "Nothing here", "-l", "fr"])?;
    assert_eq!(stdout(&unknown), "Nothing here");

    Ok(())
}

#[test]
fn test_import_with_explicit_language() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("incoming/latest.json", r#"{ "Open": "Öffnen" }"#)?;

    test.run(&["import", "incoming/latest.json", "-l", "de"])?;
    let output = test.run(&["translate", "Open", "-l", "de"])?;
    assert_eq!(stdout(&output), "Öffnen");

    Ok(())
}

#[test]
fn test_import_invalid_bundle_fails() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("translations/fr.json", r#"{ "Open": 3 }"#)?;

    let output = test.command().args(["import", "translations/fr.json"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must be a string"), "{}", stderr(&output));

    Ok(())
}

#[test]
fn test_import_without_matches_fails() -> Result<()> {
    let test = CliTest::with_config()?;

    let output = test.command().args(["import", "translations/*.json"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no bundle files matched"));

    Ok(())
}

#[test]
fn test_export_writes_sorted_bundle() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_bundles(&test)?;
    test.run(&["import", "translations/fr.json"])?;

    test.run(&["export", "-l", "fr", "-o", "out/fr.json"])?;
    assert_eq!(
        test.read_file("out/fr.json")?,
        "{\n  \"File\": \"Fichier\",\n  \"Open\": \"Ouvrir\",\n  \"Say \\\"hi\\\"\": \"Dis \\\"salut\\\"\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_export_to_stdout_and_default_path() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_bundles(&test)?;
    test.run(&["import", "translations/en.json"])?;

    let output = test.run(&["export", "-l", "en", "-o", "-"])?;
    assert_eq!(stdout(&output), "{\n  \"File\": \"File\",\n  \"Open\": \"Open\"\n}");

    test.run(&["export", "-l", "en"])?;
    assert_eq!(
        test.read_file("translations/en.json")?,
        "{\n  \"File\": \"File\",\n  \"Open\": \"Open\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_store_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_config()?;
    setup_bundles(&test)?;

    test.run(&["import", "translations/fr.json", "--store", "other-store"])?;
    assert!(test.root().join("other-store").exists());

    let output = test.run(&["translate", "File", "-l", "fr"])?;
    assert_eq!(stdout(&output), "File");
    let output = test.run(&["translate", "File", "-l", "fr", "--store", "other-store"])?;
    assert_eq!(stdout(&output), "Fichier");

    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const RULES: &str = "# controls holding user data\n%_txt%\n%Grid%\n!%_txtNotes\n";

#[test]
fn test_classify_names() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(".glossaignore", RULES)?;

    let output = test.run(&[
        "classify",
        "frmMain_txtName",
        "frmMain_TXTNAME",
        "frmMain_txtNotes",
        "frmMain_btnOK",
        "frmOrders_dgvGrid_colId",
    ])?;
    insta::assert_snapshot!(stdout(&output), @r"
    frmMain_txtName: ignore
    frmMain_TXTNAME: ignore
    frmMain_txtNotes: static
    frmMain_btnOK: static
    frmOrders_dgvGrid_colId: ignore
    ");

    Ok(())
}

#[test]
fn test_classify_case_sensitive() -> Result<()> {
    let test = CliTest::with_file(
        ".glossarc.json",
        r#"{ "ignoreCaseSensitive": true }"#,
    )?;
    test.write_file(".glossaignore", RULES)?;

    let output = test.run(&["classify", "frmMain_TXTNAME", "frmMain_txtName"])?;
    assert_eq!(
        stdout(&output),
        "frmMain_TXTNAME: static\nfrmMain_txtName: ignore"
    );

    Ok(())
}

#[test]
fn test_classify_with_rules_flag() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file("rules/forms.ignore", "frm%\n")?;

    let output = test.run(&["classify", "frmMain", "dlgAbout", "--rules", "rules/forms.ignore"])?;
    assert_eq!(stdout(&output), "frmMain: ignore\ndlgAbout: static");

    Ok(())
}

#[test]
fn test_empty_rule_file_is_an_error() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(".glossaignore", "# nothing yet\n")?;

    let output = test.command().args(["classify", "frmMain_txtName"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Ignore rule set is empty"), "{}", stderr(&output));

    Ok(())
}

#[test]
fn test_missing_rule_file_is_an_error() -> Result<()> {
    let test = CliTest::with_config()?;

    let output = test.command().args(["classify", "frmMain_txtName"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains(".glossaignore"), "{}", stderr(&output));

    Ok(())
}

#[test]
fn test_ignore_dry_run_then_apply() -> Result<()> {
    let test = CliTest::with_config()?;
    test.write_file(".glossaignore", RULES)?;
    test.write_file(
        "forms/main.json",
        r#"{
  "form": "frmMain",
  "controls": {
    "frmMain_btnOK": "OK",
    "frmMain_txtName": "Alice",
    "frmMain_txtNotes": "Notes"
  }
}"#,
    )?;
    test.run(&["capture", "forms/main.json"])?;

    let dry_run = test.run(&["ignore"])?;
    let out = stdout(&dry_run);
    assert!(out.contains("frmMain frmMain_txtName (Alice -> DoNotTranslate)"), "{}", out);
    assert!(out.contains("1 binding would be marked DoNotTranslate"), "{}", out);
    assert!(!out.contains("txtNotes"), "{}", out);

    let applied = test.run(&["ignore", "--apply"])?;
    assert_eq!(stdout(&applied), "✓ Marked 1 binding DoNotTranslate");

    let again = test.run(&["ignore"])?;
    assert_eq!(stdout(&again), "✓ No bindings to ignore (1 already ignored)");

    Ok(())
}

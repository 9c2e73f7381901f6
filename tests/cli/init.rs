use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in ["storePath", "sourceLanguage", "ignoreFile", "bundlesRoot"] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["sourceLanguage"], "en");
    assert_eq!(parsed["ignoreCaseSensitive"], false);
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;
    insta::assert_snapshot!(stdout(&output), @"✓ Created .glossarc.json");

    assert!(test.root().join(".glossarc.json").exists());
    let content = test.read_file(".glossarc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    insta::assert_snapshot!(stderr(&output), @"✘ .glossarc.json already exists");
    assert_eq!(test.read_file(".glossarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("translations/fr.json", r#"{ "Open": "Ouvrir" }"#)?;

    test.run(&["import", "translations/fr.json"])?;
    let output = test.run(&["translate", "Open", "-l", "fr"])?;
    assert_eq!(stdout(&output), "Ouvrir");
    assert!(test.root().join(".glossa/store").exists());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", r#"{ "defaultNamePatterns": ["("] }"#)?;

    let output = test.command().args(["translate", "x", "-l", "fr"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("defaultNamePatterns"));

    Ok(())
}

use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} Created .langsyncrc.json\n");

    let content = test.read_file(".langsyncrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["defaultsRoot"], "./defaults");
    assert_eq!(parsed["overridesRoot"], "./overrides");
    assert!(parsed["files"].is_array());
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".langsyncrc.json", "{}")?;

    let output = test.run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, 2);
    assert_eq!(output.stderr, "Error: .langsyncrc.json already exists\n");
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");

    Ok(())
}

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CHAT_DEFAULTS, chat_project};

#[test]
fn test_check_fails_on_missing_override() -> Result<()> {
    let test = chat_project()?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, 1);
    assert_eq!(
        output.stdout,
        "~ en-US/Chat.lang  would create (3 disabled key(s))\n\
         \u{2718} 1 override file(s) out of date.\n\
         Run langsync sync --apply to update them.\n"
    );
    assert!(!test.root().join("overrides").exists());
    Ok(())
}

#[test]
fn test_check_passes_when_in_sync() -> Result<()> {
    let test = chat_project()?;
    test.write_file("overrides/en-US/Chat.lang", CHAT_DEFAULTS)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "\u{2713} 1 override file(s) up to date\n");
    Ok(())
}

#[test]
fn test_check_verbose_lists_every_target() -> Result<()> {
    let test = chat_project()?;
    test.write_file("overrides/en-US/Chat.lang", CHAT_DEFAULTS)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("\u{2713} en-US/Chat.lang  up to date\n"));
    assert!(output.stderr.contains("note: 1 target(s)"));
    Ok(())
}

#[test]
fn test_check_bad_config_is_error() -> Result<()> {
    let test = chat_project()?;
    test.write_file(".langsyncrc.json", "{ not json")?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.starts_with("Error: "));
    Ok(())
}

#[test]
fn test_check_reads_pending_legacy_overrides() -> Result<()> {
    let test = chat_project()?;
    test.write_file(".langsyncrc.json", r#"{ "legacyRoot": "old" }"#)?;
    test.write_file("old/en-US/Chat.lang", CHAT_DEFAULTS)?;

    let output = test.run(test.check_command())?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Would move "));
    assert!(output.stdout.ends_with("\u{2713} 1 override file(s) up to date\n"));
    assert!(test.root().join("old/en-US/Chat.lang").exists());
    assert!(!test.root().join("overrides").exists());
    Ok(())
}

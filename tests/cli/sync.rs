use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CHAT_DEFAULTS, CliTest, chat_project};

#[test]
fn test_sync_dry_run_writes_nothing() -> Result<()> {
    let test = chat_project()?;

    let output = test.run(test.sync_command())?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "~ en-US/Chat.lang  would create (3 disabled key(s))\n\
         Would write 1 file(s).\n\
         Run with --apply to write these files.\n"
    );
    assert!(!test.root().join("overrides").exists());
    Ok(())
}

#[test]
fn test_sync_apply_creates_disabled_override() -> Result<()> {
    let test = chat_project()?;

    let mut cmd = test.sync_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("en-US/Chat.lang  created (3 disabled key(s))"));
    assert_eq!(
        test.read_file("overrides/en-US/Chat.lang")?,
        "# Greetings\n\
         # Chat.Hello=Hello\n\
         # Chat.Bye=Goodbye\n\
         \n\
         # Errors\n\
         # Chat.Error=Something went wrong\n"
    );
    Ok(())
}

#[test]
fn test_sync_apply_merges_new_and_stale_keys() -> Result<()> {
    let test = chat_project()?;
    test.write_file(
        "overrides/en-US/Chat.lang",
        "# Greetings\nChat.Hello=Hey there\n# Chat.Bye=Bye\n",
    )?;

    let mut cmd = test.sync_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("merged (1 added, 1 refreshed)"));
    assert_eq!(
        test.read_file("overrides/en-US/Chat.lang")?,
        "# Greetings\n\
         Chat.Hello=Hey there\n\
         # Chat.Bye=Goodbye\n\
         \n\
         # Errors\n\
         # Chat.Error=Something went wrong\n"
    );

    // A second run has nothing left to do.
    let mut cmd = test.sync_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;
    assert_eq!(output.stdout, "\u{2713} 1 override file(s) up to date\n");
    Ok(())
}

#[test]
fn test_sync_missing_default_is_warning() -> Result<()> {
    let test = CliTest::with_file(
        ".langsyncrc.json",
        r#"{ "languages": ["en-US"], "files": ["Menu.lang"] }"#,
    )?;
    test.write_file("defaults/en-US/Other.lang", "A=1\n")?;

    let output = test.run(test.sync_command())?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.contains("! en-US/Menu.lang  default missing"));
    assert!(output.stderr.starts_with("warning: Resource not found: "));
    Ok(())
}

#[test]
fn test_sync_moves_legacy_overrides() -> Result<()> {
    let test = chat_project()?;
    test.write_file(".langsyncrc.json", r#"{ "legacyRoot": "old" }"#)?;
    test.write_file("old/en-US/Chat.lang", CHAT_DEFAULTS)?;

    let mut cmd = test.sync_command();
    cmd.arg("--apply");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert!(output.stdout.starts_with("Moved "));
    assert_eq!(test.read_file("overrides/en-US/Chat.lang")?, CHAT_DEFAULTS);
    assert!(!test.root().join("old").exists());
    Ok(())
}

#[test]
fn test_sync_language_option_limits_targets() -> Result<()> {
    let test = chat_project()?;
    test.write_file("defaults/fr-FR/Chat.lang", "Chat.Hello=Bonjour\n")?;

    let mut cmd = test.sync_command();
    cmd.args(["--apply", "-l", "fr-FR"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(
        test.read_file("overrides/fr-FR/Chat.lang")?,
        "# Chat.Hello=Bonjour\n"
    );
    assert!(!test.root().join("overrides/en-US").exists());
    Ok(())
}

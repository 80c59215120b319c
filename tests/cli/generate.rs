use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_generate_prints_disabled_template() -> Result<()> {
    let test = CliTest::with_file(
        "Chat.lang",
        "# Chat\nChat.Hello=Hello\n\n\nChat.Bye=Goodbye\n\n",
    )?;

    let mut cmd = test.command();
    cmd.args(["generate", "Chat.lang"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        "# Chat\n# Chat.Hello=Hello\n\n# Chat.Bye=Goodbye\n"
    );
    Ok(())
}

#[test]
fn test_generate_missing_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["generate", "Nope.lang"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Failed to read file"));
    Ok(())
}

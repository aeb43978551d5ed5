use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    let content = test.read_file(".lockeyrc.json")?;
    assert!(content.contains("extensions"));
    assert!(content.contains("lookupMethods"));
    assert!(content.contains("sourceRoot"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".lockeyrc.json", r#"{ "extensions": ["scala"] }"#)?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
    // Existing config is untouched
    assert_eq!(
        test.read_file(".lockeyrc.json")?,
        r#"{ "extensions": ["scala"] }"#
    );
    Ok(())
}

#[test]
fn test_init_output_is_loadable() -> Result<()> {
    let test = CliTest::new()?;

    assert!(test.command().arg("init").output()?.status.success());

    // A scan right after init should pick up the generated config
    test.write_file("src/Main.scala", r#"S.?("after.init")"#)?;
    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("target/i18n-template.properties")?,
        "after.init=\n"
    );
    Ok(())
}

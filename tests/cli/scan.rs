use anyhow::Result;

use crate::CliTest;

const TEMPLATE_PATH: &str = "target/i18n-template.properties";

#[test]
fn test_scan_call_and_markup_forms() -> Result<()> {
    let test = CliTest::with_file(
        "src/Greeter.scala",
        r#"
object Greeter {
  def hello = S.?("greeting")
}
"#,
    )?;
    test.write_file(
        "src/templates/page.html",
        r#"<html><lift:loc key="farewell"/><lift:loc>farewell2</lift:loc></html>"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file(TEMPLATE_PATH)?,
        "farewell=\nfarewell2=\ngreeting=\n"
    );
    Ok(())
}

#[test]
fn test_scan_empty_tree_writes_empty_template() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/notes.txt", r#"S.?("not.scanned")"#)?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(test.read_file(TEMPLATE_PATH)?.is_empty());
    Ok(())
}

#[test]
fn test_scan_missing_source_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("source directory"));
    assert!(!test.root().join(TEMPLATE_PATH).exists());
    Ok(())
}

#[test]
fn test_scan_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "src/A.scala",
        r#"S.?("zulu"); S.?("alpha"); Namespace.lookup("mike")"#,
    )?;

    assert!(test.scan_command().output()?.status.success());
    let first = test.read_file(TEMPLATE_PATH)?;

    assert!(test.scan_command().output()?.status.success());
    let second = test.read_file(TEMPLATE_PATH)?;

    assert_eq!(first, "alpha=\nmike=\nzulu=\n");
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_scan_deduplicates_across_files() -> Result<()> {
    let test = CliTest::with_file("src/A.scala", r#"S.?("shared"); S.?("shared")"#)?;
    test.write_file("src/B.scala", r#"S.?("shared")"#)?;
    test.write_file("src/c.xhtml", r#"<lift:loc key="shared"/>"#)?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file(TEMPLATE_PATH)?, "shared=\n");
    Ok(())
}

#[test]
fn test_scan_reports_counts() -> Result<()> {
    let test = CliTest::with_file("src/A.scala", r#"S.?("one"); S.?("two")"#)?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Scanned 1 file"));
    assert!(stdout.contains("wrote 2 keys"));
    Ok(())
}

#[test]
fn test_scan_with_source_root_and_output_dir_overrides() -> Result<()> {
    let test = CliTest::with_file("sources/Main.scala", r#"S.?("custom.key")"#)?;

    let output = test
        .scan_command()
        .args(["--source-root", "sources", "--output-dir", "out"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("out/i18n-template.properties")?,
        "custom.key=\n"
    );
    Ok(())
}

#[test]
fn test_scan_honors_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".lockeyrc.json",
        r#"{
       "extensions": ["scala"],
       "ignores": ["generated"],
       "outputDir": "out"
   }"#,
    )?;
    test.write_file("src/Main.scala", r#"S.?("kept")"#)?;
    test.write_file("src/generated/Gen.scala", r#"S.?("dropped")"#)?;
    test.write_file("src/page.html", r#"<lift:loc key="dropped.too"/>"#)?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("out/i18n-template.properties")?, "kept=\n");
    Ok(())
}

#[test]
fn test_scan_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lockeyrc.json", r#"{ "extensions": [] }"#)?;
    test.write_file("src/Main.scala", r#"S.?("key")"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extensions"));
    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));
    Ok(())
}

use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_single_named_export_is_flagged() -> Result<()> {
    let test = CliTest::with_file("src/util.ts", "export function bar() {}\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 0, "style warnings do not fail the run");
    assert!(output.stdout.contains("warning: \"Prefer default export.\""));
    assert!(output.stdout.contains("prefer-default-export"));
    assert!(output.stdout.contains("src/util.ts:1:1"));
    assert!(output.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_clean_project_reports_success() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.ts",
        "export const a = 1;\nexport const b = 2;\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 0);
    assert!(
        output
            .stdout
            .contains("Checked 1 source file - no issues found")
    );

    Ok(())
}

#[test]
fn test_default_export_not_flagged() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export default function App() {}\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 0);
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_specifier_violation_location() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.js",
        "const foo = 'foo';\nexport { foo };\n",
    )?;

    let output = run(&mut test.check_command())?;

    // The specifier node is reported, not the whole statement
    assert!(output.stdout.contains("src/util.js:2:10"));

    Ok(())
}

#[test]
fn test_multiple_files_each_judged_alone() -> Result<()> {
    let test = CliTest::with_file("src/one.ts", "export const only = 1;\n")?;
    test.write_file("src/two.ts", "export const a = 1;\nexport const b = 2;\n")?;
    test.write_file("src/three.ts", "export * from './one';\n")?;

    let output = run(&mut test.check_command())?;

    assert!(output.stdout.contains("src/one.ts"));
    assert!(!output.stdout.contains("src/two.ts"));
    assert!(!output.stdout.contains("src/three.ts"));
    assert!(output.stdout.contains("1 problem"));

    Ok(())
}

#[test]
fn test_disable_next_line_suppresses() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.ts",
        "// modlint-disable-next-line prefer-default-export\nexport const foo = 1;\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 0);
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_parse_error_fails_run() -> Result<()> {
    let test = CliTest::with_file("src/bad.ts", "export const = ;\n")?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 1);
    assert!(output.stdout.contains("parse-error"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".modlintrc.json",
        r#"{
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file("src/generated/api.ts", "export const client = 1;\n")?;
    test.write_file(
        "src/app.ts",
        "export const a = 1;\nexport const b = 2;\n",
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.status_code, 0);
    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_type_only_module_not_flagged() -> Result<()> {
    let test = CliTest::with_file("src/types.ts", "export type UserId = number;\n")?;

    let output = run(&mut test.check_command())?;

    assert!(output.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("--help"))?;

    assert_eq!(output.status_code, 0);
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("init"));

    Ok(())
}

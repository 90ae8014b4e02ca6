use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.status_code, 0);
    assert!(output.stdout.contains("Created .modlintrc.json"));

    let config = test.read_file(".modlintrc.json")?;
    assert!(config.contains("\"sourceRoot\""));

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".modlintrc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.status_code, 2);
    assert!(output.stderr.contains("already exists"));

    Ok(())
}

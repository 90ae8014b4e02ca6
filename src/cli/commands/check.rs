use anyhow::Result;
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::check_prefer_default_export,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    PreferDefaultExport,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![CheckRule::PreferDefaultExport]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::PreferDefaultExport => {
                let issues = check_prefer_default_export(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PreferDefaultExport));
            }
        }
    }

    all_issues.extend(
        ctx.parse_errors()
            .iter()
            .map(|i| Issue::ParseError(i.clone())),
    );

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}

//! Interactive confirmations.

use std::io::IsTerminal;
use std::path::Path;

use dialoguer::Confirm;
use studyplan_core::{AlwaysOverwrite, NeverOverwrite, OverwritePolicy};

use crate::errors::CliError;

/// Asks on the terminal before replacing an existing file.
pub struct PromptPolicy;

impl OverwritePolicy for PromptPolicy {
    fn allow_overwrite(&mut self, path: &Path) -> bool {
        let prompt = format!("File '{}' already exists. Overwrite?", path.display());
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "Overwrite prompt failed, keeping existing file");
                false
            }
        }
    }
}

/// Pick the overwrite policy for a save.
///
/// `--force` always overwrites. Without a terminal, or with `--no-input`,
/// existing files are kept.
pub fn overwrite_policy(force: bool, no_input: bool) -> Box<dyn OverwritePolicy> {
    if force {
        Box::new(AlwaysOverwrite)
    } else if no_input || !std::io::stdin().is_terminal() {
        Box::new(NeverOverwrite)
    } else {
        Box::new(PromptPolicy)
    }
}

/// Confirm deletion of a schedule file.
///
/// Returns `CliError::Declined` when the user says no or cannot be asked.
pub fn confirm_delete(path: &Path, yes: bool, no_input: bool) -> anyhow::Result<()> {
    if yes {
        return Ok(());
    }
    if no_input || !std::io::stdin().is_terminal() {
        return Err(CliError::declined(format!(
            "Refusing to delete {} without confirmation (pass --yes)",
            path.display()
        ))
        .into());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete '{}'?", path.display()))
        .default(false)
        .interact()?;
    if !confirmed {
        return Err(CliError::declined("Deletion cancelled").into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_always_overwrites() {
        let mut policy = overwrite_policy(true, true);
        assert!(policy.allow_overwrite(Path::new("plan.csv")));
    }

    #[test]
    fn test_no_input_keeps_existing_file() {
        let mut policy = overwrite_policy(false, true);
        assert!(!policy.allow_overwrite(Path::new("plan.csv")));
    }

    #[test]
    fn test_delete_without_confirmation_is_declined() {
        assert!(confirm_delete(Path::new("plan.csv"), true, true).is_ok());

        let err = confirm_delete(Path::new("plan.csv"), false, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Declined(_))
        ));
    }
}

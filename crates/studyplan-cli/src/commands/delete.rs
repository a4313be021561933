use studyplan_core::{delete_schedule, Format, PlannerError};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::confirm_delete;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let path = ctx.resolve(&args.file)?;

    // Validate the target before prompting.
    if !path.exists() {
        return Err(PlannerError::FileNotFound(path).into());
    }
    if Format::from_path(&path).is_none() {
        return Err(PlannerError::UnsupportedFormat(path.display().to_string()).into());
    }

    confirm_delete(&path, args.yes, args.no_input)?;
    delete_schedule(&path)?;
    ctx.record(&format!("Deleted {}", path.display()));

    if !ctx.quiet() {
        println!("Deleted {}", path.display());
    }
    Ok(())
}

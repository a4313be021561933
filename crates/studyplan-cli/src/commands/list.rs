use studyplan_core::{list_schedules, Format};

use crate::app::AppContext;
use crate::cli::ListArgs;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let dir = ctx.working_dir()?;
    let files = list_schedules(dir)?;

    let entries: Vec<(String, Format)> = files
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().into_owned();
            Some((name, Format::from_path(path)?))
        })
        .collect();

    if args.json {
        let json_output: Vec<_> = entries
            .iter()
            .map(|(name, format)| {
                serde_json::json!({
                    "name": name,
                    "format": format,
                    "encrypted": format.is_encrypted(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !ctx.quiet() {
            println!("No saved schedules in {}", dir.display());
        }
        return Ok(());
    }

    for (name, format) in &entries {
        if ctx.quiet() {
            println!("{}", name);
        } else {
            let note = if format.is_encrypted() { " (encrypted)" } else { "" };
            println!("{}\t{}{}", name, format, note);
        }
    }
    Ok(())
}

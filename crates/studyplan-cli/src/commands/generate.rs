use std::path::Path;

use studyplan_core::{generate, Format};

use crate::app::AppContext;
use crate::cli::GenerateArgs;
use crate::errors::CliError;
use crate::helpers::{overwrite_policy, parse_format, parse_subjects};
use crate::ui::{render, OutputMode};

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let subjects = parse_subjects(&args.subjects)?;
    let defaults = &ctx.config()?.defaults;

    let hours = args.hours.or(defaults.hours_per_day).ok_or_else(|| {
        CliError::invalid_input(
            "Missing study hours per day (pass --hours or set defaults.hours_per_day)",
        )
    })?;
    let days = args.days.or(defaults.days).ok_or_else(|| {
        CliError::invalid_input("Missing number of days (pass --days or set defaults.days)")
    })?;

    let schedule = generate(subjects.as_slice(), hours, days)?;
    ctx.record(&format!(
        "Generated schedule: {} subject(s), {} hour(s)/day, {} day(s)",
        subjects.len(),
        hours,
        days
    ));

    let saved = match args.save.as_deref() {
        Some(name) => {
            let format = save_format(args.format.as_deref(), name, defaults.format)?;
            let target = ctx.resolve(name)?;
            let mut policy = overwrite_policy(args.force, args.no_input);
            let saved = ctx.store()?.save(&schedule, &target, format, policy.as_mut())?;
            ctx.record(&format!("Saved schedule to {}", saved.display()));
            Some(saved)
        }
        None => None,
    };

    if args.json {
        let output = serde_json::json!({
            "schedule": schedule,
            "saved_to": saved.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ctx.quiet() {
        if let Some(path) = saved {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let mode = OutputMode::from_env(false, None)?;
    println!("{}", render::schedule(mode, &schedule)?);
    println!("{}", render::summary(&schedule));
    if let Some(path) = saved {
        println!("Saved schedule to {}", path.display());
    }
    Ok(())
}

/// `--format` wins, then a recognised extension on the name, then config.
pub fn save_format(flag: Option<&str>, name: &str, fallback: Format) -> anyhow::Result<Format> {
    if let Some(value) = flag {
        return parse_format(value);
    }
    Ok(Format::from_path(Path::new(name)).unwrap_or(fallback))
}

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::ui::{render, OutputMode};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let mode = OutputMode::from_env(args.json, args.format.as_deref())?;
    let path = ctx.resolve(&args.file)?;

    let schedule = ctx.store()?.load(&path)?;
    ctx.record(&format!("Loaded schedule from {}", path.display()));

    println!("{}", render::schedule(mode, &schedule)?);
    if !mode.is_json() && !ctx.quiet() {
        println!("{}", render::summary(&schedule));
    }
    Ok(())
}

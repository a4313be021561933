use crate::app::AppContext;
use crate::cli::ConvertArgs;
use crate::helpers::overwrite_policy;
use crate::ui::render;

use super::generate::save_format;

pub fn handle_convert(ctx: &AppContext, args: &ConvertArgs) -> anyhow::Result<()> {
    let source = ctx.resolve(&args.source)?;
    let format = save_format(
        args.format.as_deref(),
        &args.destination,
        ctx.config()?.defaults.format,
    )?;
    let destination = ctx.resolve(&args.destination)?;

    let store = ctx.store()?;
    let schedule = store.load(&source)?;
    let mut policy = overwrite_policy(args.force, args.no_input);
    let saved = store.save(&schedule, &destination, format, policy.as_mut())?;

    ctx.record(&format!(
        "Converted {} to {}",
        source.display(),
        saved.display()
    ));

    if !ctx.quiet() {
        let saved_display = saved.display().to_string();
        let days = schedule.len().to_string();
        let format_name = format.to_string();
        println!(
            "{}",
            render::receipt(&[
                ("path", saved_display.as_str()),
                ("format", format_name.as_str()),
                ("days", days.as_str()),
            ])
        );
    }
    Ok(())
}

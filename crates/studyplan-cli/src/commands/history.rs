use chrono::SecondsFormat;

use crate::app::AppContext;
use crate::cli::HistoryArgs;

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let Some(log) = ctx.action_log()? else {
        if !ctx.quiet() {
            println!("Action history is disabled (history.enabled = false)");
        }
        return Ok(());
    };

    let records = log.read(args.limit)?;
    if records.is_empty() {
        if !ctx.quiet() {
            println!("No recorded actions in {}", log.path().display());
        }
        return Ok(());
    }

    for record in records {
        println!(
            "{}  {}",
            record.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            record.action
        );
    }
    Ok(())
}

use crate::app::{resolve_config_path, AppContext};

pub fn handle_config(ctx: &AppContext) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    let config = ctx.config()?;

    println!("# config file: {}", config_path.display());
    if !config_path.exists() {
        println!("# (not found, showing defaults)");
    }
    println!("# working directory: {}", ctx.working_dir()?.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

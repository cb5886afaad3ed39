use crate::cli::{Cli, ConfigInitArgs};
use crate::config::{write_config, ScramblConfig, Settings};
use crate::errors::CliError;
use crate::ui::{badge, Badge, UiContext};

pub fn handle_init(cli: &Cli, settings: &Settings, args: &ConfigInitArgs) -> anyhow::Result<()> {
    let path = &settings.config_path;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }
    write_config(path, &ScramblConfig::with_defaults()?)?;
    if !cli.quiet {
        println!(
            "{}",
            badge(
                &UiContext::for_stdout(),
                Badge::Ok,
                &format!("Wrote {}", path.display())
            )
        );
    }
    Ok(())
}

pub fn handle_show(settings: &Settings) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(settings).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    print!("{}", contents);
    Ok(())
}

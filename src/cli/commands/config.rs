use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!(
                    "{} does not exist yet; run `checkgate init` first.",
                    path.display()
                ));
                return Ok(());
            }
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;

use menucalc::{config, Console, MenuError};

#[derive(Parser, Debug)]
#[command(name = "menucalc", version, about = "Numbered console menu for add, multiply and divide")]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("MENUCALC_LOG", "warn"))
        .init();

    let menu = config::load_menu().context("load menu")?;
    let mut console = Console::stdio();

    match menu.run(&mut console) {
        Ok(()) => {}
        Err(MenuError::InputClosed) => log::debug!("stdin closed, exiting"),
        Err(e) => return Err(e).context("run menu"),
    }

    Ok(())
}

use std::fs;
use std::io::ErrorKind;

use anyhow::{Context, Result, bail};

use comicview::paths::AppPaths;
use comicview::settings::Settings;
use comicview::{WindowController, XkcdClient};

const USAGE: &str = "usage: comicview [show|path|reset]";

fn main() -> Result<()> {
    env_logger::init();

    let command = std::env::args().nth(1);
    let paths = AppPaths::initialize()?;

    match command.as_deref() {
        None | Some("show") => {
            let settings = Settings::load(&paths)?;
            let client = XkcdClient::from_settings(&settings);
            let controller = WindowController::restore(&paths, &client);
            let json = serde_json::to_string_pretty(controller.state())
                .context("Serialize window state")?;
            println!("{json}");
        }
        Some("path") => println!("{}", paths.state_file.display()),
        Some("reset") => match fs::remove_file(&paths.state_file) {
            Ok(()) => log::info!("Removed {}", paths.state_file.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to remove {}", paths.state_file.display()));
            }
        },
        Some("-h" | "--help") => println!("{USAGE}"),
        Some(other) => bail!("unknown command {other:?}\n{USAGE}"),
    }
    Ok(())
}

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use drawpad::command::parse_script;
use drawpad::upload::UploadManager;
use drawpad::{Config, Pad};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DRAWPAD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "drawpad")]
#[command(version = VERSION, about = "Raster drawing pad driven by action scripts")]
#[command(after_help = "Each script line is one action, e.g.:\n  \
    select_tool pen\n  set_color #ff0000\n  pointer_down 10 10\n  \
    pointer_move 100 10\n  pointer_up\n  save\n\n\
    Blank lines and lines starting with '#' are ignored.")]
struct Cli {
    /// Action script to run ('-' or omitted reads stdin)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Directory to write drawing-pad-image.png to (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Export the surface after the script finishes
    #[arg(long, short = 's', action = ArgAction::SetTrue)]
    save: bool,
}

fn read_script(script: Option<&PathBuf>) -> anyhow::Result<String> {
    match script {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let source = read_script(cli.script.as_ref())?;
    let commands = parse_script(&source).context("Invalid action script")?;

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config, using defaults: {err:#}");
        Config::default()
    });

    let runtime = tokio::runtime::Runtime::new().context("Failed to start upload runtime")?;
    let mut pad = Pad::from_config(&config)?.with_uploads(UploadManager::new(runtime.handle()));
    if let Some(dir) = cli.output_dir {
        pad.set_save_directory(dir);
    }

    log::info!("Running {} actions", commands.len());
    for command in commands {
        let action = command.action().identifier();
        pad.execute(command)
            .with_context(|| format!("Action '{action}' failed"))?;
        pad.poll_uploads()?;
    }
    pad.wait_for_uploads()?;

    if cli.save {
        let path = pad.save().context("Failed to export image")?;
        println!("{}", path.display());
    }

    Ok(())
}

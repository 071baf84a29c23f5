use clap::{ArgAction, Parser, builder::PossibleValuesParser};
use pixelspace::config::Config;
use pixelspace::demos;
use pixelspace::host::{self, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pixelspace")]
#[command(version, about = "Render 2D vector drawing scenes to PNG")]
struct Cli {
    /// Scene to render
    #[arg(
        long,
        short = 's',
        default_value = "drawing",
        value_parser = PossibleValuesParser::new(demos::NAMES)
    )]
    scene: String,

    /// Output PNG path
    #[arg(
        long,
        short = 'o',
        value_name = "PNG",
        required_unless_present_any = ["init_config", "list_scenes"]
    )]
    output: Option<PathBuf>,

    /// Surface width in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Surface height in pixels (overrides config)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Number of render cycles before writing (overrides config)
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    /// Config file to use instead of ~/.config/pixelspace/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the example config to ~/.config/pixelspace/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Print the available scene names and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_scenes: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_scenes {
        for name in demos::NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let defaults = RunOptions::from_config(&config);
    let options = RunOptions {
        width: cli.width.unwrap_or(defaults.width),
        height: cli.height.unwrap_or(defaults.height),
        frames: cli.frames.unwrap_or(defaults.frames),
    };
    if options.width <= 0 || options.height <= 0 {
        return Err(anyhow::anyhow!(
            "Surface size must be positive, got {}x{}",
            options.width,
            options.height
        ));
    }

    let mut scene = demos::by_name(&cli.scene)
        .ok_or_else(|| anyhow::anyhow!("Unknown scene '{}'", cli.scene))?;
    let output = cli
        .output
        .ok_or_else(|| anyhow::anyhow!("--output is required"))?;

    log::info!("Rendering scene '{}'", cli.scene);
    host::render_to_png(scene.as_mut(), &config, options, &output)?;

    Ok(())
}

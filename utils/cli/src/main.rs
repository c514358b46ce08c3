use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use pixelstrip_cli::{terminal_strip, Action};
use pixelstrip_core::{Brightness, Config, DEFAULT_BRIGHTNESS};

/// WS2812 strip emulator
///
/// Applies a strip operation to an emulated LED strip and prints the resulting
/// frame into the terminal
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = false)]
struct Cli {
    /// The number of LEDs in the strip
    #[arg(short, long, default_value = "8")]
    num_leds: usize,
    /// Data pin the strip is connected to
    #[arg(short, long, default_value = "0")]
    pin: u8,
    /// Initial brightness of every pixel
    #[arg(short, long, default_value_t = DEFAULT_BRIGHTNESS)]
    brightness: Brightness,
    /// Seed for the random operations, the OS entropy is used by default
    #[arg(long)]
    seed: Option<u64>,
    /// Actual command
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Action(Action),
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let action = match cli.command {
        Command::Action(action) => action,
        Command::Completions { shell } => {
            shell.generate(&mut Cli::command(), &mut io::stdout());
            return Ok(());
        }
    };

    let config = Config::new(cli.num_leds)
        .with_pin(cli.pin)
        .with_brightness(cli.brightness);
    let mut strip = terminal_strip(config, io::stdout().lock(), cli.seed)?;

    log::info!("Applying {action:?} to {} LEDs", strip.num_leds());
    action.apply(&mut strip)?;
    strip.update()?;
    Ok(())
}

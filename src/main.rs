//! `railfence` command-line front end.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::Serialize;

use railfence::{CipherResult, Direction, RailFence, VisualStyle, DEFAULT_SPACE_SUBSTITUTE};

#[derive(Parser, Debug)]
#[command(name = "railfence", version, about = "Rail fence cipher")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = StyleArg::Grid,
        help = "Visualization format"
    )]
    style: StyleArg,
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_SPACE_SUBSTITUTE,
        help = "Character written in place of a space"
    )]
    substitute: char,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt {
        text: String,
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        rails: i64,
    },
    Decrypt {
        text: String,
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        rails: i64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Grid,
    Html,
}

impl From<StyleArg> for VisualStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Grid => VisualStyle::Grid,
            StyleArg::Html => VisualStyle::Html,
        }
    }
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    let _ = builder.try_init();
}

fn print_result(json: bool, direction: Direction, result: &CipherResult) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: result
            })?
        );
    } else {
        let label = match direction {
            Direction::Encrypt => "encrypted",
            Direction::Decrypt => "decrypted",
        };
        println!("result: {}", label);
        println!("plaintext: {}", result.plaintext);
        println!("ciphertext: {}", result.ciphertext);
        println!("{}", result.visualization);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (direction, text, rails) = match cli.command {
        Commands::Encrypt { text, rails } => (Direction::Encrypt, text, rails),
        Commands::Decrypt { text, rails } => (Direction::Decrypt, text, rails),
    };

    let fence = RailFence::new(rails)?
        .with_space_substitute(cli.substitute)
        .with_style(cli.style.into());
    let result = fence.apply(direction, &text)?;
    print_result(cli.json, direction, &result)
}

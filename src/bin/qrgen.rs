use clap::Parser;
use qr_symbol::encoder::data::DataEncoder;
use qr_symbol::encoder::format::FormatInfo;
use qr_symbol::render::{DotStyle, RenderOptions, save_png};
use qr_symbol::{ECLevel, SymbolGenerator, SymbolStrategy};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Encode a string into a QR-style matrix symbol")]
struct Cli {
    /// Text to encode (single-byte characters, at most 25)
    text: String,
    /// Error correction level recorded in the format information
    #[arg(long, short, default_value = "M")]
    level: ECLevel,
    /// Write a PNG image to this path
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Print the matrix as text
    #[arg(long)]
    ascii: bool,
    /// Pixels per module
    #[arg(long)]
    scale: Option<u32>,
    /// Quiet zone in modules
    #[arg(long)]
    margin: Option<u32>,
    /// Module shape: square, rounded or dots
    #[arg(long, default_value = "square")]
    style: DotStyle,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let generator = SymbolGenerator::new();
    let symbol = match generator.encode(&cli.text, cli.level) {
        Ok(symbol) => symbol,
        Err(err) => {
            let max_chars = DataEncoder::new(generator.strategy().capacity_bytes()).max_chars();
            eprintln!("Cannot generate a code for this value: {err}");
            eprintln!("Text must be at most {max_chars} characters in the range U+0000..U+00FF");
            return ExitCode::FAILURE;
        }
    };

    let (primary, _) = FormatInfo::read(&symbol.matrix);
    println!(
        "version={} size={} level={} mask={} format=0b{:015b} payload_bits={} placed_bits={} dark={}",
        symbol.version.number(),
        symbol.matrix.size(),
        symbol.ec_level,
        symbol.mask_pattern.bits(),
        primary,
        symbol.payload_bits,
        symbol.placed_bits,
        symbol.matrix.dark_count()
    );

    if cli.ascii || cli.output.is_none() {
        print!("{}", symbol.matrix.to_ascii());
    }

    if let Some(path) = cli.output {
        let defaults = RenderOptions::default();
        let options = RenderOptions {
            scale: cli.scale.unwrap_or(defaults.scale),
            margin: cli.margin.unwrap_or(defaults.margin),
            style: cli.style,
            ..defaults
        };
        if let Err(err) = save_png(&symbol.matrix, &options, &path) {
            eprintln!("Failed to write {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
        println!("Wrote {}", path.display());
    }

    ExitCode::SUCCESS
}

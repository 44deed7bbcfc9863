use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use zengray::{BmpError, GrayscaleRequest, OUTPUT_FILE_NAME, Unstoppable, render_ascii};

/// zengray: grayscale conversion for 24-bit BMP files
#[derive(Parser)]
#[command(name = "zengray")]
#[command(version, about = "Convert a 24-bit BMP to grayscale")]
#[command(long_about = "Convert an uncompressed 24-bit BMP to grayscale and write it \
    to new.bmp in the current directory. Headers are copied unchanged; only the \
    pixel data is transformed.")]
#[command(after_help = "EXAMPLES:
    # Write new.bmp next to where you run the command
    zengray photo.bmp

    # Print an ASCII-art preview instead of writing a file
    zengray --ascii photo.bmp")]
struct Cli {
    /// Input BMP file
    input: PathBuf,

    /// Print ASCII art to stdout instead of writing new.bmp
    #[arg(long)]
    ascii: bool,

    /// Do not print the header summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", diagnostic(&cli, &e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), BmpError> {
    let request = GrayscaleRequest::new(&cli.input);

    if cli.ascii {
        let bitmap = request.decode(Unstoppable)?;
        if !cli.quiet {
            println!("{}", bitmap.headers.summary());
        }
        for line in render_ascii(&bitmap.grid) {
            println!("{line}");
        }
        return Ok(());
    }

    let conversion = request.convert(Unstoppable)?;
    if !cli.quiet {
        println!("{}", conversion.headers.summary());
    }
    println!(
        "Created grayscale image of {} as {OUTPUT_FILE_NAME}",
        cli.input.display()
    );
    Ok(())
}

/// One message per error kind.
fn diagnostic(cli: &Cli, err: &BmpError) -> String {
    let input = cli.input.display();
    match err {
        BmpError::InputNotFound { source, .. } => format!("{input}: {source}"),
        BmpError::NotBmp => format!("{input}: not a BMP image"),
        BmpError::UnsupportedFormat(v) => {
            format!("{input}: not a simple 24-bit uncompressed BMP ({v})")
        }
        BmpError::TruncatedInput { .. } => format!("{input}: file is truncated ({err})"),
        BmpError::OutputWriteFailed { path, source } => format!(
            "error creating grayscale image {}: {source}",
            path.display()
        ),
        other => format!("{input}: {other}"),
    }
}

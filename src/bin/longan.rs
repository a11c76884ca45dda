use std::path::PathBuf;

use clap::Parser;
use longan::html::{self, HtmlOptions, NumberingMode};

/// Convert the body of a Word (.docx) document to an HTML fragment.
#[derive(Debug, Clone, Parser)]
#[clap(name = "longan", version)]
pub struct Args {
    /// Path to the input document
    #[clap(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the output file, stdout when omitted or `-`
    #[clap(short, long, value_name = "OUTPUT")]
    pub output: Option<String>,

    /// YAML file with conversion options
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not inline pictures
    #[clap(long)]
    pub no_images: bool,

    /// How list paragraphs are classified: parity or definitions
    #[clap(long, value_name = "MODE")]
    pub numbering: Option<NumberingMode>,

    /// Log skipped pictures and attributes
    #[clap(short, long)]
    pub verbose: bool,
}

fn options(args: &Args) -> longan::Result<HtmlOptions> {
    let mut options = match &args.config {
        Some(path) => HtmlOptions::from_yaml_str(&std::fs::read_to_string(path)?)?,
        None => HtmlOptions::default(),
    };
    if args.no_images {
        options = options.with_inline_images(false);
    }
    if let Some(mode) = args.numbering {
        options = options.with_numbering(mode);
    }
    Ok(options)
}

fn run(args: &Args) -> longan::Result<()> {
    let options = options(args)?;
    let fragment = html::convert_file(&args.input, &options)?;

    match args.output.as_deref() {
        None | Some("-") => println!("{fragment}"),
        Some(output) => std::fs::write(output, fragment)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{}: {err}", args.input.display());
        std::process::exit(1);
    }
}

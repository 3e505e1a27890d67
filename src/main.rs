use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, crate_version};
use kdcconv::image_pipeline::{
    ConversionConfig, ConversionError, KdcToBitmapPipeline, KdcToJpegExtractor, OutputFormat, TiffCompression,
};
use kdcconv::logger;

use tracing::{error, info};

fn create_app() -> Command {
    Command::new("kdcconv")
        .version(crate_version!())
        .about("Converts Kodak DC120 .kdc captures")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print debug messages"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["bmp", "tiff", "jpeg"])
                .default_value("bmp")
                .help("Output format; jpeg extracts the stream of a compressed capture"),
        )
        .arg(
            Arg::new("compression")
                .long("compression")
                .value_parser(["none", "lzw", "deflate-fast", "deflate", "deflate-best"])
                .default_value("none")
                .help("TIFF compression"),
        )
        .arg(
            Arg::new("predictor")
                .long("predictor")
                .action(ArgAction::SetTrue)
                .help("Use the horizontal differencing predictor for TIFF output"),
        )
        .arg(
            Arg::new("timings")
                .long("timings")
                .action(ArgAction::SetTrue)
                .help("Print how long each step took"),
        )
        .arg(
            Arg::new("BASENAME")
                .required(true)
                .help("Input name without extension; BASENAME.kdc is read"),
        )
}

fn parse_args() -> anyhow::Result<ArgMatches> {
    match create_app().try_get_matches() {
        Ok(matches) => Ok(matches),
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => e.exit(),
            _ => Err(ConversionError::UsageError(e.to_string()).into()),
        },
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let base = matches
        .get_one::<String>("BASENAME")
        .context("missing BASENAME")?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("bmp");
    let input = format!("{}.kdc", base);

    if format == "jpeg" {
        let output = format!("{}.jpg", base);
        info!("Extracting {} -> {}", input, output);
        KdcToJpegExtractor::new().extract_file(&input, &output)?;
        return Ok(());
    }

    let output_format: OutputFormat = format.parse().map_err(ConversionError::UsageError)?;
    let compression: TiffCompression = matches
        .get_one::<String>("compression")
        .map(String::as_str)
        .unwrap_or("none")
        .parse()
        .map_err(ConversionError::UsageError)?;

    let config = ConversionConfig::builder()
        .output_format(output_format)
        .compression(compression)
        .predictor(matches.get_flag("predictor").then_some(2))
        .build();
    let output = format!("{}.{}", base, output_format.extension());

    let pipeline = KdcToBitmapPipeline::new(config);
    info!("Converting {} -> {}", input, output);
    let timings = pipeline.convert_file_with_timings(&input, &output)?;

    if matches.get_flag("timings") {
        println!("{}", timings);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let matches = parse_args()?;
    logger::init(matches.get_flag("verbose"));

    run(&matches).inspect_err(|e| error!("Conversion failed: {:#}", e))
}

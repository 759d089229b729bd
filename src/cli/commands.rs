use crate::cli::args::{Cli, Commands};
use crate::config::{ConversionMode, ConverterConfig};
use crate::error::Result;
use crate::models::{CoordinatePair, LatLong};
use crate::processors::BatchConverter;
use crate::readers::TokenReader;
use std::io::{self, Write};
use tracing::debug;
use validator::Validate;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(&cli);

    let base_config = ConverterConfig::load(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Convert {
            lat,
            long,
            to,
            precision,
            mode,
            json,
        } => {
            let config = apply_overrides(base_config, precision, mode)?;
            let pair = CoordinatePair::new(lat, long)?;
            let result = pair.convert(to, &config)?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", result)?;
            }
        }

        Commands::Batch {
            input,
            json_input,
            to,
            precision,
            mode,
            json,
        } => {
            let config = apply_overrides(base_config, precision, mode)?;
            let reader = TokenReader::with_json(json_input);
            let tokens = match input {
                Some(path) => reader.read_path(&path)?,
                None => reader.read(io::stdin().lock())?,
            };

            let results = BatchConverter::new(config).convert(&tokens, to)?;
            write_results(&mut out, &results, json)?;
        }
    }

    Ok(())
}

/// Command-line flags take precedence over file and environment settings
fn apply_overrides(
    config: ConverterConfig,
    precision: Option<usize>,
    mode: Option<ConversionMode>,
) -> Result<ConverterConfig> {
    let mut config = config;
    if let Some(precision) = precision {
        config = config.with_precision(precision);
    }
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }

    config.validate()?;
    debug!(precision = config.precision, mode = %config.mode, "Effective configuration");
    Ok(config)
}

fn write_results<W: Write>(out: &mut W, results: &[LatLong], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(results)?)?;
    } else {
        for result in results {
            writeln!(out, "{}", result)?;
        }
    }
    Ok(())
}

/// Set up structured logging on stderr
fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coords_converter={}", cli.log_level())));

    // A subscriber may already be installed when run() is called more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", cli.log_level());
}

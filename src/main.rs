// State Faker - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/state-faker > terraform.tfstate
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/state-faker --resources 200 --outputs 20 --pctmulti 25 --summary
// ```

use anyhow::{Context, Result};
use clap::Parser;
use state_faker::generation::{LoggingConfig, LoggingError, StateAssembler};
use state_faker::state::{log_violations, DocumentStatistics};
use state_faker::types::{CliArgs, GeneratorConfig, OutputStyle};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;

/// Instance counts above this are reported before serialization starts
const LARGE_DOCUMENT_INSTANCES: usize = 100_000;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        return match GeneratorConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // Held until main returns so the file writer drains
    let _log_guard = match init_logging(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &CliArgs) -> std::result::Result<Option<WorkerGuard>, LoggingError> {
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir.clone());
    }
    logging.init()
}

fn run(args: &CliArgs) -> Result<()> {
    let config = GeneratorConfig::from_cli_args(args).context("Failed to load configuration")?;
    let style: OutputStyle = match &args.format {
        Some(format) => format.parse().map_err(anyhow::Error::msg)?,
        None => OutputStyle::default(),
    };

    info!(
        resources = config.num_resources,
        outputs = config.num_outputs,
        multi_instance_chance = config.multi_instance_chance,
        multi_instance_range = ?config.instance_range(),
        module_chance = config.module_chance,
        seed = ?config.seed,
        "starting generation"
    );

    let doc = StateAssembler::new(config).generate().context("Failed to generate state document")?;

    let instances = doc.instance_count();
    if instances > LARGE_DOCUMENT_INSTANCES {
        warn!(instances, "generated a very large document; serialization may take a while");
    }

    log_violations(&doc);

    let json = doc.to_json(style).context("Failed to serialize state document")?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write state document to '{}'", path))?;
            info!(path = %path, bytes = json.len(), "state document written");
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", json).context("Failed to write state document to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    if args.summary {
        let stats = DocumentStatistics::from_document(&doc);
        info!("{}", stats.summary());
        eprintln!("{}", stats);
    }

    Ok(())
}

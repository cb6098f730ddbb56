use clap::Parser;
use possibility::utils::{logger, validation::Validate};
use possibility::{CliConfig, Probe, ProbeConfig};
use std::io::Read;

fn load_probe_config(config: &CliConfig) -> possibility::Result<ProbeConfig> {
    let mut probe_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading probe configuration from: {}", path);
            ProbeConfig::from_file(path)?
        }
        None => ProbeConfig::named("cli"),
    };

    for path in &config.field {
        probe_config.add_field(path, config.require);
    }

    probe_config.validate()?;
    Ok(probe_config)
}

fn read_document(config: &CliConfig) -> possibility::Result<serde_json::Value> {
    let content = if config.reads_stdin() {
        tracing::debug!("Reading JSON document from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        let path = config.input.as_deref().unwrap_or("-");
        tracing::debug!("Reading JSON document from {}", path);
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&content)?)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let probe_config = match load_probe_config(&config) {
        Ok(probe_config) => probe_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let document = match read_document(&config) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let probe = Probe::new(probe_config);
    tracing::info!("🔍 Running probe '{}'", probe.config().probe.name);
    let reports = probe.inspect(&document);
    for report in &reports {
        println!("{}", report);
    }

    if let Err(e) = Probe::first_unmet(&reports) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ {} fields inspected", reports.len());
    Ok(())
}

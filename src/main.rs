use std::sync::Arc;

use devreg::config::{DEFAULT_CONFIG_PATH, load_config, print_schema};
use devreg::startup;
use devreg::utils::logger::init_logging;
use tracing::error;

// -- Entrypoint
//
// Usage: devreg [CONFIG_PATH] | devreg --print-schema

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--print-schema") {
        if let Err(e) = print_schema() {
            eprintln!("Error printing configuration schema: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let path = args.first().map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
    let config = match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = startup::run(Arc::new(config)).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

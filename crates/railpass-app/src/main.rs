//! Railpass - a desktop demonstration of the railway ticketing login
//! screen: account/phone tabs, client-drawn CAPTCHA, simulated SMS
//! countdown, and toast messages. No backend is contacted.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Railpass - railway ticketing login screen demo
#[derive(Parser, Debug)]
#[command(name = "railpass", version, about)]
struct Args {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Initialize console logging.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("railpass={log_level},warn")));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    tracing::info!("starting railpass login window");
    railpass_ui::run_login()?;
    tracing::info!("login window closed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::parse_from(["railpass"]);
        assert!(!args.debug);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn debug_flag_is_accepted() {
        let args = Args::parse_from(["railpass", "--debug"]);
        assert!(args.debug);
    }
}

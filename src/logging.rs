//! Logging setup for the portalmod binary.
//!
//! The library only emits `tracing` events; this module installs the
//! subscriber that prints them to stderr.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither flags nor `RUST_LOG` say otherwise.
const DEFAULT_FILTER: &str = "portalmod=info";

/// Map CLI flags to an `EnvFilter` directive.
///
/// `-v` enables debug, `-vv` and above enables trace, `--quiet` keeps errors
/// only. Without flags `RUST_LOG` wins over the default.
pub fn filter_directive(verbose: u8, quiet: bool) -> Option<&'static str> {
    match (quiet, verbose) {
        (_, 1) => Some("portalmod=debug"),
        (_, v) if v >= 2 => Some("portalmod=trace"),
        (true, _) => Some("portalmod=error"),
        _ => None,
    }
}

/// Whether ANSI colors should be emitted on stderr.
pub fn use_color(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_logging(verbose: u8, quiet: bool, no_color: bool) {
    let filter = match filter_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(use_color(no_color))
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

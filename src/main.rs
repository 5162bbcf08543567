//! rTimesheet main entrypoint.

use rtimesheet::run;
use rtimesheet::ui::messages;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rtimesheet=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

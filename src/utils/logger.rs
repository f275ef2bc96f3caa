use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// stdout belongs to the calculator dialogue, so every formatter writes to stderr.

fn cli_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("basic_calc=debug,warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basic_calc=warn"))
    }
}

pub fn init_cli_logger(verbose: bool, json: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let layer = if json {
        layer.json().boxed()
    } else {
        layer.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(layer)
        .init();
}

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins over `default`.
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn base_layer<S>(with_target: bool) -> fmt::Layer<S> {
    fmt::layer()
        .with_target(with_target)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        env_filter("quiz_model=debug,info")
    } else {
        env_filter("quiz_model=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(base_layer(false).compact())
        .init();
}

/// One JSON object per event, targets included so lines can be filtered downstream.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter("quiz_model=info"))
        .with(base_layer(true).json())
        .init();
}


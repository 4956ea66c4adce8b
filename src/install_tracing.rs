use miette::Context;
use miette::IntoDiagnostic;
use tracing_human_layer::HumanLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Install a human-readable `tracing` subscriber filtered by `filter_directives`.
pub fn install_tracing(filter_directives: &str) -> miette::Result<()> {
    let env_filter = EnvFilter::try_new(filter_directives)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid log filter: {filter_directives:?}"))?;

    tracing_subscriber::registry()
        .with(HumanLayer::new().with_filter(env_filter))
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(())
}

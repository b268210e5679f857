use anyhow::Result;
use postcode_census::{run, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) fixed dirs ───────────────────────────────────────────────
    let config = Config::from_env();
    info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        "startup"
    );

    // ─── 3) convert ──────────────────────────────────────────────────
    let stats = run(&config)?;
    info!(
        files = stats.files,
        accepted = stats.rows_accepted,
        "all done"
    );
    Ok(())
}

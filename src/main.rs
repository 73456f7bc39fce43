use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use filecache_harness::{cli, harness, logging, output::OutputFormatter};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let config = harness::HarnessConfig::from_args(&args);
    let cache = harness::build_cache(args.cache);

    let loaded = harness::load_suites(&config).context("Could not load test suites")?;
    let summary = harness::run_suites(&loaded, cache.as_ref());

    let rendered = OutputFormatter::format(&summary, args.format)?;
    match args.output_file {
        Some(ref path) => std::fs::write(path, &rendered)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => print!("{rendered}"),
    }

    if !summary.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}

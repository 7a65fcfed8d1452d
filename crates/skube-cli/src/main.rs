//! skube: kubectl phrased in plain words.
//!
//! Prints the structured intent for a phrase such as
//! `skube logs of web in qa` as JSON.

use chrono::Utc;
use tracing_subscriber::EnvFilter;

use skube_cli::{CliArgs, CliConfig, OutputFormat, check_intent, resolve_intent};
use skube_resolver::{PatternsCache, ResourceResolver};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    init_tracing(args.log_json);

    // ── Load config ─────────────────────────────────────────────
    let config = CliConfig::load()?;

    // ── Parse ───────────────────────────────────────────────────
    let mut intent = skube_parser::parse(&args.words);

    // ── Resolve names ───────────────────────────────────────────
    let context = args.context.as_deref().or(config.context.as_deref());
    match context {
        Some(context) if config.resolve_names => {
            let cache = config.patterns_cache()?;
            let resolver = ResourceResolver::from_cache(&cache, context);
            if PatternsCache::is_stale(resolver.patterns(), Utc::now()) {
                tracing::warn!(context, "learned patterns are missing or stale");
            }
            resolve_intent(&mut intent, &resolver);
        }
        Some(_) => tracing::debug!("name resolution disabled"),
        None => tracing::debug!("no kube context configured, skipping name resolution"),
    }

    // ── Check and print ─────────────────────────────────────────
    check_intent(&intent)?;

    let rendered = match config.output {
        OutputFormat::Json => serde_json::to_string(&intent)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&intent)?,
    };
    println!("{rendered}");

    Ok(())
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

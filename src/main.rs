// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgfind::{
    export_csv, export_json, write_summary, Catalog, FieldScope, ScoredResult, SearchConfig,
    SearchFilters,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, OutputArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "pkgfind=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    let catalog = Catalog::open(&cli.catalog)?;

    match cli.command {
        Commands::Search {
            query,
            scope,
            threshold,
            limit,
            source,
            min_price,
            max_price,
            min_data,
            max_data,
            output,
        } => {
            if query.trim().is_empty() {
                println!("Nothing to search for: the query is empty.");
                return Ok(());
            }

            let threshold = threshold.unwrap_or(match scope {
                FieldScope::Code => config.code_threshold,
                FieldScope::Name => config.name_threshold,
                FieldScope::Both => config.threshold,
            });
            let limit = limit.unwrap_or(config.limit);

            let filters = SearchFilters {
                source,
                min_price,
                max_price,
                min_data,
                max_data,
            };

            let results = if filters.is_empty() {
                catalog.search(&query, limit, threshold, scope)
            } else {
                if scope != FieldScope::Both {
                    tracing::warn!(?scope, "filtered search always matches code and name");
                }
                catalog.search_with_filters(&query, &filters, threshold, limit)
            };

            report(&format!("SEARCH \"{}\"", query), &results, &output)?;
        }

        Commands::Regex {
            pattern,
            scope,
            case_sensitive,
            limit,
            output,
        } => {
            if pattern.trim().is_empty() {
                println!("Nothing to search for: the pattern is empty.");
                return Ok(());
            }

            let limit = limit.unwrap_or(config.regex_limit);
            let results = catalog.search_regex(&pattern, scope, case_sensitive, limit)?;

            report(&format!("REGEX /{}/", pattern), &results, &output)?;
        }

        Commands::Exact { code } => match catalog.exact_match(&code) {
            Some(result) => display::print_record(&result),
            None => println!("No package with code \"{}\".", code.trim()),
        },

        Commands::Suggest { partial, limit } => {
            let limit = limit.unwrap_or(config.suggest_limit);
            let suggestions = catalog.suggest(&partial, limit);
            if suggestions.is_empty() {
                println!("No suggestions for \"{}\".", partial.trim());
            } else {
                display::print_suggestions(&partial, &suggestions);
            }
        }

        Commands::Stats => display::print_stats(&catalog.stats()),
    }

    Ok(())
}

/// Show results, then write whatever reports were asked for.
fn report(label: &str, results: &[ScoredResult], output: &OutputArgs) -> Result<()> {
    if results.is_empty() {
        println!("No packages matched.");
        let wants_files =
            output.export.is_some() || output.export_csv.is_some() || output.summary.is_some();
        if wants_files {
            println!("Nothing to export.");
        }
        return Ok(());
    }

    display::print_results(label, results);

    if let Some(path) = &output.export {
        export_json(results, path, output.include_scores)
            .with_context(|| format!("exporting to {}", path.display()))?;
        written(path);
    }
    if let Some(path) = &output.export_csv {
        export_csv(results, path, output.include_scores)
            .with_context(|| format!("exporting to {}", path.display()))?;
        written(path);
    }
    if let Some(path) = &output.summary {
        write_summary(results, path)
            .with_context(|| format!("writing summary to {}", path.display()))?;
        written(path);
    }

    Ok(())
}

fn written(path: &Path) {
    println!("✓ wrote {}", path.display());
}

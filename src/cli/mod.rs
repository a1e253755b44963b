// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pkgfind command-line interface.
//!
//! Every subcommand runs against one catalog snapshot given as the first
//! positional argument (JSON, or CSV when the file ends in `.csv`). `search`
//! and `regex` can also write their results to JSON or CSV exports and a text
//! summary. Thresholds and limits left unset fall
//! back to the `--config` file, then to the built-in defaults.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pkgfind::{FieldScope, RegexScope};

#[derive(Parser)]
#[command(
    name = "pkgfind",
    about = "Fuzzy and regex search over a telecom package catalog",
    version
)]
pub struct Cli {
    /// Catalog snapshot: JSON array of packages, or a .csv export
    pub catalog: PathBuf,

    /// JSON file with search defaults (thresholds, limits)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log query details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy search by code and/or name
    Search {
        /// What the user typed
        query: String,

        /// Fields to match: code, name, both
        #[arg(short, long, default_value = "both")]
        scope: FieldScope,

        /// Minimum similarity score (0-100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only packages from this source channel
        #[arg(long)]
        source: Option<String>,

        /// Minimum price (VND)
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price (VND)
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum data volume (GB)
        #[arg(long)]
        min_data: Option<f64>,

        /// Maximum data volume (GB)
        #[arg(long)]
        max_data: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Regular-expression search over record fields
    Regex {
        /// Pattern (unanchored; use ^ and $ to anchor)
        pattern: String,

        /// Fields to test: code, name, both, description, all
        #[arg(short, long, default_value = "both")]
        scope: RegexScope,

        /// Match case exactly
        #[arg(long)]
        case_sensitive: bool,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Look up one package by its exact code (case-insensitive)
    Exact {
        code: String,
    },

    /// Autocomplete package codes
    Suggest {
        /// Beginning (or fragment) of a code
        partial: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Catalog statistics
    Stats,
}

#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Write results to this JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write results to this CSV file
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Keep similarity_score and matched_field in the JSON and CSV exports
    #[arg(long)]
    pub include_scores: bool,

    /// Write a text summary report to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

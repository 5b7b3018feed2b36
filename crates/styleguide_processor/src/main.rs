/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use styleguide_core::{Item, Record, StyleSpec};
use styleguide_processor::{
    embedded_guide, load_guide_config, load_records, render_with, Html, OutputFormat, PlainText,
    RenderResult, StyleGuide,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "styleguide", author, version, about, long_about = None)]
struct Cli {
    /// Guide metadata file (YAML/JSON) overriding the built-in guide's
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in styles
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render records with a style
    Render {
        /// Id of the style, as shown by `list`
        #[arg(index = 1)]
        style: String,

        /// Path to the records file (YAML/JSON, one record or a list)
        #[arg(index = 2)]
        records: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the compiled items and rules of a style
    Show {
        /// Id of the style, as shown by `list`
        style: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Html,
    Plain,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Html => write!(f, "html"),
            Format::Plain => write!(f, "plain"),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let guide = load_guide(cli.config.as_deref());

    match cli.command {
        Commands::List { json } => {
            if json {
                let entries: Vec<_> = guide.entries().collect();
                print_json(&entries);
            } else {
                println!("{} ({})", guide.config().title, guide.config().id);
                for entry in guide.entries() {
                    println!(
                        "  {:<12} {:<16} {}",
                        entry.id,
                        entry.source_type,
                        entry.title
                    );
                }
            }
        }
        Commands::Render {
            style,
            records,
            format,
            json,
        } => {
            let spec = find_style(&guide, &style);
            let records = match load_records(&records) {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("Error loading records: {}", e);
                    std::process::exit(1);
                }
            };

            let results = match format {
                Format::Html => render_records::<Html>(spec, &records),
                Format::Plain => render_records::<PlainText>(spec, &records),
            };

            if json {
                print_json(&results);
            } else {
                for result in &results {
                    if result.is_ok() {
                        println!("{}", result.string);
                    } else {
                        let errors: Vec<String> =
                            result.errors.iter().map(ToString::to_string).collect();
                        println!("error: {}", errors.join("; "));
                    }
                }
            }

            if results.iter().any(|r| !r.is_ok()) {
                std::process::exit(1);
            }
        }
        Commands::Show { style, json } => {
            let spec = find_style(&guide, &style);
            if json {
                print_json(&serde_json::json!({
                    "id": spec.id(),
                    "title": spec.title(),
                    "items": spec.items(),
                    "rules": spec.rules(),
                    "inherited": spec.inherited(),
                }));
            } else {
                print_tree(spec);
            }
        }
    }
}

fn load_guide(config: Option<&Path>) -> StyleGuide {
    let mut guide = match embedded_guide() {
        Ok(guide) => guide,
        Err(e) => {
            eprintln!("Error compiling built-in styles: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(path) = config {
        match load_guide_config(path) {
            Ok(config) => {
                guide.set_config(config);
            }
            Err(e) => {
                eprintln!("Error loading guide config: {}", e);
                std::process::exit(1);
            }
        }
    }
    guide
}

fn find_style<'a>(guide: &'a StyleGuide, id: &str) -> &'a StyleSpec {
    match guide.find(id) {
        Ok(entry) => &entry.spec,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn render_records<F: OutputFormat<Output = String>>(
    spec: &StyleSpec,
    records: &[Record],
) -> Vec<RenderResult> {
    records
        .iter()
        .map(|record| render_with::<F>(spec, record))
        .collect()
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_tree(spec: &StyleSpec) {
    println!("{} ({})", spec.title(), spec.id());
    if !spec.inherited().is_empty() {
        println!("inherits: {}", spec.inherited().join(", "));
    }
    println!("items:");
    for item in spec.items() {
        match item {
            Item::Trait(t) => println!(
                "  {:>2} trait {:<14} {:<12} {:?} {:?} {:?}",
                t.order,
                t.key,
                t.kind.name(),
                t.prefix,
                t.suffix,
                t.visibility
            ),
            Item::Text(t) => println!(
                "  {:>2} text  {:<14} {:<12} {:?} {:?}",
                t.order, t.key, "", t.content, t.visibility
            ),
        }
    }
    println!("rules:");
    for rule in spec.rules() {
        match serde_json::to_string(rule) {
            Ok(text) => println!("  {}", text),
            Err(e) => eprintln!("  <unprintable rule: {}>", e),
        }
    }
    if !spec.triggers().is_empty() {
        let gates: Vec<&str> = spec.triggers().iter().map(|t| t.gate()).collect();
        println!("triggers: {}", gates.join(", "));
    }
}

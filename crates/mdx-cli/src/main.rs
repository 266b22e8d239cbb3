// Command-line interface for mdx
//
// Usage:
//  mdx init [--root DIR]                                   - Write mdx.toml and the content folder
//  mdx convert [INPUT] [-o OUTPUT] [--format html|json]    - Convert one document (default: the configured entry)
//  mdx build [--root DIR]                                  - Convert every configured source into the output folder

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mdx_config::{Config, initialize};
use mdx_engine::{
    convert_file, load_document, output_path, parse_document, render_html, write_html,
};

#[derive(Parser)]
#[command(name = "mdx", author, version, about = "Convert markdown into HTML fragments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create mdx.toml and the content folder if they are missing
    Init {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Convert one markdown document
    Convert {
        /// Markdown file; defaults to the configured entry
        input: Option<PathBuf>,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Convert every configured source into the output folder
    Build {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    /// Block nodes with kind, html, children and language
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match Cli::parse().command {
        Command::Init { root } => init(&root),
        Command::Convert {
            input,
            output,
            format,
            root,
        } => convert(&root, input, output, format),
        Command::Build { root } => build(&root),
    }
}

fn init(root: &Path) -> Result<()> {
    let outcome = initialize(root)
        .with_context(|| format!("Failed to initialize project in {}", root.display()))?;
    if outcome.created_anything() {
        println!("Initialized mdx project in {}", root.display());
    } else {
        println!("Already initialized: {}", root.display());
    }
    Ok(())
}

fn convert(
    root: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Format,
) -> Result<()> {
    let input = match input {
        Some(path) => path,
        None => Config::load(root)
            .context("Failed to load configuration")?
            .entry_path(root),
    };

    let text =
        load_document(&input).with_context(|| format!("Failed to read {}", input.display()))?;
    let doc = parse_document(&text);
    let rendered = match format {
        Format::Html => render_html(&doc.blocks),
        Format::Json => serde_json::to_string_pretty(&doc.blocks)
            .context("Failed to serialize blocks")?,
    };

    match output {
        Some(path) => {
            write_html(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("{} -> {}", input.display(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn build(root: &Path) -> Result<()> {
    let config = Config::load(root).context("Failed to load configuration")?;
    let source_root = config.base_dir(root);
    let output_root = config.output_dir(root);
    let sources = config
        .sources(root)
        .context("Failed to collect markdown sources")?;

    if sources.is_empty() {
        log::warn!("No markdown sources found under {}", source_root.display());
        return Ok(());
    }

    fs::create_dir_all(&output_root)
        .with_context(|| format!("Failed to create {}", output_root.display()))?;

    for source in &sources {
        let target = output_path(source, &source_root, &output_root)?;
        let doc = convert_file(source, &target)
            .with_context(|| format!("Failed to convert {}", source.display()))?;
        log::info!("converted {} ({} blocks)", source.display(), doc.blocks.len());
        println!("{} -> {}", source.display(), target.display());
    }
    Ok(())
}

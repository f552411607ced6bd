//! modoc CLI - modular document rendering tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use modoc::{
    parse_file, render_document, render_document_with_stats, HtmlOptions, JsonFormat,
    RenderOptions, RenderStats,
};

#[derive(Parser)]
#[command(name = "modoc")]
#[command(version)]
#[command(about = "Render modular content documents to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Emit a standalone HTML page instead of a fragment
    #[arg(long)]
    standalone: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document to all formats (HTML, text, JSON tree)
    Convert {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Emit a standalone HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,
    },

    /// Render a document to HTML
    Html {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit a standalone HTML page instead of a fragment
        #[arg(long)]
        standalone: bool,

        /// Omit slugified id attributes on headings
        #[arg(long)]
        no_anchors: bool,

        /// Class prefix for structural elements
        #[arg(long, value_name = "PREFIX", default_value = "doc-")]
        class_prefix: String,

        /// Heading used for sources blocks without one
        #[arg(long, value_name = "TEXT")]
        sources_heading: Option<String>,
    },

    /// Render a document to plain text
    Text {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Heading used for sources blocks without one
        #[arg(long, value_name = "TEXT")]
        sources_heading: Option<String>,
    },

    /// Render a document to its JSON node tree
    #[command(alias = "json")]
    Tree {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render every .json document in a directory
    Batch {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory (input directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Emit standalone HTML pages instead of fragments
        #[arg(long)]
        standalone: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            standalone,
        }) => cmd_convert(&input, output.as_deref(), standalone),
        Some(Commands::Html {
            input,
            output,
            standalone,
            no_anchors,
            class_prefix,
            sources_heading,
        }) => cmd_html(
            &input,
            output.as_deref(),
            standalone,
            no_anchors,
            &class_prefix,
            sources_heading.as_deref(),
        ),
        Some(Commands::Text {
            input,
            output,
            sources_heading,
        }) => cmd_text(&input, output.as_deref(), sources_heading.as_deref()),
        Some(Commands::Tree {
            input,
            output,
            compact,
        }) => cmd_tree(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Batch {
            input,
            output,
            standalone,
        }) => cmd_batch(&input, output.as_deref(), standalone),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), cli.standalone)
            } else {
                println!("{}", "Usage: modoc <FILE> [OUTPUT]".yellow());
                println!("       modoc --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing document...");
    let doc = parse_file(input)?;
    pb.inc(1);

    pb.set_message("Rendering tree...");
    let result = render_document_with_stats(&doc, &RenderOptions::default());
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let html_options = HtmlOptions::new().with_standalone(standalone);
    let html = modoc::render::to_html(&result.tree, &html_options);
    fs::write(output_dir.join("article.html"), &html)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = modoc::render::to_text(&result.tree);
    fs::write(output_dir.join("article.txt"), &text)?;

    let json = modoc::render::to_json(&result.tree, JsonFormat::Pretty)?;
    fs::write(output_dir.join("tree.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} article.html", "├─".dimmed());
    println!("  {} article.txt", "├─".dimmed());
    println!("  {} tree.json", "└─".dimmed());

    let stats = &result.stats;
    println!(
        "\n{} {} sections, {} words",
        "Rendered".green(),
        stats.section_count,
        stats.word_count
    );

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
    no_anchors: bool,
    class_prefix: &str,
    sources_heading: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let mut render_options = RenderOptions::new();
    if let Some(heading) = sources_heading {
        render_options = render_options.with_sources_heading(heading);
    }
    let tree = render_document(&doc, &render_options);

    let html_options = HtmlOptions::new()
        .with_standalone(standalone)
        .with_heading_anchors(!no_anchors)
        .with_class_prefix(class_prefix);
    let html = modoc::render::to_html(&tree, &html_options);

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    sources_heading: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    let mut render_options = RenderOptions::new();
    if let Some(heading) = sources_heading {
        render_options = render_options.with_sources_heading(heading);
    }
    let tree = render_document(&doc, &render_options);
    let text = modoc::render::to_text(&tree);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_tree(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let tree = render_document(&doc, &RenderOptions::default());

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = modoc::render::to_json(&tree, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), doc.block_count());

    if let Some(h1) = doc.h1() {
        println!("{}: {}", "H1".bold(), h1);
    }
    if let Some(ref seo) = doc.seo_meta {
        if let Some(ref title) = seo.meta_title {
            println!("{}: {}", "Title".bold(), title);
        }
        if let Some(ref description) = seo.meta_description {
            println!("{}: {}", "Description".bold(), description);
        }
        if let Some(ref slug) = seo.slug {
            println!("{}: {}", "Slug".bold(), slug);
        }
        if let Some(ref keyword) = seo.primary_keyword {
            println!("{}: {}", "Keyword".bold(), keyword);
        }
    }
    if let Some(name) = doc.author.as_ref().and_then(|a| a.display_name()) {
        println!("{}: {}", "Author".bold(), name);
    }
    if let Some(url) = doc.featured_image.as_ref().and_then(|i| i.source_url()) {
        println!("{}: {}", "Image".bold(), url);
    }
    if let Some(ref plan) = doc.conversion_plan {
        if let Some(ref intent) = plan.primary_intent {
            println!("{}: {}", "Intent".bold(), intent);
        }
        if !plan.cta_strategy.is_empty() {
            println!("{}: {}", "CTA strategy".bold(), plan.cta_strategy.join(", "));
        }
    }

    let unknown: Vec<&str> = doc
        .blocks
        .iter()
        .filter(|b| !b.kind.is_known())
        .map(|b| b.kind.tag())
        .collect();
    if !unknown.is_empty() {
        println!("{}: {}", "Unknown kinds".bold(), unknown.join(", "));
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let result = render_document_with_stats(&doc, &RenderOptions::default());
    let stats = &result.stats;

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "FAQ entries".bold(), stats.faq_entry_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_batch(
    input: &Path,
    output: Option<&Path>,
    standalone: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    if files.is_empty() {
        println!("{}", "No .json documents found".yellow());
        return Ok(());
    }

    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| input.to_path_buf());
    fs::create_dir_all(&output_dir)?;

    let html_options = HtmlOptions::new().with_standalone(standalone);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Rendering...");

    let outcomes: Vec<(PathBuf, Result<RenderStats, String>)> = files
        .par_iter()
        .map(|path| {
            let outcome =
                render_batch_file(path, &output_dir, &html_options).map_err(|e| e.to_string());
            pb.inc(1);
            (path.clone(), outcome)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut total = RenderStats::new();
    let mut rendered = 0usize;
    let mut failed = 0usize;
    for (path, outcome) in &outcomes {
        match outcome {
            Ok(stats) => {
                total.merge(stats);
                rendered += 1;
            }
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", "Failed".red().bold(), path.display(), e);
            }
        }
    }

    println!(
        "\n{} {} documents rendered, {} failed",
        "Summary:".green().bold(),
        rendered,
        failed
    );
    println!(
        "  {} sections, {} words total",
        total.section_count, total.word_count
    );

    if failed > 0 {
        return Err(format!("{} documents failed", failed).into());
    }

    Ok(())
}

fn render_batch_file(
    input: &Path,
    output_dir: &Path,
    html_options: &HtmlOptions,
) -> Result<RenderStats, Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let result = render_document_with_stats(&doc, &RenderOptions::default());
    let html = modoc::render::to_html(&result.tree, html_options);

    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    fs::write(output_dir.join(format!("{}.html", stem)), &html)?;

    Ok(result.stats)
}

fn cmd_version() {
    println!("{} {}", "modoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Modular document rendering tool");
    println!();
    println!("License: MIT");
}

//! docvisit CLI - document export and analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docvisit::{
    AnalyzeOptions, Document, HtmlExportVisitor, Image, JsonFormat, MarkdownExportVisitor,
    Paragraph, PdfExportVisitor, ReadingTimeVisitor, Report, Table, ValidationVisitor, Visitable,
    WordCountVisitor,
};

#[derive(Parser)]
#[command(name = "docvisit")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Export and analyze documents of paragraphs, images, and tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample report and run every visitor on it
    Demo {
        /// Print full exports instead of previews
        #[arg(long)]
        full: bool,
    },

    /// Export a document to HTML
    Html {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Escape text and attribute values
        #[arg(long)]
        escape: bool,

        /// Wrap the fragment in an <html> page with the title
        #[arg(long)]
        page: bool,
    },

    /// Export a document to PDF placeholder tokens
    Pdf {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Export a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not treat the first table row as a header
        #[arg(long)]
        no_header: bool,
    },

    /// Re-serialize a document as JSON
    Json {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show word count, reading time, and validity
    Stats {
        /// Input documents (JSON)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Reading speed in words per minute
        #[arg(long, default_value = "200", env = "DOCVISIT_WPM")]
        wpm: usize,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a document (exit code 1 when invalid)
    Validate {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print a one-line description of every element
    Show {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Demo { full }) => cmd_demo(full),
        Some(Commands::Html {
            input,
            output,
            escape,
            page,
        }) => cmd_html(&input, output.as_deref(), escape, page),
        Some(Commands::Pdf { input, output }) => cmd_pdf(&input, output.as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            no_header,
        }) => cmd_markdown(&input, output.as_deref(), no_header),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Stats { inputs, wpm, json }) => cmd_stats(&inputs, wpm, json),
        Some(Commands::Validate { input }) => cmd_validate(&input),
        Some(Commands::Show { input }) => cmd_show(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_demo(false),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// The report used by `demo`.
fn sample_document() -> Document {
    let mut doc = Document::new("Annual Report");
    doc.add_element(Paragraph::new("This is the company's annual report."));
    doc.add_element(Image::new("chart.png", 800, 600));
    doc.add_element(Table::new(2, 2));
    doc
}

/// First `max` characters of `text`, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max).collect();
    short.push_str("...");
    short
}

fn write_output(content: &str, output: Option<&Path>) -> CmdResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_demo(full: bool) -> CmdResult {
    let doc = sample_document();

    println!("{}", "Document".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Title".bold(), doc.title);
    println!("{}: {}", "Elements".bold(), doc.len());
    doc.render(&mut std::io::stdout())?;

    let mut words = WordCountVisitor::new();
    doc.accept(&mut words);

    let mut validation = ValidationVisitor::new();
    doc.accept(&mut validation);

    let mut reading = ReadingTimeVisitor::new();
    doc.accept(&mut reading);

    let mut html = HtmlExportVisitor::new();
    doc.accept(&mut html);

    let mut pdf = PdfExportVisitor::new();
    doc.accept(&mut pdf);

    println!();
    println!("{}", "Analysis".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Words".bold(), words.total_words());
    println!("{}: {}", "Valid".bold(), yes_no(validation.is_valid()));
    println!(
        "{}: {} min",
        "Reading time".bold(),
        reading.reading_time_minutes()
    );

    let (html, pdf) = if full {
        (html.into_html(), pdf.into_pdf())
    } else {
        (preview(html.html(), 200), preview(pdf.pdf(), 150))
    };

    println!();
    println!("{}", "PDF export".cyan().bold());
    println!("{}", pdf);
    println!();
    println!("{}", "HTML export".cyan().bold());
    println!("{}", html);

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>, escape: bool, page: bool) -> CmdResult {
    let doc = docvisit::load_file(input)?;

    let mut visitor = HtmlExportVisitor::new().with_escaping(escape);
    doc.accept(&mut visitor);
    let body = visitor.into_html();

    let html = if page {
        docvisit::render::wrap_html_page(&doc.title, &body)
    } else {
        body
    };

    write_output(&html, output)
}

fn cmd_pdf(input: &Path, output: Option<&Path>) -> CmdResult {
    let doc = docvisit::load_file(input)?;
    let pdf = docvisit::to_pdf_document(&doc);
    write_output(&pdf, output)
}

fn cmd_markdown(input: &Path, output: Option<&Path>, no_header: bool) -> CmdResult {
    let doc = docvisit::load_file(input)?;

    let mut visitor = MarkdownExportVisitor::new().with_header_row(!no_header);
    doc.accept(&mut visitor);

    write_output(visitor.markdown().trim_end(), output)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CmdResult {
    let doc = docvisit::load_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = docvisit::to_json(&doc, format)?;
    write_output(&json, output)
}

fn cmd_stats(inputs: &[PathBuf], wpm: usize, json: bool) -> CmdResult {
    let docs = inputs
        .iter()
        .map(docvisit::load_file)
        .collect::<docvisit::Result<Vec<_>>>()?;
    log::debug!("loaded {} documents", docs.len());

    let options = AnalyzeOptions::new().with_words_per_minute(wpm);
    let reports = docvisit::analyze_batch(&docs, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (path, report) in inputs.iter().zip(&reports) {
        print_report(path, report);
    }

    Ok(())
}

fn print_report(path: &Path, report: &Report) {
    println!("{}", "Document Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), path.display());
    println!("{}: {}", "Title".bold(), report.title);
    println!("{}: {}", "Paragraphs".bold(), report.paragraphs);
    println!("{}: {}", "Images".bold(), report.images);
    println!("{}: {}", "Tables".bold(), report.tables);
    println!("{}: {}", "Words".bold(), report.total_words);
    println!(
        "{}: {} min",
        "Reading time".bold(),
        report.reading_time_minutes
    );
    println!("{}: {}", "Valid".bold(), yes_no(report.is_valid));
    for issue in &report.issues {
        println!("  {} {}", "✗".red(), issue);
    }
    println!();
}

fn cmd_validate(input: &Path) -> CmdResult {
    let doc = docvisit::load_file(input)?;

    let mut visitor = ValidationVisitor::new();
    doc.accept(&mut visitor);

    if visitor.is_valid() {
        println!("{} {}", "Valid".green().bold(), input.display());
        return Ok(());
    }

    println!("{} {}", "Invalid".red().bold(), input.display());
    for issue in visitor.issues() {
        println!("  {} {}", "✗".red(), issue);
    }
    std::process::exit(1);
}

fn cmd_show(input: &Path) -> CmdResult {
    let doc = docvisit::load_file(input)?;
    println!("{}", doc.title.bold());
    doc.render(&mut std::io::stdout())?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn cmd_version() {
    println!("{} {}", "docvisit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document export and analysis tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_untouched() {
        assert_eq!(preview("abc", 10), "abc");
    }

    #[test]
    fn test_preview_cuts_on_char_boundary() {
        assert_eq!(preview("relatório anual", 9), "relatório...");
    }

    #[test]
    fn test_sample_document() {
        let doc = sample_document();
        assert_eq!(docvisit::word_count(&doc), 14);
        assert!(docvisit::is_valid(&doc));
    }

    #[test]
    fn test_cli_parses_stats() {
        let cli = Cli::try_parse_from(["docvisit", "stats", "a.json", "b.json", "--wpm", "100"])
            .unwrap();
        match cli.command {
            Some(Commands::Stats { inputs, wpm, json }) => {
                assert_eq!(inputs.len(), 2);
                assert_eq!(wpm, 100);
                assert!(!json);
            }
            _ => panic!("expected stats command"),
        }
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_output("<p>x</p>", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>x</p>");
    }
}

//! wikiclean - Wikipedia dump to plain text converter

use std::fs::File;
use std::io::{BufWriter, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use wikiclean::{Cleaner, Language, PageReader, page, sentences};

#[derive(Parser)]
#[command(name = "wikiclean")]
#[command(version, about = "Convert Wikipedia dumps to plain text", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikiclean enwiki.xml.gz out.txt                    One cleaned article per block
    wikiclean enwiki.xml.gz out.tsv -f sentences       Numbered sentences
    wikiclean dewiki.xml out.jsonl -l de -f jsonl      JSON lines with titles")]
struct Cli {
    /// Input dump (XML, optionally gzip-compressed)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Wiki language edition (en, de, zh)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Prepend each article's title
    #[arg(long)]
    title: bool,

    /// Keep see-also, references, and external-links sections
    #[arg(long)]
    footer: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Cleaned articles separated by blank lines
    Text,
    /// `Title.NNNN<TAB>sentence` per line
    Sentences,
    /// One JSON object per article
    Jsonl,
}

#[derive(Serialize)]
struct ArticleRecord<'a> {
    title: &'a str,
    text: &'a str,
}

#[derive(Default)]
struct Stats {
    pages: usize,
    written: usize,
    skipped_namespace: usize,
    skipped_redirect: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(stats) => {
            if !cli.quiet {
                eprintln!(
                    "{} pages read, {} written, {} non-article, {} redirects",
                    stats.pages, stats.written, stats.skipped_namespace, stats.skipped_redirect
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Stats, Box<dyn std::error::Error>> {
    let language: Language = cli.lang.parse()?;
    let cleaner = Cleaner::builder()
        .language(language)
        .with_title(cli.title && matches!(cli.format, OutputFormat::Text))
        .with_footer(cli.footer)
        .build()?;

    let mut writer = BufWriter::new(File::create(&cli.output)?);
    let mut stats = Stats::default();

    for raw in PageReader::open(&cli.input)? {
        let raw = raw?;
        stats.pages += 1;

        if !page::is_article(&raw) {
            stats.skipped_namespace += 1;
            continue;
        }
        if page::is_redirect(&raw, language) {
            stats.skipped_redirect += 1;
            continue;
        }

        let title = cleaner.title(&raw);
        let text = cleaner.clean(&raw);
        log::debug!("{title}: {} bytes", text.len());

        match cli.format {
            OutputFormat::Text => writeln!(writer, "{text}\n")?,
            OutputFormat::Sentences => {
                for record in sentences::records(&title, &text) {
                    writeln!(writer, "{record}")?;
                }
            }
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut writer, &ArticleRecord { title: &title, text: &text })?;
                writeln!(writer)?;
            }
        }
        stats.written += 1;

        if stats.pages % 10_000 == 0 {
            log::info!("{} pages processed", stats.pages);
        }
    }

    writer.flush()?;
    Ok(stats)
}

// Command-line entry point for the function_graph call-tree viewer.

use anyhow::Result;
use clap::Parser;
use ftrace_graph::application::{fill_template_at, ViewUsecase, GRAPH_PLACEHOLDER};
use ftrace_graph::infrastructure::{
    load_template, write_output, OutputFormat, TraceLoader, ViewerConfig,
};
use ftrace_graph::ports::text_renderer::DEFAULT_INDENT_STEP;
use ftrace_graph::ports::{ForestRenderer, HtmlRenderer, JsonRenderer, TextRenderer};
use ftrace_graph::{NormalizeOptions, ParseOptions};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

/// Where HTML output goes unless `--output` or the config says otherwise.
const DEFAULT_HTML_OUTPUT: &str = "graph.html";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Trace file of the function_graph tracer (/sys/kernel/debug/tracing/trace)
    trace: PathBuf,

    /// Output format (text, html, json)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// HTML page template containing the GRAPH_HTML placeholder
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file path (html defaults to graph.html, text and json to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Reject traces whose calls nest deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

    /// Spaces per nesting level in text output
    #[arg(long, value_parser = clap::value_parser!(u16))]
    indent: Option<u16>,

    /// TOML config file providing defaults for the options above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let format = cli.format.or(config.format).unwrap_or_default();
    let text = TextRenderer {
        step: cli
            .indent
            .or(config.indent)
            .map(usize::from)
            .unwrap_or(DEFAULT_INDENT_STEP),
    };
    let json = JsonRenderer { pretty: true };
    let renderer: &dyn ForestRenderer = match format {
        OutputFormat::Text => &text,
        OutputFormat::Html => &HtmlRenderer,
        OutputFormat::Json => &json,
    };

    let usecase = ViewUsecase {
        renderer,
        normalize: NormalizeOptions {
            strip_annotations: config.strip_annotations.unwrap_or(true),
        },
        parse: ParseOptions {
            max_depth: cli.max_depth.or(config.max_depth),
        },
    };

    let raw = TraceLoader::read(&cli.trace)?;
    let rendered = usecase.run(&raw)?;
    let output = cli.output.or(config.output);

    match format {
        OutputFormat::Html => {
            let template = load_template(cli.template.or(config.template).as_deref())?;
            let placeholder = config.placeholder.as_deref().unwrap_or(GRAPH_PLACEHOLDER);
            let page = fill_template_at(&template, placeholder, &rendered)?;
            let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_OUTPUT));
            write_output(&path, &page)?;
            println!("Call graph written to {}", path.display());
        }
        OutputFormat::Text | OutputFormat::Json => match output {
            Some(path) => write_output(&path, &rendered)?,
            None => {
                print!("{}", rendered);
                if !rendered.is_empty() && !rendered.ends_with('\n') {
                    println!();
                }
            }
        },
    }

    Ok(())
}

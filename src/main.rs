use std::path::PathBuf;

use anyhow::{Context, Result};
use card_config::{CardConfig, OutputFormat};
use card_ir::{SchemaSource, load_card_schema, sample_card_pretty, sample_card_source};
use card_scene::{CardRenderer, EventResult, LogSink, UiEvent, paint_text};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cardkit")]
#[command(about = "Render a JSON card schema and drive its forms")]
struct Cli {
    /// Card schema to render (defaults to the configured path, then the bundled sample)
    schema: Option<PathBuf>,

    /// Print the render tree as JSON instead of an outline
    #[arg(long)]
    json: bool,

    /// Print the bundled sample card schema and exit
    #[arg(long, conflicts_with = "schema")]
    sample: bool,

    /// Type VALUE into the input with NODE_ID before the final render
    #[arg(long = "set", value_name = "NODE_ID=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Click the button with NODE_ID after all values are set
    #[arg(long = "click", value_name = "NODE_ID")]
    click: Vec<String>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NODE_ID=VALUE, got '{raw}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.sample {
        println!("{}", sample_card_pretty());
        return Ok(());
    }

    let config = CardConfig::load();

    let filter = if config.logging.debug { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();

    let source = match cli.schema.as_ref().or(config.preview.schema_path.as_ref()) {
        Some(path) => load_card_schema(path)?,
        None => sample_card_source(),
    };
    if let SchemaSource::Broken { reason } = &source {
        log::warn!("card schema is broken: {reason}");
    }

    let mut renderer = CardRenderer::with_default_primary(config.theme.primary.clone());
    let mut sink = LogSink;
    let mut output = renderer.render(&source);

    let events = cli
        .set
        .into_iter()
        .map(|(id, value)| UiEvent::change(id, value))
        .chain(cli.click.into_iter().map(UiEvent::click));
    for event in events {
        match renderer.handle_event(&event, &mut sink) {
            EventResult::Ignored => log::warn!("event for '{}' had no effect", event.node_id()),
            EventResult::Clicked {
                submission: Some(ack),
                ..
            } => println!("{}", ack.message),
            EventResult::Clicked {
                intent: Some(intent),
                ..
            } => println!("intent: {intent}"),
            _ => {}
        }
        output = renderer.render(&source);
    }

    let format = if cli.json { OutputFormat::Json } else { config.preview.output };
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output).context("Failed to encode render tree")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", paint_text(&output)),
    }
    Ok(())
}

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use relatix_core::{CollectionMode, Config, Item, ItemStore, MemoryStore, Options, Recommender};
use relatix_engine::TfIdfEngine;

/// Assign related-item links across a content corpus
#[derive(Parser, Debug)]
#[command(name = "relatix")]
#[command(about = "Content relation engine", long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "relatix.json")]
    config: PathBuf,

    /// Path to the JSON corpus (collection name -> array of items)
    #[arg(long, default_value = "corpus.json")]
    corpus: PathBuf,

    /// Path the finalized relations are written to
    #[arg(short, long, default_value = "related.json")]
    output: PathBuf,

    /// Seed for the backfill RNG (reproducible filler draws)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_text = std::fs::read_to_string(&args.config)?;
    let options: Options = serde_json::from_str(&config_text)?;

    // The debug knob wins over --log-level.
    let log_level = if options.debug {
        Level::DEBUG
    } else {
        match args.log_level.as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting relatix v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {:?}", args.config);
    info!("Corpus: {:?}", args.corpus);

    let recommender = Recommender::new(options)?;

    let corpus_text = std::fs::read_to_string(&args.corpus)?;
    let collections: HashMap<String, Vec<Item>> = serde_json::from_str(&corpus_text)?;
    let store = MemoryStore::new();
    for (name, items) in collections {
        info!("Loaded collection '{}' with {} items", name, items.len());
        store.insert_collection(name, items);
    }

    let mut engine = TfIdfEngine::new();
    let summary = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            recommender.run(&store, &mut engine, &store, &mut rng)?
        }
        None => {
            let mut rng = rand::rng();
            recommender.run(&store, &mut engine, &store, &mut rng)?
        }
    };

    info!(
        "Pass complete: {} items, {} relations ({} fillers)",
        summary.items_processed, summary.relations_written, summary.fillers_added
    );

    let output = render_relations(recommender.config(), &store);
    std::fs::write(&args.output, serde_json::to_string_pretty(&output)?)?;
    info!("Relations written to {:?}", args.output);

    Ok(())
}

/// Collect the written relation sets back out of the store, grouped by
/// collection, each item rendered as `{"id": .., "<fieldName>": [refs]}`.
fn render_relations(config: &Config, store: &MemoryStore) -> serde_json::Value {
    let sections: Vec<(&str, &str)> = match &config.mode {
        CollectionMode::Single { type_name, .. } => {
            vec![(type_name.as_str(), config.related_field_name.as_str())]
        }
        CollectionMode::Dual {
            type_name,
            reference_type_name,
            ..
        } => vec![
            (type_name.as_str(), config.related_field_name.as_str()),
            (
                reference_type_name.as_str(),
                config.reference_related_field_name.as_str(),
            ),
        ],
    };

    let mut out = serde_json::Map::new();
    for (type_name, field_name) in sections {
        let Some(items) = store.items(type_name) else {
            continue;
        };
        let entries: Vec<serde_json::Value> = items
            .iter()
            .map(|item| {
                let targets = store.relations(type_name, &item.id, field_name);
                let mut entry = serde_json::Map::new();
                entry.insert("id".to_string(), serde_json::Value::String(item.id.clone()));
                entry.insert(
                    field_name.to_string(),
                    serde_json::to_value(targets).unwrap_or_default(),
                );
                serde_json::Value::Object(entry)
            })
            .collect();
        out.insert(type_name.to_string(), serde_json::Value::Array(entries));
    }
    serde_json::Value::Object(out)
}

// src/main.rs
//
// Terminal host: wires the session and turns typed commands into
// navigation calls. Rendering happens in event subscribers.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pokedex::application::commands::*;
use pokedex::application::error_handling::{
    DESCRIPTION_FAILED_PLACEHOLDER, DETAIL_FAILED_PLACEHOLDER, LOADING_PLACEHOLDER,
    ROSTER_FAILED_PLACEHOLDER, STATS_FAILED_PLACEHOLDER,
};
use pokedex::application::state::AppState;
use pokedex::db::{create_connection_pool, get_database_path};
use pokedex::dto::DetailView;
use pokedex::events::{
    DescriptionFailed, DescriptionResolved, DetailFailed, DetailResolved, EntrySelected,
    RosterLoadFailed, RosterLoaded,
};
use pokedex::integrations::{CatalogClient, PokeApiClient};
use pokedex::repositories::{RecordStore, SqliteRecordStore};
use pokedex::PokedexConfig;

const HELP: &str =
    "commands: n/p (step), f/b (jump 10), <id> (select), show <id>, list, stats, help, quit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // 1. CONFIGURATION & INFRASTRUCTURE
    let config = PokedexConfig::from_env();
    let db_path = match &config.database_path {
        Some(path) => path.clone(),
        None => get_database_path().context("resolving cache directory")?,
    };
    let pool = Arc::new(create_connection_pool(&db_path).context("opening record cache")?);

    let store: Arc<dyn RecordStore> =
        Arc::new(SqliteRecordStore::new(pool, config.cache_capacity_bytes));
    let client: Arc<dyn CatalogClient> =
        Arc::new(PokeApiClient::new(config.api_base_url.clone()).context("building HTTP client")?);

    // 2. APPLICATION STATE
    let state = AppState::build(config, client, store);

    // 3. PRESENTATION WIRING
    register_renderers(&state);

    // 4. SESSION START
    // A missing roster is already announced; keep the prompt alive
    let _ = state.bootstrap().await;

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        let result = match command {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "n" => step_entry(true, &state).await.map(|_| ()),
            "p" => step_entry(false, &state).await.map(|_| ()),
            "f" => jump_entries(true, &state).await.map(|_| ()),
            "b" => jump_entries(false, &state).await.map(|_| ()),
            "list" => list_entries(&state).await.map(|items| {
                for item in items {
                    println!("{} {}", item.display_id, item.name);
                }
            }),
            "stats" => get_cache_usage(&state).await.map(|usage| {
                println!(
                    "cache: {} entries, {} / {} bytes",
                    usage.entry_count, usage.used_bytes, usage.capacity_bytes
                );
            }),
            other if other.starts_with("show ") => match other[5..].trim().parse::<u32>() {
                Ok(id) => get_entry_view(id, &state).await.map(|view| print_detail(&view)),
                Err(_) => {
                    println!("{}", HELP);
                    continue;
                }
            },
            other => match other.parse::<u32>() {
                Ok(id) => {
                    println!("{}", LOADING_PLACEHOLDER);
                    select_entry(id, &state).await.map(|_| ())
                }
                Err(_) => {
                    println!("{}", HELP);
                    continue;
                }
            },
        };

        if let Err(e) = result {
            eprintln!("{}", e);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn register_renderers(state: &AppState) {
    let bus = &state.event_bus;

    bus.subscribe::<RosterLoaded, _>(|event| {
        println!("{} entries ready", event.entry_count);
    });
    bus.subscribe::<RosterLoadFailed, _>(|_| {
        println!("{}", ROSTER_FAILED_PLACEHOLDER);
    });
    bus.subscribe::<EntrySelected, _>(|event| {
        println!("-> #{:03}", event.id);
    });
    bus.subscribe::<DetailResolved, _>(|event| {
        print_detail(&DetailView::from(&event.record));
    });
    bus.subscribe::<DetailFailed, _>(|_| {
        println!("{}", DETAIL_FAILED_PLACEHOLDER);
        println!("{}", STATS_FAILED_PLACEHOLDER);
    });
    bus.subscribe::<DescriptionResolved, _>(|event| {
        println!("{}", event.text);
    });
    bus.subscribe::<DescriptionFailed, _>(|_| {
        println!("{}", DESCRIPTION_FAILED_PLACEHOLDER);
    });
}

fn print_detail(view: &DetailView) {
    println!("{} {}", view.display_id, view.name);
    println!("sprite: {} ({})", view.sprite_src, view.sprite_alt);

    let types: Vec<&str> = view.types.iter().map(|t| t.name.as_str()).collect();
    println!("types: {}", types.join(", "));

    for stat in &view.stats {
        let filled = (stat.percent / 5.0).round() as usize;
        println!(
            "{:>8} {:>3} {}",
            stat.label,
            stat.value,
            "#".repeat(filled)
        );
    }

    if let Some(cry) = &view.cry_url {
        println!("cry: {}", cry);
    }
}

// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::Write as _;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::ai::AiClient;
use crate::catalog::export;
use crate::catalog::filter::filter_records;
use crate::catalog::formatting;
use crate::catalog::paging::compute_window;
use crate::catalog::stats::aggregate;
use crate::catalog::store::RecordStore;
use crate::catalog::taxonomy::{TaxonomyKind, TaxonomyRegistry};
use crate::catalog::types::{RecordDraft, RecordPatch};
use crate::cli::{Commands, FilterArgs, TaxonomyCommand};
use crate::config::Config;
use crate::error::CatalogError;
use crate::storage::{self, FileStore};

/// Opens the persistent stores, wires change notifications back to disk
/// and dispatches the parsed command.
pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    let file_store = FileStore::open_default()?;

    let records = storage::load_records(&file_store);
    let mut taxonomy = storage::load_taxonomy(&file_store);

    let mut store = RecordStore::new(records);
    let persist_store = file_store.clone();
    store.subscribe(move |records| {
        // Persistence failures are logged, never retried; the in-memory
        // collection stays authoritative for the session.
        if let Err(e) = storage::save_records(&persist_store, records) {
            tracing::error!("failed to persist records: {}", e);
        }
    });

    match command {
        Commands::Add {
            reference,
            title,
            url,
            system,
            category,
            record_type,
            content,
            notes,
            needs_review,
            smart_id,
        } => {
            let id_hint = if smart_id {
                resolve_smart_id(&config, &reference, &title).await
            } else {
                None
            };

            register_used_values(
                &file_store,
                &mut taxonomy,
                system.as_deref(),
                category.as_deref(),
                record_type.as_deref(),
            )?;

            let record = store.create(RecordDraft {
                reference_number: reference,
                title,
                url: url.unwrap_or_default(),
                raw_content: content.unwrap_or_default(),
                private_notes: notes.unwrap_or_default(),
                system: system.unwrap_or_default(),
                category: category.unwrap_or_default(),
                record_type: record_type.unwrap_or_default(),
                needs_review,
                id_hint,
                ..Default::default()
            })?;

            println!(
                "{} {} ({})",
                "Record created:".green().bold(),
                record.title,
                record.id.bright_black()
            );
        }

        Commands::Quick { reference, title } => {
            // Instant capture: minimal fields, flagged for review so the
            // full write-up happens later.
            let record = store.create(RecordDraft {
                reference_number: reference,
                title,
                needs_review: true,
                ..Default::default()
            })?;

            println!(
                "{} {} ({})",
                "Record created:".green().bold(),
                record.title,
                record.id.bright_black()
            );
        }

        Commands::List {
            filter,
            page,
            all,
            format,
        } => {
            let spec = filter.to_spec();
            let matched = filter_records(store.list(), &spec);
            let window = compute_window(&matched, page, config.view.page_size, all);

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&window.items)?);
            } else {
                print!(
                    "{}",
                    formatting::format_record_list(&window, page, matched.len())
                );
            }
        }

        Commands::Show { id, format } => {
            let record = store
                .get(&id)
                .ok_or_else(|| CatalogError::NotFound(id.clone()))?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                print!("{}", formatting::format_record_detail(record));
            }
        }

        Commands::Edit {
            id,
            reference,
            title,
            url,
            system,
            category,
            record_type,
            content,
            summary,
            notes,
            needs_review,
            favorite,
            reusable,
            video,
        } => {
            register_used_values(
                &file_store,
                &mut taxonomy,
                system.as_deref(),
                category.as_deref(),
                record_type.as_deref(),
            )?;

            let record = store.update(
                &id,
                RecordPatch {
                    reference_number: reference,
                    url,
                    title,
                    raw_content: content,
                    summary,
                    private_notes: notes,
                    system,
                    category,
                    record_type,
                    needs_review,
                    is_favorite: favorite,
                    is_reusable: reusable,
                    has_video: video,
                },
            )?;

            println!(
                "{} {} ({})",
                "Record updated:".green().bold(),
                record.title,
                record.id.bright_black()
            );
        }

        Commands::Resolve { id } => {
            let record = store.mark_resolved(&id)?;
            println!(
                "{} {} ({})",
                "Marked as updated:".green().bold(),
                record.title,
                record.id.bright_black()
            );
        }

        Commands::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete record '{}'?", id))? {
                println!("Aborted");
                return Ok(());
            }

            if store.delete(&id) {
                println!("{} {}", "Record deleted:".green().bold(), id);
            } else {
                println!("Record '{}' not found, nothing to delete", id);
            }
        }

        Commands::Stats { filter, format } => {
            let spec = filter.to_spec();
            let matched = filter_records(store.list(), &spec);
            let stats = aggregate(&matched);

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", formatting::format_stats(&stats));
            }
        }

        Commands::Taxonomy { command } => {
            run_taxonomy(&file_store, &mut taxonomy, command)?;
        }

        Commands::Export {
            format,
            output,
            filter,
        } => {
            let spec = filter.to_spec();
            let matched = filter_records(store.list(), &spec);

            let payload = match format.as_str() {
                "csv" => export::to_csv_report(&matched),
                "json" => {
                    let owned: Vec<_> = matched.iter().map(|r| (*r).clone()).collect();
                    export::to_interchange_json(&owned)?
                }
                other => anyhow::bail!("unsupported export format '{}'", other),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, payload)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    let scope = if spec.is_empty() { "" } else { " filtered" };
                    println!(
                        "{} {}{} records to {}",
                        "Exported".green().bold(),
                        matched.len(),
                        scope,
                        path.display()
                    );
                }
                None => println!("{}", payload),
            }
        }

        Commands::Import { file, yes } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let records = export::parse_interchange_json(&raw)?;

            if !yes
                && !confirm(&format!(
                    "Replace all {} current records with {} imported ones?",
                    store.len(),
                    records.len()
                ))?
            {
                println!("Aborted");
                return Ok(());
            }

            let count = store.replace_all(records)?;
            println!("{} {} records", "Imported".green().bold(), count);
        }

        Commands::Summarize { id, apply } => {
            let record = store
                .get(&id)
                .ok_or_else(|| CatalogError::NotFound(id.clone()))?
                .clone();

            let client = AiClient::new(&config.ai)?;
            let summary = client
                .summarize(
                    &record.reference_number,
                    &record.title,
                    &record.raw_content,
                    &record.system,
                )
                .await?;

            if apply {
                store.update(
                    &id,
                    RecordPatch {
                        summary: Some(summary),
                        ..Default::default()
                    },
                )?;
                println!("{} {}", "Summary updated:".green().bold(), id);
            } else {
                println!("{}", summary);
            }
        }

        Commands::FetchTitle { url } => {
            let client = AiClient::new(&config.ai)?;
            let metadata = client.fetch_url_metadata(&url).await;

            if metadata.title.is_empty() && metadata.reference_number.is_empty() {
                println!("No metadata could be resolved for {}", url);
            } else {
                if !metadata.reference_number.is_empty() {
                    println!("Reference: {}", metadata.reference_number.bold());
                }
                if !metadata.title.is_empty() {
                    println!("Title: {}", metadata.title.bold());
                }
            }
        }

        Commands::Theme { value } => match value {
            Some(theme) => {
                storage::save_theme(&file_store, &theme)?;
                println!("Theme set to {}", theme.bold());
            }
            None => println!("{}", storage::load_theme(&file_store)),
        },
    }

    Ok(())
}

fn run_taxonomy(
    file_store: &FileStore,
    taxonomy: &mut TaxonomyRegistry,
    command: TaxonomyCommand,
) -> Result<()> {
    match command {
        TaxonomyCommand::Add { kind, value } => {
            let kind: TaxonomyKind = kind.into();
            if taxonomy.add_value(kind, &value) {
                storage::save_taxonomy(file_store, taxonomy)?;
                println!("{} '{}' to {}", "Added".green().bold(), value, kind);
            } else {
                println!("'{}' is already in {}", value, kind);
            }
        }
        TaxonomyCommand::Remove { kind, value } => {
            let kind: TaxonomyKind = kind.into();
            if taxonomy.remove_value(kind, &value) {
                storage::save_taxonomy(file_store, taxonomy)?;
                println!(
                    "{} '{}' from {} (existing records keep it)",
                    "Removed".green().bold(),
                    value,
                    kind
                );
            } else {
                println!("'{}' is not in {}", value, kind);
            }
        }
        TaxonomyCommand::List { kind } => {
            let kinds: Vec<TaxonomyKind> = match kind {
                Some(k) => vec![k.into()],
                None => vec![
                    TaxonomyKind::Systems,
                    TaxonomyKind::Categories,
                    TaxonomyKind::Types,
                ],
            };
            for kind in kinds {
                println!("{}", kind.to_string().bold());
                for value in taxonomy.values(kind) {
                    println!("  {}", value);
                }
            }
        }
    }
    Ok(())
}

/// New vocabulary values used on a record are registered at entry time;
/// this is the only place the registry is validated against.
fn register_used_values(
    file_store: &FileStore,
    taxonomy: &mut TaxonomyRegistry,
    system: Option<&str>,
    category: Option<&str>,
    record_type: Option<&str>,
) -> Result<()> {
    let mut changed = false;
    for (kind, value) in [
        (TaxonomyKind::Systems, system),
        (TaxonomyKind::Categories, category),
        (TaxonomyKind::Types, record_type),
    ] {
        if let Some(value) = value {
            if !value.trim().is_empty() && taxonomy.add_value(kind, value) {
                changed = true;
            }
        }
    }
    if changed {
        storage::save_taxonomy(file_store, taxonomy)?;
    }
    Ok(())
}

/// Network naming path for record ids. Best-effort by design: any failure
/// logs a warning and falls back to the local strategy inside the store.
async fn resolve_smart_id(config: &Config, reference: &str, title: &str) -> Option<String> {
    let client = match AiClient::new(&config.ai) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("smart id unavailable: {}", e);
            return None;
        }
    };
    match client.generate_smart_id(reference, title).await {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("smart id generation failed, using local id: {}", e);
            None
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use vault_model::{EntryId, ProcessingType};
use vault_persistence::{EntryRepository, FileStore, KeyValueStore};
use vault_transform::{apply, compute_stats, label};

use crate::cli::{ConfigArgs, IdArgs, ShowArgs, TextArgs, UpdateArgs};
use vault_cli::input::read_text;
use vault_cli::render::{entries_table, format_timestamp, stats_table, types_table};
use vault_cli::settings::Settings;

/// Repository over the configured data directory.
pub fn open_repository(settings: &Settings, store: Option<&Path>) -> EntryRepository<FileStore> {
    let dir = store.map_or_else(|| settings.data_dir(), Path::to_path_buf);
    debug!("Using entry store in {}", dir.display());
    EntryRepository::new(FileStore::new(dir)).with_namespace(settings.storage.namespace.clone())
}

pub fn run_process(args: &TextArgs, settings: &Settings) -> Result<()> {
    let text = read_text(args.text.clone(), args.file.as_deref())?;
    let selector = selected_type(args, settings);
    let _span = info_span!("process", processing_type = %selector).entered();

    let result = apply(&text, &selector);
    println!("Processing: {}", label(&selector));
    println!();
    if result.text.is_empty() {
        println!("(empty)");
    } else {
        println!("{}", result.text);
    }
    println!();
    println!("{}", stats_table(&result.stats));
    Ok(())
}

pub fn run_save<S: KeyValueStore>(
    repo: &mut EntryRepository<S>,
    args: &TextArgs,
    settings: &Settings,
) -> Result<EntryId> {
    let text = read_text(args.text.clone(), args.file.as_deref())?;
    let selector = selected_type(args, settings);
    let _span = info_span!("save", processing_type = %selector).entered();

    let entry = repo.save(&text, selector).context("save entry")?;
    println!("Saved {} ({})", entry.id(), label(entry.processing_type()));
    println!("{}", entry.processed_text());
    Ok(entry.id().clone())
}

pub fn run_list<S: KeyValueStore>(repo: &EntryRepository<S>, settings: &Settings) -> Result<()> {
    let entries = repo.list();
    if entries.is_empty() {
        println!("No entries saved yet.");
        println!("Your saved text entries will appear here.");
        return Ok(());
    }
    println!("{}", entries_table(&entries, settings.display.title_length));
    Ok(())
}

pub fn run_show<S: KeyValueStore>(repo: &EntryRepository<S>, args: &ShowArgs) -> Result<()> {
    let entry = repo
        .find_by_prefix(&args.target.id)
        .context("look up entry")?;
    let shown = if args.original {
        entry.original_text()
    } else {
        entry.processed_text()
    };

    println!("ID:         {}", entry.id());
    println!("Processing: {}", label(entry.processing_type()));
    println!("Created:    {}", format_timestamp(entry.created_at()));
    if entry.was_edited() {
        println!("Updated:    {}", format_timestamp(entry.updated_at()));
    }
    println!();
    println!("{shown}");
    println!();
    println!("{}", stats_table(&compute_stats(shown)));
    Ok(())
}

pub fn run_update<S: KeyValueStore>(
    repo: &mut EntryRepository<S>,
    args: &UpdateArgs,
) -> Result<()> {
    let entry = repo
        .find_by_prefix(&args.target.id)
        .context("look up entry")?;
    let updated = repo
        .update(entry.id(), args.processing_type.clone())
        .context("update entry")?;
    println!(
        "Updated {} ({})",
        updated.id(),
        label(updated.processing_type())
    );
    println!("{}", updated.processed_text());
    Ok(())
}

pub fn run_delete<S: KeyValueStore>(repo: &mut EntryRepository<S>, args: &IdArgs) -> Result<()> {
    let entry = repo.find_by_prefix(&args.id).context("look up entry")?;
    if repo.delete(entry.id()).context("delete entry")? {
        println!("Deleted {}", entry.id());
    }
    Ok(())
}

pub fn run_types() -> Result<()> {
    println!("{}", types_table());
    Ok(())
}

pub fn run_config(args: &ConfigArgs, settings: &Settings) -> Result<()> {
    let path = Settings::config_path();
    if args.init {
        settings
            .save_to(&path)
            .map_err(anyhow::Error::msg)
            .context("write settings")?;
        println!("Wrote {}", path.display());
        return Ok(());
    }
    println!("Settings file: {}", path.display());
    println!("Data directory: {}", settings.data_dir().display());
    println!();
    print!(
        "{}",
        toml::to_string_pretty(settings).context("render settings")?
    );
    Ok(())
}

fn selected_type(args: &TextArgs, settings: &Settings) -> ProcessingType {
    args.processing_type
        .clone()
        .unwrap_or_else(|| settings.editor.default_type.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vault_model::DigestLength;

    fn text_args(text: &str, processing_type: Option<ProcessingType>) -> TextArgs {
        TextArgs {
            text: Some(text.to_string()),
            file: None,
            processing_type,
        }
    }

    #[test]
    fn save_uses_settings_default_type() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.editor.default_type = ProcessingType::Lowercase;
        let mut repo = open_repository(&settings, Some(dir.path()));

        let id = run_save(&mut repo, &text_args("Hello World", None), &settings).unwrap();
        let entry = repo.get(&id).unwrap().unwrap();
        assert_eq!(entry.processed_text(), "hello world");
        assert_eq!(entry.processing_type(), &ProcessingType::Lowercase);
    }

    #[test]
    fn explicit_type_wins() {
        let args = text_args("x", Some(ProcessingType::Trim));
        assert_eq!(selected_type(&args, &Settings::default()), ProcessingType::Trim);
        assert_eq!(
            selected_type(&text_args("x", None), &Settings::default()),
            ProcessingType::None
        );
    }

    #[test]
    fn store_override_and_namespace() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.storage.namespace = "notes".to_string();
        let mut repo = open_repository(&settings, Some(dir.path()));
        run_save(&mut repo, &text_args("note", None), &settings).unwrap();

        assert!(dir.path().join("notes.json").exists());
    }

    #[test]
    fn update_and_delete_by_prefix() {
        let dir = tempdir().unwrap();
        let settings = Settings::default();
        let mut repo = open_repository(&settings, Some(dir.path()));
        let id = run_save(&mut repo, &text_args("Test Entry", None), &settings).unwrap();
        let prefix = id.short().to_string();

        run_update(
            &mut repo,
            &UpdateArgs {
                target: IdArgs { id: prefix.clone() },
                processing_type: ProcessingType::Sha256(DigestLength::Chars10),
            },
        )
        .unwrap();
        let entry = repo.get(&id).unwrap().unwrap();
        assert_eq!(entry.processed_text(), "6445c84d25");

        run_delete(&mut repo, &IdArgs { id: prefix }).unwrap();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn show_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let repo = open_repository(&Settings::default(), Some(dir.path()));
        let args = ShowArgs {
            target: IdArgs {
                id: "missing".to_string(),
            },
            original: false,
        };
        assert!(run_show(&repo, &args).is_err());
    }
}

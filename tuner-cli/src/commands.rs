use std::path::PathBuf;

use tracing::info;
use tuner_engine::{CatalogEngine, LoaderConfig, SourceRegistry};

use crate::cli::SourceCommand;
use crate::error::{AppError, Result};

pub async fn categories(location: &str) -> Result<()> {
    let (mut engine, _events) = CatalogEngine::new(LoaderConfig::default())?;
    engine.load(location).await?;

    for category in engine.categories() {
        println!("{category}");
    }
    Ok(())
}

pub async fn channels(
    location: &str,
    category: &str,
    search: &str,
    index: Option<usize>,
) -> Result<()> {
    let (mut engine, _events) = CatalogEngine::new(LoaderConfig::default())?;
    engine.load(location).await?;

    let shown = engine.filter(category, search);
    info!(category, search, shown, "filter applied");

    if let Some(index) = index {
        let location = engine.view().location_at(index).ok_or_else(|| {
            AppError::InvalidInput(format!("no displayed channel at index {index}"))
        })?;
        println!("{location}");
        return Ok(());
    }

    for channel in engine.view().channels() {
        println!("{}\t{}\t{}", channel.name, channel.category, channel.location);
    }
    Ok(())
}

pub fn sources(command: SourceCommand, config_dir: Option<PathBuf>) -> Result<()> {
    let path = match config_dir {
        Some(dir) => SourceRegistry::path_in(&dir),
        None => SourceRegistry::default_path(),
    };
    let mut registry = SourceRegistry::open(path);

    match command {
        SourceCommand::List => {
            for (index, entry) in registry.entries().iter().enumerate() {
                let kind = if entry.is_url { "url" } else { "file" };
                println!("{index}\t{}\t{}\t{kind}", entry.name, entry.source);
            }
        }
        SourceCommand::Add { name, source } => registry.add(name, source)?,
        SourceCommand::Edit {
            index,
            name,
            source,
        } => registry.edit(index, name, source)?,
        SourceCommand::Remove { index } => registry.remove(index)?,
    }
    Ok(())
}

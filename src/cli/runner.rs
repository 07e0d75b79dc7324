//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, HarvestArgs};
use crate::config::HarvestConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::{create_writer, FlatRecord, RecordWriter};
use crate::pagination::Collector;
use crate::types::ItemRecord;
use crate::youtube::{Target, YoutubeClient};
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Ids(args) => self.ids(&config, args).await,
            Commands::Videos(args) => self.videos(&config, args).await,
            Commands::Resolve { channel } => self.resolve(&config, channel).await,
        }
    }

    /// Load the config file (if any) and apply command-line overrides
    fn load_config(&self) -> Result<HarvestConfig> {
        let mut config = match &self.cli.config {
            Some(path) => HarvestConfig::load(path)?,
            None => HarvestConfig::default(),
        };

        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
        }
        if let Commands::Ids(args) | Commands::Videos(args) = &self.cli.command {
            if let Some(max_pages) = args.max_pages {
                config.max_pages = Some(max_pages.get());
            }
        }

        Ok(config)
    }

    fn client(config: &HarvestConfig) -> Result<YoutubeClient> {
        let api_key = config.require_api_key()?;
        let http = HttpClient::with_config(config.http_client_config())?;
        Ok(YoutubeClient::new(http, api_key).with_page_size(config.page_size))
    }

    /// Collect every video id of the target
    async fn collect_ids(
        client: &YoutubeClient,
        config: &HarvestConfig,
        target: &str,
    ) -> Result<Vec<String>> {
        let target = Target::parse(target)?;
        let collector = Collector::with_config(config.collector_config());
        client.video_ids(&target, &collector).await
    }

    async fn ids(&self, config: &HarvestConfig, args: &HarvestArgs) -> Result<()> {
        let start = Instant::now();
        let client = Self::client(config)?;

        let ids = Self::collect_ids(&client, config, &args.target).await?;
        let records: Vec<ItemRecord> = ids.into_iter().map(ItemRecord::new).collect();
        let rows = write_records(config, args, &records)?;

        info!(
            rows,
            duration_ms = start.elapsed().as_millis() as u64,
            "Harvested video ids"
        );
        Ok(())
    }

    async fn videos(&self, config: &HarvestConfig, args: &HarvestArgs) -> Result<()> {
        let start = Instant::now();
        let client = Self::client(config)?;

        let ids = Self::collect_ids(&client, config, &args.target).await?;
        let records = client.video_details(&ids).await?;
        let rows = write_records(config, args, &records)?;

        info!(
            ids = ids.len(),
            rows,
            duration_ms = start.elapsed().as_millis() as u64,
            "Harvested video details"
        );
        Ok(())
    }

    async fn resolve(&self, config: &HarvestConfig, channel: &str) -> Result<()> {
        let client = Self::client(config)?;
        let target = Target::parse(channel)?;
        let playlist_id = client.resolve(&target).await?;

        let mut out = io::stdout().lock();
        writeln!(out, "{playlist_id}")?;
        Ok(())
    }
}

/// Write records to the output file, or stdout when none is configured
fn write_records<R: FlatRecord>(
    config: &HarvestConfig,
    args: &HarvestArgs,
    records: &[R],
) -> Result<usize> {
    let path = args.output.as_deref().or(config.output.path.as_deref());
    let format = args
        .format
        .unwrap_or_else(|| config.output.format_for(path));

    match path {
        Some(path) => {
            let mut writer = create_writer::<R>(path, format)?;
            writer.write_all(records)?;
            let rows = writer.finish()?;
            info!(path = %path.display(), ?format, rows, "Wrote output file");
            Ok(rows)
        }
        None => {
            let mut writer = RecordWriter::new(io::stdout().lock(), format);
            writer.write_all(records)?;
            writer.finish()
        }
    }
}

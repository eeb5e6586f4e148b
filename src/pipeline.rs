//! Page extraction: decompress, split into pages, name, and write.

use crate::boundary::{find_records, find_title, wrap_page};
use crate::config::{ExtractConfig, ReadMode, PROGRESS_INTERVAL};
use crate::error::{ExtractError, Result};
use crate::hooks::{PassThrough, RecordTransformer, RecordWriter, XmlFileWriter};
use crate::models::{ExtractionSummary, PageOutcome};
use crate::progress::{NoProgress, ProgressObserver};
use crate::reader::{read_all, PageStream};
use crate::sanitize::make_valid_filename;
use crate::stats::ExtractionStats;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Writes every titled page of a dump to its own file under `dest`.
///
/// The transformer and writer default to [`PassThrough`] and
/// [`XmlFileWriter`]; swap them with [`Pipeline::with_transformer`] and
/// [`Pipeline::with_writer`].
pub struct Pipeline<T = PassThrough, W = XmlFileWriter> {
    dest: PathBuf,
    config: ExtractConfig,
    transformer: T,
    writer: W,
    observer: Box<dyn ProgressObserver>,
}

impl Pipeline {
    pub fn new(dest: impl AsRef<Path>) -> Self {
        Self {
            dest: dest.as_ref().to_path_buf(),
            config: ExtractConfig::default(),
            transformer: PassThrough,
            writer: XmlFileWriter,
            observer: Box::new(NoProgress),
        }
    }
}

impl<T: RecordTransformer, W: RecordWriter> Pipeline<T, W> {
    pub fn with_config(mut self, config: ExtractConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_transformer<T2: RecordTransformer>(self, transformer: T2) -> Pipeline<T2, W> {
        Pipeline {
            dest: self.dest,
            config: self.config,
            transformer,
            writer: self.writer,
            observer: self.observer,
        }
    }

    pub fn with_writer<W2: RecordWriter>(self, writer: W2) -> Pipeline<T, W2> {
        Pipeline {
            dest: self.dest,
            config: self.config,
            transformer: self.transformer,
            writer,
            observer: self.observer,
        }
    }

    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Extracts all pages of the bz2 dump at `source`.
    ///
    /// Fails fast: the first read, decode, or write error aborts the run and
    /// files written before it are left in place. In buffered mode a decode
    /// error surfaces before any page is written; in streaming mode it
    /// surfaces when the scanner reaches the bad bytes, after the pages
    /// before them have been written.
    pub fn run(&self, source: impl AsRef<Path>) -> Result<ExtractionSummary> {
        let source = source.as_ref();
        let start = Instant::now();
        let stats = ExtractionStats::new();

        match self.config.mode {
            ReadMode::Buffered => self.run_buffered(source, &stats)?,
            ReadMode::Streaming => self.run_streaming(source, &stats)?,
        }
        self.observer.finish();

        let summary = stats.summary();
        info!(
            found = summary.total_records_found,
            written = summary.records_written,
            untitled = summary.skipped_untitled,
            vetoed = summary.skipped_by_transform,
            duration_secs = start.elapsed().as_secs_f64(),
            "Extraction complete"
        );
        Ok(summary)
    }

    fn run_buffered(&self, source: &Path, stats: &ExtractionStats) -> Result<()> {
        let text = read_all(source)?;
        let records: Vec<&str> = find_records(&text).collect();
        let total = records.len() as u64;
        info!(pages = total, "Split dump into pages");

        self.prepare_dest()?;

        if self.config.parallel {
            records
                .par_iter()
                .try_for_each(|record| self.handle(record, stats, Some(total)))
        } else {
            records
                .iter()
                .try_for_each(|record| self.handle(record, stats, Some(total)))
        }
    }

    fn run_streaming(&self, source: &Path, stats: &ExtractionStats) -> Result<()> {
        let mut pages = PageStream::open(source)?;
        self.prepare_dest()?;

        if self.config.parallel {
            pages
                .par_bridge()
                .try_for_each(|page| self.handle(&page?, stats, None))
        } else {
            pages.try_for_each(|page| self.handle(&page?, stats, None))
        }
    }

    fn prepare_dest(&self) -> Result<()> {
        fs::create_dir_all(&self.dest).map_err(|e| ExtractError::io(&self.dest, e))?;
        debug!(dest = %self.dest.display(), "Output directory ready");
        Ok(())
    }

    fn handle(&self, record: &str, stats: &ExtractionStats, total: Option<u64>) -> Result<()> {
        stats.inc_found();
        let outcome = self.process_record(record)?;
        let done = stats.record(outcome);
        self.observer.on_progress(done, total);
        if done % PROGRESS_INTERVAL == 0 {
            debug!(processed = done, written = stats.written(), "Progress");
        }
        Ok(())
    }

    /// Runs one inner page record (without its `<page>` tags) through title
    /// extraction, the transformer, and the writer.
    pub fn process_record(&self, record: &str) -> Result<PageOutcome> {
        let page = wrap_page(record);
        let title = match find_title(&page) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => {
                debug!("Skipping page without title");
                return Ok(PageOutcome::Untitled);
            }
        };

        let content = match self.transformer.transform(page, &title) {
            Some(content) if !content.is_empty() => content,
            _ => {
                debug!(title = %title, "Page vetoed by transformer");
                return Ok(PageOutcome::Vetoed);
            }
        };

        let safe_name = make_valid_filename(
            &title,
            &self.config.replacement,
            self.config.max_filename_length,
        );
        self.writer.write(&content, &title, &self.dest, &safe_name)?;
        Ok(PageOutcome::Written)
    }
}

//! Wikipages: split a Wikipedia XML dump into one file per article
//!
//! This crate reads a bz2-compressed MediaWiki export (including multistream
//! dumps), finds every `<page>` element, and writes each titled page to
//! `{dest}/{title}.xml` with the title made safe for use as a filename.
//!
//! # Architecture
//!
//! - **Boundary scanning** -- Pages are located by tag matching, not by an XML
//!   parser; only the title and the raw page XML are needed
//! - **Two read modes** -- Buffered (decompress everything, then split) or
//!   streaming (scan the decompressed stream page by page in bounded memory)
//! - **Pluggable hooks** -- A [`hooks::RecordTransformer`] can rewrite or skip a
//!   page, a [`hooks::RecordWriter`] can replace the file output
//! - **Optional parallelism** -- Pages are independent once located, so they can
//!   be named and written on the rayon pool
//! - **Atomic counters** -- Every page is counted exactly once as written,
//!   untitled, or vetoed, regardless of execution order
//!
//! # Key Modules
//!
//! - [`pipeline`] -- Orchestrates decompression, splitting, naming, and writing
//! - [`boundary`] -- Page and title matching over decompressed text
//! - [`reader`] -- BZ2 decompression, whole-file and streaming
//! - [`sanitize`] -- Title to filename conversion
//! - [`hooks`] -- Transformer and writer traits with default implementations
//! - [`progress`] -- Progress observer trait and terminal progress bar
//! - [`stats`] -- Thread-safe counters for a run
//! - [`models`] -- Per-page outcome and run summary
//! - [`config`] -- Constants and runtime options
//! - [`error`] -- Error type
//!
//! # Example Usage
//!
//! ```bash
//! wikipages enwiki-latest-pages-articles-multistream.xml.bz2 pages/
//!
//! # Bounded memory, pages written on all cores
//! wikipages --streaming --parallel enwiki-latest-pages-articles-multistream.xml.bz2 pages/
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod reader;
pub mod sanitize;
pub mod stats;

pub use error::{ExtractError, Result};
pub use models::ExtractionSummary;
pub use pipeline::Pipeline;

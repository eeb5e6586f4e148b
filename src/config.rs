/// Opening tag of a page element
pub const PAGE_OPEN: &str = "<page>";

/// Closing tag of a page element
pub const PAGE_CLOSE: &str = "</page>";

/// Default upper bound on a sanitized filename, in characters
pub const DEFAULT_MAX_FILENAME_LENGTH: usize = 128;

/// Default substitute for characters that are not allowed in filenames
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Extension of every written page file
pub const OUTPUT_EXTENSION: &str = "xml";

/// Buffer size for the decompressed reader (256KB)
pub const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Progress update interval (debug log every N pages)
pub const PROGRESS_INTERVAL: u64 = 1000;

/// How the decompressed dump is fed to the boundary scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Decompress the whole dump into memory, then split it.
    #[default]
    Buffered,
    /// Scan the decompressed stream incrementally, one page at a time.
    Streaming,
}

/// Runtime options for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub replacement: String,
    pub max_filename_length: usize,
    pub mode: ReadMode,
    /// Process pages on the rayon pool.
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT.to_string(),
            max_filename_length: DEFAULT_MAX_FILENAME_LENGTH,
            mode: ReadMode::Buffered,
            parallel: false,
        }
    }
}

//! Link extractor engine: export decoding, extraction, folder scan and saving.
mod discover;
mod document;
mod extract;
mod persist;
mod types;

pub use discover::{find_json_files, has_json_suffix, DiscoverError, JSON_SUFFIX};
pub use document::{
    ExportDocument, Message, MessageText, TextFragment, TypedFragment, LINK_FRAGMENT_TYPE,
};
pub use extract::{extract_file, extract_urls, ExtractError};
pub use persist::{
    format_url_list, read_url_list, with_default_extension, write_url_list, PersistError,
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_FILENAME,
};
pub use types::{ExtractionReport, FailurePolicy, UrlSet};

//! BFHL Client Common Library
//!
//! CLIとデスクトップアプリで共有される型とユーティリティ

pub mod config;
pub mod error;
pub mod parser;
pub mod render;
pub mod types;

pub use config::{Config, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::{Error, Result};
pub use parser::{decode_response, parse_data_array};
pub use render::{filtered_lines, image_details, pretty_json, FilterOption, ImageDetails};
pub use types::{BfhlResponse, ImageAttachment, SubmissionParts};

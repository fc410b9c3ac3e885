pub mod export;
pub mod pipeline;
pub mod project;
pub mod prompt;
pub mod reshape;
pub mod score;

pub use export::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME_TYPE, to_csv_bytes};
pub use pipeline::{NormalizeOutcome, normalize_columns};
pub use project::project;
pub use prompt::{SYSTEM_PROMPT, build_instruction, parse_reply, request_mapping, validate_mapping};
pub use reshape::reshape;
pub use score::confidence;

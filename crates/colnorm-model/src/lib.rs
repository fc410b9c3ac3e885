pub mod confidence;
pub mod error;
pub mod frame;
pub mod generate;
pub mod mapping;

pub use confidence::ConfidenceRecord;
pub use frame::{any_to_string, format_numeric};
pub use error::{NormalizeError, Result};
pub use generate::TextGenerator;
pub use mapping::{CanonicalMapping, MappingEntry, keys};

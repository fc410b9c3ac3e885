pub mod error;
pub mod excel;
pub mod load;
pub mod preprocess;

pub use error::IngestError;
pub use load::load_table;
pub use preprocess::drop_blank;

pub mod builder;
pub mod name_lists;
pub mod reader;

pub use builder::{DocumentBuilder, DocumentOptions};
pub use name_lists::INTAKE_STANDARD_NAMES;
pub use reader::{load_document, parse_document, ParsedDocument, UserDefinitionFood};

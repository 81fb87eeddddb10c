pub mod parser;
pub mod types;

pub use parser::{encode_component, parse_query_string, to_query_string};
pub use types::QueryParams;

//! Schema model for declarative cards.
//!
//! A card is a JSON document: a title, an optional theme, and an ordered body
//! of component nodes. Nodes are read leniently so a single malformed entry
//! never invalidates the rest of the document.

pub mod card;
pub mod schema;

pub use card::{
    CardSchema, CardTheme, Category, ComponentConfig, ComponentKind, DEFAULT_PRIMARY, Props,
};
pub use schema::{
    SAMPLE_CARD_JSON, SchemaError, SchemaSource, load_card_schema, parse_card_schema,
    sample_card_pretty, sample_card_schema, sample_card_source,
};

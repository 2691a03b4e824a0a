//! Parser adapter for Rill.
//!
//! The grammar driver is table-generated and external to this workspace;
//! this crate supplies the two things it needs from the front-end: a
//! numeric symbol feed ([`TokenSupply`]) and an error sink, both
//! implemented by [`ParseSession`] on top of the lexer.
//!
//! There are no lexical decisions here. Every token kind maps to exactly
//! one symbol code, and error context is rendered from the lexer's token
//! history at the moment the driver reports.

mod session;
pub mod symbol;

pub use session::{ParseSession, SemanticValue, TokenSupply};

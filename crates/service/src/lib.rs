//! Service layer providing the auto resource operations on top of models.
//! - Request bodies are parsed into explicit input types and validated before storage is touched.
//! - Each repository call runs inside its own transaction.

pub mod errors;
pub mod auto;
#[cfg(test)]
pub mod test_support;

pub mod errors;
pub mod db;
pub mod auto;

#[cfg(test)]
mod tests;

pub mod db;
pub mod errors;
pub mod feedback;
pub mod product;
pub mod user;

#[cfg(test)]
mod tests;

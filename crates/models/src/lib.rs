pub mod errors;
pub mod db;
pub mod example;

#[cfg(test)]
mod tests;

/// CRUD tests for the example table, run against in-memory SQLite
pub mod example_tests;

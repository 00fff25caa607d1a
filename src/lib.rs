//! Runs a fixed sequence of CRUD queries, aggregation pipelines and index
//! creation against a MongoDB collection of books, printing each result.

pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod queries;
pub mod report;
pub mod runner;
pub mod seed;

pub mod export;
pub mod health;
pub mod models;
pub mod summarize;

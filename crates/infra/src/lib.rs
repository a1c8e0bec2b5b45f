pub mod blocking;
pub mod db;
pub mod models;
pub mod repos;

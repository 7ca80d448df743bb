#![forbid(unsafe_code)]

pub mod local_store;
pub mod repository;
pub mod sqlite;

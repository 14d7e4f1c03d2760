pub mod repository;
pub mod rest;

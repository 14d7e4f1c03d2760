pub mod auth;
pub mod event;
pub mod user;

#[cfg(test)]
pub(crate) mod support;

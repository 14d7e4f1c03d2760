pub mod guard;
pub mod model;
pub mod session;
pub mod workflow;

pub mod user_service;
pub use user_service::{UserError, UserService};

pub mod user_service_impl;
pub use user_service_impl::InMemoryUserService;

pub mod validation;

pub mod applications;
pub mod auth;
pub mod blog;
pub mod jobs;
pub mod products;
pub mod projects;
pub mod services;

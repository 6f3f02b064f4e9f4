//! # E-commerce API
//!
//! Customer registration and Pix payment charges over a versioned REST API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, value objects and repository contracts
//! - **application**: Command bus, use-case handlers and DTOs
//! - **infrastructure**: SQLite storage (SeaORM) and in-memory storage
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy and the shutdown/cancellation signal

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;

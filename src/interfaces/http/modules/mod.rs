pub mod api_version;
pub mod customers;
pub mod health;
pub mod metrics;
pub mod payments;
pub mod request_id;

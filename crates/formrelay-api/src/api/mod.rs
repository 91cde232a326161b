/// API endpoint modules
pub mod relay;

pub mod config;
pub mod error;
pub mod module;
pub mod normalize;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use module::Module;

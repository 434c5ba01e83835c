pub mod config_service;
pub mod legislative_service;

pub use config_service::ConfigService;
pub use legislative_service::{BillDocument, LegislativeService};

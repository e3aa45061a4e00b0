mod service_service;

pub use service_service::ServiceService;

mod service;

pub use service::{NewService, Service, ServiceStatus, ServiceWithRelations};

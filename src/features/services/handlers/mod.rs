pub mod service_handler;

pub use service_handler::{__path_create_service, __path_list_services, create_service, list_services};

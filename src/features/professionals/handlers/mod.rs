pub mod professional_handler;

pub use professional_handler::{
    __path_create_professional, __path_list_professionals, create_professional, list_professionals,
};

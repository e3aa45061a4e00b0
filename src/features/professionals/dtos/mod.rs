mod professional_dto;

pub use professional_dto::{CreateProfessionalDto, ProfessionalResponseDto};

mod service_dto;

pub use service_dto::{
    CreateServiceDto, RelatedCategoryDto, RelatedProfessionalDto, ServiceListItemDto,
    ServiceResponseDto,
};

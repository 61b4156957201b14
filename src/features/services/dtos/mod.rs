mod service_dto;

pub use service_dto::{
    CreateServiceDto, PriceOptionDto, PriceOptionResponseDto, ServiceResponseDto, UpdateServiceDto,
};

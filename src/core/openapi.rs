use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::services::{dtos as services_dtos, handlers as services_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::login,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Services
        services_handlers::create_service,
        services_handlers::list_services,
        services_handlers::update_service,
        services_handlers::delete_service,
    ),
    components(schemas(
        auth_dtos::LoginDto,
        auth_dtos::LoginResponseDto,
        categories_dtos::UpsertCategoryDto,
        categories_dtos::CategoryResponseDto,
        services_dtos::CreateServiceDto,
        services_dtos::UpdateServiceDto,
        services_dtos::PriceOptionDto,
        services_dtos::ServiceResponseDto,
        services_dtos::PriceOptionResponseDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "categories", description = "Category management"),
        (name = "services", description = "Service and price option management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Overrides the generated info block with runtime-configured values
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

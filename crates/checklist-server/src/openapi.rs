use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checklist API",
        version = "0.1.0",
        description = "Create, list, update and delete checklist items."
    ),
    paths(
        crate::routes::root,
        crate::routes::health,
        crate::routes::create_item,
        crate::routes::list_items,
        crate::routes::get_item,
        crate::routes::update_item,
        crate::routes::delete_item,
    ),
    components(schemas(
        crate::dto::ItemPayload,
        crate::dto::ItemResponse,
        crate::dto::MessageResponse,
        crate::dto::GreetingResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "items", description = "Checklist item management"),
        (name = "system", description = "Greeting and health status"),
    )
)]
pub struct ApiDoc;

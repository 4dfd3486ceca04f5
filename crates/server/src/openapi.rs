use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct TodoDoc {
    pub id: i32,
    pub content: String,
    pub completed: bool,
}

#[derive(utoipa::ToSchema)]
pub struct CreateTodoInputDoc {
    pub content: String,
    pub completed: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateTodoInputDoc {
    pub id: i32,
    pub content: String,
    pub completed: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list,
        crate::routes::todos::create,
        crate::routes::todos::update,
        crate::routes::todos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            CreateTodoInputDoc,
            UpdateTodoInputDoc,
            MessageResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todo")
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Auto not found")]
    pub error: String,
}

#[derive(ToSchema)]
pub struct AutoDoc {
    /// The ID of the auto
    #[schema(example = 1)]
    pub auto_id: i32,
    /// The name of the parking location
    #[schema(example = "Test Parking")]
    pub parking_name: Option<String>,
    /// The price for parking
    #[schema(example = 5.0)]
    pub parking_price: Option<f64>,
}

#[derive(ToSchema)]
pub struct CreateAutoRequest {
    #[schema(example = "Test Parking")]
    pub parking_name: String,
    #[schema(example = 5.0)]
    pub parking_price: f64,
}

#[derive(ToSchema)]
pub struct UpdateAutoRequest {
    pub parking_name: Option<String>,
    pub parking_price: Option<f64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::autos::list,
        crate::routes::autos::get,
        crate::routes::autos::create,
        crate::routes::autos::replace,
        crate::routes::autos::patch,
        crate::routes::autos::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            AutoDoc,
            CreateAutoRequest,
            UpdateAutoRequest,
            crate::routes::autos::AutoIdResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "auto", description = "Parking allocation records")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_auto_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/auto"));
        assert!(paths.iter().any(|p| p.as_str() == "/auto/{auto_id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}

use chrono::{DateTime, FixedOffset};
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct RecordDoc {
    pub id: String,
    pub createdAt: DateTime<FixedOffset>,
    pub updatedAt: DateTime<FixedOffset>,
}

#[derive(ToSchema)]
pub struct AllEnvelopeDoc {
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "success")]
    pub message: String,
    pub data: Vec<RecordDoc>,
}

#[derive(ToSchema)]
pub struct PushInputDoc {
    /// 3 to 5 characters after trimming
    #[schema(example = "abcd")]
    pub id: String,
}

#[derive(ToSchema)]
pub struct PushedIdDoc { pub id: String }

#[derive(ToSchema)]
pub struct PushOutputDoc {
    #[schema(example = "OK")]
    pub code: String,
    #[schema(example = "success")]
    pub message: String,
    pub data: PushedIdDoc,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    #[schema(example = "CONFLICT")]
    pub code: String,
    #[schema(example = "invalid_length")]
    pub kind: String,
    #[schema(example = "id must not be more than 5 characters of length")]
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::example::secret,
        crate::routes::example::all,
        crate::routes::example::push,
    ),
    components(
        schemas(
            HealthResponse,
            RecordDoc,
            AllEnvelopeDoc,
            PushInputDoc,
            PushedIdDoc,
            PushOutputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "secret"),
        (name = "all"),
        (name = "push")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_rest_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/secret", "/all", "/push"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
        let json = doc.to_json().unwrap();
        assert!(json.contains("createdAt"));
    }
}

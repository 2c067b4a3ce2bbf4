use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

/// Plain-text detail message carried by every error response.
#[derive(Serialize, Debug)]
pub struct ApiError {
    detail: String,
}

#[derive(Debug)]
pub(crate) struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, detail: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { detail }),
            status,
        }
    }

    pub(crate) fn not_found(detail: String) -> ErrorResponse<ApiError> {
        ErrorResponse::new(Status::NotFound, detail)
    }

    pub(crate) fn internal(detail: String) -> ErrorResponse<ApiError> {
        ErrorResponse::new(Status::InternalServerError, detail)
    }
}

impl<'r, T: serde::Serialize> Responder<'r, 'r> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use thiserror::Error;
use wine_shop_engine::traits::{BasketApiError, CatalogApiError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("Not enough stock. {0}")]
    InsufficientStock(String),
    #[error("Invalid quantity. {0}")]
    InvalidQuantity(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientStock(_) => StatusCode::CONFLICT,
            Self::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": self.to_string() }).to_string())
    }
}

impl From<CatalogApiError> for ServerError {
    fn from(e: CatalogApiError) -> Self {
        match e {
            CatalogApiError::WineNotFound(_) => Self::NoRecordFound(e.to_string()),
            CatalogApiError::DatabaseError(_) => Self::BackendError(e.to_string()),
        }
    }
}

impl From<BasketApiError> for ServerError {
    fn from(e: BasketApiError) -> Self {
        match e {
            BasketApiError::BasketNotFound(_) | BasketApiError::WineNotFound(_) | BasketApiError::ItemNotFound(_) => {
                Self::NoRecordFound(e.to_string())
            },
            BasketApiError::InsufficientStock { .. } => Self::InsufficientStock(e.to_string()),
            BasketApiError::InvalidQuantity(_) => Self::InvalidQuantity(e.to_string()),
            BasketApiError::DatabaseError(_) => Self::BackendError(e.to_string()),
        }
    }
}

/* This file is part of the FreeTube Downloader project
*
*  Copyright (C) 2026 FreeTube Downloader contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::{borrow::Cow, fmt::{Debug, Display}};

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use cloneable_errors::ErrorContext;
use freetube_api::ErrorResponse;
use log::{debug, error};

/// An error returned to the client as `{"error": message}`.
///
/// `cause` only ever ends up in the logs.
pub struct Error {
    status: StatusCode,
    message: Cow<'static, str>,
    cause: Option<ErrorContext>,
}

impl Error {
    pub fn bad_request<M: Into<Cow<'static, str>>>(message: M) -> Error {
        Error { status: StatusCode::BAD_REQUEST, message: message.into(), cause: None }
    }

    pub fn internal<M: Into<Cow<'static, str>>>(message: M, cause: ErrorContext) -> Error {
        Error { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into(), cause: Some(cause) }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cause {
            Some(ref cause) => write!(f, "{}: {}\n\n{cause:?}", self.status, self.message),
            None => write!(f, "{}: {}", self.status, self.message),
        }
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
impl From<ErrorContext> for Error {
    fn from(value: ErrorContext) -> Self {
        Error::internal("Internal server error", value)
    }
}
impl std::error::Error for Error {}
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        if self.status.is_server_error() {
            error!("{self:?}");
        } else if let Some(ref cause) = self.cause {
            debug!("Rejected request ({}): {cause:?}", self.message);
        }
        HttpResponse::build(self.status).json(ErrorResponse { error: self.message.to_string() })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A helper trait for attaching the client-facing message to an internal error stack
pub trait PublicContext<T> {
    fn public<M: Into<Cow<'static, str>>>(self, status: StatusCode, message: M) -> Result<T>;
}

impl<T> PublicContext<T> for std::result::Result<T, ErrorContext> {
    fn public<M: Into<Cow<'static, str>>>(self, status: StatusCode, message: M) -> Result<T> {
        self.map_err(|cause| Error { status, message: message.into(), cause: Some(cause) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use cloneable_errors::anyhow;

    use super::*;

    #[actix_web::test]
    async fn cause_stays_out_of_the_body() {
        let err = Err::<(), ErrorContext>(anyhow!("ERROR: secret stderr line"))
            .public(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.");
        let err = err.unwrap_err();
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.error, "Something went wrong.");
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = Error::bad_request("nope");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "nope");
    }
}

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

use std::future::{ready, Ready};

use actix_web::{body::{BoxBody, EitherBody}, dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, error::Error, http::{header::{self, HeaderValue}, Method}, HttpResponse};
use futures::{future::LocalBoxFuture, FutureExt};

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const PREFLIGHT_MAX_AGE: &str = "86400";

/// Lets the UI call the API from a different origin.
///
/// Preflight requests are answered directly, every other response gets the
/// `Access-Control-Allow-Origin` header appended.
#[derive(Clone)]
pub struct Cors {
    allow_origin: HeaderValue,
}

impl Cors {
    pub fn new(allow_origin: HeaderValue) -> Cors {
        Cors { allow_origin }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsInstance<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsInstance { service, allow_origin: self.allow_origin.clone() }))
    }
}

pub struct CorsInstance<S> {
    service: S,
    allow_origin: HeaderValue,
}

impl<S, B> Service<ServiceRequest> for CorsInstance<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let allow_origin = self.allow_origin.clone();

        if req.method() == Method::OPTIONS && req.headers().contains_key(header::ACCESS_CONTROL_REQUEST_METHOD) {
            let allow_headers = req.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .cloned()
                .unwrap_or(HeaderValue::from_static("Content-Type"));
            let resp = HttpResponse::NoContent()
                .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin))
                .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
                .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, allow_headers))
                .insert_header((header::ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE))
                .finish();
            return ready(Ok(req.into_response(resp).map_into_right_body())).boxed_local();
        }

        let srv = self.service.call(req);

        async move {
            let mut resp = srv.await?;
            resp.headers_mut().insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
            Ok(resp.map_into_left_body())
        }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use super::*;

    #[actix_web::test]
    async fn answers_preflight() {
        let app = test::init_service(
            App::new()
                .wrap(Cors::new(HeaderValue::from_static("*")))
                .route("/fetch-info", web::post().to(HttpResponse::Ok))
        ).await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/fetch-info")
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "content-type");
    }

    #[actix_web::test]
    async fn tags_regular_responses() {
        let app = test::init_service(
            App::new()
                .wrap(Cors::new(HeaderValue::from_static("http://localhost:5173")))
                .route("/", web::get().to(HttpResponse::Ok))
        ).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "http://localhost:5173");
    }
}

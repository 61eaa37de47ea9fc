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

use std::{future::{ready, Ready}, time::{Duration, Instant}};

use actix_web::{dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, error::{Error, HttpError}};
use futures::{future::LocalBoxFuture, FutureExt};
use log::error;

use crate::utils::HeaderMapExt;

/// Adds an `X-Time-Spent` header with the time spent producing the response head
///
/// Always adds it, the app wraps this in `Condition` driven by `enable_timings_header`
/// so no config is read per request.
pub struct Timings;

impl<S, B> Transform<S, ServiceRequest> for Timings
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingsInstance<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingsInstance { service }))
    }
}

pub struct TimingsInstance<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TimingsInstance<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let srv = self.service.call(req);

        async move {
            let mut resp = srv.await?;
            let headers = resp.headers_mut();
            if let Err(e) = headers.append_header(("X-Time-Spent", format!("{} ns", render_duration(start.elapsed())))) {
                error!("Failed to append the X-Time-Spent header: {}", HttpError::from(e));
            }

            Ok(resp)
        }.boxed_local()
    }
}

/// Nanoseconds, in groups of three digits
fn render_duration(duration: Duration) -> String {
    let digits = duration.as_nanos().to_string();
    let mut rendered = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            rendered.push(' ');
        }
        rendered.push(c);
    }
    rendered
}

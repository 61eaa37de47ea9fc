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

#![allow(clippy::needless_pass_by_value)]
use actix_web::{get, http::{header::{ContentDisposition, DispositionParam, DispositionType}, StatusCode}, post, web, HttpResponse};
use cloneable_errors::ResContext;
use freetube_api::{DownloadQuery, FetchInfoRequest, OnlineResponse, StatusResponse, VideoMetadata};
use freetube_metadata::{normalize, parse_record};
use log::info;

use crate::{constants::*, errors::{self, Error, PublicContext}, extractor::{DownloadKind, Extractor}, state::AppConfig, utils};

type JsonResult<T> = errors::Result<web::Json<T>>;

/// Routes served both at the root and under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_status)
       .service(fetch_info)
       .service(download);
}

#[get("/")]
pub async fn online() -> web::Json<OnlineResponse> {
    web::Json(OnlineResponse {
        status: "Online".to_owned(),
        message: ONLINE_MESSAGE.to_owned(),
    })
}

#[get("/status")]
async fn get_status(config: web::Data<AppConfig>, extractor: web::Data<Extractor>) -> JsonResult<StatusResponse> {
    Ok(web::Json(StatusResponse {
        server_version: Some(env!("CARGO_PKG_VERSION").to_owned()),
        server_startup_timestamp: Some(config.startup_timestamp.timestamp()),
        extractor: Some(extractor.binary().display().to_string()),
    }))
}

#[post("/fetch-info")]
async fn fetch_info(extractor: web::Data<Extractor>, body: Option<web::Json<FetchInfoRequest>>) -> JsonResult<VideoMetadata> {
    let Some(url) = body
        .and_then(|b| b.into_inner().url)
        .filter(|url| !url.is_empty() && utils::is_youtube_url(url)) else {
        return Err(Error::bad_request(INVALID_URL_MSG));
    };

    let output = extractor.dump_json(&url).await
        .public(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED_MSG)?;
    let record = parse_record(&output)
        .context("Failed to parse the extractor output")
        .public(StatusCode::INTERNAL_SERVER_ERROR, PROCESS_FAILED_MSG)?;

    let metadata = normalize(&record);
    info!("Fetched info for {} ({} formats offered, cc: {})", metadata.id, metadata.formats.len(), metadata.is_cc);
    Ok(web::Json(metadata))
}

#[get("/download")]
async fn download(extractor: web::Data<Extractor>, query: web::Query<DownloadQuery>) -> errors::Result<HttpResponse> {
    let DownloadQuery { url, format_id, title } = query.into_inner();
    let (Some(url), Some(format_id)) = (url.filter(|u| !u.is_empty()), format_id.filter(|f| !f.is_empty())) else {
        return Err(Error::bad_request(MISSING_DOWNLOAD_PARAMS_MSG));
    };

    let kind = DownloadKind::for_format(&format_id);
    let filename = format!("{}.{}", utils::safe_filename_stem(title.as_deref()), kind.extension());
    let stream = extractor.stream(&url, &format_id)
        .public(StatusCode::INTERNAL_SERVER_ERROR, DOWNLOAD_FAILED_MSG)?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .content_type(kind.content_type())
        .streaming(stream))
}

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

use std::{fs::{File, Permissions, set_permissions}, io::{Read, Write, self}, os::unix::prelude::PermissionsExt};
use actix_files::Files;
use actix_web::{HttpServer, App, web, http::header::HeaderValue, middleware::{Condition, NormalizePath}};
use anyhow::{Context, bail};
use env_logger::Env;
use log::info;

mod constants;
mod errors;
mod extractor;
mod middleware;
mod routes;
mod state;
mod utils;
use extractor::Extractor;
use middleware::{cors::Cors, timings::Timings};
use state::*;

const CONFIG_PATH: &str = "config.toml";

/// Registers all routes and shared state
pub fn configure_app(config: web::Data<AppConfig>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let extractor = web::Data::new(Extractor::from(&config.extractor));
        cfg.app_data(config.clone())
            .app_data(extractor)
            .service(routes::online)
            .configure(routes::configure)
            .service(web::scope("/api")
                .configure(routes::configure)
            );
        if let Some(ref path) = config.static_content_path {
            cfg.service(
                Files::new("/app", path)
                    .index_file("index.html")
            );
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config: web::Data<AppConfig> = web::Data::new(match File::open(CONFIG_PATH) {
        Ok(mut file) => {
            let mut contents = String::new();
            file.read_to_string(&mut contents).with_context(|| format!("Failed to read {CONFIG_PATH}"))?;
            let cfg: AppConfig = toml::from_str(&contents).with_context(|| format!("Failed to deserialize contents of {CONFIG_PATH}"))?;
            if cfg.listen.tcp.is_none() && cfg.listen.unix.is_none() {
                bail!("Invalid configuration - no tcp port or unix socket path specified");
            }
            cfg
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let cfg = AppConfig::default();
            let serialized = toml::to_string(&cfg).context("Failed to serialize default AppConfig as TOML")?;
            let mut file = File::options().write(true).create_new(true).open(CONFIG_PATH).with_context(|| format!("Failed to create {CONFIG_PATH}"))?;
            write!(file, "{serialized}").with_context(|| format!("Failed to write serialized default AppConfig to {CONFIG_PATH}"))?;
            cfg
        },
        Err(e) => {
            return Err(e).context(format!("Failed to open {CONFIG_PATH}"));
        }
    });
    let allow_origin = HeaderValue::from_str(&config.cors_allow_origin)
        .with_context(|| format!("Invalid cors_allow_origin value: {}", config.cors_allow_origin))?;
    info!("Using extractor {}", config.extractor.binary.display());

    let mut server = {
        let config = config.clone();
        HttpServer::new(move || {
            App::new()
                .wrap(Condition::new(config.enable_timings_header, Timings))
                .wrap(Cors::new(allow_origin.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_app(config.clone()))
        })
    };
    if let Some((ref ip, port)) = config.listen.tcp {
        let ip_str = ip.as_str();
        server = server.bind((ip_str, port)).with_context(|| format!("Failed to bind to tcp port {ip_str}:{port}"))?;
        info!("Listening on {ip_str}:{port}");
    };
    if let Some(ref path) = config.listen.unix {
        let path_str = path.as_str();
        server = server.bind_uds(path_str).with_context(|| format!("Failed to bind to unix socket {path_str}"))?;
        if let Some(mode) = config.listen.unix_mode {
            let perms = Permissions::from_mode(mode);
            set_permissions(path_str, perms).with_context(|| format!("Failed to change mode of unix socket {path_str} to {mode}"))?;
        }
        info!("Listening on {path_str}");
    };
    server.run()
    .await
    .context("Error while running the server")
}

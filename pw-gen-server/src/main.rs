use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};
use serde::Deserialize;

use pw_gen_core::{Error, PasswordGenerator, PasswordGeneratorConfig, PoolRange, Preset};

/// Default listening address, overridden by `PW_GEN_BIND`.
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Longest password a request may ask for.
const MAX_PASSWORD_LENGTH: usize = 4096;

/// Struct representing query parameters for the `/v1/generate` endpoint
///
/// Either `preset` is given, or any subset of the custom fields; missing
/// custom fields fall back to `PasswordGeneratorConfig::default()`.
#[derive(Deserialize, Default)]
struct GenerateParams {
	preset: Option<String>,
	lowercase_min: Option<i64>,
	lowercase_max: Option<i64>,
	uppercase_min: Option<i64>,
	uppercase_max: Option<i64>,
	numbers_min: Option<i64>,
	numbers_max: Option<i64>,
	symbols_min: Option<i64>,
	symbols_max: Option<i64>,
	start_with_letter: Option<bool>,
	exclude: Option<String>,
}

impl GenerateParams {
	/// Builds the configuration requested by the query.
	///
	/// Configurations that may exceed `MAX_PASSWORD_LENGTH` are rejected.
	fn config(&self) -> Result<PasswordGeneratorConfig, Error> {
		let config = self.requested_config()?;
		config.check_length(MAX_PASSWORD_LENGTH)?;
		Ok(config)
	}

	fn requested_config(&self) -> Result<PasswordGeneratorConfig, Error> {
		if let Some(name) = &self.preset {
			return Ok(name.parse::<Preset>()?.config());
		}

		let base = PasswordGeneratorConfig::default();
		let range = |min: Option<i64>, max: Option<i64>, fallback: PoolRange| {
			PoolRange::new(
				min.unwrap_or(fallback.min() as i64),
				max.unwrap_or(fallback.max() as i64),
			)
		};

		Ok(PasswordGeneratorConfig::new(
			range(self.lowercase_min, self.lowercase_max, base.lowercase())?,
			range(self.uppercase_min, self.uppercase_max, base.uppercase())?,
			range(self.numbers_min, self.numbers_max, base.numbers())?,
			range(self.symbols_min, self.symbols_max, base.symbols())?,
			self.start_with_letter.unwrap_or(base.always_start_with_character()),
			self.exclude.as_deref().map(|s| s.chars().collect()).unwrap_or_default(),
		))
	}
}

/// Maps a generation error to an HTTP response.
///
/// Configuration problems are the caller's fault; entropy failures are not.
fn error_response(e: Error) -> HttpResponse {
	match e {
		Error::RandomSource(_) => {
			warn!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
		_ => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one password from a preset or custom query parameters.
/// Returns the password as the response body.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	let config = match query.config() {
		Ok(c) => c,
		Err(e) => return error_response(e),
	};

	match PasswordGenerator::new().generate(&config) {
		Ok(password) => HttpResponse::Ok().body(password),
		Err(e) => error_response(e),
	}
}

/// HTTP GET endpoint `/v1/presets`
///
/// Lists preset names, one per line.
#[get("/v1/presets")]
async fn get_presets() -> impl Responder {
	let names: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
	HttpResponse::Ok().body(names.join("\n"))
}

/// Main entry point for the server.
///
/// Each request builds its own generator, so handlers share no state.
///
/// # Notes
/// - The server binds to `PW_GEN_BIND`, or 127.0.0.1:5000 by default.
/// - Logging follows `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let bind = std::env::var("PW_GEN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	info!("listening on {bind}");

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::new("%r %s %Dms"))
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_presets)
	})
		.bind(bind)?
		.run()
		.await
}

#[cfg(test)]
mod test {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test as actix_test;

	#[test]
	fn params_default_config() -> Result<(), Error> {
		let config = GenerateParams::default().config()?;
		assert_eq!(PasswordGeneratorConfig::default(), config);
		Ok(())
	}

	#[test]
	fn params_preset() -> Result<(), Error> {
		let params = GenerateParams { preset: Some("developer".to_owned()), ..Default::default() };
		assert_eq!(Preset::Developer.config(), params.config()?);
		Ok(())
	}

	#[test]
	fn params_custom() -> Result<(), Error> {
		let params = GenerateParams {
			numbers_min: Some(3),
			numbers_max: Some(5),
			start_with_letter: Some(true),
			exclude: Some("l1O0".to_owned()),
			..Default::default()
		};
		let config = params.config()?;
		assert_eq!(PoolRange::new(3, 5)?, config.numbers());
		assert!(config.always_start_with_character());
		assert_eq!(&['l', '1', 'O', '0'], config.do_not_use());
		Ok(())
	}

	#[test]
	fn params_invalid_range() {
		let params = GenerateParams { symbols_min: Some(4), symbols_max: Some(2), ..Default::default() };
		assert!(matches!(params.config(), Err(Error::InvalidRange { min: 4, max: 2 })));
	}

	#[test]
	fn params_too_long() {
		let params = GenerateParams { lowercase_max: Some(1 << 62), ..Default::default() };
		assert!(matches!(params.config(), Err(Error::LengthLimit { limit: MAX_PASSWORD_LENGTH, .. })));

		let params = GenerateParams { symbols_min: Some(4100), symbols_max: Some(4100), ..Default::default() };
		assert!(matches!(params.config(), Err(Error::LengthLimit { max: 4107, .. })));
	}

	#[actix_web::test]
	async fn generate_endpoint_rejects_oversized() {
		let app = actix_test::init_service(App::new().service(get_generated)).await;

		let req = actix_test::TestRequest::get()
			.uri("/v1/generate?lowercase_max=4611686018427387904")
			.to_request();
		let resp = actix_test::call_service(&app, req).await;
		assert_eq!(StatusCode::BAD_REQUEST, resp.status());

		let req = actix_test::TestRequest::get()
			.uri("/v1/generate?lowercase_min=4000&lowercase_max=4000")
			.to_request();
		let resp = actix_test::call_service(&app, req).await;
		assert_eq!(StatusCode::OK, resp.status());
		let body = actix_test::read_body(resp).await;
		assert_eq!(4006, body.len());
	}

	#[actix_web::test]
	async fn generate_endpoint() {
		let app = actix_test::init_service(App::new().service(get_generated)).await;

		let req = actix_test::TestRequest::get().uri("/v1/generate?preset=strong").to_request();
		let resp = actix_test::call_service(&app, req).await;
		assert_eq!(StatusCode::OK, resp.status());
		let body = actix_test::read_body(resp).await;
		assert!((16..=20).contains(&body.len()));

		let req = actix_test::TestRequest::get().uri("/v1/generate?preset=vault").to_request();
		let resp = actix_test::call_service(&app, req).await;
		assert_eq!(StatusCode::BAD_REQUEST, resp.status());
	}

	#[actix_web::test]
	async fn presets_endpoint() {
		let app = actix_test::init_service(App::new().service(get_presets)).await;
		let req = actix_test::TestRequest::get().uri("/v1/presets").to_request();
		let body = actix_test::call_and_read_body(&app, req).await;
		assert_eq!(&b"safe-default\nstrong\nhuman-friendly\nsymbol-heavy\ndeveloper"[..], &body[..]);
	}
}

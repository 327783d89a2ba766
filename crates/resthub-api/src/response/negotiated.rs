//! Content negotiation between JSON and XML bodies

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::ApiError;

/// Representation chosen from the `Accept` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Pick the preferred supported media type
    ///
    /// Higher q-values win; on a tie a concrete type beats a wildcard and the
    /// earlier entry beats a later one. Anything unsupported falls back to JSON.
    pub fn from_accept(accept: &str) -> Self {
        let mut best: Option<(f32, u8, Self)> = None;

        for range in accept.split(',') {
            let mut params = range.split(';');
            let media = params.next().unwrap_or_default().trim().to_ascii_lowercase();
            let quality = params
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if quality <= 0.0 {
                continue;
            }

            let (specificity, format) = match media.as_str() {
                "application/json" => (2, Self::Json),
                "application/xml" | "text/xml" => (2, Self::Xml),
                "application/*" | "*/*" => (1, Self::Json),
                _ => continue,
            };

            let better = match best {
                None => true,
                Some((q, s, _)) => quality > q || (quality == q && specificity > s),
            };
            if better {
                best = Some((quality, specificity, format));
            }
        }

        best.map(|(_, _, format)| format).unwrap_or_default()
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

/// Body rendered as JSON or XML
///
/// `root` names the XML document element; JSON ignores it.
pub struct Negotiated<T> {
    format: ResponseFormat,
    root: &'static str,
    body: T,
}

impl<T> Negotiated<T> {
    pub fn new(format: ResponseFormat, root: &'static str, body: T) -> Self {
        Self { format, root, body }
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        match self.format {
            ResponseFormat::Json => Json(self.body).into_response(),
            ResponseFormat::Xml => match quick_xml::se::to_string_with_root(self.root, &self.body) {
                Ok(xml) => (
                    [(header::CONTENT_TYPE, ResponseFormat::Xml.content_type())],
                    xml,
                )
                    .into_response(),
                Err(e) => {
                    ApiError::internal(anyhow::anyhow!("XML serialization failed: {e}")).into_response()
                }
            },
        }
    }
}

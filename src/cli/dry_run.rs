use crate::api::models::{ApiResponse, Request, RequestOptions};
use crate::api::transport::{Callback, Dispatcher};
use crate::error::{ClientError, Failure};
use serde_json::json;

/// Dispatcher that performs no I/O and answers with a description of the
/// request it was handed
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

impl Dispatcher for DryRun {
    type Handle = ();

    fn make_request(&self, request: Request, options: RequestOptions, callback: Callback) {
        let warnings = options.warnings.clone();
        let outcome = match (
            serde_json::to_value(&request),
            serde_json::to_value(&options),
        ) {
            (Ok(request), Ok(options)) => Ok(ApiResponse {
                body: Some(json!({ "request": request, "options": options })),
                status_code: Some(200),
                headers: None,
                warnings,
            }),
            (Err(e), _) | (_, Err(e)) => Err(Failure::new(
                ClientError::Serialization {
                    message: e.to_string(),
                },
                ApiResponse::default(),
            )),
        };
        callback(outcome);
    }
}

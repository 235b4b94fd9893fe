//! Binding for the `_percolate` endpoint.
//!
//! Matches a document against the queries registered on an index:
//! `GET|POST /{index}/{type}[/{id}]/_percolate`.

use crate::api::models::{ApiResponse, Method, Request, RequestOptions};
use crate::api::params::{Options, Params};
use crate::api::transport::{Callback, Dispatcher, PendingResponse, settle_channel};
use crate::error::{ConfigurationError, Failure};
use crate::utils::encoding::{encode_segment, value_to_text};
use crate::utils::validation::{require_params, require_url_parts, validate_headers};
use indexmap::IndexMap;
use serde_json::Value;

/// Query parameters this endpoint understands, by wire name
pub const ACCEPTED_QUERYSTRING: &[&str] = &[
    "routing",
    "preference",
    "ignore_unavailable",
    "allow_no_indices",
    "expand_wildcards",
    "percolate_index",
    "percolate_type",
    "percolate_routing",
    "percolate_preference",
    "percolate_format",
    "version",
    "version_type",
    "pretty",
    "human",
    "error_trace",
    "source",
    "filter_path",
];

/// camelCase parameter names and their wire names
pub const SNAKE_CASE: &[(&str, &str)] = &[
    ("ignoreUnavailable", "ignore_unavailable"),
    ("allowNoIndices", "allow_no_indices"),
    ("expandWildcards", "expand_wildcards"),
    ("percolateIndex", "percolate_index"),
    ("percolateType", "percolate_type"),
    ("percolateRouting", "percolate_routing"),
    ("percolatePreference", "percolate_preference"),
    ("percolateFormat", "percolate_format"),
    ("versionType", "version_type"),
    ("errorTrace", "error_trace"),
    ("filterPath", "filter_path"),
];

/// Keys consumed by the binding itself rather than sent as query parameters
const STRUCTURAL_KEYS: &[&str] = &["method", "body", "index", "type", "id"];

const REQUIRED_PARAMS: &[&str] = &["index", "type"];

/// Wire name for a parameter key
pub fn canonical_name(key: &str) -> &str {
    SNAKE_CASE
        .iter()
        .find(|(camel, _)| *camel == key)
        .map(|(_, snake)| *snake)
        .unwrap_or(key)
}

pub fn is_accepted(wire_name: &str) -> bool {
    ACCEPTED_QUERYSTRING.contains(&wire_name)
}

pub fn unknown_parameter_warning(key: &str) -> String {
    format!(
        "Client - Unknown parameter: \"{}\", sending it as query parameter",
        key
    )
}

/// Query string built from the non-structural params, plus any warnings
pub fn normalize_querystring(params: &Params) -> (IndexMap<String, Value>, Option<Vec<String>>) {
    let mut querystring = IndexMap::new();
    let mut warnings: Option<Vec<String>> = None;

    for (key, value) in params.iter() {
        if STRUCTURAL_KEYS.contains(&key.as_str()) {
            continue;
        }
        let wire_name = canonical_name(key);
        if !is_accepted(wire_name) {
            let warning = unknown_parameter_warning(key);
            log::debug!("{}", warning);
            warnings.get_or_insert_with(Vec::new).push(warning);
        }
        querystring.insert(wire_name.to_string(), value.clone());
    }

    (querystring, warnings)
}

/// `/{index}/{type}[/{id}]/_percolate`
pub fn build_path(params: &Params) -> String {
    match (params.value("index"), params.value("type"), params.value("id")) {
        (Some(index), Some(doc_type), Some(id)) => format!(
            "/{}/{}/{}/_percolate",
            encode_segment(index),
            encode_segment(doc_type),
            encode_segment(id)
        ),
        (index, doc_type, _) => format!(
            "/{}/{}/_percolate",
            index.map(encode_segment).unwrap_or_default(),
            doc_type.map(encode_segment).unwrap_or_default()
        ),
    }
}

/// The caller's method as given, else GET or POST depending on the body
fn resolve_method(params: &Params) -> Method {
    match params.value("method") {
        Some(method) => Method::from(value_to_text(method).as_str()),
        None if params.is_set("body") => Method::Post,
        None => Method::Get,
    }
}

/// Validate and assemble everything the dispatcher needs
pub fn prepare(
    params: &Params,
    options: &Options,
) -> Result<(Request, RequestOptions), ConfigurationError> {
    require_params(params, REQUIRED_PARAMS)?;
    require_url_parts(params)?;
    let headers = validate_headers(options.headers.as_ref())?;
    let method = resolve_method(params);

    let (querystring, warnings) = normalize_querystring(params);

    let request = Request {
        method,
        path: build_path(params),
        body: params
            .value("body")
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        querystring,
    };

    let request_options = RequestOptions {
        ignore: options.ignore.clone().map(|ignore| ignore.into_statuses()),
        request_timeout: options.request_timeout,
        max_retries: options.max_retries,
        as_stream: options.as_stream,
        headers,
        querystring: options.querystring.clone(),
        compression: options.compression,
        warnings,
    };

    Ok((request, request_options))
}

/// Result of [`Percolate::invoke`]
pub enum Invocation<H> {
    /// A callback was supplied; holds the dispatcher's handle unless
    /// validation failed first
    Dispatched(Option<H>),
    /// No callback was supplied
    Pending(PendingResponse<H>),
}

/// The `_percolate` endpoint bound to a dispatcher
pub struct Percolate<D> {
    dispatcher: D,
    result: ApiResponse,
}

impl<D: Dispatcher> Percolate<D> {
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            result: ApiResponse::default(),
        }
    }

    /// Replace the result value that accompanies configuration errors
    pub fn with_result(mut self, result: ApiResponse) -> Self {
        self.result = result;
        self
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Validate, build and dispatch.
    ///
    /// On a configuration error the callback receives the error with the
    /// default result and `None` is returned.
    pub fn call(&self, params: Params, options: Options, callback: Callback) -> Option<D::Handle> {
        let (request, request_options) = match prepare(&params, &options) {
            Ok(prepared) => prepared,
            Err(err) => {
                log::debug!("percolate rejected before dispatch: {}", err);
                callback(Err(Failure::new(err, self.result.clone())));
                return None;
            }
        };

        log::debug!(
            "percolate dispatching {} {} ({} query parameters)",
            request.method,
            request.path,
            request.querystring.len()
        );

        Some(
            self.dispatcher
                .make_request(request, request_options, callback),
        )
    }

    /// Future-based variant of [`Percolate::call`]
    pub fn send(&self, params: Params, options: Options) -> PendingResponse<D::Handle> {
        let (callback, receiver) = settle_channel();
        let handle = self.call(params, options, callback);
        PendingResponse::new(handle, receiver)
    }

    /// Entry point with optional arguments.
    ///
    /// Missing `options` become the defaults, missing `params` reset both
    /// `params` and `options`, and a missing callback switches to the
    /// future-based path.
    pub fn invoke(
        &self,
        params: Option<Params>,
        options: Option<Options>,
        callback: Option<Callback>,
    ) -> Invocation<D::Handle> {
        let (params, options) = match params {
            Some(params) => (params, options.unwrap_or_default()),
            None => (Params::new(), Options::default()),
        };

        match callback {
            Some(callback) => Invocation::Dispatched(self.call(params, options, callback)),
            None => Invocation::Pending(self.send(params, options)),
        }
    }
}

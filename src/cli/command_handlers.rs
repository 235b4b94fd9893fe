use crate::api::params::{Ignore, Options, Params};
use crate::api::percolate::Percolate;
use crate::api::transport::Dispatcher;
use crate::cli::main_types::Cli;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use serde_json::{Map, Value};
use std::time::Duration;

/// Runs the percolate binding for one command line
pub struct PercolateHandler<D> {
    binding: Percolate<D>,
    verbose: bool,
}

impl<D: Dispatcher> PercolateHandler<D> {
    pub fn new(dispatcher: D, verbose: bool) -> Self {
        Self {
            binding: Percolate::new(dispatcher),
            verbose,
        }
    }

    pub async fn handle(&self, cli: &Cli, config: &Config) -> Result<Value, AppError> {
        let params = build_params(cli)?;
        let options = build_options(cli, config);

        if self.verbose {
            log::info!("Percolating with {} parameters", params.len());
        }

        let response = self.binding.send(params, options).await?;

        if let Some(warnings) = &response.warnings {
            for warning in warnings {
                eprintln!("Warning: {}", warning);
            }
        }

        Ok(response.body.unwrap_or(Value::Null))
    }
}

/// Values that parse as JSON keep their type, anything else is a string
fn param_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

pub fn build_params(cli: &Cli) -> Result<Params, CliError> {
    let mut params = Params::new();

    if let Some(index) = &cli.index {
        params.insert("index", index.as_str());
    }
    if let Some(doc_type) = &cli.doc_type {
        params.insert("type", doc_type.as_str());
    }
    if let Some(id) = &cli.id {
        params.insert("id", id.as_str());
    }
    if let Some(method) = &cli.method {
        params.insert("method", method.as_str());
    }
    if let Some(body) = &cli.body {
        let body: Value = serde_json::from_str(body)
            .map_err(|e| CliError::InvalidArguments(format!("Body is not valid JSON: {}", e)))?;
        params.insert("body", body);
    }

    for (key, value) in &cli.params {
        params.insert(key.as_str(), param_value(value));
    }

    Ok(params)
}

/// Config-file defaults overridden by command-line flags
pub fn build_options(cli: &Cli, config: &Config) -> Options {
    let mut options = config.to_options();

    if !cli.headers.is_empty() {
        let mut headers = match options.headers.take() {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        for (name, value) in &cli.headers {
            headers.insert(name.clone(), Value::String(value.clone()));
        }
        options.headers = Some(Value::Object(headers));
    }

    match cli.ignore.as_slice() {
        [] => {}
        [status] => options.ignore = Some(Ignore::Status(*status)),
        statuses => options.ignore = Some(Ignore::Statuses(statuses.to_vec())),
    }

    if let Some(ms) = cli.request_timeout_ms {
        options.request_timeout = Some(Duration::from_millis(ms));
    }
    if cli.max_retries.is_some() {
        options.max_retries = cli.max_retries;
    }
    options.compression |= cli.compression;

    options
}

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "percolate")]
#[command(about = "Build _percolate requests and show what would be sent")]
#[command(version)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, env = "PERCOLATE_CONFIG_DIR")]
    pub config_dir: Option<String>,

    /// Index holding the registered queries
    #[arg(long)]
    pub index: Option<String>,

    /// Document type
    #[arg(long = "type")]
    pub doc_type: Option<String>,

    /// Percolate an existing document instead of a body
    #[arg(long)]
    pub id: Option<String>,

    /// HTTP method (default GET, or POST when a body is given)
    #[arg(long)]
    pub method: Option<String>,

    /// Request body as JSON
    #[arg(long)]
    pub body: Option<String>,

    /// Query parameter as key=value; values are read as JSON when possible
    #[arg(short = 'P', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Extra header as Key:Value
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Status code not to treat as an error (repeatable)
    #[arg(long)]
    pub ignore: Vec<u16>,

    #[arg(long)]
    pub request_timeout_ms: Option<u64>,

    #[arg(long)]
    pub max_retries: Option<u32>,

    #[arg(long)]
    pub compression: bool,
}

pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| "Parameter must be in 'key=value' format".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("Parameter key cannot be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn parse_header(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once(':')
        .ok_or_else(|| "Header must be in 'Key:Value' format".to_string())?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return Err("Header key and value cannot be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use http_functions::functions::FUNCTION_NAMES;

#[derive(Parser)]
#[command(name = "functions-cli")]
#[command(about = "Invoke functions on a running http-functions host", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a function and print its response
    Call {
        /// Function name, e.g. helloContent
        function: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// Content-Type header sent with the body
        #[arg(short = 't', long)]
        content_type: Option<String>,

        /// Request body
        #[arg(short, long)]
        data: Option<String>,

        /// Query parameter as key=value; repeatable
        #[arg(short, long = "query", value_parser = parse_query_pair)]
        queries: Vec<(String, String)>,
    },
    /// List the functions a host serves
    List,
}

fn parse_query_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for name in FUNCTION_NAMES {
                println!("{}/{}", cli.url.trim_end_matches('/'), name);
            }
        }
        Commands::Call {
            function,
            method,
            content_type,
            data,
            queries,
        } => {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;
            let url = format!("{}/{}", cli.url.trim_end_matches('/'), function);

            let mut request = reqwest::Client::new().request(method, url).query(&queries);
            if let Some(content_type) = content_type {
                request = request.header(CONTENT_TYPE, HeaderValue::from_str(&content_type)?);
            }
            if let Some(data) = data {
                request = request.body(data);
            }

            print_response(request.send().await?).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let text = res.text().await?;

    println!("{} (request {})", status, request_id);
    println!("{}", text);
    Ok(())
}

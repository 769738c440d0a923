use std::io::{Read, Write};

use clap::{Parser, Subcommand};
use form_bridge::{
    BridgeConfig, BridgeError, FormBridge, FormControl, FormElement, MemoryPage, SubmitEvent,
    Transport,
};

#[derive(Debug, Parser)]
#[command(name = "treatment-form")]
struct Cli {
    /// Origin serving the treatment endpoint; falls back to TREATMENT_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[arg(long, global = true)]
    path: Option<String>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Submit the treatment form built from name=value pairs
    Submit {
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        #[arg(long)]
        submitter: Option<String>,
    },
    /// Read a submit event as JSON on stdin and run it
    Replay,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {raw:?}"))?;
    Ok((name.to_string(), value.to_string()))
}

fn config(cli: &Cli) -> Result<BridgeConfig, BridgeError> {
    let cfg = BridgeConfig::from_env()?;
    if cli.base_url.is_none() && cli.path.is_none() {
        return Ok(cfg);
    }
    let base = cli
        .base_url
        .clone()
        .unwrap_or_else(|| cfg.base_url.to_string());
    let path = cli.path.clone().unwrap_or(cfg.api_path);
    BridgeConfig::new(&base, &path)
}

fn read_event() -> Result<SubmitEvent, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("stdin: {e}"))?;
    serde_json::from_str(&input).map_err(|e| format!("invalid json: {e}"))
}

#[tokio::main]
async fn main() {
    form_bridge::logging::init();
    let cli = Cli::parse();

    let cfg = match config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(2);
        }
    };

    let mut event = match cli.cmd {
        Cmd::Submit { fields, submitter } => {
            let controls = fields
                .iter()
                .map(|(name, value)| FormControl::text(name, value))
                .collect();
            let event = SubmitEvent::new(FormElement::treatment(controls));
            match submitter {
                Some(name) => event.with_submitter(&name),
                None => event,
            }
        }
        Cmd::Replay => match read_event() {
            Ok(event) => event,
            Err(e) => {
                let out = serde_json::json!({ "ok": false, "error": e });
                let _ = writeln!(std::io::stderr(), "{out}");
                std::process::exit(2);
            }
        },
    };

    let transport = match Transport::http(&cfg) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("transport error: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(endpoint = %cfg.base_url, path = %cfg.api_path, "treatment endpoint");

    let page = MemoryPage::new();
    let bridge = FormBridge::new(transport, page.view());
    bridge.submit(&mut event).await;

    let out = serde_json::to_string_pretty(&page.snapshot())
        .unwrap_or_else(|_| "{\"error\":\"encode error\"}".to_string());
    let _ = writeln!(std::io::stdout(), "{out}");
}

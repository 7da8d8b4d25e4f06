use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    nzprop::init_logging();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) == Some("serve") {
        let port = raw_args
            .get(2)
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        if let Err(e) = nzprop::api::run_http_server(port).await {
            eprintln!("Server error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    nzprop::api::run_cli(raw_args)
}

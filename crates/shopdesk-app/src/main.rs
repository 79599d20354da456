use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    shopdesk_lib::run().await
}

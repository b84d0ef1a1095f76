//! `quill serve`: answers JSONL requests on stdin until it closes.

use quill_config::HostOptions;
use quill_service::Service;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::{delimiter, protocol};

/// Runs the request loop on a current-thread runtime.
///
/// Each request is handled to completion before the next line is read, so
/// the service sees one request at a time.
pub fn run(options: HostOptions) -> Result<i32, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(options))?;
    Ok(0)
}

async fn serve(options: HostOptions) -> std::io::Result<()> {
    let mut service = Service::with_filesystem(delimiter::provider(), options);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "serving requests on stdin");

    let mut handled = 0usize;
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = protocol::handle_line(&mut service, &line);
        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        handled += 1;
    }

    tracing::info!(requests = handled, projects = service.registry().len(), "stdin closed");
    Ok(())
}

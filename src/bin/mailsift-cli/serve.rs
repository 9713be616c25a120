use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use mailsift::EmailValidator;

pub fn run(validator: EmailValidator, bind: SocketAddr) -> Result<()> {
    // The blocking DNS resolver owns a runtime of its own and must be dropped
    // outside of this one, so the last handle stays here.
    let validator = Arc::new(validator);
    let app = mailsift::http::router(Arc::clone(&validator));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;

    runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind(bind)
            .await
            .with_context(|| format!("bind {bind}"))?;
        eprintln!("mailsift listening on http://{bind}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("http server")
    })?;

    drop(runtime);
    drop(validator);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
    eprintln!("shutting down");
}

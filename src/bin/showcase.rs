//! Showcase entry point: runs all six bundled demos and prints their output.
//!
//! Takes no arguments; behavior is fully determined by the fixed literal
//! inputs baked into each demonstration.

use patternkit::prelude::*;
use tokio_stream::StreamExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ShowcaseResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let runner = DefaultRunner::new(default_registry());
    let mut stream = runner
        .run_all(&RunConfig::new().with_name("showcase"))
        .await?;

    while let Some(event) = stream.next().await {
        match event {
            DemoEvent::Started { demo } => println!("=== {demo} ==="),
            DemoEvent::Line { text, .. } => println!("{text}"),
            DemoEvent::Completed { .. } => println!(),
            DemoEvent::Failed { demo, message } => {
                eprintln!("{demo} failed: {message}");
                return Err(ShowcaseError::Other(message));
            }
        }
    }

    Ok(())
}

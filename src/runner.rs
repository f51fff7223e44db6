//! Runner executing registered demos and streaming their events.
//!
//! The runner resolves demo names against a [`Registry`], executes each demo
//! with its fixed literal inputs, and emits a [`DemoEvent`] stream:
//! `Started`, one `Line` per transcript line, then `Completed` or `Failed`,
//! per demo, in request order.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::RunConfig;
use crate::console::BufferConsole;
use crate::demo::Demo;
use crate::error::{RegistryError, ShowcaseError, ShowcaseResult};
use crate::registry::Registry;
use crate::stream::{DemoEvent, DemoEventStream, StreamBuilder};

/// Consumer API for executing demonstrations.
#[async_trait]
pub trait ShowcaseRunner: Send + Sync {
    /// Run the named demos, in the given order, and return their event stream.
    async fn run(&self, names: &[&str], config: &RunConfig) -> ShowcaseResult<DemoEventStream>;

    /// Run every registered demo in registration order.
    async fn run_all(&self, config: &RunConfig) -> ShowcaseResult<DemoEventStream>;
}

/// Default runner over a demo registry.
pub struct DefaultRunner {
    registry: Arc<Registry<dyn Demo>>,
}

impl DefaultRunner {
    /// Create a runner owning the given registry.
    pub fn new(registry: Registry<dyn Demo>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Registry<dyn Demo> {
        &self.registry
    }

    fn resolve(&self, names: &[&str]) -> ShowcaseResult<Vec<String>> {
        if self.registry.is_empty() {
            return Err(RegistryError::Empty.into());
        }
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            if !self.registry.contains(name) {
                return Err(RegistryError::NotFound(name.to_string()).into());
            }
            resolved.push(name.to_string());
        }
        Ok(resolved)
    }
}

#[async_trait]
impl ShowcaseRunner for DefaultRunner {
    async fn run(&self, names: &[&str], config: &RunConfig) -> ShowcaseResult<DemoEventStream> {
        config.validate().map_err(ShowcaseError::Other)?;
        let names = self.resolve(names)?;

        let (sender, stream) = StreamBuilder::<DemoEvent>::new()
            .buffer_size(config.buffer_size())
            .build();

        let registry = Arc::clone(&self.registry);
        let config = config.clone();
        tokio::spawn(async move {
            tracing::debug!(run = %config.name(), demos = names.len(), "showcase run started");
            for name in names {
                // Resolved before spawning; a miss here means the name was
                // removed concurrently, which the registry's ownership forbids.
                let Some(demo) = registry.get(&name) else {
                    continue;
                };

                if sender
                    .send(DemoEvent::Started { demo: name.clone() })
                    .await
                    .is_err()
                {
                    return;
                }

                let mut console = BufferConsole::new();
                let outcome = demo.run(&mut console);

                for text in console.into_lines() {
                    if config.is_verbose() {
                        tracing::info!(demo = %name, "{text}");
                    }
                    if sender
                        .send(DemoEvent::Line {
                            demo: name.clone(),
                            text,
                        })
                        .await
                        .is_err()
                    {
                        return;
                    }
                }

                match outcome {
                    Ok(()) => {
                        if sender
                            .send(DemoEvent::Completed { demo: name.clone() })
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(demo = %name, error = %e, "demo failed");
                        let stop = config.stops_on_failure();
                        if sender
                            .send(DemoEvent::Failed {
                                demo: name.clone(),
                                message: e.to_string(),
                            })
                            .await
                            .is_err()
                        {
                            return;
                        }
                        if stop {
                            return;
                        }
                    }
                }
            }
        });

        Ok(stream)
    }

    async fn run_all(&self, config: &RunConfig) -> ShowcaseResult<DemoEventStream> {
        let names: Vec<String> = self.registry.names().iter().map(|s| s.to_string()).collect();
        let names: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        self.run(&names, config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::error::{PatternError, PatternResult};
    use crate::registry::RegistryBuilder;
    use std::any::Any;
    use tokio_stream::StreamExt;

    #[derive(Debug)]
    struct LineDemo {
        name: &'static str,
        lines: Vec<&'static str>,
        fail: bool,
    }

    impl Demo for LineDemo {
        fn name(&self) -> &str {
            self.name
        }

        fn summary(&self) -> &str {
            "emits fixed lines"
        }

        fn run(&self, console: &mut dyn Console) -> PatternResult<()> {
            for line in &self.lines {
                console.line(line);
            }
            if self.fail {
                return Err(PatternError::StrategyNotSet);
            }
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn runner_with(demos: Vec<LineDemo>) -> DefaultRunner {
        let mut builder = RegistryBuilder::<dyn Demo>::new();
        for demo in demos {
            builder = builder.with(Box::new(demo));
        }
        DefaultRunner::new(builder.build())
    }

    #[tokio::test]
    async fn test_run_emits_started_lines_completed() {
        let runner = runner_with(vec![LineDemo {
            name: "one",
            lines: vec!["a", "b"],
            fail: false,
        }]);

        let stream = runner.run(&["one"], &RunConfig::new()).await.unwrap();
        let events: Vec<_> = stream.collect().await;

        assert_eq!(
            events,
            vec![
                DemoEvent::Started {
                    demo: "one".to_string()
                },
                DemoEvent::Line {
                    demo: "one".to_string(),
                    text: "a".to_string()
                },
                DemoEvent::Line {
                    demo: "one".to_string(),
                    text: "b".to_string()
                },
                DemoEvent::Completed {
                    demo: "one".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_name_fails_upfront() {
        let runner = runner_with(vec![LineDemo {
            name: "one",
            lines: vec![],
            fail: false,
        }]);

        let err = runner
            .run(&["missing"], &RunConfig::new())
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ShowcaseError::Registry(RegistryError::NotFound(ref n)) if n == "missing"
        ));
    }

    #[tokio::test]
    async fn test_empty_registry_fails() {
        let runner = DefaultRunner::new(Registry::new());
        assert!(runner.registry().is_empty());
        let err = runner.run_all(&RunConfig::new()).await.err().unwrap();
        assert!(matches!(
            err,
            ShowcaseError::Registry(RegistryError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_failure_continues_by_default_and_stops_when_configured() {
        let demos = || {
            vec![
                LineDemo {
                    name: "bad",
                    lines: vec!["partial"],
                    fail: true,
                },
                LineDemo {
                    name: "good",
                    lines: vec!["fine"],
                    fail: false,
                },
            ]
        };

        let events: Vec<_> = runner_with(demos())
            .run_all(&RunConfig::new())
            .await
            .unwrap()
            .collect()
            .await;
        assert!(events.iter().any(
            |e| matches!(e, DemoEvent::Completed { demo } if demo == "good")
        ));

        let events: Vec<_> = runner_with(demos())
            .run_all(&RunConfig::new().stop_on_failure())
            .await
            .unwrap()
            .collect()
            .await;
        assert!(matches!(
            events.last(),
            Some(DemoEvent::Failed { demo, .. }) if demo == "bad"
        ));
    }
}

//! Agent Provider — lazily built, process-wide agent instance.
//!
//! The first [`AgentProvider::get_agent`] call runs the [`AgentFactory`];
//! every later call returns the same `Arc`. `OnceLock` makes concurrent first
//! use safe: racing callers block until the single construction finishes.

use crate::ports::agent::{AgentFactory, ConversationalAgent};
use std::sync::{Arc, OnceLock};
use tracing::info;

pub struct AgentProvider {
    cell: OnceLock<Arc<dyn ConversationalAgent>>,
    factory: Arc<dyn AgentFactory>,
}

impl AgentProvider {
    pub fn new(factory: Arc<dyn AgentFactory>) -> Self {
        Self {
            cell: OnceLock::new(),
            factory,
        }
    }

    /// Get the agent, constructing it on first use.
    ///
    /// The instance is never rebuilt, even if configuration changes later or
    /// the first construction ran without credentials.
    pub fn get_agent(&self) -> Arc<dyn ConversationalAgent> {
        self.cell
            .get_or_init(|| {
                info!("Constructing conversational agent");
                self.factory.construct()
            })
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent::AgentError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoAgent;

    #[async_trait]
    impl ConversationalAgent for EchoAgent {
        async fn run_turn(&self, message: &str) -> Result<String, AgentError> {
            Ok(message.to_string())
        }
    }

    #[derive(Default)]
    struct CountingFactory {
        constructed: AtomicUsize,
    }

    impl AgentFactory for CountingFactory {
        fn construct(&self) -> Arc<dyn ConversationalAgent> {
            self.constructed.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            Arc::new(EchoAgent)
        }
    }

    #[test]
    fn test_lazy_construction() {
        let factory = Arc::new(CountingFactory::default());
        let provider = AgentProvider::new(factory.clone());

        assert!(!provider.is_initialized());
        assert_eq!(factory.constructed.load(Ordering::SeqCst), 0);

        provider.get_agent();
        assert!(provider.is_initialized());
        assert_eq!(factory.constructed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_returns_identical_instance() {
        let factory = Arc::new(CountingFactory::default());
        let provider = AgentProvider::new(factory.clone());

        let first = provider.get_agent();
        let second = provider.get_agent();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.constructed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_constructs_once() {
        let factory = Arc::new(CountingFactory::default());
        let provider = Arc::new(AgentProvider::new(factory.clone()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = provider.clone();
                std::thread::spawn(move || provider.get_agent())
            })
            .collect();
        let agents: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(factory.constructed.load(Ordering::SeqCst), 1);
        assert!(agents.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[tokio::test]
    async fn test_agent_usable_after_construction() {
        let provider = AgentProvider::new(Arc::new(CountingFactory::default()));
        let reply = provider.get_agent().run_turn("hola").await.unwrap();
        assert_eq!(reply, "hola");
    }
}

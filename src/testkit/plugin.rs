//! Recording plugins for chain assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::Error;
use crate::plugin::{Plugin, PluginDescriptor, RemovalContext, RemovalHandler};
use crate::port::RemovalResponse;

/// Behaviour of a [`RecordingPlugin`] invocation.
#[derive(Debug, Clone)]
pub enum PluginBehaviour {
    /// Run and do nothing.
    Noop,
    /// Send a response through the sink.
    Respond(RemovalResponse),
    /// Fail with an error.
    Fail(String),
}

/// Removal plugin that records invocations.
pub struct RecordingPlugin {
    name: &'static str,
    exclusive: bool,
    behaviour: PluginBehaviour,
    calls: AtomicUsize,
    log: Option<Arc<Mutex<Vec<&'static str>>>>,
}

impl RecordingPlugin {
    #[must_use]
    pub fn new(name: &'static str, exclusive: bool) -> Self {
        Self {
            name,
            exclusive,
            behaviour: PluginBehaviour::Noop,
            calls: AtomicUsize::new(0),
            log: None,
        }
    }

    /// Replace the invocation behaviour.
    #[must_use]
    pub fn with_behaviour(mut self, behaviour: PluginBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }

    /// Share an invocation-order log with other plugins.
    #[must_use]
    pub fn with_log(mut self, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Plugin for RecordingPlugin {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: self.name,
            exclusive: self.exclusive,
        }
    }

    fn removal(&self) -> Option<&dyn RemovalHandler> {
        Some(self)
    }
}

#[async_trait]
impl RemovalHandler for RecordingPlugin {
    async fn remove(&self, ctx: &RemovalContext<'_>) -> Result<(), Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().push(self.name);
        }

        match &self.behaviour {
            PluginBehaviour::Noop => Ok(()),
            PluginBehaviour::Respond(response) => {
                ctx.sink.send(response.clone());
                Ok(())
            }
            PluginBehaviour::Fail(message) => Err(Error::Plugin {
                plugin: self.name,
                message: message.clone(),
            }),
        }
    }
}

/// Plugin without the removal capability; the chain must skip it without
/// invoking anything.
pub struct InertPlugin {
    name: &'static str,
}

impl InertPlugin {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Plugin for InertPlugin {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: self.name,
            exclusive: false,
        }
    }
}

//! Scripted function remover.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::Result;
use crate::port::FunctionRemover;

/// [`FunctionRemover`] that always answers the scripted result and counts
/// invocations.
pub struct ScriptedFunctionRemover {
    result: bool,
    calls: AtomicUsize,
}

impl ScriptedFunctionRemover {
    #[must_use]
    pub fn new(result: bool) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FunctionRemover for ScriptedFunctionRemover {
    async fn try_remove(&self, _owner: &str, _target: &str) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }
}

//! Cache gate around a model caller

use super::{GenerationRequest, ModelCaller, ModelTier};
use crate::cache::{make_key, ResultCache};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Call counters for the run report. Atomics so the future concurrent
/// worker pool can share one instance.
#[derive(Debug, Default)]
pub struct CallCounters {
    pub flash_total: AtomicU64,
    pub pro_total: AtomicU64,
    pub cache_hits: AtomicU64,
    pub cache_misses: AtomicU64,
}

impl CallCounters {
    pub fn record_call(&self, tier: ModelTier) {
        match tier {
            ModelTier::Flash => self.flash_total.fetch_add(1, Ordering::Relaxed),
            ModelTier::Pro => self.pro_total.fetch_add(1, Ordering::Relaxed),
        };
    }

    pub fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CallTotals {
        CallTotals {
            flash_total: self.flash_total.load(Ordering::Relaxed),
            pro_total: self.pro_total.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
        }
    }
}

/// Serializable counter totals, embedded in the run report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallTotals {
    pub flash_total: u64,
    pub pro_total: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}

/// Wraps any [`ModelCaller`] with the result cache: lookup before the
/// call, store after, counters updated either way. The key covers the
/// rendered prompt, so a changed template or chunk never reuses a stale
/// result.
pub struct CachedCaller<C: ModelCaller> {
    inner: C,
    cache: Arc<ResultCache>,
    counters: Arc<CallCounters>,
    prompt_template: String,
    app_version: String,
}

impl<C: ModelCaller> CachedCaller<C> {
    pub fn new(
        inner: C,
        cache: Arc<ResultCache>,
        counters: Arc<CallCounters>,
        prompt_template: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            inner,
            cache,
            counters,
            prompt_template: prompt_template.into(),
            app_version: app_version.into(),
        }
    }

    fn render_prompt(&self, request: &GenerationRequest) -> String {
        format!(
            "{}\n\n# {}\n\n{}",
            self.prompt_template, request.topic, request.text_chunk
        )
    }
}

#[async_trait]
impl<C: ModelCaller> ModelCaller for CachedCaller<C> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let prompt = self.render_prompt(request);
        let key = make_key(
            &request.model_name,
            request.temperature,
            &request.safety,
            &prompt,
            &self.app_version,
        );

        if let Some(record) = self.cache.get(&key) {
            self.counters.record_hit();
            tracing::debug!("Cache hit for topic {:?}", request.topic);
            return Ok(record.text);
        }
        self.counters.record_miss();

        let text = self.inner.generate(request).await?;
        self.counters.record_call(request.tier);

        let meta = json!({
            "model": request.model_name,
            "topic": request.topic,
            "safety": request.safety,
        });
        // Advisory cache: a failed write means a recompute next run
        if let Err(e) = self.cache.set(&key, &text, meta) {
            tracing::warn!("Cache write failed for topic {:?}: {}", request.topic, e);
        }
        Ok(text)
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep, timeout};
use tracing::{debug, info, warn};

use crate::error::{DispatchError, TransportError};
use crate::profiles::ProfilePool;
use crate::shutdown::{ShutdownReceiver, shutdown_channel, wait_for_shutdown};

use super::outcome::RequestOutcome;
use super::plan::{DispatchPlan, resolve_url};
use super::selection::{ProfileSampler, SelectionSource, pacing_delay, pick_path};
use super::transport::{ProbeRequest, Transport};

/// Issues a plan's requests with at most `concurrency` of them in flight.
pub struct Dispatcher<T> {
    transport: Arc<T>,
}

impl<T> Dispatcher<T>
where
    T: Transport + 'static,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub const fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Runs the plan to completion.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any request is issued when the
    /// pool is empty or the plan is invalid.
    pub async fn run(
        &self,
        plan: &DispatchPlan,
        pool: &ProfilePool,
        source: SelectionSource,
    ) -> Result<Vec<RequestOutcome>, DispatchError> {
        let (_shutdown_tx, shutdown_rx) = shutdown_channel();
        self.run_until_shutdown(plan, pool, source, shutdown_rx)
            .await
    }

    /// Runs the plan until it completes or a shutdown is broadcast.
    ///
    /// On completion the outcomes are sorted by request id and there is
    /// exactly one per request. On shutdown all in-flight requests are
    /// aborted.
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any request is issued,
    /// [`DispatchError::Cancelled`] on shutdown, or
    /// [`DispatchError::TaskJoin`] if a request task panicked.
    pub async fn run_until_shutdown(
        &self,
        plan: &DispatchPlan,
        pool: &ProfilePool,
        source: SelectionSource,
        mut shutdown_rx: ShutdownReceiver,
    ) -> Result<Vec<RequestOutcome>, DispatchError> {
        let sampler = ProfileSampler::new(pool).ok_or(DispatchError::EmptyProfilePool)?;
        let base_url: Arc<str> = Arc::from(plan.validate()?);

        if plan.count == 0 {
            debug!("Nothing to dispatch for {}", base_url);
            return Ok(Vec::new());
        }

        info!(
            "Dispatching {} requests to {} (concurrency {}, {} profiles)",
            plan.count,
            base_url,
            plan.concurrency,
            pool.len()
        );

        let sampler = Arc::new(sampler);
        let permits = Arc::new(Semaphore::new(plan.concurrency));
        let mut master = source.master();
        let mut tasks = JoinSet::new();

        for request_id in 0..plan.count {
            let task = RequestTask {
                request_id,
                seed: master.r#gen(),
                base_url: Arc::clone(&base_url),
                sampler: Arc::clone(&sampler),
                transport: Arc::clone(&self.transport),
                permits: Arc::clone(&permits),
                delay: plan.delay,
                request_timeout: plan.request_timeout,
            };
            tasks.spawn(task.execute());
        }

        let mut outcomes = Vec::with_capacity(plan.count);
        let cancelled = wait_for_shutdown(&mut shutdown_rx);
        tokio::pin!(cancelled);

        loop {
            tokio::select! {
                joined = tasks.join_next() => match joined {
                    Some(Ok(outcome)) => outcomes.push(outcome),
                    Some(Err(err)) => {
                        tasks.abort_all();
                        return Err(DispatchError::TaskJoin { source: err });
                    }
                    None => break,
                },
                () = &mut cancelled => {
                    tasks.abort_all();
                    warn!(
                        "Shutdown requested; aborted with {} of {} requests completed",
                        outcomes.len(),
                        plan.count
                    );
                    return Err(DispatchError::Cancelled {
                        completed: outcomes.len(),
                        total: plan.count,
                    });
                }
            }
        }

        outcomes.sort_unstable_by_key(|outcome| outcome.request_id);
        info!(
            "Dispatch finished: {} of {} requests received a response",
            outcomes.iter().filter(|outcome| outcome.success).count(),
            outcomes.len()
        );
        Ok(outcomes)
    }
}

/// Work for one request id; owns everything it needs so it can be spawned.
pub(super) struct RequestTask<T> {
    pub(super) request_id: usize,
    pub(super) seed: u64,
    pub(super) base_url: Arc<str>,
    pub(super) sampler: Arc<ProfileSampler>,
    pub(super) transport: Arc<T>,
    pub(super) permits: Arc<Semaphore>,
    pub(super) delay: Duration,
    pub(super) request_timeout: Duration,
}

impl<T> RequestTask<T>
where
    T: Transport + 'static,
{
    pub(super) async fn execute(self) -> RequestOutcome {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let profile = self.sampler.pick(&mut rng);
        let url = resolve_url(&self.base_url, pick_path(&mut rng));

        let permit = match Arc::clone(&self.permits).acquire_owned().await {
            Ok(permit) => permit,
            Err(_closed) => {
                warn!("#{} dropped: concurrency limiter closed", self.request_id);
                return RequestOutcome::failed(
                    self.request_id,
                    url,
                    profile,
                    &TransportError::LimiterClosed,
                );
            }
        };

        let request = ProbeRequest {
            url,
            user_agent: profile.header_value().map(str::to_owned),
        };

        let started = Instant::now();
        let result = timeout(self.request_timeout, self.transport.get(&request))
            .await
            .unwrap_or_else(|_elapsed| {
                Err(TransportError::Timeout {
                    timeout: self.request_timeout,
                })
            });
        let elapsed = started.elapsed();

        let outcome = match result {
            Ok(response) => {
                debug!(
                    "#{} [{}] {} -> {} in {}ms",
                    self.request_id,
                    profile.category(),
                    request.url,
                    response.status,
                    elapsed.as_millis()
                );
                RequestOutcome::succeeded(
                    self.request_id,
                    request.url,
                    profile,
                    response.status,
                    elapsed,
                )
            }
            Err(err) => {
                debug!(
                    "#{} [{}] {} failed: {}",
                    self.request_id,
                    profile.category(),
                    request.url,
                    err
                );
                RequestOutcome::failed(self.request_id, request.url, profile, &err)
            }
        };

        let pause = pacing_delay(self.delay, &mut rng);
        if !pause.is_zero() {
            sleep(pause).await;
        }
        drop(permit);

        outcome
    }
}

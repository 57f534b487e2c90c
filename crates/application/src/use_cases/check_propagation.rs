use crate::events::ProgressEmitter;
use crate::ports::{AuthoritativeDiscovery, TargetChecker};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use ripple_domain::{
    DomainError, Endpoint, ProgressEvent, PropagationReport, RunConfig, RunOutcome, TargetKind,
    TargetStatus,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Drives one propagation run: discovery, then timed sweeps over every
/// target until all have matched, the deadline passes, or the run is
/// cancelled.
///
/// Target state lives in this task only. Check results come back through a
/// `FuturesUnordered` and are applied one at a time, so no lock is needed.
pub struct CheckPropagationUseCase {
    discovery: Arc<dyn AuthoritativeDiscovery>,
    checker: Arc<dyn TargetChecker>,
}

/// Clock shared by every sweep of a run.
struct RunClock {
    start: Instant,
    deadline: Instant,
}

impl CheckPropagationUseCase {
    pub fn new(discovery: Arc<dyn AuthoritativeDiscovery>, checker: Arc<dyn TargetChecker>) -> Self {
        Self { discovery, checker }
    }

    /// Runs to a terminal event and returns the summary.
    ///
    /// Timeout and cancellation are outcomes, not errors. `Err` means
    /// discovery failed and no target was ever checked; the `Error` event
    /// has been emitted by then.
    pub async fn execute(
        &self,
        run: &RunConfig,
        events: &ProgressEmitter,
        cancel: &CancellationToken,
    ) -> Result<PropagationReport, DomainError> {
        info!(
            domain = %run.domain,
            record_type = %run.criteria.record_type,
            value = %run.criteria.value,
            "Starting propagation check"
        );

        let discovered = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!(domain = %run.domain, "Check cancelled during discovery");
                events.finish(ProgressEvent::Cancelled).await;
                return Ok(PropagationReport::new(run, &[], &[], RunOutcome::Cancelled, Duration::ZERO));
            }
            result = self.discovery.discover(&run.domain, &run.root_servers) => result,
        };

        let authoritative_endpoints = match discovered {
            Ok(endpoints) => endpoints,
            Err(e) => {
                error!(domain = %run.domain, error = %e, "Failed to find authoritative servers");
                events
                    .finish(ProgressEvent::Error {
                        message: format!("failed to find authoritative servers: {}", e),
                    })
                    .await;
                return Err(e);
            }
        };

        info!(
            domain = %run.domain,
            servers = authoritative_endpoints.len(),
            "Authoritative servers discovered"
        );
        events.emit(ProgressEvent::Discovered {
            authoritative: authoritative_endpoints.clone(),
        });

        let resolver_endpoints: Vec<Endpoint> = run
            .public_resolvers
            .iter()
            .copied()
            .map(Endpoint::public_resolver)
            .chain(std::iter::once(Endpoint::system()))
            .collect();
        events.emit(ProgressEvent::ResolversInitialized {
            resolvers: resolver_endpoints.clone(),
        });

        let mut authoritative: Vec<TargetStatus> = authoritative_endpoints
            .into_iter()
            .map(|ep| TargetStatus::new(ep, TargetKind::Authoritative))
            .collect();
        let mut resolvers: Vec<TargetStatus> = resolver_endpoints
            .into_iter()
            .map(|ep| TargetStatus::new(ep, TargetKind::Resolver))
            .collect();

        let (outcome, elapsed) = self
            .poll(run, &mut authoritative, &mut resolvers, events, cancel)
            .await;

        let terminal = match outcome {
            RunOutcome::Completed => ProgressEvent::Complete { elapsed },
            RunOutcome::Timeout => ProgressEvent::Timeout { elapsed },
            RunOutcome::Cancelled => ProgressEvent::Cancelled,
        };
        info!(
            domain = %run.domain,
            outcome = outcome.as_str(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Propagation check finished"
        );
        events.finish(terminal).await;

        Ok(PropagationReport::new(run, &authoritative, &resolvers, outcome, elapsed))
    }

    /// Same engine with no event consumer, for one-shot callers.
    pub async fn run_to_completion(
        &self,
        run: &RunConfig,
        cancel: &CancellationToken,
    ) -> Result<PropagationReport, DomainError> {
        self.execute(run, &ProgressEmitter::new_disabled(), cancel).await
    }

    async fn poll(
        &self,
        run: &RunConfig,
        authoritative: &mut [TargetStatus],
        resolvers: &mut [TargetStatus],
        events: &ProgressEmitter,
        cancel: &CancellationToken,
    ) -> (RunOutcome, Duration) {
        let start = Instant::now();
        let clock = RunClock {
            start,
            deadline: start + run.deadline,
        };
        let mut ticker = interval_at(start + run.poll_interval, run.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut sweep = 0u32;
        loop {
            if cancel.is_cancelled() {
                return (RunOutcome::Cancelled, start.elapsed());
            }

            sweep += 1;
            debug!(
                sweep,
                pending = pending(authoritative) + pending(resolvers),
                "Starting sweep"
            );

            // Authoritative batch first, then resolvers. Only affects event order.
            for batch in [&mut *authoritative, &mut *resolvers] {
                if let Some(outcome) = self.sweep_batch(run, batch, &clock, events, cancel).await {
                    return (outcome, start.elapsed());
                }
            }

            if pending(authoritative) == 0 && pending(resolvers) == 0 {
                return (RunOutcome::Completed, start.elapsed());
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return (RunOutcome::Cancelled, start.elapsed()),
                _ = sleep_until(clock.deadline) => return (RunOutcome::Timeout, start.elapsed()),
                _ = ticker.tick() => {}
            }
        }
    }

    /// Checks every pending target of one batch concurrently and waits for all
    /// of them. Returns early with the outcome if the run is cancelled or the
    /// deadline passes; unfinished checks are dropped and their results never
    /// applied.
    async fn sweep_batch(
        &self,
        run: &RunConfig,
        targets: &mut [TargetStatus],
        clock: &RunClock,
        events: &ProgressEmitter,
        cancel: &CancellationToken,
    ) -> Option<RunOutcome> {
        let mut in_flight: FuturesUnordered<_> = targets
            .iter()
            .enumerate()
            .filter(|(_, target)| !target.propagated)
            .map(|(idx, target)| {
                let kind = target.kind;
                let endpoint = target.endpoint.clone();
                async move { (idx, self.check(run, kind, &endpoint).await) }
            })
            .collect();

        while !in_flight.is_empty() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Some(RunOutcome::Cancelled),
                _ = sleep_until(clock.deadline) => return Some(RunOutcome::Timeout),
                Some((idx, matched)) = in_flight.next() => {
                    let Some(record) = matched else { continue };
                    let found_after = clock.start.elapsed();
                    let target = &mut targets[idx];
                    if target.mark_propagated(record.clone(), found_after) {
                        info!(
                            kind = %target.kind,
                            server = %target.endpoint.name,
                            record = %record,
                            found_after_ms = found_after.as_millis() as u64,
                            "Target propagated"
                        );
                        events.emit(ProgressEvent::TargetPropagated {
                            kind: target.kind,
                            endpoint: target.endpoint.clone(),
                            matched_record: record,
                            found_after,
                        });
                    }
                }
            }
        }
        None
    }

    async fn check(&self, run: &RunConfig, kind: TargetKind, endpoint: &Endpoint) -> Option<String> {
        match kind {
            TargetKind::Authoritative => {
                let server = endpoint.address?;
                self.checker
                    .check_authoritative(server, &run.domain, &run.criteria, run.query_timeout)
                    .await
            }
            TargetKind::Resolver => {
                self.checker
                    .check_resolver(endpoint.address, &run.domain, &run.criteria, run.query_timeout)
                    .await
            }
        }
    }
}

fn pending(targets: &[TargetStatus]) -> usize {
    targets.iter().filter(|t| !t.propagated).count()
}

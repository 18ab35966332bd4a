//! The lookup race
//!
//! Starts one task per provider against shared outcome channels and
//! settles on the first of: a successful answer, the last of an
//! all-failed round, or the deadline.

use crate::address::NormalizedAddress;
use crate::error::LookupError;
use crate::network::HttpClient;
use crate::providers::Provider;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Terminal outcome of one race
#[derive(Debug)]
pub enum RaceOutcome {
    /// The fastest successful answer; later arrivals are dropped
    Winner(NormalizedAddress),
    /// Every provider failed before the deadline; carries the first
    /// error that arrived
    Failed(LookupError),
    /// No outcome within the deadline, even if a provider would have
    /// answered later
    TimedOut(Duration),
}

/// Coordinates one concurrent lookup across all configured providers
pub struct Racer {
    client: HttpClient,
    providers: Vec<Arc<dyn Provider>>,
    timeout: Duration,
}

impl Racer {
    /// Create a racer with the default deadline
    pub fn new(client: HttpClient, providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            client,
            providers,
            timeout: Duration::from_millis(crate::DEFAULT_TIMEOUT_MS),
        }
    }

    /// Set the overall race deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Race all providers for one CEP.
    ///
    /// Losing tasks are abandoned, not cancelled: both channels hold
    /// one slot per provider, so a late write lands in buffered
    /// capacity and is never read. The process is expected to exit
    /// shortly after this returns.
    pub async fn run(&self, cep: &str) -> RaceOutcome {
        let capacity = self.providers.len().max(1);
        let (result_tx, mut result_rx) = mpsc::channel::<NormalizedAddress>(capacity);
        let (error_tx, mut error_rx) = mpsc::channel::<LookupError>(capacity);

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let client = self.client.clone();
            let cep = cep.to_string();
            let result_tx = result_tx.clone();
            let error_tx = error_tx.clone();

            tokio::spawn(async move {
                let start = Instant::now();
                match provider.lookup(&client, &cep).await {
                    Ok(address) => {
                        info!("{} answered in {:?}", provider.name(), start.elapsed());
                        let _ = result_tx.send(address).await;
                    }
                    Err(err) => {
                        warn!("{} failed after {:?}: {}", provider.name(), start.elapsed(), err);
                        let _ = error_tx.send(err).await;
                    }
                }
            });
        }
        drop(result_tx);
        drop(error_tx);

        let deadline = tokio::time::sleep(self.timeout);
        tokio::pin!(deadline);

        let mut failures = 0usize;
        let mut first_error: Option<LookupError> = None;

        loop {
            tokio::select! {
                // A success always beats an error that is ready in the
                // same poll.
                biased;

                Some(address) = result_rx.recv() => {
                    debug!("settling on answer from {}", address.source);
                    return RaceOutcome::Winner(address);
                }
                Some(err) = error_rx.recv() => {
                    failures += 1;
                    if first_error.is_none() {
                        first_error = Some(err);
                    } else {
                        debug!("dropping subsequent error: {}", err);
                    }
                    // Keep waiting while any provider is still in
                    // flight; its success must not be eclipsed.
                    if failures == self.providers.len() {
                        if let Some(err) = first_error.take() {
                            return RaceOutcome::Failed(err);
                        }
                    }
                }
                _ = &mut deadline => {
                    warn!("race deadline of {:?} elapsed", self.timeout);
                    return RaceOutcome::TimedOut(self.timeout);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{BrasilApi, ViaCep};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BRASIL_BODY: &str = r#"{"cep":"68904360","state":"AP","city":"Macapá","neighborhood":"Centro","street":"Rua X","service":"test"}"#;
    const VIACEP_BODY: &str = r#"{"cep":"68904-360","logradouro":"Rua Jovino Dinoá","bairro":"Centro","localidade":"Macapá","uf":"AP"}"#;

    async fn brasil_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cep/v1/68904360"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    async fn viacep_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ws/68904360/json/"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn racer_for(brasil: &MockServer, viacep: &MockServer, timeout: Duration) -> Racer {
        let providers: Vec<Arc<dyn Provider>> = vec![
            Arc::new(BrasilApi::with_base_url(brasil.uri())),
            Arc::new(ViaCep::with_base_url(viacep.uri())),
        ];
        Racer::new(HttpClient::new().unwrap(), providers).with_timeout(timeout)
    }

    #[tokio::test]
    async fn test_fastest_success_wins() {
        let brasil = brasil_server(
            ResponseTemplate::new(200)
                .set_body_string(BRASIL_BODY)
                .set_delay(Duration::from_millis(50)),
        )
        .await;
        let viacep = viacep_server(
            ResponseTemplate::new(200)
                .set_body_string(VIACEP_BODY)
                .set_delay(Duration::from_millis(300)),
        )
        .await;

        let racer = racer_for(&brasil, &viacep, Duration::from_secs(1));
        match racer.run("68904360").await {
            RaceOutcome::Winner(address) => {
                assert_eq!(address.source, "BrasilAPI");
                assert_eq!(address.cep, "68904360");
                assert_eq!(address.street, "Rua X");
                assert_eq!(address.district, "Centro");
                assert_eq!(address.city, "Macapá");
                assert_eq!(address.state, "AP");
            }
            other => panic!("expected a winner, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_early_error_does_not_eclipse_later_success() {
        let brasil = brasil_server(ResponseTemplate::new(500)).await;
        let viacep = viacep_server(
            ResponseTemplate::new(200)
                .set_body_string(VIACEP_BODY)
                .set_delay(Duration::from_millis(400)),
        )
        .await;

        let racer = racer_for(&brasil, &viacep, Duration::from_secs(1));
        match racer.run("68904360").await {
            RaceOutcome::Winner(address) => assert_eq!(address.source, "ViaCEP"),
            other => panic!("expected ViaCEP to win, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_all_failures_report_an_error_not_a_timeout() {
        let brasil = brasil_server(ResponseTemplate::new(500)).await;
        let viacep = viacep_server(ResponseTemplate::new(404)).await;

        let racer = racer_for(&brasil, &viacep, Duration::from_secs(1));
        match racer.run("68904360").await {
            RaceOutcome::Failed(err) => {
                assert!(matches!(err, LookupError::HttpStatus { .. }));
            }
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deadline_beats_slow_providers() {
        let brasil = brasil_server(
            ResponseTemplate::new(200)
                .set_body_string(BRASIL_BODY)
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let viacep = viacep_server(
            ResponseTemplate::new(200)
                .set_body_string(VIACEP_BODY)
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let racer = racer_for(&brasil, &viacep, Duration::from_millis(100));
        match racer.run("68904360").await {
            RaceOutcome::TimedOut(deadline) => {
                assert_eq!(deadline, Duration::from_millis(100));
            }
            other => panic!("expected a timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_failure_counts_as_provider_error() {
        let brasil = brasil_server(ResponseTemplate::new(200).set_body_string("not json")).await;
        let viacep = viacep_server(ResponseTemplate::new(200).set_body_string("{}")).await;

        let racer = racer_for(&brasil, &viacep, Duration::from_secs(1));
        match racer.run("68904360").await {
            RaceOutcome::Failed(err) => {
                assert!(matches!(err, LookupError::Decode { .. }));
            }
            other => panic!("expected a decode failure, got {:?}", other),
        }
    }
}

//! # Mock Framework
//!
//! In-memory doubles for every port, for testing the pipeline without a chat
//! API or real providers.
//!
//! - [`StaticProvider`] recognises numbers by a fixed rule.
//! - [`MockTrackingService`] answers queries from scripted expectations.
//! - [`MockTransport`] records every send and edit, and can be told to fail.
//!
//! ```ignore
//! let mut service = MockTrackingService::new();
//! service.expect_query("InPost").return_ok(data);
//! service.expect_query("DHL").return_err(QueryError::NotFound);
//!
//! let transport = MockTransport::new();
//! transport.expect_edit().return_err(TransportError::Edit("429".into()));
//! // ... run the command ...
//! service.verify();
//! transport.verify();
//! ```

use crate::framework::{ChatTransport, Provider, QueryError, TrackingService, TransportError};
use crate::model::{EditMessage, MessageId, OutgoingMessage, TrackingData};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// =============================================================================
// PROVIDERS
// =============================================================================

/// How a [`StaticProvider`] decides whether it recognises a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberRule {
    Any,
    Nothing,
    Prefix(String),
    /// Exactly this many ASCII digits.
    Digits(usize),
}

/// A provider with a fixed name and a fixed recognition rule.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    name: String,
    rule: NumberRule,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>, rule: NumberRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Shorthand for a provider that recognises every number.
    pub fn any(name: impl Into<String>) -> Arc<dyn Provider> {
        Arc::new(Self::new(name, NumberRule::Any))
    }

    /// Shorthand for a provider that recognises nothing.
    pub fn nothing(name: impl Into<String>) -> Arc<dyn Provider> {
        Arc::new(Self::new(name, NumberRule::Nothing))
    }

    pub fn prefix(name: impl Into<String>, prefix: impl Into<String>) -> Arc<dyn Provider> {
        Arc::new(Self::new(name, NumberRule::Prefix(prefix.into())))
    }
}

impl Provider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches_number(&self, shipment_number: &str) -> bool {
        match &self.rule {
            NumberRule::Any => true,
            NumberRule::Nothing => false,
            NumberRule::Prefix(prefix) => shipment_number.starts_with(prefix.as_str()),
            NumberRule::Digits(len) => {
                shipment_number.len() == *len
                    && shipment_number.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

// =============================================================================
// TRACKING SERVICE
// =============================================================================

/// A scripted answer for one provider.
enum Scripted {
    Answer {
        delay: Duration,
        response: Result<TrackingData, QueryError>,
    },
    /// Never answers.
    Hang,
}

/// A tracking service whose answers are set up in advance, per provider name.
///
/// Each expectation is consumed by the first query to its provider. A query to
/// a provider without an expectation fails with a generic error.
#[derive(Clone, Default)]
pub struct MockTrackingService {
    expectations: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl MockTrackingService {
    /// Creates a new mock service with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a query against the named provider.
    pub fn expect_query(&mut self, provider: impl Into<String>) -> QueryExpectationBuilder {
        QueryExpectationBuilder {
            provider: provider.into(),
            delay: Duration::ZERO,
            expectations: self.expectations.clone(),
        }
    }

    /// Number of queries received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of scripted answers handed back so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Verifies that every expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let mut names: Vec<_> = exps.keys().cloned().collect();
            names.sort();
            panic!("Not all queries were made. Remaining: {:?}", names);
        }
    }
}

#[async_trait]
impl TrackingService for MockTrackingService {
    async fn invoke(
        &self,
        provider: Arc<dyn Provider>,
        shipment_number: &str,
    ) -> Result<TrackingData, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.expectations.lock().unwrap().remove(provider.name());

        match scripted {
            Some(Scripted::Answer { delay, response }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                self.completed.fetch_add(1, Ordering::SeqCst);
                response
            }
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err(QueryError::provider(format!(
                "unexpected query to {} for {}",
                provider.name(),
                shipment_number
            ))),
        }
    }
}

/// Builder for query expectations.
pub struct QueryExpectationBuilder {
    provider: String,
    delay: Duration,
    expectations: Arc<Mutex<HashMap<String, Scripted>>>,
}

impl QueryExpectationBuilder {
    /// Delays the answer.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, data: TrackingData) {
        self.push(Scripted::Answer {
            delay: self.delay,
            response: Ok(data),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: QueryError) {
        self.push(Scripted::Answer {
            delay: self.delay,
            response: Err(error),
        });
    }

    /// Sets the expectation to never answer.
    pub fn hang(self) {
        self.push(Scripted::Hang);
    }

    fn push(&self, scripted: Scripted) {
        let mut exps = self.expectations.lock().unwrap();
        exps.insert(self.provider.clone(), scripted);
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Default)]
struct TransportState {
    next_id: i32,
    sent: Vec<(MessageId, OutgoingMessage)>,
    edits: Vec<EditMessage>,
    send_outcomes: VecDeque<Result<(), TransportError>>,
    edit_outcomes: VecDeque<Result<(), TransportError>>,
}

/// A chat transport that keeps everything it is asked to deliver.
///
/// Sends and edits succeed unless an outcome was scripted with
/// [`expect_send`](Self::expect_send) or [`expect_edit`](Self::expect_edit);
/// scripted outcomes are consumed in order.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<TransportState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the outcome of the next unscripted send.
    pub fn expect_send(&self) -> OutcomeBuilder {
        OutcomeBuilder {
            state: self.state.clone(),
            kind: OutcomeKind::Send,
        }
    }

    /// Scripts the outcome of the next unscripted edit.
    pub fn expect_edit(&self) -> OutcomeBuilder {
        OutcomeBuilder {
            state: self.state.clone(),
            kind: OutcomeKind::Edit,
        }
    }

    /// Every message successfully sent, in order, with the id it was given.
    pub fn sent(&self) -> Vec<(MessageId, OutgoingMessage)> {
        self.state.lock().unwrap().sent.clone()
    }

    /// Every successful edit, in order.
    pub fn edits(&self) -> Vec<EditMessage> {
        self.state.lock().unwrap().edits.clone()
    }

    /// Sent messages that carry an inline action.
    pub fn detail_messages(&self) -> Vec<OutgoingMessage> {
        self.sent()
            .into_iter()
            .filter(|(_, msg)| msg.action.is_some())
            .map(|(_, msg)| msg)
            .collect()
    }

    /// Sent messages without an inline action.
    pub fn status_messages(&self) -> Vec<(MessageId, OutgoingMessage)> {
        self.sent()
            .into_iter()
            .filter(|(_, msg)| msg.action.is_none())
            .collect()
    }

    /// Text currently shown by the given message, after all edits.
    pub fn current_text(&self, id: MessageId) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .edits
            .iter()
            .rev()
            .find(|edit| edit.message_id == id)
            .map(|edit| edit.text.clone())
            .or_else(|| {
                state
                    .sent
                    .iter()
                    .find(|(sent_id, _)| *sent_id == id)
                    .map(|(_, msg)| msg.text.clone())
            })
    }

    /// Verifies that every scripted outcome was consumed.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        let remaining = state.send_outcomes.len() + state.edit_outcomes.len();
        if remaining != 0 {
            panic!("Not all transport expectations were met. {} remaining", remaining);
        }
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_message(&self, message: OutgoingMessage) -> Result<MessageId, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.send_outcomes.pop_front().unwrap_or(Ok(()))?;
        state.next_id += 1;
        let id = MessageId(state.next_id);
        state.sent.push((id, message));
        Ok(id)
    }

    async fn edit_message(&self, edit: EditMessage) -> Result<(), TransportError> {
        let mut state = self.state.lock().unwrap();
        state.edit_outcomes.pop_front().unwrap_or(Ok(()))?;
        state.edits.push(edit);
        Ok(())
    }
}

enum OutcomeKind {
    Send,
    Edit,
}

/// Builder for transport outcomes.
pub struct OutcomeBuilder {
    state: Arc<Mutex<TransportState>>,
    kind: OutcomeKind,
}

impl OutcomeBuilder {
    /// Lets the call through.
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    /// Fails the call.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, outcome: Result<(), TransportError>) {
        let mut state = self.state.lock().unwrap();
        match self.kind {
            OutcomeKind::Send => state.send_outcomes.push_back(outcome),
            OutcomeKind::Edit => state.edit_outcomes.push_back(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChatId;

    #[test]
    fn static_provider_rules() {
        let prefix = StaticProvider::prefix("InPost", "PL");
        assert!(prefix.matches_number("PL123"));
        assert!(!prefix.matches_number("DE123"));

        let digits = StaticProvider::new("Poczta", NumberRule::Digits(4));
        assert!(digits.matches_number("1234"));
        assert!(!digits.matches_number("12a4"));
        assert!(!digits.matches_number("12345"));

        assert!(!StaticProvider::nothing("x").matches_number("anything"));
    }

    #[tokio::test]
    async fn test_mock_service_with_expectations() {
        let mut service = MockTrackingService::new();
        service
            .expect_query("A")
            .return_ok(TrackingData::new("123", "A"));
        service.expect_query("B").return_err(QueryError::NotFound);

        let a = service.invoke(StaticProvider::any("A"), "123").await;
        let b = service.invoke(StaticProvider::any("B"), "123").await;
        let c = service.invoke(StaticProvider::any("C"), "123").await;

        assert_eq!(a.unwrap().provider_name, "A");
        assert!(b.unwrap_err().is_not_found());
        assert_eq!(
            c.unwrap_err().to_string(),
            "unexpected query to C for 123"
        );
        assert_eq!(service.calls(), 3);
        service.verify();
    }

    #[tokio::test]
    async fn test_mock_transport_scripted_failure() {
        let transport = MockTransport::new();
        transport
            .expect_send()
            .return_err(TransportError::Send("flood".to_string()));

        let first = transport
            .send_message(OutgoingMessage::html(ChatId(1), "a"))
            .await;
        assert_eq!(first, Err(TransportError::Send("flood".to_string())));

        let second = transport
            .send_message(OutgoingMessage::html(ChatId(1), "b"))
            .await
            .unwrap();
        transport
            .edit_message(EditMessage {
                chat_id: ChatId(1),
                message_id: second,
                text: "c".to_string(),
                parse_mode: Default::default(),
            })
            .await
            .unwrap();

        assert_eq!(transport.sent().len(), 1);
        assert_eq!(transport.current_text(second).as_deref(), Some("c"));
        transport.verify();
    }
}

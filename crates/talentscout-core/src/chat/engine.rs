//! The screening dialogue loop.
//!
//! `ScreeningEngine` orchestrates one turn at a time: intake, exit
//! detection, prompt composition, model invocation, sentiment annotation,
//! and transcript update. It owns the only real branching in the system --
//! the exit sentinel check -- and the session open/close lifecycle.
//!
//! Turns are strictly sequential within a session: each submission is
//! handled to completion before the next is accepted. The model call is
//! the only operation that blocks on network I/O.

use tracing::{info, warn};

use talentscout_types::chat::{SessionState, Turn};
use talentscout_types::emotion::SentimentReport;
use talentscout_types::error::SessionError;
use talentscout_types::llm::CompletionRequest;

use crate::emotion::annotator::SentimentAnnotator;
use crate::llm::box_provider::BoxLlmProvider;

use super::prompt;
use super::session::ScreeningSession;

/// The literal token that hard-terminates the conversation, compared
/// case-insensitively after trimming surrounding whitespace.
pub const EXIT_SENTINEL: &str = "exit";

/// Synthetic first user message that elicits the assistant's greeting.
/// Never appended to the visible transcript.
pub const OPENING_PROBE: &str = "Hi";

/// Fixed closing message produced on the exit turn, without any model call.
pub const CLOSING_MESSAGE: &str = "Thank you for your time. The next step is a technical \
interview with one of our engineers. We will be in touch with you shortly. Have a great day!";

/// Model parameters for the screening conversation.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Result of one dialogue-loop step.
///
/// `sentiment` is the out-of-band side channel: present on successful
/// non-exit turns, absent on the exit turn and on model failure. It is
/// never mixed into the transcript or the prompt.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: Turn,
    pub sentiment: Option<SentimentReport>,
    pub ended: bool,
}

/// Orchestrates screening turns against a model provider and a sentiment
/// annotator.
///
/// The engine is stateless across sessions: all conversation state lives
/// in the [`ScreeningSession`] passed to each call, so one engine serves
/// any number of independent sessions.
pub struct ScreeningEngine {
    provider: BoxLlmProvider,
    annotator: SentimentAnnotator,
    config: ScreeningConfig,
}

impl ScreeningEngine {
    /// Create an engine over the given provider and annotator.
    pub fn new(
        provider: BoxLlmProvider,
        annotator: SentimentAnnotator,
        config: ScreeningConfig,
    ) -> Self {
        Self {
            provider,
            annotator,
            config,
        }
    }

    /// The model configuration in use.
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Open a session: elicit the assistant's greeting.
    ///
    /// Sends the synthetic [`OPENING_PROBE`] to the model; only the reply is
    /// appended (as Turn 0 of the transcript). A model failure here becomes
    /// a visible error-text greeting and the session still activates, so the
    /// candidate can retry by sending a message.
    pub async fn open(&self, session: &mut ScreeningSession) -> Result<TurnOutcome, SessionError> {
        match session.state() {
            SessionState::AwaitingGreeting => {}
            SessionState::Ended => return Err(SessionError::Ended),
            SessionState::Active => return Err(SessionError::AlreadyOpened),
        }

        let greeting = self.invoke_model("", OPENING_PROBE).await;
        session.activate();
        let reply = session.push_assistant(&greeting);
        info!(session_id = %session.id(), "Session opened with greeting");

        Ok(TurnOutcome {
            reply,
            sentiment: None,
            ended: false,
        })
    }

    /// Process one candidate message.
    ///
    /// The user turn is appended before anything else, so the UI always sees
    /// the candidate's own message first. The exit sentinel short-circuits
    /// to the fixed closing message without invoking the model or the
    /// classifier. Model failure is recovered at the turn boundary: the
    /// erroring turn still completes with the error text as the reply and
    /// the session stays active.
    pub async fn step(
        &self,
        session: &mut ScreeningSession,
        input: &str,
    ) -> Result<TurnOutcome, SessionError> {
        match session.state() {
            SessionState::Active => {}
            SessionState::Ended => return Err(SessionError::Ended),
            SessionState::AwaitingGreeting => return Err(SessionError::NotOpened),
        }

        // History must not include the turn being processed; snapshot first.
        let history = session.memory().render();
        session.push_user(input);

        if is_exit(input) {
            session.end();
            let reply = session.push_assistant(CLOSING_MESSAGE);
            info!(session_id = %session.id(), "Exit sentinel received, session ended");
            return Ok(TurnOutcome {
                reply,
                sentiment: None,
                ended: true,
            });
        }

        let (text, sentiment) = match self.try_complete(&history, input).await {
            Ok(content) => {
                let sentiment = match self.annotator.annotate(input) {
                    Ok(report) => report,
                    Err(e) => {
                        // Sentiment is auxiliary: degrade to N/A, keep the turn.
                        warn!(session_id = %session.id(), error = %e, "Emotion classification failed");
                        SentimentReport::not_applicable()
                    }
                };
                (content, Some(sentiment))
            }
            Err(e) => {
                warn!(session_id = %session.id(), error = %e, "Model call failed");
                (format!("Sorry, an error occurred: {e}"), None)
            }
        };

        let reply = session.push_assistant(&text);
        Ok(TurnOutcome {
            reply,
            sentiment,
            ended: false,
        })
    }

    /// Compose the prompt and call the model, mapping failure to error text.
    async fn invoke_model(&self, history: &str, input: &str) -> String {
        match self.try_complete(history, input).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Model call failed");
                format!("Sorry, an error occurred: {e}")
            }
        }
    }

    async fn try_complete(
        &self,
        history: &str,
        input: &str,
    ) -> Result<String, talentscout_types::llm::LlmError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            prompt: prompt::compose(history, input),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };
        let response = self.provider.complete(&request).await?;
        Ok(response.content)
    }
}

/// Whether the input is the exit sentinel: trimmed, case-insensitive.
fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use talentscout_types::chat::{SessionState, TurnRole};
    use talentscout_types::emotion::{EmotionError, EmotionLabel, EmotionScores};
    use talentscout_types::llm::{CompletionResponse, LlmError};

    use crate::emotion::classifier::EmotionClassifier;
    use crate::llm::provider::LlmProvider;

    /// Replays scripted replies; `Err` entries simulate provider failure.
    struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<Result<&str, &str>>) -> Self {
            Self {
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|r| r.map(String::from).map_err(String::from))
                        .collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("provider called more times than scripted");
            match next {
                Ok(content) => Ok(CompletionResponse {
                    content,
                    model: "stub".to_string(),
                }),
                Err(message) => Err(LlmError::Provider { message }),
            }
        }
    }

    struct CountingClassifier {
        scores: EmotionScores,
        calls: AtomicUsize,
    }

    impl CountingClassifier {
        fn new(scores: EmotionScores) -> Self {
            Self {
                scores,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl EmotionClassifier for CountingClassifier {
        fn name(&self) -> &str {
            "counting"
        }

        fn classify(&self, _text: &str) -> Result<EmotionScores, EmotionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.scores.clone())
        }
    }

    fn engine_with(
        replies: Vec<Result<&str, &str>>,
        scores: EmotionScores,
    ) -> (ScreeningEngine, &'static AtomicUsize, &'static AtomicUsize) {
        let provider = Box::leak(Box::new(ScriptedProvider::new(replies)));
        let classifier = Box::leak(Box::new(CountingClassifier::new(scores)));
        let provider_calls = &provider.calls;
        let classifier_calls = &classifier.calls;

        struct ProviderRef(&'static ScriptedProvider);
        impl LlmProvider for ProviderRef {
            fn name(&self) -> &str {
                self.0.name()
            }
            async fn complete(
                &self,
                request: &CompletionRequest,
            ) -> Result<CompletionResponse, LlmError> {
                self.0.complete(request).await
            }
        }

        struct ClassifierRef(&'static CountingClassifier);
        impl EmotionClassifier for ClassifierRef {
            fn name(&self) -> &str {
                self.0.name()
            }
            fn classify(&self, text: &str) -> Result<EmotionScores, EmotionError> {
                self.0.classify(text)
            }
        }

        let engine = ScreeningEngine::new(
            BoxLlmProvider::new(ProviderRef(provider)),
            SentimentAnnotator::new(Box::new(ClassifierRef(classifier))),
            ScreeningConfig::default(),
        );
        (engine, provider_calls, classifier_calls)
    }

    #[tokio::test]
    async fn test_open_appends_only_greeting() {
        let (engine, provider_calls, _) =
            engine_with(vec![Ok("Hello! I'm the TalentScout assistant.")], EmotionScores::new());
        let mut session = ScreeningSession::new();

        let outcome = engine.open(&mut session).await.unwrap();
        assert_eq!(outcome.reply.text, "Hello! I'm the TalentScout assistant.");
        assert!(outcome.sentiment.is_none());
        assert!(!outcome.ended);

        // The synthetic "Hi" probe is not in the transcript -- only the reply.
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, TurnRole::Assistant);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(provider_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_open_twice_is_rejected() {
        let (engine, _, _) = engine_with(vec![Ok("Hello!")], EmotionScores::new());
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        let err = engine.open(&mut session).await.unwrap_err();
        assert_eq!(err, SessionError::AlreadyOpened);
    }

    #[tokio::test]
    async fn test_step_before_open_is_rejected() {
        let (engine, _, _) = engine_with(vec![], EmotionScores::new());
        let mut session = ScreeningSession::new();
        let err = engine.step(&mut session, "hello").await.unwrap_err();
        assert_eq!(err, SessionError::NotOpened);
    }

    #[tokio::test]
    async fn test_transcript_length_is_two_n_plus_one() {
        let (engine, _, _) = engine_with(
            vec![Ok("Greeting"), Ok("r1"), Ok("r2"), Ok("r3")],
            EmotionScores::from([(EmotionLabel::Happy, 0.6)]),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        for (n, input) in ["one", "two", "three"].iter().enumerate() {
            engine.step(&mut session, input).await.unwrap();
            assert_eq!(session.transcript().len(), 2 * (n + 1) + 1);
        }
    }

    #[tokio::test]
    async fn test_exit_short_circuits_for_any_casing() {
        for sentinel in ["exit", "Exit", "EXIT", "  exit  "] {
            let (engine, provider_calls, classifier_calls) =
                engine_with(vec![Ok("Greeting")], EmotionScores::new());
            let mut session = ScreeningSession::new();
            engine.open(&mut session).await.unwrap();
            let calls_after_open = provider_calls.load(Ordering::SeqCst);

            let outcome = engine.step(&mut session, sentinel).await.unwrap();
            assert!(outcome.ended);
            assert_eq!(outcome.reply.text, CLOSING_MESSAGE);
            assert!(outcome.sentiment.is_none());
            assert!(session.is_ended());

            // Neither the model nor the classifier ran on the exit turn.
            assert_eq!(provider_calls.load(Ordering::SeqCst), calls_after_open);
            assert_eq!(classifier_calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_step_after_end_is_rejected() {
        let (engine, _, _) = engine_with(vec![Ok("Greeting")], EmotionScores::new());
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();
        engine.step(&mut session, "exit").await.unwrap();

        let err = engine.step(&mut session, "hello again").await.unwrap_err();
        assert_eq!(err, SessionError::Ended);
    }

    #[tokio::test]
    async fn test_successful_turn_annotates_user_text() {
        let (engine, _, classifier_calls) = engine_with(
            vec![Ok("Greeting"), Ok("Nice to meet you, Alex! What's your email?")],
            EmotionScores::from([(EmotionLabel::Happy, 0.6)]),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        let outcome = engine.step(&mut session, "My name is Alex").await.unwrap();
        assert_eq!(outcome.reply.text, "Nice to meet you, Alex! What's your email?");
        let sentiment = outcome.sentiment.unwrap();
        assert_eq!(sentiment.dominant, Some(EmotionLabel::Happy));
        assert_eq!(classifier_calls.load(Ordering::SeqCst), 1);

        let transcript = session.transcript();
        assert_eq!(transcript[1].text, "My name is Alex");
        assert_eq!(transcript[2].text, "Nice to meet you, Alex! What's your email?");
    }

    #[tokio::test]
    async fn test_empty_input_is_forwarded_verbatim() {
        let (engine, provider_calls, classifier_calls) = engine_with(
            vec![Ok("Greeting"), Ok("Could you share your name?")],
            EmotionScores::new(),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        // Empty input is not an error and not an exit: a normal model turn.
        let outcome = engine.step(&mut session, "").await.unwrap();
        assert_eq!(outcome.reply.text, "Could you share your name?");
        assert!(!outcome.ended);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.transcript()[1].text, "");
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(provider_calls.load(Ordering::SeqCst), 2);
        assert_eq!(classifier_calls.load(Ordering::SeqCst), 1);

        // No signal in empty text: the side channel reads N/A.
        assert_eq!(outcome.sentiment.unwrap().dominant_str(), "N/A");
    }

    #[tokio::test]
    async fn test_model_failure_recovered_at_turn_boundary() {
        let (engine, _, _) = engine_with(
            vec![Ok("Greeting"), Err("quota exceeded"), Ok("back to normal")],
            EmotionScores::from([(EmotionLabel::Happy, 0.6)]),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        let outcome = engine.step(&mut session, "hello").await.unwrap();
        assert!(outcome.reply.text.starts_with("Sorry, an error occurred:"));
        assert!(outcome.sentiment.is_none());
        assert!(!outcome.ended);
        assert_eq!(session.state(), SessionState::Active);
        // User turn + error assistant turn both recorded.
        assert_eq!(session.transcript().len(), 3);

        // The next turn proceeds normally -- no stuck state.
        let outcome = engine.step(&mut session, "are you there?").await.unwrap();
        assert_eq!(outcome.reply.text, "back to normal");
        assert_eq!(session.transcript().len(), 5);
    }

    #[tokio::test]
    async fn test_classifier_failure_degrades_to_not_applicable() {
        struct BrokenClassifier;
        impl EmotionClassifier for BrokenClassifier {
            fn name(&self) -> &str {
                "broken"
            }
            fn classify(&self, _text: &str) -> Result<EmotionScores, EmotionError> {
                Err(EmotionError::Unavailable("lexicon missing".to_string()))
            }
        }

        let engine = ScreeningEngine::new(
            BoxLlmProvider::new(ScriptedProvider::new(vec![Ok("Greeting"), Ok("reply")])),
            SentimentAnnotator::new(Box::new(BrokenClassifier)),
            ScreeningConfig::default(),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();

        let outcome = engine.step(&mut session, "hello").await.unwrap();
        assert_eq!(outcome.reply.text, "reply");
        let sentiment = outcome.sentiment.unwrap();
        assert_eq!(sentiment.dominant_str(), "N/A");
        assert!(sentiment.scores.is_empty());
    }

    #[tokio::test]
    async fn test_history_excludes_current_input() {
        struct PromptCapture {
            prompts: Mutex<Vec<String>>,
        }
        impl LlmProvider for &'static PromptCapture {
            fn name(&self) -> &str {
                "capture"
            }
            async fn complete(
                &self,
                request: &CompletionRequest,
            ) -> Result<CompletionResponse, LlmError> {
                self.prompts.lock().unwrap().push(request.prompt.clone());
                Ok(CompletionResponse {
                    content: "ok".to_string(),
                    model: "stub".to_string(),
                })
            }
        }

        let capture: &'static PromptCapture = Box::leak(Box::new(PromptCapture {
            prompts: Mutex::new(Vec::new()),
        }));
        let engine = ScreeningEngine::new(
            BoxLlmProvider::new(capture),
            SentimentAnnotator::new(Box::new(CountingClassifier::new(EmotionScores::new()))),
            ScreeningConfig::default(),
        );
        let mut session = ScreeningSession::new();
        engine.open(&mut session).await.unwrap();
        engine.step(&mut session, "first message").await.unwrap();

        let prompts = capture.prompts.lock().unwrap();
        // Turn prompt: greeting in history, input only in the Candidate cue.
        let turn_prompt = &prompts[1];
        assert!(turn_prompt.contains("Hiring Assistant: ok") || turn_prompt.contains("ok"));
        assert_eq!(turn_prompt.matches("first message").count(), 1);
    }

    #[test]
    fn test_is_exit_matching() {
        assert!(is_exit("exit"));
        assert!(is_exit("Exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit(" exit \n"));
        assert!(!is_exit("exits"));
        assert!(!is_exit("please exit"));
        assert!(!is_exit(""));
    }

    #[test]
    fn test_default_config_matches_reference() {
        let config = ScreeningConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }
}

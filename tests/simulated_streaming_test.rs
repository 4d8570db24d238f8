//! End-to-end tests over the public API with a mock transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures_util::StreamExt;

use hf_inference_provider::providers::huggingface::{
    TextGenerationRequest, TextGenerationResponse, TextGenerationTransport,
};
use hf_inference_provider::{
    ChatCapability, ChatMessage, ChatRequest, ChatStreamEvent, FinishReason, HuggingFaceClient,
    LlmError,
};

/// Echoes a canned completion and records every request it sees.
struct RecordingTransport {
    reply: String,
    requests: Mutex<Vec<(String, TextGenerationRequest)>>,
}

impl RecordingTransport {
    fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<(String, TextGenerationRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerationTransport for RecordingTransport {
    async fn generate_text(
        &self,
        model: &str,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse, LlmError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        Ok(TextGenerationResponse {
            generated_text: Some(self.reply.clone()),
        })
    }
}

/// Replies with the prompt it was given, so responses can be traced back
/// to their originating request.
struct EchoTransport;

#[async_trait]
impl TextGenerationTransport for EchoTransport {
    async fn generate_text(
        &self,
        _model: &str,
        request: &TextGenerationRequest,
    ) -> Result<TextGenerationResponse, LlmError> {
        // Yield so interleaved calls actually overlap.
        tokio::task::yield_now().await;
        Ok(TextGenerationResponse {
            generated_text: Some(request.inputs.clone()),
        })
    }
}

fn client_with(transport: Arc<dyn TextGenerationTransport>) -> HuggingFaceClient {
    HuggingFaceClient::builder()
        .model("gpt2")
        .transport(transport)
        .build()
        .unwrap()
}

#[tokio::test]
async fn chat_round_trip_encodes_conversation() {
    let transport = RecordingTransport::new("Hello!");
    let client = client_with(transport.clone());

    let request = ChatRequest::builder()
        .message(ChatMessage::system("Be terse."))
        .message(ChatMessage::user("Hi"))
        .build();
    let response = client.chat(request).await.unwrap();

    assert_eq!(response.content_text(), Some("Hello!"));
    assert_eq!(response.model.as_deref(), Some("gpt2"));

    let recorded = transport.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "gpt2");
    assert_eq!(
        recorded[0].1.inputs,
        "System: Be terse.\nHuman: Hi\nAssistant:"
    );
}

#[tokio::test]
async fn max_new_tokens_never_exceeds_cap() {
    let transport = RecordingTransport::new("ok");
    let client = client_with(transport.clone());

    let request = ChatRequest::builder()
        .message(ChatMessage::user("Hi"))
        .max_tokens(10_000)
        .build();
    client.chat(request).await.unwrap();

    let recorded = transport.recorded();
    assert_eq!(recorded[0].1.parameters.max_new_tokens, 512);
}

#[tokio::test]
async fn default_parameters_applied() {
    let transport = RecordingTransport::new("ok");
    let client = client_with(transport.clone());

    client
        .chat(ChatRequest::new(vec![ChatMessage::user("Hi")]))
        .await
        .unwrap();

    let parameters = &transport.recorded()[0].1.parameters;
    assert_eq!(parameters.max_new_tokens, 150);
    assert_eq!(parameters.temperature, 0.7);
    assert_eq!(parameters.top_p, 0.95);
    assert!(!parameters.return_full_text);
    assert!(parameters.do_sample);
}

#[tokio::test(start_paused = true)]
async fn stream_replays_full_response() {
    let transport = RecordingTransport::new("one two three");
    let client = client_with(transport);

    let stream = client
        .chat_stream(ChatRequest::new(vec![ChatMessage::user("count")]))
        .await
        .unwrap();
    let events: Vec<ChatStreamEvent> = stream.map(|event| event.unwrap()).collect().await;

    let rebuilt: String = events
        .iter()
        .filter_map(|event| match event {
            ChatStreamEvent::ContentDelta { delta } => Some(delta.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(rebuilt, "one two three");
    assert!(matches!(
        events.last(),
        Some(ChatStreamEvent::StreamEnd {
            finish_reason: FinishReason::Stop,
            ..
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn cancel_handle_stops_the_replay() {
    let transport = RecordingTransport::new("a b c d e f g h");
    let client = client_with(transport);

    let handle = client
        .chat_stream_with_cancel(ChatRequest::new(vec![ChatMessage::user("Hi")]))
        .await
        .unwrap();

    let mut stream = handle.stream;
    let first = stream.next().await;
    assert!(matches!(
        first,
        Some(Ok(ChatStreamEvent::ContentDelta { .. }))
    ));

    handle.cancel.cancel();
    let rest: Vec<_> = stream.collect().await;
    // No StreamEnd: the producer was cut off mid-replay.
    assert!(
        !rest
            .iter()
            .any(|event| matches!(event, Ok(ChatStreamEvent::StreamEnd { .. })))
    );
}

#[tokio::test]
async fn concurrent_calls_do_not_cross_talk() {
    let client = Arc::new(client_with(Arc::new(EchoTransport)));

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let text = format!("message number {i}");
            let response = client
                .chat(ChatRequest::new(vec![ChatMessage::user(text.clone())]))
                .await
                .unwrap();
            (text, response.content_text().unwrap().to_string())
        }));
    }

    for handle in handles {
        let (sent, echoed) = handle.await.unwrap();
        assert_eq!(echoed, format!("Human: {sent}\nAssistant:"));
    }
}

#[tokio::test]
async fn ask_helper_returns_plain_text() {
    let transport = RecordingTransport::new("  Forty-two.  ");
    let client = client_with(transport);

    let answer = client.ask("Meaning of life?".to_string()).await.unwrap();
    assert_eq!(answer, "Forty-two.");
}

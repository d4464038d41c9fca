use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::models::{
        ChatTurn,
        DocumentKind,
        ScholarshipFilters,
    },
    gemini::GeminiClient,
};

/// Runs gateway calls off the UI thread. Each request gets its own worker
/// thread that drives the async call to completion on a shared runtime and
/// posts the outcome back over the channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn request_consultation(&self, client: GeminiClient, transcript: Vec<ChatTurn>) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.consult(&transcript).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::ConsultantReply(result));
        });
    }

    pub fn search_scholarships(&self, client: GeminiClient, filters: ScholarshipFilters) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                client.search_scholarships(&filters).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ScholarshipResults(result));
        });
    }

    pub fn review_document(&self, client: GeminiClient, draft: String, kind: DocumentKind) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                client.review_document(&draft, kind).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DocumentFeedback(result));
        });
    }
}

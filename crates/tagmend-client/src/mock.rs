//! Scripted collaborator for tests
//!
//! Results are queued FIFO and handed out one per call; received requests
//! are recorded so tests can assert on what was actually sent. Exhausting
//! the script yields a collaborator error rather than a panic.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tagmend_core::{CorrectionSet, Error, Result};

use crate::Collaborator;

#[derive(Default)]
pub struct MockCollaborator {
    correction_results: Mutex<VecDeque<Result<CorrectionSet>>>,
    answer_results: Mutex<VecDeque<Result<String>>>,
    correction_requests: Mutex<Vec<(String, String)>>,
    questions: Mutex<Vec<String>>,
}

impl MockCollaborator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next correction request.
    pub fn push_correction(&self, result: Result<CorrectionSet>) {
        self.correction_results.lock().unwrap().push_back(result);
    }

    /// Queue the result of the next chat request.
    pub fn push_answer(&self, result: Result<String>) {
        self.answer_results.lock().unwrap().push_back(result);
    }

    /// The `(html, css)` pairs received so far.
    pub fn correction_requests(&self) -> Vec<(String, String)> {
        self.correction_requests.lock().unwrap().clone()
    }

    /// The questions received so far.
    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Collaborator for MockCollaborator {
    async fn request_corrections(&self, html: &str, css: &str) -> Result<CorrectionSet> {
        self.correction_requests
            .lock()
            .unwrap()
            .push((html.to_string(), css.to_string()));
        self.correction_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::collaborator("mock script exhausted")))
    }

    async fn ask(&self, _html: &str, _css: &str, question: &str) -> Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::collaborator("mock script exhausted")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmend_core::Correction;

    #[tokio::test]
    async fn test_scripted_results_fifo() {
        let mock = MockCollaborator::new();
        mock.push_correction(Ok(CorrectionSet {
            html: vec![Correction::unchanged(1, "<p>hi</p>")],
            css: vec![],
        }));
        mock.push_correction(Err(Error::collaborator("boom")));

        let first = mock.request_corrections("<p>hi</p>", "").await;
        assert!(first.is_ok());
        let second = mock.request_corrections("<p>hi</p>", "").await;
        assert!(second.is_err());

        assert_eq!(mock.correction_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_script_errors() {
        let mock = MockCollaborator::new();
        let result = mock.ask("", "", "why?").await;
        assert!(result.is_err());
        assert_eq!(mock.questions(), vec!["why?".to_string()]);
    }
}

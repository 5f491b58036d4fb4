//! Shared in-memory fakes standing in for the hosted store, the LLM, and
//! the Slack webhook.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_summary::api::AppState;
use todo_summary::clients::{Notifier, Summarizer, TodoStore};
use todo_summary::core::models::Todo;
use todo_summary::errors::ApiError;

pub struct FakeStore {
    todos: Mutex<Vec<Todo>>,
    next_id: Mutex<i64>,
    fail: bool,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeStore {
    pub fn empty() -> Self {
        Self::with_texts(&[])
    }

    pub fn with_texts(texts: &[&str]) -> Self {
        let todos: Vec<Todo> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Todo {
                id: i as i64 + 1,
                text: (*text).to_string(),
            })
            .collect();
        let next_id = todos.len() as i64 + 1;
        Self {
            todos: Mutex::new(todos),
            next_id: Mutex::new(next_id),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        let mut store = Self::empty();
        store.fail = true;
        store
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn texts(&self) -> Vec<String> {
        self.todos
            .lock()
            .unwrap()
            .iter()
            .map(|todo| todo.text.clone())
            .collect()
    }

    fn check_available(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ApiError::Upstream("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for FakeStore {
    async fn list(&self) -> Result<Vec<Todo>, ApiError> {
        self.check_available()?;
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn insert(&self, text: &str) -> Result<Todo, ApiError> {
        self.check_available()?;
        let mut next_id = self.next_id.lock().unwrap();
        let todo = Todo {
            id: *next_id,
            text: text.to_string(),
        };
        *next_id += 1;
        self.todos.lock().unwrap().push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, text: &str) -> Result<Todo, ApiError> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        match todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = text.to_string();
                Ok(todo.clone())
            }
            None => Err(ApiError::NotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.check_available()?;
        self.todos.lock().unwrap().retain(|todo| todo.id != id);
        Ok(())
    }
}

pub struct FakeSummarizer {
    response: Option<String>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeSummarizer {
    pub fn returning(summary: &str) -> Self {
        Self {
            response: Some(summary.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, _todo_list: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(summary) => Ok(summary.clone()),
            None => Err(ApiError::Upstream("model unavailable".to_string())),
        }
    }
}

pub struct FakeNotifier {
    fail: bool,
    messages: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeNotifier {
    pub fn accepting() -> Self {
        Self {
            fail: false,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, text: &str) -> Result<(), ApiError> {
        self.messages.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(ApiError::Upstream("webhook returned 500".to_string()));
        }
        Ok(())
    }
}

#[allow(dead_code)]
pub fn state_with(
    store: Arc<FakeStore>,
    summarizer: Arc<FakeSummarizer>,
    notifier: Arc<FakeNotifier>,
) -> AppState {
    AppState {
        store,
        summarizer,
        notifier,
    }
}

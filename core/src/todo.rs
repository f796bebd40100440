//! # Todo List
//!
//! In-memory CRUD store behind the todo page: add, toggle, edit, delete,
//! filter by completion, and clear everything that is done.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo text cannot be empty")]
    EmptyText,
    #[error("no todo with id '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    fn accepts(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(format!("unknown todo filter: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[derive(Debug, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, incomplete todo and returns it.
    pub fn add(&mut self, text: &str) -> Result<&Todo, TodoError> {
        let text = non_empty(text)?;
        let id = self.unused_id();

        self.todos.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        });

        let last = self.todos.len() - 1;
        Ok(&self.todos[last])
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, TodoError> {
        let todo = self.find_mut(id)?;
        todo.completed = !todo.completed;
        Ok(todo.completed)
    }

    /// Replaces the text. Blank text leaves the todo untouched.
    pub fn update(&mut self, id: &str, text: &str) -> Result<(), TodoError> {
        let text = non_empty(text)?;
        self.find_mut(id)?.text = text.to_string();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Todo, TodoError> {
        let idx = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))?;
        Ok(self.todos.remove(idx))
    }

    /// Drops every completed todo and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Todos accepted by `filter`, in insertion order.
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(move |t| filter.accepts(t))
    }

    pub fn counts(&self) -> Counts {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        Counts {
            total: self.todos.len(),
            active: self.todos.len() - completed,
            completed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Todo, TodoError> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoError::NotFound(id.to_string()))
    }

    fn unused_id(&self) -> String {
        loop {
            let id = random_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn non_empty(text: &str) -> Result<&str, TodoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(text)
}

fn random_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

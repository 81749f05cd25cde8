//! Realtime key/value store
//!
//! Data lives in a tree addressed by `/`-separated paths. Leaves hold JSON
//! values; interior nodes hold ordered children. Writing `null` deletes a
//! node, and a branch left with no children disappears with it.
//!
//! [`MemoryStore`] is the in-process implementation used by the dashboard
//! backend and by tests. A networked backend implements the same [`Store`]
//! trait.

use crate::push_id::PushIdGenerator;
use indexmap::{IndexMap, IndexSet};
use serde_json::Value;
use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Characters that may not appear in a path segment
const INVALID_KEY_CHARS: &[char] = &['.', '#', '$', '[', ']'];

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Path or key contains a forbidden character
    #[error("Invalid path {path:?}: segment {segment:?} contains one of . # $ [ ]")]
    InvalidPath { path: String, segment: String },

    /// Value could not be converted to or from JSON
    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Location of a node in the store
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a `/`-separated path. Empty segments are dropped, so `"/a//b/"`
    /// is the same as `"a/b"`.
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            check_key(path, segment)?;
            segments.push(segment.to_string());
        }
        Ok(Self { segments })
    }

    pub fn child(&self, key: &str) -> Result<Self> {
        check_key(&format!("{self}/{key}"), key)?;
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Ok(Self { segments })
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Last segment, `None` at the root
    pub fn key(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

fn check_key(path: &str, key: &str) -> Result<()> {
    if key.is_empty() || key.contains(INVALID_KEY_CHARS) || key.contains('/') {
        return Err(StoreError::InvalidPath {
            path: path.to_string(),
            segment: key.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl FromStr for StorePath {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

new_key_type! {
    /// Handle returned by [`Store::on_child_added`]
    pub struct ListenerId;
}

/// Called with the key and value of each child under a watched path
pub type ChildAddedCallback = Box<dyn FnMut(&str, &Value) + Send>;

/// Operations the dashboard needs from its backing store
pub trait Store {
    /// Value at `path`, or `None` if nothing is stored there
    fn get(&self, path: &StorePath) -> Result<Option<Value>>;

    /// Replace the value at `path`. `Value::Null` deletes it.
    fn set(&mut self, path: &StorePath, value: Value) -> Result<()>;

    /// Append a child under `path` with a generated, chronologically
    /// ordered key, returning that key.
    fn push(&mut self, path: &StorePath, value: Value) -> Result<String>;

    /// The last `n` children of `path` in order, oldest first
    fn last_n(&self, path: &StorePath, n: usize) -> Result<Vec<(String, Value)>>;

    /// Watch for children added under `path`. Existing children are
    /// reported immediately, in order.
    fn on_child_added(&mut self, path: &StorePath, callback: ChildAddedCallback) -> ListenerId;

    /// Stop a listener. Returns false if it was already removed.
    fn off(&mut self, id: ListenerId) -> bool;
}

/// A node is either a leaf value or a branch of children, never both
#[derive(Clone, Debug, Default)]
struct Node {
    value: Option<Value>,
    children: IndexMap<String, Node>,
}

impl Node {
    fn leaf(value: Value) -> Self {
        Self {
            value: Some(value),
            children: IndexMap::new(),
        }
    }

    /// `None` for values that store nothing (null, empty objects)
    fn from_value(path: &StorePath, value: Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => {
                let mut children = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    let child_path = path.child(&key)?;
                    if let Some(node) = Node::from_value(&child_path, value)? {
                        children.insert(key, node);
                    }
                }
                if children.is_empty() {
                    return Ok(None);
                }
                Ok(Some(Self {
                    value: None,
                    children,
                }))
            }
            other => Ok(Some(Node::leaf(other))),
        }
    }

    fn to_value(&self) -> Value {
        match &self.value {
            Some(value) => value.clone(),
            None => Value::Object(
                self.children
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
        }
    }

    fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    fn find(&self, segments: &[String]) -> Option<&Node> {
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Children of the branch at `segments`, creating branches on the way
    /// and replacing any leaf in the path
    fn branch_mut(&mut self, segments: &[String]) -> &mut IndexMap<String, Node> {
        let mut node = self;
        for segment in segments {
            node.value = None;
            node = node.children.entry(segment.clone()).or_default();
        }
        node.value = None;
        &mut node.children
    }

    /// Remove the node at `segments`, pruning branches left empty
    fn remove(&mut self, segments: &[String]) -> bool {
        let Some((first, rest)) = segments.split_first() else {
            return false;
        };
        if rest.is_empty() {
            return self.children.shift_remove(first).is_some();
        }
        let Some(child) = self.children.get_mut(first) else {
            return false;
        };
        let removed = child.remove(rest);
        if child.is_empty() {
            self.children.shift_remove(first);
        }
        removed
    }
}

struct Listener {
    path: StorePath,
    callback: ChildAddedCallback,
}

/// In-memory [`Store`]
pub struct MemoryStore {
    root: Node,
    listeners: SlotMap<ListenerId, Listener>,
    push_ids: PushIdGenerator,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            listeners: SlotMap::with_key(),
            push_ids: PushIdGenerator::new(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn insert_child(&mut self, parent: &StorePath, key: &str, node: Node) {
        self.root
            .branch_mut(parent.segments())
            .insert(key.to_string(), node);
    }

    /// Child keys currently under each watched path
    fn watched_keys(&self) -> Vec<(StorePath, IndexSet<String>)> {
        let mut watched: Vec<(StorePath, IndexSet<String>)> = Vec::new();
        for listener in self.listeners.values() {
            if watched.iter().any(|(path, _)| *path == listener.path) {
                continue;
            }
            let keys = self
                .root
                .find(listener.path.segments())
                .map(|node| node.children.keys().cloned().collect())
                .unwrap_or_default();
            watched.push((listener.path.clone(), keys));
        }
        watched
    }

    /// Fire listeners for every watched child that is not in `before`.
    /// One write can add children at several levels of the tree.
    fn notify_added_since(&mut self, before: Vec<(StorePath, IndexSet<String>)>) {
        let mut added = Vec::new();
        for (path, keys) in before {
            let Some(node) = self.root.find(path.segments()) else {
                continue;
            };
            for (key, child) in &node.children {
                if !keys.contains(key) {
                    added.push((path.clone(), key.clone(), child.to_value()));
                }
            }
        }
        for (path, key, value) in &added {
            for listener in self.listeners.values_mut() {
                if listener.path == *path {
                    (listener.callback)(key.as_str(), value);
                }
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("root", &self.root.to_value())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

impl Store for MemoryStore {
    fn get(&self, path: &StorePath) -> Result<Option<Value>> {
        Ok(self
            .root
            .find(path.segments())
            .filter(|node| !node.is_empty())
            .map(Node::to_value))
    }

    fn set(&mut self, path: &StorePath, value: Value) -> Result<()> {
        let node = Node::from_value(path, value)?;
        let before = self.watched_keys();
        match (path.parent(), node) {
            (None, node) => self.root = node.unwrap_or_default(),
            (Some(parent), Some(node)) => {
                self.insert_child(&parent, path.key().unwrap_or_default(), node)
            }
            (Some(_), None) => {
                if self.root.remove(path.segments()) {
                    tracing::trace!("deleted {}", path);
                }
            }
        }
        self.notify_added_since(before);
        Ok(())
    }

    fn push(&mut self, path: &StorePath, value: Value) -> Result<String> {
        let key = self.push_ids.generate(now_millis());
        let child = path.child(&key)?;
        if let Some(node) = Node::from_value(&child, value)? {
            let before = self.watched_keys();
            self.insert_child(path, &key, node);
            self.notify_added_since(before);
        }
        Ok(key)
    }

    fn last_n(&self, path: &StorePath, n: usize) -> Result<Vec<(String, Value)>> {
        let Some(node) = self.root.find(path.segments()) else {
            return Ok(Vec::new());
        };
        let skip = node.children.len().saturating_sub(n);
        Ok(node
            .children
            .iter()
            .skip(skip)
            .map(|(key, child)| (key.clone(), child.to_value()))
            .collect())
    }

    fn on_child_added(&mut self, path: &StorePath, mut callback: ChildAddedCallback) -> ListenerId {
        if let Some(node) = self.root.find(path.segments()) {
            for (key, child) in &node.children {
                callback(key, &child.to_value());
            }
        }
        let id = self.listeners.insert(Listener {
            path: path.clone(),
            callback,
        });
        tracing::debug!("listening for children of {}", path);
        id
    }

    fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }
}

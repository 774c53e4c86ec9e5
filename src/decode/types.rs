//! Typed views of pool listing documents
//!
//! Responses are untrusted. Each document is checked for the fields the
//! fetcher relies on before anything is read from it.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Pool Metadata
// ============================================================================

/// Pool metadata, read once before paginating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PoolMetadata {
    /// Number of posts the server declares for the pool
    pub post_count: u64,
}

impl PoolMetadata {
    /// Decode metadata from a parsed document.
    ///
    /// `post_count` must be present and a non-negative integer.
    pub fn from_document(document: Value) -> Result<Self> {
        serde_json::from_value(document)
            .map_err(|e| Error::invalid_schema(format!("pool metadata: {e}")))
    }
}

// ============================================================================
// Page Document
// ============================================================================

/// One page of a pool listing
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    posts: Vec<Value>,
}

impl PageDocument {
    /// Decode a page from a parsed document.
    ///
    /// Fails when the root is not an object or `posts` is missing or not
    /// an array; nothing from such a page is used.
    pub fn from_document(document: Value) -> Result<Self> {
        let mut root = match document {
            Value::Object(root) => root,
            other => {
                return Err(Error::invalid_schema(format!(
                    "page document is {}, expected an object",
                    type_name(&other)
                )))
            }
        };

        match root.remove("posts") {
            Some(Value::Array(posts)) => Ok(Self { posts }),
            Some(other) => Err(Error::invalid_schema(format!(
                "posts is {}, expected an array",
                type_name(&other)
            ))),
            None => Err(Error::invalid_schema("posts field is missing")),
        }
    }

    /// Number of slots in the `posts` array
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True when the page carries no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Consume the page, yielding its slots in order
    pub fn into_slots(self) -> impl Iterator<Item = PostSlot> {
        self.posts.into_iter().map(PostSlot::from)
    }
}

// ============================================================================
// Post Slots
// ============================================================================

/// One slot of the `posts` array
#[derive(Debug, Clone, PartialEq)]
pub enum PostSlot {
    /// The slot holds `null`; there is no post at this index
    Absent,
    /// The slot holds a value claiming to be a post
    Present(PostEntry),
}

impl From<Value> for PostSlot {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            other => Self::Present(PostEntry(other)),
        }
    }
}

/// A post as returned by the API
#[derive(Debug, Clone, PartialEq)]
pub struct PostEntry(Value);

impl PostEntry {
    /// The post's `file_url`, if it is a non-empty string
    pub fn file_url(&self) -> std::result::Result<&str, EntryProblem> {
        let Value::Object(fields) = &self.0 else {
            return Err(EntryProblem::NotAnObject);
        };
        match fields.get("file_url") {
            None | Some(Value::Null) => Err(EntryProblem::MissingFileUrl),
            Some(Value::String(url)) if url.is_empty() => Err(EntryProblem::EmptyFileUrl),
            Some(Value::String(url)) => Ok(url.as_str()),
            Some(_) => Err(EntryProblem::FileUrlNotString),
        }
    }
}

/// Why a present post has no usable `file_url`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryProblem {
    NotAnObject,
    MissingFileUrl,
    FileUrlNotString,
    EmptyFileUrl,
}

impl std::fmt::Display for EntryProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            EntryProblem::NotAnObject => "post is not an object",
            EntryProblem::MissingFileUrl => "file_url is missing",
            EntryProblem::FileUrlNotString => "file_url is not a string",
            EntryProblem::EmptyFileUrl => "file_url is empty",
        };
        f.write_str(reason)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Copyright 2026 ddg-instant Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Priority-path resolution of a single instant answer.
//!
//! A priority path is `field` or `field.index`, with `field` one of
//! `answer`, `abstract`, `definition`, `related`, `result` or `redirect`.
//! Paths are tried in order and the first one that formats to something
//! wins; later paths are never parsed.

use crate::error::Error;
use crate::error::Result;
use crate::format;
use crate::model::SearchResult;

pub const NO_RESULTS: &str = "Sorry, no results.";

/// Direct answer, then the abstract, the first related topic, a definition
/// and finally a bang redirect.
pub const DEFAULT_PRIORITIES: &[&str] = &[
    "answer",
    "abstract",
    "related.0",
    "definition",
    "redirect",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Abstract,
    Answer,
    Definition,
    Related,
    Result,
    Redirect,
    /// Unrecognized field name; never produces anything.
    Other(String),
}

impl Field {
    pub fn parse(input: &str) -> Self {
        match input {
            "abstract" => Field::Abstract,
            "answer" => Field::Answer,
            "definition" => Field::Definition,
            "related" => Field::Related,
            "result" => Field::Result,
            "redirect" => Field::Redirect,
            other => Field::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    pub field: Field,
    pub index: Option<usize>,
}

impl PathSpec {
    /// Splits on the first `.`. A suffix that is not an integer leaves the
    /// index unset; a negative one is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let Some((field, index)) = input.split_once('.') else {
            return Ok(Self {
                field: Field::parse(input),
                index: None,
            });
        };
        if is_negative_literal(index) {
            return Err(Error::InvalidIndex(index.to_string()));
        }
        let index = match index.strip_prefix('-') {
            Some(zeros) if !zeros.is_empty() && zeros.bytes().all(|b| b == b'0') => Some(0),
            _ => index.parse::<u64>().ok().and_then(|i| usize::try_from(i).ok()),
        };
        Ok(Self {
            field: Field::parse(field),
            index,
        })
    }

    /// Formats the part of `result` this path points at, if it has anything.
    pub fn extract(&self, result: &SearchResult) -> Option<String> {
        match &self.field {
            Field::Answer => result.answer().and_then(format::answer),
            Field::Abstract => result.topic_abstract().and_then(format::topic_abstract),
            Field::Definition => result.definition().and_then(format::definition),
            Field::Redirect => result.redirect().and_then(format::redirect),
            Field::Related => self
                .index
                .and_then(|i| result.related_topics().get(i))
                .and_then(format::result_item),
            Field::Result => self
                .index
                .and_then(|i| result.results().get(i))
                .and_then(format::result_item),
            Field::Other(_) => None,
        }
    }
}

/// `-` followed by digits, however many, not all zero.
fn is_negative_literal(index: &str) -> bool {
    index.strip_prefix('-').is_some_and(|digits| {
        digits.bytes().all(|b| b.is_ascii_digit()) && digits.bytes().any(|b| b != b'0')
    })
}

pub fn instant_information(result: &SearchResult) -> Result<String> {
    instant_information_with(result, DEFAULT_PRIORITIES)
}

/// Resolves `priorities` in order. An empty list means the defaults.
pub fn instant_information_with<S: AsRef<str>>(
    result: &SearchResult,
    priorities: &[S],
) -> Result<String> {
    if priorities.is_empty() {
        return instant_information(result);
    }
    for priority in priorities {
        let priority = priority.as_ref();
        let spec = PathSpec::parse(priority)?;
        tracing::trace!(priority, ?spec, "trying priority");
        if let Some(instant) = spec.extract(result) {
            tracing::debug!(priority, "priority matched");
            return Ok(instant);
        }
    }
    Ok(NO_RESULTS.to_string())
}

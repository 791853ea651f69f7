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

//! Tolerant decoding of the instant answer wire format.
//!
//! Nothing here fails: absent, null or mistyped fields fall back to `""`
//! for strings and [`Icon::UNSET`] for dimensions.

use serde_json::Value;

use crate::error::Result;
use crate::lookup::ClosedEnum;
use crate::model::Abstract;
use crate::model::Answer;
use crate::model::AnswerKind;
use crate::model::Definition;
use crate::model::Icon;
use crate::model::Redirect;
use crate::model::ResultItem;
use crate::model::ResultKind;
use crate::model::SearchResult;

pub fn from_str(input: &str) -> Result<SearchResult> {
    let value: Value = serde_json::from_str(input)?;
    Ok(decode(&value))
}

pub fn decode(node: &Value) -> SearchResult {
    let kind = ResultKind::by_name(&text(node, "Type"));
    let related_topics = decode_items(node.get("RelatedTopics"));
    let results = decode_items(node.get("Results"));
    tracing::debug!(
        kind = kind.label().unwrap_or("none"),
        related = related_topics.len(),
        results = results.len(),
        "decoded response"
    );

    SearchResult::builder(kind)
        .topic_abstract(Abstract::new(
            text(node, "Heading"),
            text(node, "Abstract"),
            text(node, "AbstractText"),
            text(node, "AbstractSource"),
            text(node, "AbstractURL"),
            text(node, "Image"),
        ))
        .answer(Answer::new(
            text(node, "Answer"),
            AnswerKind::by_name(&text(node, "AnswerType")),
        ))
        .definition(Definition::new(
            text(node, "Definition"),
            text(node, "DefinitionSource"),
            text(node, "DefinitionURL"),
        ))
        .related_topics(related_topics)
        .results(results)
        .redirect(Redirect::new(text(node, "Redirect")))
        .build()
}

/// Decodes a topic list, flattening `{Name, Topics}` groups one level deep.
fn decode_items(node: Option<&Value>) -> Vec<ResultItem> {
    let Some(Value::Array(entries)) = node else {
        return Vec::new();
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(obj) = entry.as_object() else {
            tracing::debug!("skipping non-object topic entry");
            continue;
        };
        if obj.contains_key("Name") && obj.contains_key("Topics") {
            let Some(Value::Array(topics)) = obj.get("Topics") else {
                tracing::debug!(group = %text(entry, "Name"), "group without topic array");
                continue;
            };
            tracing::debug!(group = %text(entry, "Name"), topics = topics.len(), "flattening group");
            items.extend(topics.iter().filter(|t| t.is_object()).map(decode_item));
        } else {
            items.push(decode_item(entry));
        }
    }
    items
}

fn decode_item(node: &Value) -> ResultItem {
    let icon = match node.get("Icon") {
        Some(icon) if icon.is_object() => Icon::new(
            text(icon, "URL"),
            int(icon, "Height", Icon::UNSET),
            int(icon, "Width", Icon::UNSET),
        ),
        _ => Icon::default(),
    };
    ResultItem::new(
        text(node, "FirstURL"),
        Some(icon),
        text(node, "Result"),
        text(node, "Text"),
    )
}

/// Reads a scalar as text. Numbers and booleans are rendered, containers read
/// as empty.
fn text(node: &Value, key: &str) -> String {
    match node.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn int(node: &Value, key: &str, default: i32) -> i32 {
    match node.get(key) {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).unwrap_or(default)
            } else {
                n.as_f64().map_or(default, |f| truncate(f, default))
            }
        }
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| truncate(f, default)))
                .unwrap_or(default)
        }
        Some(Value::Bool(b)) => i32::from(*b),
        _ => default,
    }
}

fn truncate(f: f64, default: i32) -> i32 {
    if f.is_finite() && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        f.trunc() as i32
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_decodes_to_empty_slots() {
        let result = decode(&json!({}));
        assert_eq!(result.kind(), ResultKind::Null);
        let answer = result.answer().expect("answer slot");
        assert!(!answer.has_text());
        assert_eq!(answer.kind(), AnswerKind::Answer);
        assert!(!result.topic_abstract().expect("abstract slot").has_text());
        assert!(!result.definition().expect("definition slot").has_text());
        assert!(!result.redirect().expect("redirect slot").has_redirect_url());
        assert!(result.related_topics().is_empty());
        assert!(result.results().is_empty());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let result = decode(&json!({
            "Type": null,
            "Answer": null,
            "AnswerType": null,
            "RelatedTopics": null,
        }));
        assert_eq!(result.kind(), ResultKind::Null);
        assert_eq!(result.answer().map(Answer::text), Some(""));
        assert!(result.related_topics().is_empty());
    }

    #[test]
    fn abstract_fields_map_from_wire_keys() {
        let result = decode(&json!({
            "Type": "A",
            "Heading": "Rust",
            "Abstract": "<b>Rust</b>",
            "AbstractText": "A language",
            "AbstractSource": "Wikipedia",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust",
            "Image": "/i/rust.png",
        }));
        assert_eq!(result.kind(), ResultKind::Article);
        let a = result.topic_abstract().expect("abstract");
        assert_eq!(a.heading(), "Rust");
        assert_eq!(a.html(), "<b>Rust</b>");
        assert_eq!(a.text(), "A language");
        assert_eq!(a.source(), "Wikipedia");
        assert_eq!(a.url(), "https://en.wikipedia.org/wiki/Rust");
        assert_eq!(a.image(), "/i/rust.png");
    }

    #[test]
    fn scalar_answers_are_rendered_as_text() {
        let result = decode(&json!({ "Answer": 4, "AnswerType": "calc" }));
        let answer = result.answer().expect("answer");
        assert_eq!(answer.text(), "4");
        assert_eq!(answer.kind(), AnswerKind::Calc);

        let result = decode(&json!({ "Answer": { "nested": true } }));
        assert_eq!(result.answer().map(Answer::text), Some(""));
    }

    #[test]
    fn groups_flatten_into_leaves() {
        let result = decode(&json!({
            "RelatedTopics": [
                { "FirstURL": "https://a", "Text": "a" },
                { "Name": "Fruit", "Topics": [
                    { "FirstURL": "https://b", "Text": "b" },
                    { "FirstURL": "https://c", "Text": "c" },
                ]},
                { "Name": "Empty", "Topics": [] },
                { "FirstURL": "https://d", "Text": "d" },
            ]
        }));
        let texts: Vec<&str> = result.related_topics().iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
        assert!(
            result
                .related_topics()
                .iter()
                .all(|i| !i.has_disambiguation_name())
        );
    }

    #[test]
    fn group_without_topic_array_contributes_nothing() {
        let result = decode(&json!({
            "RelatedTopics": [
                { "Name": "Broken", "Topics": null },
                "stray",
                { "Text": "kept" },
            ]
        }));
        assert_eq!(result.related_topics().len(), 1);
        assert_eq!(result.related_topics()[0].text(), "kept");
    }

    #[test]
    fn name_without_topics_is_a_leaf() {
        let result = decode(&json!({
            "RelatedTopics": [ { "Name": "Lonely", "Text": "leaf" } ]
        }));
        assert_eq!(result.related_topics().len(), 1);
        assert_eq!(result.related_topics()[0].text(), "leaf");
    }

    #[test]
    fn results_are_not_flattened() {
        let result = decode(&json!({
            "Results": [
                { "FirstURL": "https://official", "Result": "<a>x</a>", "Text": "Official site" },
            ]
        }));
        assert_eq!(result.results().len(), 1);
        let item = &result.results()[0];
        assert_eq!(item.url(), "https://official");
        assert_eq!(item.html(), "<a>x</a>");
        assert_eq!(item.text(), "Official site");
    }

    #[test]
    fn missing_icon_gets_unset_icon() {
        let result = decode(&json!({ "Results": [ { "Text": "x" } ] }));
        let icon = result.results()[0].icon().expect("icon always attached");
        assert_eq!(icon, &Icon::default());
    }

    #[test]
    fn icon_dimensions_tolerate_wire_variants() {
        let result = decode(&json!({
            "RelatedTopics": [
                { "Icon": { "URL": "/i/a.png", "Height": 16, "Width": "32" } },
                { "Icon": { "URL": "", "Height": "", "Width": null } },
                { "Icon": { "Height": 24.9, "Width": 9999999999_i64 } },
                { "Icon": null },
            ]
        }));
        let icons: Vec<&Icon> = result
            .related_topics()
            .iter()
            .map(|i| i.icon().expect("icon"))
            .collect();
        assert_eq!(icons[0], &Icon::new("/i/a.png", 16, 32));
        assert_eq!(icons[1], &Icon::default());
        assert_eq!(icons[2], &Icon::new("", 24, -1));
        assert_eq!(icons[3], &Icon::default());
    }

    #[test]
    fn from_str_reports_syntax_errors() {
        assert!(from_str("{not json").is_err());
        let result = from_str(r#"{"Redirect": "https://example.com"}"#).expect("decode");
        assert_eq!(
            result.redirect().map(Redirect::redirect_url),
            Some("https://example.com")
        );
    }
}

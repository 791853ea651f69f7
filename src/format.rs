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

//! Instant information for each entity. `None` means the entity has nothing
//! worth showing.

use crate::model::Abstract;
use crate::model::Answer;
use crate::model::Definition;
use crate::model::Icon;
use crate::model::Redirect;
use crate::model::ResultItem;

pub const UNKNOWN_SOURCE: &str = "unknown source";

pub fn answer(answer: &Answer) -> Option<String> {
    if !answer.has_text() {
        return None;
    }
    Some(format!("[{}] {}", answer.kind(), answer.text()))
}

pub fn topic_abstract(topic: &Abstract) -> Option<String> {
    if !topic.has_text() {
        return None;
    }
    let mut out = String::new();
    if topic.has_heading() {
        out.push_str(topic.heading());
        out.push_str(" - ");
    }
    out.push_str(&with_source(topic.text(), or_unknown(topic.url())));
    Some(out)
}

pub fn definition(definition: &Definition) -> Option<String> {
    if !definition.has_text() {
        return None;
    }
    let source = if definition.has_source() {
        definition.source()
    } else {
        or_unknown(definition.url())
    };
    Some(with_source(definition.text(), source))
}

pub fn result_item(item: &ResultItem) -> Option<String> {
    if !item.has_text() {
        return None;
    }
    let mut out = with_source(item.text(), or_unknown(item.url()));
    if item.has_disambiguation_name() {
        out.push_str(&format!(" {{{}}}", item.disambiguation_name()));
    }
    Some(out)
}

pub fn redirect(redirect: &Redirect) -> Option<String> {
    redirect
        .has_redirect_url()
        .then(|| redirect.redirect_url().to_string())
}

pub fn icon(icon: &Icon) -> Option<String> {
    icon.has_url().then(|| icon.url().to_string())
}

fn or_unknown(url: &str) -> &str {
    if url.is_empty() { UNKNOWN_SOURCE } else { url }
}

fn with_source(text: &str, source: &str) -> String {
    format!("{text} ({source})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerKind;

    #[test]
    fn answer_is_tagged_with_kind() {
        assert_eq!(
            answer(&Answer::new("4", AnswerKind::Calc)).as_deref(),
            Some("[CALC] 4")
        );
        assert_eq!(
            answer(&Answer::new("x", AnswerKind::Answer)).as_deref(),
            Some("[ANSWER] x")
        );
        assert_eq!(answer(&Answer::default()), None);
    }

    #[test]
    fn abstract_with_and_without_heading() {
        let full = Abstract::new("Rust", "", "A language", "Wikipedia", "https://w", "");
        assert_eq!(
            topic_abstract(&full).as_deref(),
            Some("Rust - A language (https://w)")
        );
        let bare = Abstract::new("", "", "A language", "", "", "");
        assert_eq!(
            topic_abstract(&bare).as_deref(),
            Some("A language (unknown source)")
        );
        let heading_only = Abstract::new("Rust", "", "", "", "https://w", "");
        assert_eq!(topic_abstract(&heading_only), None);
    }

    #[test]
    fn definition_prefers_source_then_url() {
        let both = Definition::new("a fruit", "Merriam-Webster", "https://mw");
        assert_eq!(
            definition(&both).as_deref(),
            Some("a fruit (Merriam-Webster)")
        );
        let url_only = Definition::new("a fruit", "", "https://mw");
        assert_eq!(definition(&url_only).as_deref(), Some("a fruit (https://mw)"));
        let neither = Definition::new("a fruit", "", "");
        assert_eq!(
            definition(&neither).as_deref(),
            Some("a fruit (unknown source)")
        );
        assert_eq!(definition(&Definition::default()), None);
    }

    #[test]
    fn result_item_appends_disambiguation() {
        let plain = ResultItem::new("https://x", None, "", "hello");
        assert_eq!(result_item(&plain).as_deref(), Some("hello (https://x)"));

        let named = ResultItem::with_disambiguation("", None, "", "Apple Inc.", "Companies");
        assert_eq!(
            result_item(&named).as_deref(),
            Some("Apple Inc. (unknown source) {Companies}")
        );

        let empty = ResultItem::with_disambiguation("https://x", None, "", "", "Companies");
        assert_eq!(result_item(&empty), None);
    }

    #[test]
    fn redirect_and_icon_are_verbatim() {
        assert_eq!(
            redirect(&Redirect::new("https://www.imdb.com/find?q=rushmore")).as_deref(),
            Some("https://www.imdb.com/find?q=rushmore")
        );
        assert_eq!(redirect(&Redirect::default()), None);
        assert_eq!(icon(&Icon::new("/i/a.png", 16, 16)).as_deref(), Some("/i/a.png"));
        assert_eq!(icon(&Icon::default()), None);
    }
}

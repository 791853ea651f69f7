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

//! Entity model of an instant answer response.
//!
//! Value records keep absent wire fields as empty strings; every accessor
//! returns `&str` and its `has_*` twin reports whether it is non-empty.
//! [`SearchResult`] owns the records and is assembled through [`Builder`].

use std::fmt;

use serde::Serialize;
use serde::Serializer;

use crate::error::Result;
use crate::lookup::ClosedEnum;
use crate::resolve;

/// Overall classification of a response (`Type` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Article,
    Disambiguation,
    Category,
    Name,
    Exclusive,
    /// No classification.
    Null,
}

impl ResultKind {
    pub fn label(self) -> Option<&'static str> {
        match self {
            ResultKind::Article => Some("Article"),
            ResultKind::Disambiguation => Some("Disambiguation"),
            ResultKind::Category => Some("Category"),
            ResultKind::Name => Some("Name"),
            ResultKind::Exclusive => Some("Exclusive"),
            ResultKind::Null => None,
        }
    }

    pub fn is_null(self) -> bool {
        self == ResultKind::Null
    }
}

impl ClosedEnum for ResultKind {
    const VARIANTS: &'static [Self] = &[
        ResultKind::Article,
        ResultKind::Disambiguation,
        ResultKind::Category,
        ResultKind::Name,
        ResultKind::Exclusive,
        ResultKind::Null,
    ];
    const FALLBACK: Self = ResultKind::Null;

    fn ident(self) -> &'static str {
        match self {
            ResultKind::Article => "A",
            ResultKind::Disambiguation => "D",
            ResultKind::Category => "C",
            ResultKind::Name => "N",
            ResultKind::Exclusive => "E",
            ResultKind::Null => "NULL",
        }
    }
}

impl Serialize for ResultKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.ident())
    }
}

/// Kind of a direct answer (`AnswerType` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKind {
    Calc,
    Color,
    Digest,
    Info,
    Ip,
    IpLoc,
    Phone,
    Pw,
    Rand,
    Regexp,
    Unicode,
    Upc,
    Zip,
    /// Unrecognized or generic answer type.
    Answer,
}

impl ClosedEnum for AnswerKind {
    const VARIANTS: &'static [Self] = &[
        AnswerKind::Calc,
        AnswerKind::Color,
        AnswerKind::Digest,
        AnswerKind::Info,
        AnswerKind::Ip,
        AnswerKind::IpLoc,
        AnswerKind::Phone,
        AnswerKind::Pw,
        AnswerKind::Rand,
        AnswerKind::Regexp,
        AnswerKind::Unicode,
        AnswerKind::Upc,
        AnswerKind::Zip,
        AnswerKind::Answer,
    ];
    const FALLBACK: Self = AnswerKind::Answer;

    fn ident(self) -> &'static str {
        match self {
            AnswerKind::Calc => "CALC",
            AnswerKind::Color => "COLOR",
            AnswerKind::Digest => "DIGEST",
            AnswerKind::Info => "INFO",
            AnswerKind::Ip => "IP",
            AnswerKind::IpLoc => "IPLOC",
            AnswerKind::Phone => "PHONE",
            AnswerKind::Pw => "PW",
            AnswerKind::Rand => "RAND",
            AnswerKind::Regexp => "REGEXP",
            AnswerKind::Unicode => "UNICODE",
            AnswerKind::Upc => "UPC",
            AnswerKind::Zip => "ZIP",
            AnswerKind::Answer => "ANSWER",
        }
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl Serialize for AnswerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.ident())
    }
}

/// Summary of a topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Abstract {
    heading: String,
    html: String,
    text: String,
    source: String,
    url: String,
    image: String,
}

impl Abstract {
    pub fn new(
        heading: impl Into<String>,
        html: impl Into<String>,
        text: impl Into<String>,
        source: impl Into<String>,
        url: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            heading: heading.into(),
            html: html.into(),
            text: text.into(),
            source: source.into(),
            url: url.into(),
            image: image.into(),
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn has_heading(&self) -> bool {
        !self.heading.is_empty()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn has_html(&self) -> bool {
        !self.html.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Direct answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Answer {
    text: String,
    kind: AnswerKind,
}

impl Answer {
    pub fn new(text: impl Into<String>, kind: AnswerKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn kind(&self) -> AnswerKind {
        self.kind
    }
}

impl Default for Answer {
    fn default() -> Self {
        Self::new("", AnswerKind::FALLBACK)
    }
}

/// Dictionary-style definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Definition {
    text: String,
    source: String,
    url: String,
}

impl Definition {
    pub fn new(text: impl Into<String>, source: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            url: url.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Height and width of `-1` mean unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Icon {
    url: String,
    height: i32,
    width: i32,
}

impl Icon {
    pub const UNSET: i32 = -1;

    pub fn new(url: impl Into<String>, height: i32, width: i32) -> Self {
        Self {
            url: url.into(),
            height,
            width,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn has_height(&self) -> bool {
        self.height > 0
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn has_width(&self) -> bool {
        self.width > 0
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new("", Self::UNSET, Self::UNSET)
    }
}

/// Target of a bang command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Redirect {
    redirect_url: String,
}

impl Redirect {
    pub fn new(redirect_url: impl Into<String>) -> Self {
        Self {
            redirect_url: redirect_url.into(),
        }
    }

    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    pub fn has_redirect_url(&self) -> bool {
        !self.redirect_url.is_empty()
    }
}

/// One entry of the related-topics or results list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ResultItem {
    url: String,
    icon: Option<Icon>,
    html: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    disambiguation_name: Option<String>,
}

impl ResultItem {
    pub fn new(
        url: impl Into<String>,
        icon: Option<Icon>,
        html: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            icon,
            html: html.into(),
            text: text.into(),
            disambiguation_name: None,
        }
    }

    pub fn with_disambiguation(
        url: impl Into<String>,
        icon: Option<Icon>,
        html: impl Into<String>,
        text: impl Into<String>,
        disambiguation_name: impl Into<String>,
    ) -> Self {
        Self {
            disambiguation_name: Some(disambiguation_name.into()),
            ..Self::new(url, icon, html, text)
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn has_html(&self) -> bool {
        !self.html.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn disambiguation_name(&self) -> &str {
        self.disambiguation_name.as_deref().unwrap_or_default()
    }

    pub fn has_disambiguation_name(&self) -> bool {
        !self.disambiguation_name().is_empty()
    }
}

/// A decoded instant answer response.
///
/// Empty sub-entity slots are `None`. Mutation after [`Builder::build`] needs
/// `&mut self`, so a result borrowed by a resolver cannot change underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchResult {
    kind: ResultKind,
    #[serde(rename = "abstract")]
    topic_abstract: Option<Abstract>,
    answer: Option<Answer>,
    definition: Option<Definition>,
    related_topics: Vec<ResultItem>,
    results: Vec<ResultItem>,
    redirect: Option<Redirect>,
}

impl SearchResult {
    pub fn builder(kind: ResultKind) -> Builder {
        Builder::new(kind)
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn topic_abstract(&self) -> Option<&Abstract> {
        self.topic_abstract.as_ref()
    }

    pub fn set_topic_abstract(&mut self, topic_abstract: Abstract) {
        self.topic_abstract = Some(topic_abstract);
    }

    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    pub fn set_answer(&mut self, answer: Answer) {
        self.answer = Some(answer);
    }

    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    pub fn set_definition(&mut self, definition: Definition) {
        self.definition = Some(definition);
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        self.redirect.as_ref()
    }

    pub fn set_redirect(&mut self, redirect: Redirect) {
        self.redirect = Some(redirect);
    }

    pub fn related_topics(&self) -> &[ResultItem] {
        &self.related_topics
    }

    pub fn add_related_topic(&mut self, item: ResultItem) {
        self.related_topics.push(item);
    }

    pub fn add_related_topics(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.related_topics.extend(items);
    }

    pub fn replace_related_topics(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.related_topics.clear();
        self.add_related_topics(items);
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    pub fn add_result(&mut self, item: ResultItem) {
        self.results.push(item);
    }

    pub fn add_results(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.results.extend(items);
    }

    pub fn replace_results(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.results.clear();
        self.add_results(items);
    }

    /// Instant information under the default priorities.
    pub fn instant_information(&self) -> Result<String> {
        resolve::instant_information(self)
    }

    pub fn instant_information_with<S: AsRef<str>>(&self, priorities: &[S]) -> Result<String> {
        resolve::instant_information_with(self, priorities)
    }
}

#[derive(Debug, Clone)]
pub struct Builder {
    result: SearchResult,
}

impl Builder {
    pub fn new(kind: ResultKind) -> Self {
        Self {
            result: SearchResult {
                kind,
                topic_abstract: None,
                answer: None,
                definition: None,
                related_topics: Vec::new(),
                results: Vec::new(),
                redirect: None,
            },
        }
    }

    pub fn topic_abstract(mut self, topic_abstract: Abstract) -> Self {
        self.result.set_topic_abstract(topic_abstract);
        self
    }

    pub fn answer(mut self, answer: Answer) -> Self {
        self.result.set_answer(answer);
        self
    }

    pub fn definition(mut self, definition: Definition) -> Self {
        self.result.set_definition(definition);
        self
    }

    pub fn redirect(mut self, redirect: Redirect) -> Self {
        self.result.set_redirect(redirect);
        self
    }

    pub fn related_topic(mut self, item: ResultItem) -> Self {
        self.result.add_related_topic(item);
        self
    }

    pub fn related_topics(mut self, items: impl IntoIterator<Item = ResultItem>) -> Self {
        self.result.add_related_topics(items);
        self
    }

    pub fn replace_related_topics(mut self, items: impl IntoIterator<Item = ResultItem>) -> Self {
        self.result.replace_related_topics(items);
        self
    }

    pub fn result(mut self, item: ResultItem) -> Self {
        self.result.add_result(item);
        self
    }

    pub fn results(mut self, items: impl IntoIterator<Item = ResultItem>) -> Self {
        self.result.add_results(items);
        self
    }

    pub fn replace_results(mut self, items: impl IntoIterator<Item = ResultItem>) -> Self {
        self.result.replace_results(items);
        self
    }

    pub fn build(self) -> SearchResult {
        self.result
    }
}

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

//! Offline model of DuckDuckGo instant answer responses.
//!
//! [`decode::decode`] turns a response document into a [`SearchResult`];
//! [`resolve::instant_information_with`] picks the best single answer from it.

pub mod decode;
pub mod error;
pub mod format;
pub mod lookup;
pub mod model;
pub mod resolve;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::model::SearchResult;

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

//! Name lookup for closed enumerations that degrade to a sentinel variant.

/// A closed set of variants with one designated fallback.
pub trait ClosedEnum: Copy + 'static {
    const VARIANTS: &'static [Self];
    const FALLBACK: Self;

    /// Upper-case identifier the normalized wire name is compared against.
    fn ident(self) -> &'static str;

    fn by_name(name: &str) -> Self {
        lookup_or(Self::VARIANTS, name, Self::FALLBACK)
    }
}

/// Strips underscores, upper-cases and trims.
pub fn normalize(name: &str) -> String {
    name.replace('_', "").to_uppercase().trim().to_string()
}

pub fn lookup<T: ClosedEnum>(variants: &[T], name: &str) -> Option<T> {
    if name.is_empty() {
        return None;
    }
    let wanted = normalize(name);
    variants.iter().copied().find(|v| v.ident() == wanted)
}

pub fn lookup_or<T: ClosedEnum>(variants: &[T], name: &str, fallback: T) -> T {
    lookup(variants, name).unwrap_or(fallback)
}

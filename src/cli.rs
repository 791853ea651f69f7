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

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(
    name = "ddg-instant",
    version,
    about = "Offline instant answers from saved DuckDuckGo responses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the instant information of a response
    Instant(InstantArgs),

    /// Print the decoded response
    Decode(DecodeArgs),

    /// Show the effective configuration
    Config {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct InstantArgs {
    /// Response JSON file (stdin when absent or `-`)
    pub input: Option<PathBuf>,

    /// Priority path, e.g. `answer` or `related.0`; repeat to set the order
    #[arg(long = "priority", short = 'p')]
    pub priorities: Vec<String>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Response JSON file (stdin when absent or `-`)
    pub input: Option<PathBuf>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

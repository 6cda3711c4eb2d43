// Copyright 2026 Muvon Un Limited
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

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::taxonomy::TaxonomyKind;
use crate::catalog::types::{FilterSpec, TriState};

#[derive(Parser, Debug)]
#[command(name = "pfbase")]
#[command(version, author = "Muvon Un Limited <opensource@muvon.io>")]
#[command(about = "Knowledge-base manager for cataloging, searching and reporting support FAQ records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Catalog a new FAQ record
    Add {
        /// External ticket reference number (the "PF" number)
        #[arg(short, long)]
        reference: String,

        /// Question or title of the record
        #[arg(short, long)]
        title: String,

        /// External link to the original page
        #[arg(short, long)]
        url: Option<String>,

        /// System the record belongs to
        #[arg(long)]
        system: Option<String>,

        /// Category (e.g. Support, Commercial)
        #[arg(long)]
        category: Option<String>,

        /// Record type (e.g. Error, SQL, Installation)
        #[arg(long = "type")]
        record_type: Option<String>,

        /// Raw source text used for summarization
        #[arg(long)]
        content: Option<String>,

        /// Private notes
        #[arg(long)]
        notes: Option<String>,

        /// Flag the record as needing review
        #[arg(long)]
        needs_review: bool,

        /// Ask the naming service for the record id, falling back to the
        /// local strategy on failure
        #[arg(long)]
        smart_id: bool,
    },

    /// Instantly catalog a record from reference and title alone
    Quick {
        /// External ticket reference number
        reference: String,

        /// Question or title of the record
        title: String,
    },

    /// List records with filtering and pagination
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Show the entire filtered set, ignoring pagination
        #[arg(long)]
        all: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show a single record with its full history
    Show {
        /// Record id
        id: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Update fields on an existing record
    Edit {
        /// Record id
        id: String,

        /// New reference number
        #[arg(long)]
        reference: Option<String>,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New external link
        #[arg(short, long)]
        url: Option<String>,

        /// New system
        #[arg(long)]
        system: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New record type
        #[arg(long = "type")]
        record_type: Option<String>,

        /// New raw content
        #[arg(long)]
        content: Option<String>,

        /// New summary text
        #[arg(long)]
        summary: Option<String>,

        /// New private notes
        #[arg(long)]
        notes: Option<String>,

        /// Set or clear the needs-review flag
        #[arg(long)]
        needs_review: Option<bool>,

        /// Set or clear the favorite flag
        #[arg(long)]
        favorite: Option<bool>,

        /// Set or clear the reusable flag
        #[arg(long)]
        reusable: Option<bool>,

        /// Set or clear the has-video flag
        #[arg(long)]
        video: Option<bool>,
    },

    /// Mark a record as resolved, clearing its needs-review flag
    Resolve {
        /// Record id
        id: String,
    },

    /// Delete a record permanently (no-op if already gone)
    Delete {
        /// Record id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show dashboard statistics over a filtered subset
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Manage the system, category and type vocabularies
    Taxonomy {
        #[command(subcommand)]
        command: TaxonomyCommand,
    },

    /// Export the filtered subset
    Export {
        /// Output format: json (lossless interchange) or csv (report)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Import records from a JSON interchange file, replacing the
    /// current collection
    Import {
        /// Path to the JSON file
        file: std::path::PathBuf,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Generate an AI summary from a record's raw content
    Summarize {
        /// Record id
        id: String,

        /// Apply the generated summary to the record instead of printing it
        #[arg(long)]
        apply: bool,
    },

    /// Resolve title and reference number from a PF URL
    FetchTitle {
        /// URL to resolve
        url: String,
    },

    /// Read or set the persisted theme preference
    Theme {
        /// New theme value; omit to print the current one
        #[arg(value_parser = ["light", "dark"])]
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaxonomyCommand {
    /// Add a value to a vocabulary (no-op if already present)
    Add {
        /// Which list to modify
        kind: ListKind,

        /// Value to add
        value: String,
    },

    /// Remove a value from a vocabulary. Records referencing it keep it.
    Remove {
        /// Which list to modify
        kind: ListKind,

        /// Value to remove
        value: String,
    },

    /// Print vocabulary values
    List {
        /// Which list to print; omit for all three
        kind: Option<ListKind>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListKind {
    Systems,
    Categories,
    Types,
}

impl From<ListKind> for TaxonomyKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Systems => TaxonomyKind::Systems,
            ListKind::Categories => TaxonomyKind::Categories,
            ListKind::Types => TaxonomyKind::Types,
        }
    }
}

/// Tri-state flag filter; unset means "all"
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FlagFilter {
    All,
    Yes,
    No,
}

impl From<Option<FlagFilter>> for TriState {
    fn from(value: Option<FlagFilter>) -> Self {
        match value {
            None | Some(FlagFilter::All) => TriState::Any,
            Some(FlagFilter::Yes) => TriState::RequireTrue,
            Some(FlagFilter::No) => TriState::RequireFalse,
        }
    }
}

/// Filter dimensions shared by list, stats and export. All active
/// dimensions must match at once.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search over id, reference, title, summary, notes and content
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Exact system match
    #[arg(long)]
    pub system: Option<String>,

    /// Exact category match
    #[arg(long)]
    pub category: Option<String>,

    /// Exact type match
    #[arg(long = "type")]
    pub record_type: Option<String>,

    /// Filter by needs-review status
    #[arg(long, value_enum)]
    pub needs_review: Option<FlagFilter>,

    /// Filter by favorite status
    #[arg(long, value_enum)]
    pub favorite: Option<FlagFilter>,

    /// Filter by reusable status
    #[arg(long, value_enum)]
    pub reusable: Option<FlagFilter>,

    /// Filter by has-video status
    #[arg(long, value_enum)]
    pub video: Option<FlagFilter>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            system: self.system.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            record_type: self.record_type.clone().unwrap_or_default(),
            needs_review: self.needs_review.into(),
            is_favorite: self.favorite.into(),
            is_reusable: self.reusable.into(),
            has_video: self.video.into(),
        }
    }
}

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

use thiserror::Error;

/// Failure taxonomy for catalog operations
///
/// Validation and NotFound are surfaced synchronously at the mutation site
/// with no partial state change. ExternalService failures are caught at the
/// boundary and never propagated as a crash. Persistence failures are
/// logged; in-memory state stays the source of truth for the session.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("external service failure: {0}")]
    ExternalService(String),
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Persistence(value.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// Copyright 2025 dentsusoken
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

use log::trace;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered set of existing paths, unique by canonical form.
///
/// Insertion order is preserved. Each accepted path is stored canonicalized,
/// so a symlink and its target collapse into one entry.
#[derive(Debug, Default, Clone)]
pub struct PathSet {
    seen: HashSet<PathBuf>,
    paths: Vec<PathBuf>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `candidate` if it exists and its canonical form is new.
    ///
    /// Returns whether the path was added.
    pub fn insert(&mut self, candidate: &Path) -> bool {
        if candidate.as_os_str().is_empty() {
            return false;
        }

        let canonical = match fs::canonicalize(candidate) {
            Ok(canonical) => canonical,
            Err(e) => {
                trace!("Dropping candidate {}: {e}", candidate.display());
                return false;
            }
        };

        if self.seen.contains(&canonical) {
            trace!(
                "Dropping duplicate candidate {} ({})",
                candidate.display(),
                canonical.display()
            );
            return false;
        }

        self.seen.insert(canonical.clone());
        self.paths.push(canonical);
        true
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl<P: AsRef<Path>> FromIterator<P> for PathSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = PathSet::new();
        for path in iter {
            set.insert(path.as_ref());
        }
        set
    }
}

impl<P: AsRef<Path>> Extend<P> for PathSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path.as_ref());
        }
    }
}

/// Canonicalize, drop missing paths and remove duplicates, keeping first-seen order.
pub fn unique_existing<I, P>(candidates: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates.into_iter().collect::<PathSet>().into_vec()
}

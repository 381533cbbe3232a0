//! The registry facade.
//!
//! Composes validation, classification and link resolution into the
//! public insert/delete/query operations, and owns the correctness
//! contract: no duplicate codes, no dangling or contradictory
//! headquarters links, branch-before-headquarters insertion supported.
//!
//! Every mutation takes the write lock for its full check-then-act span,
//! so the duplicate-check-then-insert sequence, the orphan-adoption scan
//! on headquarters insert, and the unlink-then-remove sequence on
//! headquarters delete are each atomic with respect to every other
//! mutation. Queries share the read lock and run in parallel.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::core::classify::{classify, expected_headquarter_code};
use crate::core::errors::{RegistryError, RegistryResult};
use crate::core::store::CodeStore;
use crate::core::types::RegistryStats;
use crate::models::{CandidateCode, SwiftEntry};
use crate::validation::validate_candidate;

/// Outcome of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A headquarters was added; `adopted` previously orphaned branches
    /// sharing its prefix were linked to it.
    Headquarters { code: String, adopted: usize },

    /// A branch was added; linked to `headquarter` when one existed,
    /// stored as an orphan otherwise.
    Branch {
        code: String,
        headquarter: Option<String>,
    },
}

impl InsertOutcome {
    pub fn code(&self) -> &str {
        match self {
            InsertOutcome::Headquarters { code, .. } => code,
            InsertOutcome::Branch { code, .. } => code,
        }
    }

    pub fn is_headquarters(&self) -> bool {
        matches!(self, InsertOutcome::Headquarters { .. })
    }
}

/// Outcome of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub code: String,
    pub was_headquarters: bool,
    /// Branches whose headquarters link was cleared as a side effect
    pub unlinked: usize,
}

/// Registry of SWIFT codes over an abstract backing store.
pub struct SwiftRegistry<S: CodeStore> {
    store: RwLock<S>,
}

impl<S: CodeStore> SwiftRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, S>> {
        self.store
            .read()
            .map_err(|_| RegistryError::StoreUnavailable {
                message: "store lock poisoned".to_string(),
            })
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, S>> {
        self.store
            .write()
            .map_err(|_| RegistryError::StoreUnavailable {
                message: "store lock poisoned".to_string(),
            })
    }

    /// Validate, classify, link and persist a candidate.
    ///
    /// A branch whose headquarters is present is linked immediately; a
    /// branch arriving first is stored as an orphan, which is not an
    /// error. A headquarters is persisted first, then adopts every orphan
    /// branch sharing its prefix; branches already linked elsewhere are
    /// left untouched.
    pub fn insert(&self, candidate: &CandidateCode) -> RegistryResult<InsertOutcome> {
        let mut store = self.write()?;
        let normalized = validate_candidate(candidate, &*store)?;
        let classification = classify(&normalized.swift_code);

        let mut entry = SwiftEntry::new(
            normalized.swift_code,
            normalized.bank_name,
            normalized.address,
            normalized.country_iso2,
            normalized.country_name,
            classification.is_headquarters,
        );

        if classification.is_headquarters {
            // Persist first so the new headquarters is visible to lookups
            store.save(entry.clone())?;

            let orphans = store.find_orphans_by_prefix(&classification.prefix)?;
            let adopted = orphans.len();
            for mut branch in orphans {
                branch.headquarter_code = Some(entry.swift_code.clone());
                store.save(branch)?;
            }

            info!(code = %entry.swift_code, adopted, "headquarters registered");
            Ok(InsertOutcome::Headquarters {
                code: entry.swift_code,
                adopted,
            })
        } else {
            let expected_hq = expected_headquarter_code(&entry.swift_code);
            let headquarter = store.find_by_code(&expected_hq)?.map(|hq| hq.swift_code);
            entry.headquarter_code = headquarter.clone();
            store.save(entry.clone())?;

            match &headquarter {
                Some(hq) => debug!(code = %entry.swift_code, headquarter = %hq, "branch registered"),
                None => debug!(code = %entry.swift_code, "branch registered as orphan"),
            }
            Ok(InsertOutcome::Branch {
                code: entry.swift_code,
                headquarter,
            })
        }
    }

    /// Delete a code.
    ///
    /// Deleting a headquarters first clears the link on every dependent
    /// branch (orphaning them, never deleting them), then removes the
    /// headquarters itself.
    pub fn delete(&self, code: &str) -> RegistryResult<DeleteOutcome> {
        let code = code.trim().to_uppercase();
        let mut store = self.write()?;

        let entry = store
            .find_by_code(&code)?
            .ok_or_else(|| RegistryError::NotFound { code: code.clone() })?;

        let mut unlinked = 0;
        if entry.headquarter_flag {
            for mut branch in store.find_by_headquarter(&code)? {
                branch.headquarter_code = None;
                store.save(branch)?;
                unlinked += 1;
            }
        }

        store.delete_by_code(&code)?;
        info!(%code, unlinked, "entry deleted");
        Ok(DeleteOutcome {
            code,
            was_headquarters: entry.headquarter_flag,
            unlinked,
        })
    }

    pub fn get_by_code(&self, code: &str) -> RegistryResult<SwiftEntry> {
        let code = code.trim().to_uppercase();
        self.read()?
            .find_by_code(&code)?
            .ok_or(RegistryError::NotFound { code })
    }

    /// All entries for a country, ordered by code. The country must be
    /// pre-validated by the caller; an empty result is not an error.
    pub fn get_by_country(&self, iso2: &str) -> RegistryResult<Vec<SwiftEntry>> {
        let iso2 = iso2.trim().to_uppercase();
        Ok(self.read()?.find_by_country(&iso2)?)
    }

    /// Branches currently linked to the given headquarters code.
    pub fn branches_of(&self, hq_code: &str) -> RegistryResult<Vec<SwiftEntry>> {
        let code = hq_code.trim().to_uppercase();
        Ok(self.read()?.find_by_headquarter(&code)?)
    }

    pub fn exists(&self, code: &str) -> RegistryResult<bool> {
        let code = code.trim().to_uppercase();
        Ok(self.read()?.exists_by_code(&code)?)
    }

    pub fn stats(&self) -> RegistryResult<RegistryStats> {
        let entries = self.read()?.find_all()?;
        let mut stats = RegistryStats {
            total_entries: entries.len(),
            ..Default::default()
        };
        for entry in &entries {
            if entry.headquarter_flag {
                stats.headquarters += 1;
            } else {
                stats.branches += 1;
                if entry.is_orphan() {
                    stats.orphans += 1;
                }
            }
        }
        Ok(stats)
    }
}

//! Many matches, each behind its own lock.
//!
//! Matches share nothing, so they can be driven from different threads in parallel.
//! Activations on the same match are linearized by that match's mutex: a chain capture
//! in progress can never be interleaved with another click.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::RegistryConfig;
use crate::core::coord::Coord;
use crate::core::piece::Side;
use crate::error::EngineError;
use crate::events::Activation;
use crate::game::Match;
use crate::record;
use crate::view::PublicView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u64);

impl MatchId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Slot = Arc<Mutex<Match>>;

#[derive(Debug)]
pub struct MatchRegistry {
    config: RegistryConfig,
    next_id: AtomicU64,
    matches: RwLock<FxHashMap<MatchId, Slot>>,
}

impl MatchRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            next_id: AtomicU64::new(1),
            matches: RwLock::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Start a fresh match.
    pub fn create(&self) -> Result<MatchId, EngineError> {
        self.insert(Match::new())
    }

    /// Register an existing match (e.g. one loaded from storage) under a new id.
    pub fn insert(&self, m: Match) -> Result<MatchId, EngineError> {
        let mut map = self.matches.write();
        if let Some(limit) = self.config.max_matches {
            if map.len() >= limit {
                return Err(EngineError::RegistryFull { limit });
            }
        }
        let id = MatchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        map.insert(id, Arc::new(Mutex::new(m)));
        info!("match {id} created ({} live)", map.len());
        Ok(id)
    }

    /// Feed one click into match `id`.
    ///
    /// Returns the activation and the view after it, both taken under the match lock.
    pub fn activate(
        &self,
        id: MatchId,
        at: Coord,
        actor: Side,
    ) -> Result<(Activation, PublicView), EngineError> {
        let slot = self.slot(id)?;
        let mut m = slot.lock();
        let activation = m.handle_cell_activation(at, actor)?;
        Ok((activation, m.public_view()))
    }

    pub fn view(&self, id: MatchId) -> Result<PublicView, EngineError> {
        let slot = self.slot(id)?;
        let m = slot.lock();
        Ok(m.public_view())
    }

    /// Start match `id` over from the initial position.
    pub fn reset(&self, id: MatchId) -> Result<PublicView, EngineError> {
        let slot = self.slot(id)?;
        let mut m = slot.lock();
        m.reset();
        info!("match {id} reset");
        Ok(m.public_view())
    }

    pub fn remove(&self, id: MatchId) -> Result<(), EngineError> {
        self.matches
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::UnknownMatch(id))
    }

    /// Encode match `id` as a JSON record.
    pub fn snapshot(&self, id: MatchId) -> Result<String, EngineError> {
        let slot = self.slot(id)?;
        let m = slot.lock();
        record::encode(&m)
    }

    /// Decode a JSON record and register it under a new id.
    pub fn restore(&self, text: &str) -> Result<MatchId, EngineError> {
        let m = record::decode(text)?;
        self.insert(m)
    }

    pub fn len(&self) -> usize {
        self.matches.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live match ids, ascending.
    pub fn ids(&self) -> Vec<MatchId> {
        let mut ids: Vec<MatchId> = self.matches.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn slot(&self, id: MatchId) -> Result<Slot, EngineError> {
        self.matches
            .read()
            .get(&id)
            .cloned()
            .ok_or(EngineError::UnknownMatch(id))
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

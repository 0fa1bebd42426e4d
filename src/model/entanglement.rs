//! Entanglement records and the arena that shares them between pieces.
//!
//! Several pieces point at one [`Entanglement`] record. Records live in an arena keyed by
//! [`RecordId`]; each piece id maps to at most one record id. Mutating a record through any
//! participant is therefore visible to every participant, and a record is dropped as soon as
//! the last piece unlinks from it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::PieceId;
use crate::quantum::amplitude::Amplitude;

/// Handle to a record in [`Entanglements`].
pub type RecordId = u32;

/// Participants (in join order) and their joint amplitude vector of length `2^elements`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entanglement {
    pub elements: Vec<PieceId>,
    pub state: Vec<Amplitude>,
}

impl Entanglement {
    pub fn new(elements: Vec<PieceId>, state: Vec<Amplitude>) -> Self {
        Self { elements, state }
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        self.elements.contains(&id)
    }

    /// The joint vector has one amplitude per basis state of the participants.
    pub fn is_well_formed(&self) -> bool {
        self.elements.len() < usize::BITS as usize
            && self.state.len() == 1usize << self.elements.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Entanglements {
    records: FxHashMap<RecordId, Entanglement>,
    links: FxHashMap<PieceId, RecordId>,
    next_record: RecordId,
}

impl Entanglements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record shared by `id`'s group, if `id` is entangled.
    pub fn group(&self, id: PieceId) -> Option<&Entanglement> {
        self.links.get(&id).and_then(|rid| self.records.get(rid))
    }

    #[inline]
    pub fn record_id(&self, id: PieceId) -> Option<RecordId> {
        self.links.get(&id).copied()
    }

    #[inline]
    pub fn record(&self, rid: RecordId) -> Option<&Entanglement> {
        self.records.get(&rid)
    }

    pub fn record_mut(&mut self, rid: RecordId) -> Option<&mut Entanglement> {
        self.records.get_mut(&rid)
    }

    #[inline]
    pub fn is_entangled(&self, id: PieceId) -> bool {
        self.links.contains_key(&id)
    }

    /// Both ids point at the same record.
    pub fn shares_group(&self, a: PieceId, b: PieceId) -> bool {
        match (self.record_id(a), self.record_id(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// `id` appears as an element of some live record.
    pub fn lists(&self, id: PieceId) -> bool {
        self.records.values().any(|r| r.contains(id))
    }

    /// Store a record without linking anyone to it yet.
    pub fn insert(&mut self, record: Entanglement) -> RecordId {
        let rid = self.next_record;
        self.next_record = self.next_record.wrapping_add(1);
        self.records.insert(rid, record);
        rid
    }

    /// Point `id` at `rid`, releasing whatever record it pointed at before.
    pub fn link(&mut self, id: PieceId, rid: RecordId) {
        if let Some(prev) = self.links.insert(id, rid) {
            if prev != rid {
                self.release_if_orphaned(prev);
            }
        }
    }

    /// Store `record` and link every one of its elements to it.
    pub fn insert_linked(&mut self, record: Entanglement) -> RecordId {
        let elements = record.elements.clone();
        let rid = self.insert(record);
        for id in elements {
            self.link(id, rid);
        }
        rid
    }

    /// Clear `id`'s link. The record is dropped once nobody links to it.
    pub fn unlink(&mut self, id: PieceId) -> Option<RecordId> {
        let rid = self.links.remove(&id)?;
        self.release_if_orphaned(rid);
        Some(rid)
    }

    fn release_if_orphaned(&mut self, rid: RecordId) {
        if !self.links.values().any(|&r| r == rid) {
            self.records.remove(&rid);
        }
    }

    /// Number of live records.
    #[inline]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Entangled piece ids with their record ids.
    pub fn links(&self) -> impl Iterator<Item = (PieceId, RecordId)> + '_ {
        self.links.iter().map(|(&id, &rid)| (id, rid))
    }

    pub fn records(&self) -> impl Iterator<Item = (RecordId, &Entanglement)> + '_ {
        self.records.iter().map(|(&rid, r)| (rid, r))
    }
}

//! src/frontier.rs
//!
//! Representeert een deelverzameling actieve knopen (de "frontier") als een
//! dichte membership-bitset plus een gecachte teller. Een frontier wordt door
//! één producent aangemaakt, door één propagatiestap geconsumeerd en daarna
//! weggegooid; een lege frontier (teller 0) beëindigt een propagatielus.

use bitvec::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Een dichte verzameling actieve knoop-ids over de volledige knoopruimte.
/// Invariant: `active` is gelijk aan het aantal gezette bits in `members`.
#[derive(Clone, Debug)]
pub struct Frontier {
    members: BitVec,
    active: usize,
}

impl Frontier {
    /*────────── Constructors ──────────*/

    /// Creëert een lege frontier over `n` knopen.
    pub fn empty(n: usize) -> Self {
        Self {
            members: bitvec![0; n],
            active: 0,
        }
    }

    /// Creëert een frontier waarin alle `n` knopen actief zijn.
    pub fn full(n: usize) -> Self {
        Self {
            members: bitvec![1; n],
            active: n,
        }
    }

    /// Bouwt een frontier uit een kant-en-klare membership-bitset.
    pub fn from_members(members: BitVec) -> Self {
        let active = members.count_ones();
        Self { members, active }
    }

    /*────────── Queries ──────────*/

    /// Grootte van de onderliggende knoopruimte (niet het aantal actieven).
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Aantal actieve knopen.
    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Waar zodra er geen enkele actieve knoop meer is.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Controleert of knoop `v` actief is.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.members[v]
    }

    /// Itereert de actieve knoop-ids in oplopende volgorde.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter_ones()
    }

    /*────────── Mutators ──────────*/

    /// Markeert knoop `v` als actief. Idempotent.
    pub fn insert(&mut self, v: usize) {
        if !self.members[v] {
            self.members.set(v, true);
            self.active += 1;
        }
    }
}

/// Schrijfzijde van een frontier die tijdens een parallelle traversal wordt
/// opgebouwd: één atomaire claimvlag per knoop. Een bestemming die vanuit
/// meerdere bronnen tegelijk wordt bereikt, komt zo hooguit één keer in de
/// opgeleverde frontier terecht.
pub struct ClaimSet {
    bits: Vec<AtomicBool>,
}

impl ClaimSet {
    /// Creëert een claimset zonder gezette vlaggen over `n` knopen.
    pub fn new(n: usize) -> Self {
        Self {
            bits: (0..n).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Claimt knoop `v` voor de volgende frontier. Dubbele claims zijn
    /// onschadelijk; de vlag gaat alleen van onwaar naar waar.
    #[inline]
    pub fn mark(&self, v: usize) {
        self.bits[v].store(true, Ordering::Relaxed);
    }

    /// Bevriest de claims tot een gewone frontier.
    pub fn into_frontier(self) -> Frontier {
        let mut members = bitvec![0; self.bits.len()];
        for (v, bit) in self.bits.iter().enumerate() {
            if bit.load(Ordering::Relaxed) {
                members.set(v, true);
            }
        }
        Frontier::from_members(members)
    }
}

//! src/components.rs
//!
//! Samenhangende componenten via iteratieve minimum-labelpropagatie.
//! De labeltoestand gaat als expliciete struct mee in elke kernelaanroep;
//! tussen een volledige run en een incrementele herberekening wordt dezelfde
//! struct hergebruikt, met een expliciete reset door de onderhoudslus.

use crate::atomics::write_min;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::params::Params;
use crate::traverse::{edge_map, vertex_map, EdgeFn};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Per-knoop labeltoestand: het actuele label en de momentopname van de
/// vorige ronde. Gelijktijdige schrijvers raken `ids` uitsluitend via
/// `write_min`; `prev` wordt alleen in de snapshotstap beschreven.
#[derive(Debug)]
pub struct Labels {
    ids: Vec<AtomicUsize>,
    prev: Vec<AtomicUsize>,
}

impl Labels {
    /// Initialiseert elk label op het eigen knoop-id.
    pub fn identity(n: usize) -> Self {
        Self {
            ids: (0..n).map(AtomicUsize::new).collect(),
            prev: (0..n).map(AtomicUsize::new).collect(),
        }
    }

    /// Aantal knopen waarvoor labels worden bijgehouden.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Huidig label van knoop `v`.
    #[inline]
    pub fn get(&self, v: usize) -> usize {
        self.ids[v].load(Ordering::Relaxed)
    }

    /// Overschrijft het label van knoop `v`. Alleen bedoeld voor de
    /// single-threaded onderhoudslus, tussen twee kernelaanroepen in.
    #[inline]
    pub fn set(&self, v: usize, label: usize) {
        self.ids[v].store(label, Ordering::Relaxed);
    }

    /// Kopieert het actuele label van `v` naar de momentopname.
    #[inline]
    fn snapshot(&self, v: usize) {
        self.prev[v].store(self.ids[v].load(Ordering::Relaxed), Ordering::Relaxed);
    }

    /// Bevriest de labels tot een gewone vector, voor rapportage.
    pub fn to_vec(&self) -> Vec<usize> {
        self.ids.iter().map(|id| id.load(Ordering::Relaxed)).collect()
    }
}

/// Updateregel voor labelpropagatie over kant (s,d): verlaag het label van
/// `d` naar dat van `s` als dat kleiner is. De bestemming wordt alleen
/// geactiveerd bij de eerste verlaging binnen een ronde (de vergelijking met
/// de momentopname); `write_min` garandeert hoe dan ook het echte minimum.
struct MinLabel<'a> {
    labels: &'a Labels,
}

impl EdgeFn for MinLabel<'_> {
    #[inline]
    fn cond(&self, _d: usize) -> bool {
        true
    }

    fn update(&self, s: usize, d: usize) -> bool {
        let orig = self.labels.ids[d].load(Ordering::Relaxed);
        let candidate = self.labels.ids[s].load(Ordering::Relaxed);
        if candidate < orig {
            self.labels.ids[d].store(candidate, Ordering::Relaxed);
            orig == self.labels.prev[d].load(Ordering::Relaxed)
        } else {
            false
        }
    }

    fn update_atomic(&self, s: usize, d: usize) -> bool {
        let orig = self.labels.ids[d].load(Ordering::Relaxed);
        let candidate = self.labels.ids[s].load(Ordering::Relaxed);
        write_min(&self.labels.ids[d], candidate)
            && orig == self.labels.prev[d].load(Ordering::Relaxed)
    }
}

/// Propageert minimumlabels vanaf de gegeven frontier tot een dekpunt (lege
/// frontier). Per ronde eerst een snapshot van de actieve labels, daarna de
/// kantenronde; tussen beide stappen staat een volledige barrière. Geeft het
/// aantal gedraaide rondes terug; dat is hooguit de diameter van de graaf.
pub fn propagate(graph: &Graph, labels: &Labels, frontier: Frontier, p: &Params) -> usize {
    assert!(
        labels.len() == graph.n(),
        "Labeltoestand hoort bij een andere knoopruimte"
    );

    let mut frontier = frontier;
    let mut rounds = 0usize;
    while !frontier.is_empty() {
        if p.max_rounds != 0 && rounds >= p.max_rounds {
            break;
        }
        vertex_map(&frontier, |v| labels.snapshot(v), p);
        frontier = edge_map(graph, &frontier, &MinLabel { labels }, p);
        rounds += 1;
        debug!(rounds, active = frontier.active(), "propagatieronde klaar");
    }
    rounds
}

/// Volledige componentenrun: identiteitslabels, alle knopen actief,
/// propageren tot convergentie. Na afloop geldt: gelijke labels dan en
/// slechts dan als dezelfde component, en elk label is het kleinste
/// oorspronkelijke knoop-id in die component.
pub fn connected_components(graph: &Graph, p: &Params) -> Labels {
    let labels = Labels::identity(graph.n());
    propagate(graph, &labels, Frontier::full(graph.n()), p);
    labels
}

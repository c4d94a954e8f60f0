//! src/triangles.rs
//!
//! Driehoektelling via merge-intersectie van gesorteerde burenlijsten.
//! Gaat uit van een symmetrische graaf; de lijstordening is een staande
//! invariant van `Graph`. Elke driehoek {x>y>z} wordt precies één keer
//! geteld, toegeschreven aan het paar (x,y) en begrensd door z.

use crate::atomics::write_add;
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::params::Params;
use crate::traverse::{edge_map, EdgeFn};
use std::sync::atomic::AtomicI64;

/// Telt de gemeenschappelijke buren van `s` en `d` die strikt onder beide
/// paargrenzen liggen: een merge-wandeling over de in-lijst van `s` en de
/// uit-lijst van `d`, waarbij bij ongelijkheid de kleinste wijzer opschuift
/// en bij gelijkheid beide plus de teller.
pub fn count_common(graph: &Graph, s: usize, d: usize) -> i64 {
    let a = graph.in_neighbors(s);
    let b = graph.out_neighbors(d);
    let mut i = 0usize;
    let mut j = 0usize;
    let mut count = 0i64;

    while i < a.len() && j < b.len() && a[i] < s && b[j] < d {
        if a[i] == b[j] {
            i += 1;
            j += 1;
            count += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    count
}

/// Updateregel voor de kantenronde: alleen gerichte paren met s > d tellen
/// mee, zodat elke ongerichte driehoek één toeschrijvingspunt heeft. De
/// uitvoerfrontier wordt door de aanroeper weggegooid.
struct MergeCount<'a> {
    graph: &'a Graph,
    counts: &'a [AtomicI64],
}

impl MergeCount<'_> {
    fn accumulate(&self, s: usize, d: usize) -> bool {
        if s > d {
            write_add(&self.counts[s], count_common(self.graph, s, d));
        }
        true
    }
}

impl EdgeFn for MergeCount<'_> {
    #[inline]
    fn cond(&self, _d: usize) -> bool {
        true
    }

    // Beide paden schrijven via write_add; de telling zelf leest alleen.
    fn update(&self, s: usize, d: usize) -> bool {
        self.accumulate(s, d)
    }

    fn update_atomic(&self, s: usize, d: usize) -> bool {
        self.accumulate(s, d)
    }
}

/// Resultaat van een volledige driehoektelling.
#[derive(Clone, Debug)]
pub struct TriangleCounts {
    /// Per knoop het aantal aan die knoop toegeschreven driehoeken.
    pub per_vertex: Vec<i64>,
    /// Som van alle per-knoop tellingen.
    pub total: i64,
}

/// Telt driehoeken beperkt tot kanten met een bron in de frontier. De
/// tellerbuffer wordt per aanroep vers aangemaakt en als gewone vector
/// opgeleverd; voor elke bron in de frontier is de beperkte telling gelijk
/// aan wat de volledige kernel voor die knoop zou geven.
pub fn count_frontier(graph: &Graph, frontier: &Frontier, p: &Params) -> Vec<i64> {
    let counts: Vec<AtomicI64> = (0..graph.n()).map(|_| AtomicI64::new(0)).collect();
    let rule = MergeCount {
        graph,
        counts: &counts,
    };
    let _ = edge_map(graph, frontier, &rule, p);
    counts.into_iter().map(AtomicI64::into_inner).collect()
}

/// Volledige driehoektelling over alle knopen.
pub fn triangle_count(graph: &Graph, p: &Params) -> TriangleCounts {
    let per_vertex = count_frontier(graph, &Frontier::full(graph.n()), p);
    let total = per_vertex.iter().sum();
    TriangleCounts { per_vertex, total }
}

/// Globale clusteringcoëfficiënt: 3·driehoeken gedeeld door het aantal
/// verbonden drietallen (wedges). Geeft 0.0 terug op een graaf zonder
/// wedges.
pub fn global_clustering(graph: &Graph, total: i64) -> f64 {
    let wedges: usize = (0..graph.n())
        .map(|v| {
            let d = graph.out_degree(v);
            d * d.saturating_sub(1) / 2
        })
        .sum();
    if wedges == 0 {
        0.0
    } else {
        3.0 * total as f64 / wedges as f64
    }
}

//! src/maintain.rs
//!
//! Incrementeel onderhoud van beide kernels onder een stroom kantmutaties.
//! De lus is single-threaded: adjacency wordt uitsluitend tussen twee
//! kernelaanroepen in gemuteerd, nooit tijdens een traversal. Na elke edit
//! wordt de volledige actuele toestand aan de rapportageclosure aangeboden;
//! de presentatievorm blijft buiten deze module.
//!
//! Voor componenten geldt: een insert kan hooguit twee componenten
//! samenvoegen (label-hernummering via een lineaire scan), een delete kan
//! alleen de component van `a` splijten. Die component krijgt conservatief
//! in zijn geheel verse labels en wordt opnieuw gepropageerd; dat splitst
//! correct bij een brugverwijdering en convergeert anders terug naar één
//! label. Voor driehoeken wordt het verschil gemeten over de gesloten
//! één-hops omgeving van {a,b}, vóór en ná de mutatie; elke driehoek
//! waarvan de telling verandert ligt binnen die omgeving.

use crate::components::{connected_components, propagate, Labels};
use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::params::Params;
use crate::stream::{Edit, Edits, StreamError};
use crate::triangles::{count_frontier, triangle_count};
use std::io::BufRead;
use std::time::Instant;
use tracing::{debug, info};

/*────────── Componenten ──────────*/

/// Onderhoudstoestand voor samenhangende componenten: de labels plus de
/// teller waaruit verse labels worden gemunt. Elk gemunt label is strikt
/// groter dan elk eerder gebruikt label.
#[derive(Debug)]
pub struct CcState {
    pub labels: Labels,
    next_label: usize,
}

impl CcState {
    /// Het eerstvolgende nog ongebruikte verse label.
    #[inline]
    pub fn next_label(&self) -> usize {
        self.next_label
    }
}

/// Volledige componentenrun als starttoestand voor de onderhoudslus.
pub fn cc_from_scratch(graph: &Graph, p: &Params) -> CcState {
    CcState {
        labels: connected_components(graph, p),
        next_label: graph.n(),
    }
}

/// Verwerkt één edit op de componententoestand. `End` is een no-op; de
/// aanroepende lus stopt daar zelf op.
pub fn cc_apply_edit(graph: &mut Graph, state: &mut CcState, edit: Edit, p: &Params) {
    match edit {
        Edit::End => {}
        Edit::Insert(a, b) => {
            graph.insert_edge(a, b);
            let la = state.labels.get(a);
            let lb = state.labels.get(b);
            if la != lb {
                // Hernummer de grotere labelklasse naar de kleinere; O(n).
                let small = la.min(lb);
                let big = la.max(lb);
                for v in 0..graph.n() {
                    if state.labels.get(v) == big {
                        state.labels.set(v, small);
                    }
                }
            }
        }
        Edit::Delete(a, b) => {
            graph.remove_edge(a, b);
            // Conservatief: de hele huidige component van `a` krijgt verse,
            // oplopende labels en wordt opnieuw gepropageerd.
            let culprit = state.labels.get(a);
            let mut frontier = Frontier::empty(graph.n());
            let mut minted = 0usize;
            for v in 0..graph.n() {
                if state.labels.get(v) == culprit {
                    state.labels.set(v, state.next_label + minted);
                    minted += 1;
                    frontier.insert(v);
                }
            }
            state.next_label += minted;
            let rounds = propagate(graph, &state.labels, frontier, p);
            debug!(a, b, members = minted, rounds, "component herberekend na delete");
        }
    }
}

/// Draait de volledige componentenrun, consumeert daarna de editstroom tot
/// `End` en rapporteert na de startrun en na elke edit de volledige
/// labeltoestand. Een stroomfout breekt de lus af.
pub fn drive_components<R, F>(
    graph: &mut Graph,
    reader: R,
    p: &Params,
    mut report: F,
) -> Result<CcState, StreamError>
where
    R: BufRead,
    F: FnMut(&[usize]),
{
    let mut state = cc_from_scratch(graph, p);
    report(&state.labels.to_vec());

    for record in Edits::new(reader) {
        let edit = record?;
        if edit == Edit::End {
            break;
        }
        check_range(edit, graph.n())?;
        let start = Instant::now();
        cc_apply_edit(graph, &mut state, edit, p);
        info!(?edit, elapsed_us = start.elapsed().as_micros() as u64, "edit verwerkt");
        report(&state.labels.to_vec());
    }
    Ok(state)
}

/*────────── Driehoeken ──────────*/

/// Onderhoudstoestand voor driehoektelling: per-knoop tellingen plus het
/// lopende totaal.
#[derive(Debug)]
pub struct TriState {
    pub counts: Vec<i64>,
    pub total: i64,
}

/// Volledige driehoektelling als starttoestand voor de onderhoudslus.
pub fn tri_from_scratch(graph: &Graph, p: &Params) -> TriState {
    let full = triangle_count(graph, p);
    TriState {
        counts: full.per_vertex,
        total: full.total,
    }
}

/// Verwerkt één edit op de driehoektoestand: één gelokaliseerde
/// deltameting, geparametriseerd op de mutatiesoort. De omgeving van {a,b}
/// is voor en na een enkele kantmutatie dezelfde verzameling en wordt dus
/// één keer bepaald.
pub fn tri_apply_edit(graph: &mut Graph, state: &mut TriState, edit: Edit, p: &Params) {
    let (a, b, inserting) = match edit {
        Edit::End => return,
        Edit::Insert(a, b) => (a, b, true),
        Edit::Delete(a, b) => (a, b, false),
    };

    let frontier = neighborhood(graph, a, b);
    let before = count_frontier(graph, &frontier, p);

    if inserting {
        graph.insert_edge(a, b);
    } else {
        graph.remove_edge(a, b);
    }

    let after = count_frontier(graph, &frontier, p);
    let mut delta = 0i64;
    for v in frontier.iter() {
        let dv = after[v] - before[v];
        state.counts[v] += dv;
        delta += dv;
    }
    state.total += delta;
    debug!(a, b, delta, total = state.total, "driehoekdelta verwerkt");
}

/// Draait de volledige telling, consumeert daarna de editstroom tot `End`
/// en rapporteert na de startrun en na elke edit de per-knoop tellingen en
/// het totaal.
pub fn drive_triangles<R, F>(
    graph: &mut Graph,
    reader: R,
    p: &Params,
    mut report: F,
) -> Result<TriState, StreamError>
where
    R: BufRead,
    F: FnMut(&[i64], i64),
{
    let mut state = tri_from_scratch(graph, p);
    report(&state.counts, state.total);

    for record in Edits::new(reader) {
        let edit = record?;
        if edit == Edit::End {
            break;
        }
        check_range(edit, graph.n())?;
        let start = Instant::now();
        tri_apply_edit(graph, &mut state, edit, p);
        info!(?edit, elapsed_us = start.elapsed().as_micros() as u64, "edit verwerkt");
        report(&state.counts, state.total);
    }
    Ok(state)
}

/*────────── Gedeelde helpers ──────────*/

/// De gesloten één-hops omgeving van {a,b}: beide eindpunten plus elke knoop
/// op één in- of uit-kant afstand van een van beide.
fn neighborhood(graph: &Graph, a: usize, b: usize) -> Frontier {
    let mut frontier = Frontier::empty(graph.n());
    for &v in &[a, b] {
        frontier.insert(v);
        for &w in graph.out_neighbors(v) {
            frontier.insert(w);
        }
        for &w in graph.in_neighbors(v) {
            frontier.insert(w);
        }
    }
    frontier
}

/// Bereikcontrole op een editrecord; buiten [0,n) of een zelf-lus is een
/// stroomfout, geen panic.
fn check_range(edit: Edit, n: usize) -> Result<(), StreamError> {
    let (a, b) = match edit {
        Edit::End => return Ok(()),
        Edit::Insert(a, b) | Edit::Delete(a, b) => (a, b),
    };
    for vertex in [a, b] {
        if vertex >= n {
            return Err(StreamError::OutOfRange { vertex, n });
        }
    }
    if a == b {
        return Err(StreamError::Malformed(format!("self-loop edit ({a}, {b})")));
    }
    Ok(())
}

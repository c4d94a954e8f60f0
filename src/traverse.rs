//! src/traverse.rs
//!
//! De twee traversal-primitieven waar beide kernels op draaien: `vertex_map`
//! (pas een effect toe op elke actieve knoop) en `edge_map` (pas een
//! updateregel toe op elke uit-kant van de frontier en lever de volgende
//! frontier op). Binnen één aanroep bestaat er geen volgorde tussen knopen of
//! kanten; updateregels moeten correct zijn onder willekeurige interleaving
//! en leunen daarvoor op de primitieven uit `atomics`. Tussen twee
//! opeenvolgende aanroepen staat wel een volledige barrière.
//!
//! Contractbreuken (frontier van de verkeerde lengte, indices buiten bereik)
//! zijn programmeerfouten en dus fataal; geen enkele primitief geeft een
//! `Result` terug.

use crate::frontier::Frontier;
use crate::graph::Graph;
use crate::params::Params;

#[cfg(feature = "parallel")]
use crate::frontier::ClaimSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Updateregel voor `edge_map`. De atomaire variant is vereist zodra
/// meerdere bronnen dezelfde bestemming gelijktijdig kunnen raken; het
/// sequentiële pad mag met de gewone variant volstaan.
pub trait EdgeFn: Sync {
    /// Filter op de bestemming; een kant waarvoor dit onwaar is wordt
    /// overgeslagen.
    fn cond(&self, d: usize) -> bool;

    /// Niet-atomaire update voor het sequentiële pad. Geeft waar terug als
    /// de bestemming in de volgende frontier hoort.
    fn update(&self, s: usize, d: usize) -> bool;

    /// Atomaire update voor het parallelle pad, correct onder willekeurige
    /// interleaving.
    fn update_atomic(&self, s: usize, d: usize) -> bool;
}

/// Past `f` toe op elke actieve knoop van de frontier. `f` mag alleen
/// toestand raken die door zijn eigen index wordt aangewezen en moet veilig
/// zijn onder gelijktijdige aanroepen voor verschillende indices.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn vertex_map<F>(frontier: &Frontier, f: F, p: &Params)
where
    F: Fn(usize) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if frontier.active() >= p.min_parallel {
            (0..frontier.len())
                .into_par_iter()
                .filter(|&v| frontier.contains(v))
                .for_each(|v| f(v));
            return;
        }
    }

    for v in frontier.iter() {
        f(v);
    }
}

/// Past de updateregel toe op elke uit-kant (s,d) met actieve bron `s` en
/// levert een verse frontier over de volledige knoopruimte op. Een
/// bestemming die vanuit meerdere bronnen wordt bereikt, verschijnt er
/// hooguit één keer in (claimvlaggen in `ClaimSet`).
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
pub fn edge_map<F>(graph: &Graph, frontier: &Frontier, f: &F, p: &Params) -> Frontier
where
    F: EdgeFn,
{
    let n = graph.n();
    assert!(
        frontier.len() == n,
        "Frontier hoort bij een andere knoopruimte"
    );

    #[cfg(feature = "parallel")]
    {
        if frontier.active() >= p.min_parallel {
            let claims = ClaimSet::new(n);
            (0..n)
                .into_par_iter()
                .filter(|&s| frontier.contains(s))
                .for_each(|s| {
                    for &d in graph.out_neighbors(s) {
                        if f.cond(d) && f.update_atomic(s, d) {
                            claims.mark(d);
                        }
                    }
                });
            return claims.into_frontier();
        }
    }

    let mut next = Frontier::empty(n);
    for s in frontier.iter() {
        for &d in graph.out_neighbors(s) {
            if f.cond(d) && f.update(s, d) {
                next.insert(d);
            }
        }
    }
    next
}

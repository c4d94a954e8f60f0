//! src/atomics.rs
//!
//! CAS-gebaseerde aggregatieprimitieven voor conflictvrije parallelle
//! schrijfacties tijdens een traversal. Meerdere bronnen mogen gelijktijdig
//! dezelfde cel raken; de uitkomst is onafhankelijk van de interleaving.
//! `Relaxed` volstaat hier: de fork-join barrière tussen twee opeenvolgende
//! traversal-aanroepen levert de benodigde happens-before relatie.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// Verlaagt `cell` atomair naar `min(*cell, candidate)` via een CAS-lus.
/// Geeft `true` terug als de waarde strikt is gedaald. De eindwaarde is het
/// minimum over alle gelijktijdig aangeboden kandidaten.
pub fn write_min(cell: &AtomicUsize, candidate: usize) -> bool {
    let mut current = cell.load(Ordering::Relaxed);
    while candidate < current {
        match cell.compare_exchange_weak(
            current,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return true,
            // Een andere schrijver was eerder; probeer opnieuw tegen de
            // zojuist waargenomen waarde.
            Err(observed) => current = observed,
        }
    }
    false
}

/// Telt `delta` atomair op bij `cell`. De eindwaarde is de som van alle
/// aangeboden delta's, ongeacht de interleaving.
#[inline]
pub fn write_add(cell: &AtomicI64, delta: i64) {
    cell.fetch_add(delta, Ordering::Relaxed);
}

//! src/graph.rs
//!
//! Representeert een graaf met per knoop twee onafhankelijk groeibare,
//! gesorteerde burenlijsten (uit-lijst en in-lijst). Ongerichte kanten worden
//! opgeslagen als gepaarde gerichte vermeldingen: kant {u,v} levert zowel
//! u→v als v→u op, elk met een bijpassende in-lijst vermelding. Mutaties
//! gebeuren uitsluitend door de single-threaded onderhoudslus, nooit
//! gelijktijdig met een traversal; de lijsten hebben daarom geen lock nodig.
//! Ondersteunt het parsen van het DIMACS *.clq-formaat.

use std::io::{self, BufRead, Read};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Een graaf over knopen [0, n) met gesorteerde uit- en in-burenlijsten.
/// Invariant: elke lijst is strikt oplopend (geen duplicaten), en een
/// opgeslagen kant (u,v) impliceert dat de in-lijst van v de knoop u bevat.
#[derive(Clone, Debug)]
pub struct Graph {
    outs: Vec<Vec<usize>>,
    ins: Vec<Vec<usize>>,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege graaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            outs: vec![Vec::new(); n],
            ins: vec![Vec::new(); n],
        }
    }

    /// Bouwt een symmetrische graaf uit een expliciete kantenlijst
    /// (0-gebaseerde indices). Kanten buiten bereik en zelf-lussen worden
    /// genegeerd; dubbele kanten vallen weg tegen de sorteerstap.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            if u < n && v < n && u != v {
                g.outs[u].push(v);
                g.ins[v].push(u);
                g.outs[v].push(u);
                g.ins[u].push(v);
            }
        }
        g.sort_neighbor_lists();
        g
    }

    /// Parset het DIMACS *.clq formaat vanuit een gebufferde reader.
    pub fn parse_dimacs<R: Read>(reader: R) -> io::Result<Self> {
        let mut n = 0usize;
        let mut edges: Vec<(usize, usize)> = Vec::new();
        let mut header_found = false;

        for line_result in io::BufReader::new(reader).lines() {
            let line = line_result?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            let parts: Vec<_> = line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            match parts[0] {
                "p" if parts.len() >= 4 && parts[1] == "edge" => {
                    n = parts[2]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    let m_expected: usize = parts[3]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    edges.reserve(m_expected);
                    header_found = true;
                }
                "e" if parts.len() >= 3 => {
                    if !header_found {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            "Edge line 'e' found before problem line 'p'",
                        ));
                    }
                    let u: usize = parts[1]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    let v: usize = parts[2]
                        .parse()
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

                    if u > 0 && v > 0 && u <= n && v <= n {
                        edges.push((u - 1, v - 1)); // DIMACS is 1-based, wij zijn 0-based
                    } else {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("Edge ({}, {}) out of bounds for n={}", u, v, n),
                        ));
                    }
                }
                _ => { /* Negeer andere of ongeldige regels */ }
            }
        }
        Ok(Self::from_edge_list(n, &edges))
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal knopen (vertices) in de graaf terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.outs.len()
    }

    /// Geeft het aantal kanten terug (elke ongerichte kant eenmaal geteld).
    pub fn m(&self) -> usize {
        self.outs.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Uitgraad van knoop `v`.
    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.outs[v].len()
    }

    /// Ingraad van knoop `v`.
    #[inline]
    pub fn in_degree(&self, v: usize) -> usize {
        self.ins[v].len()
    }

    /// Gesorteerde uit-buren van knoop `v`.
    #[inline]
    pub fn out_neighbors(&self, v: usize) -> &[usize] {
        &self.outs[v]
    }

    /// Gesorteerde in-buren van knoop `v`.
    #[inline]
    pub fn in_neighbors(&self, v: usize) -> &[usize] {
        &self.ins[v]
    }

    /*────────── Mutators ──────────*/

    /// Voegt een ongerichte kant toe tussen `a` en `b`: beide gerichte
    /// vermeldingen plus hun in-lijst spiegels. Idempotent voor bestaande
    /// kanten; de lijsten blijven gesorteerd.
    pub fn insert_edge(&mut self, a: usize, b: usize) {
        assert!(
            a < self.n() && b < self.n() && a != b,
            "Knoopindex buiten bereik of zelf-lus"
        );
        Self::insert_sorted(&mut self.outs[a], b);
        Self::insert_sorted(&mut self.ins[b], a);
        Self::insert_sorted(&mut self.outs[b], a);
        Self::insert_sorted(&mut self.ins[a], b);
    }

    /// Verwijdert de ongerichte kant tussen `a` en `b`, beide richtingen.
    /// Een afwezige kant is een no-op.
    pub fn remove_edge(&mut self, a: usize, b: usize) {
        assert!(
            a < self.n() && b < self.n() && a != b,
            "Knoopindex buiten bereik of zelf-lus"
        );
        Self::remove_sorted(&mut self.outs[a], b);
        Self::remove_sorted(&mut self.ins[b], a);
        Self::remove_sorted(&mut self.outs[b], a);
        Self::remove_sorted(&mut self.ins[a], b);
    }

    /// Sorteert en ontdubbelt alle burenlijsten. De triangle-kernel leunt op
    /// deze ordening; de mutators houden haar daarna in stand.
    pub fn sort_neighbor_lists(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.outs
                .par_iter_mut()
                .chain(self.ins.par_iter_mut())
                .for_each(|row| {
                    row.sort_unstable();
                    row.dedup();
                });
            return;
        }

        #[cfg(not(feature = "parallel"))]
        for row in self.outs.iter_mut().chain(self.ins.iter_mut()) {
            row.sort_unstable();
            row.dedup();
        }
    }

    /*────────── Interne helpers ──────────*/

    fn insert_sorted(list: &mut Vec<usize>, v: usize) {
        if let Err(pos) = list.binary_search(&v) {
            list.insert(pos, v);
        }
    }

    fn remove_sorted(list: &mut Vec<usize>, v: usize) {
        if let Ok(pos) = list.binary_search(&v) {
            list.remove(pos);
        }
    }
}

//! src/memtracer.rs
#![cfg(feature = "memtrace")]

use once_cell::sync::Lazy;
use std::{fs::File, io::Write, sync::Mutex, time::Instant};

/// Transfer-Richtung oder Kernel-Event
#[derive(Clone, Copy)]
pub enum Dir {
    H2D,
    D2H,
    Kernel,
}

impl Dir {
    fn as_str(self) -> &'static str {
        match self {
            Dir::H2D => "H2D",
            Dir::D2H => "D2H",
            Dir::Kernel => "Kernel",
        }
    }
}

/// globaler Nullpunkt, wird beim ersten `start()` initialisiert
static T0: Lazy<Instant> = Lazy::new(Instant::now);

struct Row {
    start_us: u128,
    end_us: u128,
    bytes: usize,
    dir: &'static str,
    idle_us: u128,
}

static LOG: Lazy<Mutex<Vec<Row>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Token hält Startzeit, Größe und Richtung
pub struct CopyToken {
    start: Instant,
    bytes: usize,
    dir: Dir,
}

/// Start eines Transfers/Kernels
pub fn start(dir: Dir, bytes: usize) -> CopyToken {
    Lazy::force(&T0);
    CopyToken { start: Instant::now(), bytes, dir }
}

impl CopyToken {
    /// Ende eines Transfers/Kernels, schreibt eine Zeile samt Idle-Lücke
    pub fn finish(self) {
        let t0 = *T0;
        let start_us = self.start.duration_since(t0).as_micros();
        let end_us = Instant::now().duration_since(t0).as_micros();

        let mut log = LOG.lock().unwrap();
        let prev_end = log.last().map(|row| row.end_us).unwrap_or(0);
        let idle_us = start_us.saturating_sub(prev_end);

        log.push(Row { start_us, end_us, bytes: self.bytes, dir: self.dir.as_str(), idle_us });
    }
}

/// CSV schreiben, einmal am Programmende aufrufen
pub fn flush_csv() {
    let mut f = File::create("memtrace.csv").expect("could not create memtrace.csv");
    writeln!(f, "t_start_us,t_end_us,bytes,dir,idle_us").unwrap();
    for row in LOG.lock().unwrap().iter() {
        writeln!(f, "{},{},{},{},{}", row.start_us, row.end_us, row.bytes, row.dir, row.idle_us)
            .unwrap();
    }
}

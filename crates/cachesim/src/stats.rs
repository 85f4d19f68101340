//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome counters of a run. It provides:
//! 1. **Counters:** Hits plus compulsory, capacity and conflict misses.
//! 2. **Derived rates:** Hit rate, miss rate, and each miss kind's share of all misses.
//! 3. **Reports:** Verbose text, a single CSV line, JSON, and a text bar chart.
//!
//! All rates are zero-safe: an empty trace reports 0 rather than NaN.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::MissKind;
use crate::common::SimError;
use crate::config::OutputMode;

/// Outcome of a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessOutcome {
    /// Block was present.
    Hit,
    /// Block was absent; carries the miss category.
    Miss(MissKind),
}

impl AccessOutcome {
    /// Whether this is a hit.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// The miss category, or `None` for a hit.
    pub const fn miss_kind(self) -> Option<MissKind> {
        match self {
            Self::Hit => None,
            Self::Miss(kind) => Some(kind),
        }
    }
}

/// Per-category miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissCounters {
    /// Cold misses.
    pub compulsory: u64,
    /// Misses with the whole cache occupied.
    pub capacity: u64,
    /// Misses in a full set while the cache had room elsewhere.
    pub conflict: u64,
}

impl MissCounters {
    /// Increments the counter for `kind`.
    #[inline]
    pub const fn record(&mut self, kind: MissKind) {
        match kind {
            MissKind::Compulsory => self.compulsory += 1,
            MissKind::Capacity => self.capacity += 1,
            MissKind::Conflict => self.conflict += 1,
        }
    }

    /// The counter for `kind`.
    pub const fn get(&self, kind: MissKind) -> u64 {
        match kind {
            MissKind::Compulsory => self.compulsory,
            MissKind::Capacity => self.capacity,
            MissKind::Conflict => self.conflict,
        }
    }

    /// Sum of all miss counters.
    pub const fn total(&self) -> u64 {
        self.compulsory + self.capacity + self.conflict
    }
}

/// Counters for one simulation run.
///
/// Returned by value from the simulator, so a copy taken at the end of a run is an
/// immutable summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    /// Accesses that hit.
    pub hits: u64,
    /// Accesses that missed, by category.
    pub misses: MissCounters,
    /// Accesses processed.
    pub total_accesses: u64,
}

/// `part / whole`, or 0 when `whole` is 0.
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl SimStats {
    /// Records the outcome of one access.
    #[inline]
    pub const fn record(&mut self, outcome: AccessOutcome) {
        self.total_accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss(kind) => self.misses.record(kind),
        }
    }

    /// Total misses across all categories.
    pub const fn total_misses(&self) -> u64 {
        self.misses.total()
    }

    /// Fraction of accesses that hit, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.total_accesses)
    }

    /// Fraction of accesses that missed, in `[0, 1]`.
    pub fn miss_rate(&self) -> f64 {
        ratio(self.total_misses(), self.total_accesses)
    }

    /// Fraction of misses that were of `kind`, in `[0, 1]`.
    pub fn miss_share(&self, kind: MissKind) -> f64 {
        ratio(self.misses.get(kind), self.total_misses())
    }

    /// Renders the report in the given output mode.
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Verbose => VerboseReport(self).to_string(),
            OutputMode::Compact => CompactReport(self).to_string(),
        }
    }

    /// Serializes the counters and derived rates as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Report`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SimError> {
        let value = serde_json::json!({
            "total_accesses": self.total_accesses,
            "hits": self.hits,
            "misses": self.misses,
            "hit_rate": self.hit_rate(),
            "miss_rate": self.miss_rate(),
            "miss_share": {
                "compulsory": self.miss_share(MissKind::Compulsory),
                "capacity": self.miss_share(MissKind::Capacity),
                "conflict": self.miss_share(MissKind::Conflict),
            },
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Renders the hit/miss distribution as a text bar chart.
    ///
    /// Each row is one outcome category, its bar `width` characters wide at 100%,
    /// followed by the category's share of all accesses.
    pub fn render_chart(&self, width: usize) -> String {
        ChartReport { stats: self, width }.to_string()
    }

    /// Prints the report to stdout.
    pub fn print(&self, mode: OutputMode) {
        print!("{}", self.render(mode));
    }
}

/// Multi-line report.
struct VerboseReport<'a>(&'a SimStats);

impl fmt::Display for VerboseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE SIMULATION REPORT")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "accesses                 {}", s.total_accesses)?;
        writeln!(f, "hits                     {}", s.hits)?;
        writeln!(f, "misses                   {}", s.total_misses())?;
        writeln!(f, "hit_rate                 {:.4}%", s.hit_rate() * 100.0)?;
        writeln!(f, "miss_rate                {:.4}%", s.miss_rate() * 100.0)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "MISS BREAKDOWN")?;
        for kind in MissKind::ALL {
            writeln!(
                f,
                "  miss.{:<18} {} ({:.2}%)",
                kind.name(),
                s.misses.get(kind),
                s.miss_share(kind) * 100.0
            )?;
        }
        writeln!(f, "==========================================================")
    }
}

/// One CSV line: `total, hit_rate, miss_rate, compulsory, capacity, conflict`.
///
/// Rates are fractions, not percentages.
struct CompactReport<'a>(&'a SimStats);

impl fmt::Display for CompactReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        writeln!(
            f,
            "{}, {:.4}, {:.4}, {:.2}, {:.2}, {:.2}",
            s.total_accesses,
            s.hit_rate(),
            s.miss_rate(),
            s.miss_share(MissKind::Compulsory),
            s.miss_share(MissKind::Capacity),
            s.miss_share(MissKind::Conflict)
        )
    }
}

/// Bar chart of the outcome distribution.
struct ChartReport<'a> {
    stats: &'a SimStats,
    width: usize,
}

impl fmt::Display for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        let rows = [
            ("hits", s.hits),
            ("compulsory", s.misses.compulsory),
            ("capacity", s.misses.capacity),
            ("conflict", s.misses.conflict),
        ];
        writeln!(f, "HIT/MISS DISTRIBUTION")?;
        for (label, count) in rows {
            let share = ratio(count, s.total_accesses);
            let filled = ((share * self.width as f64).round() as usize).min(self.width);
            writeln!(
                f,
                "  {label:<11} [{}{}] {:>5.1}%",
                "#".repeat(filled),
                ".".repeat(self.width - filled),
                share * 100.0
            )?;
        }
        Ok(())
    }
}

//! Fixture-unit capacity by flow.
//!
//! Plumbing codes express supply-pipe capacity in fixture units, a normalized
//! demand load, rather than in GPM. A [`FixtureUnitTable`] maps flow to
//! fixture units by linear interpolation between published breakpoints,
//! rounded down to whole units.
//!
//! Two columns exist: one for systems served by flush tanks and one for
//! systems with flushometer valves. Flushometer valves are not rated at low
//! flows, so the valve column is undefined there.
//!
//! ```
//! use supply_sizing::models::plumbing::fixture_units::{
//!     FixtureUnitError, FixtureUnitTable, FlushType,
//! };
//!
//! let table = FixtureUnitTable::upc_2021().unwrap();
//!
//! assert_eq!(table.fixture_units(22.5, FlushType::Tank), Ok(35));
//! assert_eq!(
//!     table.fixture_units(21.0, FlushType::Valve),
//!     Err(FixtureUnitError::UseLargerPipe { gpm: 21.0 })
//! );
//! ```

mod upc_2021;

use std::{fmt, str::FromStr, sync::OnceLock};

use log::warn;
use thiserror::Error;

/// Column of a fixture-unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlushType {
    /// Fixtures with flush tanks.
    Tank,
    /// Fixtures with flushometer valves.
    Valve,
}

impl FromStr for FlushType {
    type Err = FixtureUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tank" => Ok(Self::Tank),
            "valve" => Ok(Self::Valve),
            _ => Err(FixtureUnitError::UnknownFlushType(s.to_owned())),
        }
    }
}

impl fmt::Display for FlushType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tank => f.write_str("Tank"),
            Self::Valve => f.write_str("Valve"),
        }
    }
}

/// One row of a fixture-unit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Flow in US gallons per minute.
    pub gpm: f64,

    /// Fixture units for flush-tank systems.
    pub tank: u32,

    /// Fixture units for flushometer-valve systems, if rated at this flow.
    pub valve: Option<u32>,
}

impl Breakpoint {
    /// A row with both columns defined.
    #[must_use]
    pub const fn new(gpm: f64, tank: u32, valve: u32) -> Self {
        Self {
            gpm,
            tank,
            valve: Some(valve),
        }
    }

    /// A row below the flushometer-valve rating range.
    #[must_use]
    pub const fn tank_only(gpm: f64, tank: u32) -> Self {
        Self {
            gpm,
            tank,
            valve: None,
        }
    }

    fn column(&self, flush_type: FlushType) -> Option<u32> {
        match flush_type {
            FlushType::Tank => Some(self.tank),
            FlushType::Valve => self.valve,
        }
    }
}

/// Errors from a fixture-unit lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixtureUnitError {
    /// The flow lies outside the table.
    #[error("{gpm} GPM is out of range ({min}..={max} GPM)")]
    OutOfRange { gpm: f64, min: f64, max: f64 },

    /// Flushometer valves are not rated at this flow; use the next larger pipe size.
    #[error("flushometer valves are not rated at {gpm} GPM; use the next larger pipe size")]
    UseLargerPipe { gpm: f64 },

    /// A flush type name was not recognized.
    #[error("unknown flush type: {0:?}")]
    UnknownFlushType(String),
}

/// Errors from constructing a [`FixtureUnitTable`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("a fixture-unit table needs at least two breakpoints, got {count}")]
    TooFewBreakpoints { count: usize },

    #[error("breakpoint {index} has a non-finite flow")]
    NonFiniteFlow { index: usize },

    #[error("breakpoint {index} ({gpm} GPM) does not increase in flow")]
    FlowNotIncreasing { index: usize, gpm: f64 },
}

/// A decrease in fixture units between consecutive breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anomaly {
    /// Column in which the decrease occurs.
    pub column: FlushType,

    /// Row before the decrease.
    pub from: Breakpoint,

    /// Row after the decrease.
    pub to: Breakpoint,
}

/// Immutable flow-to-fixture-unit table.
///
/// Flows are finite and strictly increasing. Unit columns are expected to be
/// non-decreasing, but published tables are accepted as-is; departures are
/// logged at construction and available from [`FixtureUnitTable::anomalies`].
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureUnitTable {
    breakpoints: Vec<Breakpoint>,
}

impl FixtureUnitTable {
    /// Constructs a validated table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if there are fewer than two breakpoints or the
    /// flows are not finite and strictly increasing.
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, TableError> {
        if breakpoints.len() < 2 {
            return Err(TableError::TooFewBreakpoints {
                count: breakpoints.len(),
            });
        }

        for (index, row) in breakpoints.iter().enumerate() {
            if !row.gpm.is_finite() {
                return Err(TableError::NonFiniteFlow { index });
            }
            if index > 0 && row.gpm <= breakpoints[index - 1].gpm {
                return Err(TableError::FlowNotIncreasing {
                    index,
                    gpm: row.gpm,
                });
            }
        }

        let table = Self { breakpoints };
        table.warn_anomalies();
        Ok(table)
    }

    /// The 2021 Uniform Plumbing Code Appendix A table (Figure A 108.1B).
    ///
    /// Covers 1 to 500 GPM; flushometer valves are rated from 22 GPM. The
    /// published rows are validated by [`FixtureUnitTable::new`] on first use,
    /// so their anomalies are logged once per process.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the published rows fail validation.
    pub fn upc_2021() -> Result<Self, TableError> {
        static TABLE: OnceLock<Result<FixtureUnitTable, TableError>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::new(upc_2021::UPC_2021.to_vec()))
            .clone()
    }

    /// Returns the breakpoints in order of increasing flow.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Returns the covered flow range in GPM.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        // Construction guarantees at least two breakpoints.
        let first = self.breakpoints[0].gpm;
        let last = self.breakpoints[self.breakpoints.len() - 1].gpm;
        (first, last)
    }

    /// Returns every decrease in a unit column between consecutive rows.
    #[must_use]
    pub fn anomalies(&self) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();
        for pair in self.breakpoints.windows(2) {
            for column in [FlushType::Tank, FlushType::Valve] {
                if let (Some(a), Some(b)) = (pair[0].column(column), pair[1].column(column)) {
                    if b < a {
                        anomalies.push(Anomaly {
                            column,
                            from: pair[0],
                            to: pair[1],
                        });
                    }
                }
            }
        }
        anomalies
    }

    /// Returns the fixture units supported by a flow.
    ///
    /// The first breakpoint pair with `gpm1 ≤ gpm ≤ gpm2` is interpolated and
    /// the result rounded down. In the valve column, if either bracketing
    /// entry is unrated, the lower entry is returned when rated and
    /// [`FixtureUnitError::UseLargerPipe`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureUnitError::OutOfRange`] for flows outside the table
    /// (including `NaN`) and [`FixtureUnitError::UseLargerPipe`] for unrated
    /// valve flows.
    pub fn fixture_units(&self, gpm: f64, flush_type: FlushType) -> Result<u32, FixtureUnitError> {
        let (min, max) = self.range();
        let out_of_range = FixtureUnitError::OutOfRange { gpm, min, max };

        if !(gpm >= min && gpm <= max) {
            return Err(out_of_range);
        }

        let (lower, upper) = self
            .breakpoints
            .windows(2)
            .find(|pair| pair[0].gpm <= gpm && gpm <= pair[1].gpm)
            .map(|pair| (pair[0], pair[1]))
            .ok_or(out_of_range)?;

        match (lower.column(flush_type), upper.column(flush_type)) {
            (Some(v1), Some(v2)) => Ok(interpolate(
                (lower.gpm, v1),
                (upper.gpm, v2),
                gpm,
            )),
            (Some(v1), None) => Ok(v1),
            (None, _) => Err(FixtureUnitError::UseLargerPipe { gpm }),
        }
    }

    fn warn_anomalies(&self) {
        for anomaly in self.anomalies() {
            warn!(
                "fixture-unit table: {} units fall from {:?} at {} GPM to {:?} at {} GPM",
                anomaly.column,
                anomaly.from.column(anomaly.column),
                anomaly.from.gpm,
                anomaly.to.column(anomaly.column),
                anomaly.to.gpm,
            );
        }
    }
}

/// Linear interpolation between `(gpm1, v1)` and `(gpm2, v2)`, floored.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate((gpm1, v1): (f64, u32), (gpm2, v2): (f64, u32), gpm: f64) -> u32 {
    let (v1, v2) = (f64::from(v1), f64::from(v2));
    (v1 + (v2 - v1) * (gpm - gpm1) / (gpm2 - gpm1)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FixtureUnitTable {
        FixtureUnitTable::upc_2021().unwrap()
    }

    #[test]
    fn table_boundaries() {
        let table = table();
        assert_eq!(table.range(), (1.0, 500.0));
        assert_eq!(table.fixture_units(1.0, FlushType::Tank), Ok(0));
        assert_eq!(table.fixture_units(500.0, FlushType::Tank), Ok(3620));
        assert_eq!(table.fixture_units(500.0, FlushType::Valve), Ok(3620));
    }

    #[test]
    fn out_of_range() {
        let table = table();
        for gpm in [0.5, 0.0, -3.0, 500.01, f64::NAN] {
            assert!(matches!(
                table.fixture_units(gpm, FlushType::Tank),
                Err(FixtureUnitError::OutOfRange { .. })
            ));
        }
        assert_eq!(
            table.fixture_units(0.5, FlushType::Valve),
            Err(FixtureUnitError::OutOfRange {
                gpm: 0.5,
                min: 1.0,
                max: 500.0
            })
        );
    }

    #[test]
    fn midpoint_is_floored() {
        let table = table();
        // 34 + (36 - 34) × 0.5 = 35
        assert_eq!(table.fixture_units(22.5, FlushType::Tank), Ok(35));
        // 39 + (42 - 39) × 0.5 = 40.5
        assert_eq!(table.fixture_units(24.5, FlushType::Tank), Ok(40));
        // 5 + (6 - 5) × 0.5 = 5.5
        assert_eq!(table.fixture_units(22.5, FlushType::Valve), Ok(5));
    }

    #[test]
    fn exact_breakpoints() {
        let table = table();
        assert_eq!(table.fixture_units(100.0, FlushType::Tank), Ok(380));
        assert_eq!(table.fixture_units(100.0, FlushType::Valve), Ok(245));
        assert_eq!(table.fixture_units(60.0, FlushType::Tank), Ok(175));
    }

    #[test]
    fn valve_units_undefined_at_low_flow() {
        let table = table();
        assert_eq!(
            table.fixture_units(21.0, FlushType::Valve),
            Err(FixtureUnitError::UseLargerPipe { gpm: 21.0 })
        );
        assert_eq!(
            table.fixture_units(3.0, FlushType::Valve),
            Err(FixtureUnitError::UseLargerPipe { gpm: 3.0 })
        );
        // Exactly 22 GPM is bracketed by the 21–22 pair, whose lower row is unrated.
        assert_eq!(
            table.fixture_units(22.0, FlushType::Valve),
            Err(FixtureUnitError::UseLargerPipe { gpm: 22.0 })
        );
        assert_eq!(table.fixture_units(21.0, FlushType::Tank), Ok(32));
    }

    #[test]
    fn lower_rated_valve_entry_is_used() {
        let table = FixtureUnitTable::new(vec![
            Breakpoint::new(10.0, 20, 8),
            Breakpoint::tank_only(20.0, 40),
        ])
        .unwrap();
        assert_eq!(table.fixture_units(15.0, FlushType::Valve), Ok(8));
        assert_eq!(table.fixture_units(15.0, FlushType::Tank), Ok(30));
    }

    #[test]
    fn tank_units_never_decrease_with_flow_outside_anomaly() {
        let table = table();
        let mut previous = 0;
        let mut gpm = 1.0;
        while gpm <= 270.0 {
            let units = table.fixture_units(gpm, FlushType::Tank).unwrap();
            assert!(units >= previous, "decrease at {gpm} GPM");
            previous = units;
            gpm += 0.25;
        }
    }

    #[test]
    fn reproduces_published_table() {
        let rows = table().breakpoints().to_vec();
        assert_eq!(rows.len(), 125);
        assert_eq!(rows.iter().filter(|row| row.valve.is_none()).count(), 21);
        assert_eq!(rows[21], Breakpoint::new(22.0, 34, 5));
        assert_eq!(
            rows.iter().find(|row| row.gpm == 280.0),
            Some(&Breakpoint::new(280.0, 2583, 2583))
        );

        // The published rows pass validation, and repeated calls share them.
        assert_eq!(FixtureUnitTable::new(rows).unwrap(), table());
        assert_eq!(table(), table());
    }

    #[test]
    fn flags_gpm_280_outlier() {
        let anomalies = table().anomalies();
        assert_eq!(anomalies.len(), 2);
        for anomaly in &anomalies {
            assert_eq!(anomaly.from.gpm, 280.0);
            assert_eq!(anomaly.to.gpm, 290.0);
        }
        assert_eq!(anomalies[0].column, FlushType::Tank);
        assert_eq!(anomalies[1].column, FlushType::Valve);
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            FixtureUnitTable::new(vec![Breakpoint::tank_only(1.0, 0)]),
            Err(TableError::TooFewBreakpoints { count: 1 })
        );
        assert_eq!(
            FixtureUnitTable::new(vec![
                Breakpoint::tank_only(1.0, 0),
                Breakpoint::tank_only(f64::INFINITY, 1),
            ]),
            Err(TableError::NonFiniteFlow { index: 1 })
        );
        assert_eq!(
            FixtureUnitTable::new(vec![
                Breakpoint::tank_only(2.0, 0),
                Breakpoint::tank_only(2.0, 1),
            ]),
            Err(TableError::FlowNotIncreasing { index: 1, gpm: 2.0 })
        );
    }

    #[test]
    fn parses_flush_type() {
        assert_eq!("tank".parse(), Ok(FlushType::Tank));
        assert_eq!("Valve".parse(), Ok(FlushType::Valve));
        assert_eq!("VALVE".parse(), Ok(FlushType::Valve));
        assert_eq!(
            "flushometer".parse::<FlushType>(),
            Err(FixtureUnitError::UnknownFlushType("flushometer".into()))
        );
    }
}

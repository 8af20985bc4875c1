// src/record.rs
//! One normalized table row.

use std::fmt;

/// Distance at which a velocity/energy pair is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Range {
    Muzzle,
    Yd100,
    Yd200,
    Yd300,
}

impl Range {
    pub const ALL: [Range; 4] = [Range::Muzzle, Range::Yd100, Range::Yd200, Range::Yd300];

    pub fn label(self) -> &'static str {
        match self {
            Range::Muzzle => "Muzzle",
            Range::Yd100 => "100yd",
            Range::Yd200 => "200yd",
            Range::Yd300 => "300yd",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Range::Muzzle => 0,
            Range::Yd100 => 1,
            Range::Yd200 => 2,
            Range::Yd300 => 3,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Velocity (ft/s) and energy (ft-lb). Both or neither: a failed split
/// is `None` at the record level, never a half-filled pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VePair {
    pub velocity: f64,
    pub energy: f64,
}

impl VePair {
    pub fn new(velocity: f64, energy: f64) -> Self { Self { velocity, energy } }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartridgeRecord {
    pub caliber: String,
    pub bullet_type: Option<String>,
    pub ve: [Option<VePair>; 4],
}

impl CartridgeRecord {
    pub fn at(&self, range: Range) -> Option<VePair> {
        self.ve[range.index()]
    }

    pub fn velocity(&self, range: Range) -> Option<f64> {
        self.at(range).map(|p| p.velocity)
    }

    pub fn energy(&self, range: Range) -> Option<f64> {
        self.at(range).map(|p| p.energy)
    }
}

//! Detection records and the PPE class taxonomy.
//!
//! The class list mirrors the YOLO model the real product ships: compliant
//! equipment classes, their `NO-` violation counterparts, and a couple of
//! neutral scene classes. Violation status is always derived from the class,
//! never stored separately, so a record can never be labeled "Hardhat" yet
//! flagged as a violation.

use serde::{Deserialize, Serialize};

/// How a detected class counts toward the compliance stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKind {
    /// PPE worn correctly
    Compliant,
    /// Missing or non-compliant PPE
    Violation,
    /// Scene context (people, cones) - counted but neither compliant nor violating
    Neutral,
}

/// Detectable classes of the simulated model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PpeClass {
    Hardhat,
    Mask,
    SafetyVest,
    Gloves,
    NoHardhat,
    NoMask,
    NoSafetyVest,
    NoGloves,
    Person,
    SafetyCone,
}

impl PpeClass {
    /// Every class the taxonomy knows, in display order.
    pub const ALL: [PpeClass; 10] = [
        PpeClass::Hardhat,
        PpeClass::Mask,
        PpeClass::SafetyVest,
        PpeClass::Gloves,
        PpeClass::Person,
        PpeClass::NoHardhat,
        PpeClass::NoMask,
        PpeClass::NoSafetyVest,
        PpeClass::NoGloves,
        PpeClass::SafetyCone,
    ];

    /// Display label, matching the model's class names.
    pub fn label(self) -> &'static str {
        match self {
            PpeClass::Hardhat => "Hardhat",
            PpeClass::Mask => "Mask",
            PpeClass::SafetyVest => "Safety Vest",
            PpeClass::Gloves => "Gloves",
            PpeClass::NoHardhat => "NO-Hardhat",
            PpeClass::NoMask => "NO-Mask",
            PpeClass::NoSafetyVest => "NO-Safety Vest",
            PpeClass::NoGloves => "NO-Gloves",
            PpeClass::Person => "Person",
            PpeClass::SafetyCone => "Safety Cone",
        }
    }

    pub fn kind(self) -> ClassKind {
        match self {
            PpeClass::Hardhat | PpeClass::Mask | PpeClass::SafetyVest | PpeClass::Gloves => {
                ClassKind::Compliant
            }
            PpeClass::NoHardhat
            | PpeClass::NoMask
            | PpeClass::NoSafetyVest
            | PpeClass::NoGloves => ClassKind::Violation,
            PpeClass::Person | PpeClass::SafetyCone => ClassKind::Neutral,
        }
    }

    /// True for the `NO-` classes.
    pub fn is_violation(self) -> bool {
        self.kind() == ClassKind::Violation
    }
}

/// One fabricated detection.
///
/// Ephemeral: regenerated wholesale each tick. `id` is the index within the
/// batch and does not refer to the same detection across ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub id: usize,
    pub class: PpeClass,
    /// Model confidence in [0, 1], practically within the profile's biased band.
    pub confidence: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Detection {
    pub fn is_violation(&self) -> bool {
        self.class.is_violation()
    }

    /// Confidence as a whole-number percentage for labels ("NO-Mask 87%").
    pub fn confidence_pct(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn violation_flag_follows_no_prefix() {
        for class in PpeClass::ALL {
            assert_eq!(class.is_violation(), class.label().starts_with("NO-"));
        }
    }

    #[test]
    fn neutral_classes_are_not_violations() {
        assert_eq!(PpeClass::Person.kind(), ClassKind::Neutral);
        assert_eq!(PpeClass::SafetyCone.kind(), ClassKind::Neutral);
        assert!(!PpeClass::Person.is_violation());
    }

    #[test]
    fn confidence_pct_rounds() {
        let det = Detection {
            id: 0,
            class: PpeClass::NoMask,
            confidence: 0.874,
            x: 0.0,
            y: 0.0,
            width: 70.0,
            height: 50.0,
        };
        assert_eq!(det.confidence_pct(), 87);
        assert!(det.is_violation());
    }

    #[test]
    fn detection_serializes_for_export() {
        let det = Detection {
            id: 1,
            class: PpeClass::Hardhat,
            confidence: 0.95,
            x: 120.0,
            y: 80.0,
            width: 80.0,
            height: 60.0,
        };
        let json = serde_json::to_string(&det).unwrap();
        assert!(json.contains("\"Hardhat\""));
        let back: Detection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, det);
    }
}

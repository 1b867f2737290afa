//! Instrument model identification from the free-text model name in the
//! file header. Used when a file carries no scan-event definitions, so the
//! configuration catalog can still be seeded from the hardware the model is
//! known to ship with.

use crate::constants::{IonizationMode, MassAnalyzer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchType {
    Exact,
    Contains,
    StartsWith,
    EndsWith,
}

/// A family of instrument models that share the same analyzer and source
/// hardware. Finer model distinctions do not change the configuration pairs
/// this library reports, so they are not represented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentFamily {
    #[default]
    Unknown,
    /// Exactive / Q Exactive / Exploris benchtop Orbitraps.
    ExactiveOrbitrap,
    /// LTQ Orbitrap hybrids and Tribrids with a linear trap alongside.
    HybridOrbitrap,
    /// Orbitrap Astral: Orbitrap plus asymmetric-track TOF.
    AstralOrbitrap,
    /// LTQ FT hybrids: ion cyclotron resonance plus linear trap.
    HybridFT,
    /// LTQ / LXQ / Velos family linear ion traps.
    LinearIonTrap,
    /// LCQ / PolarisQ / ITQ three-dimensional traps.
    QuadrupoleIonTrap,
    /// TSQ triple quadrupoles.
    TripleQuadrupole,
    /// SSQ / DSQ / ISQ single quadrupoles.
    SingleQuadrupole,
    /// MAT / DFS magnetic sector instruments.
    MagneticSector,
    /// Tempus time-of-flight.
    TimeOfFlight,
}

static MODEL_PATTERNS: &[(&str, InstrumentFamily, MatchType)] = &[
    ("ASTRAL", InstrumentFamily::AstralOrbitrap, MatchType::Contains),
    ("EXPLORIS", InstrumentFamily::ExactiveOrbitrap, MatchType::Contains),
    ("EXACTIVE", InstrumentFamily::ExactiveOrbitrap, MatchType::Contains),
    ("ECLIPSE", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("ASCEND", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("FUSION", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("LUMOS", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("ID-X", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("ORBITRAP GC", InstrumentFamily::ExactiveOrbitrap, MatchType::Contains),
    ("ORBITRAP", InstrumentFamily::HybridOrbitrap, MatchType::Contains),
    ("LTQ FT", InstrumentFamily::HybridFT, MatchType::StartsWith),
    ("LTQ-FT", InstrumentFamily::HybridFT, MatchType::StartsWith),
    ("LTQ", InstrumentFamily::LinearIonTrap, MatchType::StartsWith),
    ("LXQ", InstrumentFamily::LinearIonTrap, MatchType::Exact),
    ("VELOS", InstrumentFamily::LinearIonTrap, MatchType::Contains),
    ("LCQ", InstrumentFamily::QuadrupoleIonTrap, MatchType::StartsWith),
    ("POLARISQ", InstrumentFamily::QuadrupoleIonTrap, MatchType::Exact),
    ("ITQ", InstrumentFamily::QuadrupoleIonTrap, MatchType::StartsWith),
    ("TSQ", InstrumentFamily::TripleQuadrupole, MatchType::StartsWith),
    ("QUANTIVA", InstrumentFamily::TripleQuadrupole, MatchType::Contains),
    ("ENDURA", InstrumentFamily::TripleQuadrupole, MatchType::Contains),
    ("ALTIS", InstrumentFamily::TripleQuadrupole, MatchType::Contains),
    ("QUANTIS", InstrumentFamily::TripleQuadrupole, MatchType::Contains),
    ("GC QUANTUM", InstrumentFamily::TripleQuadrupole, MatchType::Exact),
    ("SSQ", InstrumentFamily::SingleQuadrupole, MatchType::StartsWith),
    ("DSQ", InstrumentFamily::SingleQuadrupole, MatchType::StartsWith),
    ("ISQ", InstrumentFamily::SingleQuadrupole, MatchType::StartsWith),
    ("SURVEYOR MSQ", InstrumentFamily::SingleQuadrupole, MatchType::Exact),
    ("GC ISOLINK", InstrumentFamily::SingleQuadrupole, MatchType::EndsWith),
    ("MAT", InstrumentFamily::MagneticSector, MatchType::StartsWith),
    ("DFS", InstrumentFamily::MagneticSector, MatchType::Exact),
    ("TEMPUS", InstrumentFamily::TimeOfFlight, MatchType::StartsWith),
];

/// Infer the instrument family from the header's model name string.
pub fn parse_instrument_family(model_name: &str) -> InstrumentFamily {
    let name = model_name.trim().to_uppercase();
    for (pattern, family, match_type) in MODEL_PATTERNS {
        let hit = match match_type {
            MatchType::Exact => name == *pattern,
            MatchType::Contains => name.contains(pattern),
            MatchType::StartsWith => name.starts_with(pattern),
            MatchType::EndsWith => name.ends_with(pattern),
        };
        if hit {
            log::debug!("instrument model {model_name:?} matched {pattern:?} as {family:?}");
            return *family;
        }
    }
    log::warn!("could not infer an instrument family from model name {model_name:?}");
    InstrumentFamily::Unknown
}

/// The mass analyzers a family is known to carry, primary analyzer first.
pub fn family_mass_analyzers(family: InstrumentFamily) -> Vec<MassAnalyzer> {
    match family {
        InstrumentFamily::ExactiveOrbitrap => vec![MassAnalyzer::FTMS],
        InstrumentFamily::HybridOrbitrap | InstrumentFamily::HybridFT => {
            vec![MassAnalyzer::FTMS, MassAnalyzer::ITMS]
        }
        InstrumentFamily::AstralOrbitrap => vec![MassAnalyzer::FTMS, MassAnalyzer::ASTMS],
        InstrumentFamily::LinearIonTrap | InstrumentFamily::QuadrupoleIonTrap => {
            vec![MassAnalyzer::ITMS]
        }
        InstrumentFamily::TripleQuadrupole => vec![MassAnalyzer::TQMS],
        InstrumentFamily::SingleQuadrupole => vec![MassAnalyzer::SQMS],
        InstrumentFamily::MagneticSector => vec![MassAnalyzer::Sector],
        InstrumentFamily::TimeOfFlight => vec![MassAnalyzer::TOFMS],
        InstrumentFamily::Unknown => Vec::new(),
    }
}

/// The ion sources a family ships with.
pub fn family_ion_sources(family: InstrumentFamily) -> Vec<IonizationMode> {
    match family {
        InstrumentFamily::SingleQuadrupole
        | InstrumentFamily::MagneticSector
        | InstrumentFamily::TimeOfFlight => vec![IonizationMode::ElectronImpact],
        InstrumentFamily::Unknown => Vec::new(),
        _ => vec![IonizationMode::ElectroSpray],
    }
}

/// Fallback configuration pairs for a model name, primary analyzer first,
/// used when the file exposes no scan-event definitions.
pub fn fallback_configurations(model_name: &str) -> Vec<(MassAnalyzer, IonizationMode)> {
    let family = parse_instrument_family(model_name);
    let analyzers = family_mass_analyzers(family);
    let sources = family_ion_sources(family);
    let mut pairs = Vec::with_capacity(analyzers.len() * sources.len().max(1));
    for analyzer in &analyzers {
        if sources.is_empty() {
            pairs.push((*analyzer, IonizationMode::Any));
        } else {
            for source in &sources {
                pairs.push((*analyzer, *source));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_family() {
        assert_eq!(
            parse_instrument_family("Orbitrap Exploris 480"),
            InstrumentFamily::ExactiveOrbitrap
        );
        assert_eq!(
            parse_instrument_family("Q Exactive HF-X"),
            InstrumentFamily::ExactiveOrbitrap
        );
        assert_eq!(
            parse_instrument_family("Orbitrap Fusion Lumos"),
            InstrumentFamily::HybridOrbitrap
        );
        assert_eq!(
            parse_instrument_family("LTQ Orbitrap Velos"),
            InstrumentFamily::HybridOrbitrap
        );
        assert_eq!(parse_instrument_family("LTQ XL"), InstrumentFamily::LinearIonTrap);
        assert_eq!(parse_instrument_family("TSQ Altis"), InstrumentFamily::TripleQuadrupole);
        assert_eq!(
            parse_instrument_family("Orbitrap Astral"),
            InstrumentFamily::AstralOrbitrap
        );
        assert_eq!(parse_instrument_family("mystery box"), InstrumentFamily::Unknown);
    }

    #[test]
    fn test_fallback_configurations() {
        let pairs = fallback_configurations("Orbitrap Fusion");
        assert_eq!(
            pairs,
            vec![
                (MassAnalyzer::FTMS, IonizationMode::ElectroSpray),
                (MassAnalyzer::ITMS, IonizationMode::ElectroSpray),
            ]
        );
        assert!(fallback_configurations("nothing recognizable").is_empty());
    }
}

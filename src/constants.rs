//! Universal enums shared between the accessor surface and the binary record
//! schema. Discriminant values are part of the cross-language contract and
//! must not be renumbered.

/// The fragmentation depth code an instrument filter reports for one scan.
///
/// Negative variants describe survey-style experiments that are still
/// fragmentation products, and collapse to MS level 2 during classification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum MSOrder {
    NeutralGain = -3,
    NeutralLoss = -2,
    ParentScan = -1,
    Any = 0,
    #[default]
    MS = 1,
    MS2 = 2,
    MS3 = 3,
    MS4 = 4,
    MS5 = 5,
    MS6 = 6,
    MS7 = 7,
    MS8 = 8,
    MS9 = 9,
    MS10 = 10,
    Unknown = 999,
}

impl From<i16> for MSOrder {
    fn from(value: i16) -> Self {
        match value {
            -3 => Self::NeutralGain,
            -2 => Self::NeutralLoss,
            -1 => Self::ParentScan,
            0 => Self::Any,
            1 => Self::MS,
            2 => Self::MS2,
            3 => Self::MS3,
            4 => Self::MS4,
            5 => Self::MS5,
            6 => Self::MS6,
            7 => Self::MS7,
            8 => Self::MS8,
            9 => Self::MS9,
            10 => Self::MS10,
            _ => Self::Unknown,
        }
    }
}

impl MSOrder {
    /// The MS level this order code corresponds to, always in `[1, 10]`.
    ///
    /// The parent-scan, neutral-loss and neutral-gain experiment variants are
    /// all products of a single fragmentation and report level 2. Orders with
    /// no recognizable depth report level 1.
    pub fn ms_level(&self) -> u8 {
        match self {
            Self::NeutralGain | Self::NeutralLoss | Self::ParentScan => 2,
            Self::MS => 1,
            Self::MS2 => 2,
            Self::MS3 => 3,
            Self::MS4 => 4,
            Self::MS5 => 5,
            Self::MS6 => 6,
            Self::MS7 => 7,
            Self::MS8 => 8,
            Self::MS9 => 9,
            Self::MS10 => 10,
            Self::Any | Self::Unknown => 1,
        }
    }
}

/// The kind of mass analyzer a scan event was acquired with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MassAnalyzer {
    #[default]
    Unknown = 0,
    ITMS = 1,
    TQMS = 2,
    SQMS = 3,
    TOFMS = 4,
    FTMS = 5,
    Sector = 6,
    ASTMS = 7,
}

impl From<u8> for MassAnalyzer {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ITMS,
            2 => Self::TQMS,
            3 => Self::SQMS,
            4 => Self::TOFMS,
            5 => Self::FTMS,
            6 => Self::Sector,
            7 => Self::ASTMS,
            _ => Self::Unknown,
        }
    }
}

/// The ion source used for a scan event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IonizationMode {
    ElectronImpact = 0,
    ChemicalIonization = 1,
    FastAtomBombardment = 2,
    #[default]
    ElectroSpray = 3,
    AtmosphericPressureChemicalIonization = 4,
    NanoSpray = 5,
    ThermoSpray = 6,
    FieldDesorption = 7,
    MatrixAssistedLaserDesorptionIonization = 8,
    GlowDischarge = 9,
    Any = 10,
    PaperSprayIonization = 11,
    CardNanoSprayIonization = 12,
    BeyondKnown = 22,
}

impl From<u8> for IonizationMode {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::ElectronImpact,
            1 => Self::ChemicalIonization,
            2 => Self::FastAtomBombardment,
            3 => Self::ElectroSpray,
            4 => Self::AtmosphericPressureChemicalIonization,
            5 => Self::NanoSpray,
            6 => Self::ThermoSpray,
            7 => Self::FieldDesorption,
            8 => Self::MatrixAssistedLaserDesorptionIonization,
            9 => Self::GlowDischarge,
            10 => Self::Any,
            11 => Self::PaperSprayIonization,
            12 => Self::CardNanoSprayIonization,
            _ => Self::BeyondKnown,
        }
    }
}

/// The native activation code attached to a fragmentation stage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ActivationType {
    #[default]
    CollisionInducedDissociation = 0,
    MultiPhotonDissociation = 1,
    ElectronCaptureDissociation = 2,
    PQD = 3,
    ElectronTransferDissociation = 4,
    HigherEnergyCollisionalDissociation = 5,
    Any = 6,
    SupplementalActivation = 7,
    ProtonTransferReaction = 8,
    NegativeElectronTransferDissociation = 9,
    NegativeProtonTransferReaction = 10,
}

impl From<u8> for ActivationType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::CollisionInducedDissociation,
            1 => Self::MultiPhotonDissociation,
            2 => Self::ElectronCaptureDissociation,
            3 => Self::PQD,
            4 => Self::ElectronTransferDissociation,
            5 => Self::HigherEnergyCollisionalDissociation,
            7 => Self::SupplementalActivation,
            8 => Self::ProtonTransferReaction,
            9 => Self::NegativeElectronTransferDissociation,
            10 => Self::NegativeProtonTransferReaction,
            _ => Self::Any,
        }
    }
}

/// The normalized dissociation chemistry stored in the precursor record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DissociationMethod {
    #[default]
    Unknown = 0,
    CID = 1,
    ECD = 2,
    ETD = 3,
    HCD = 4,
    NETD = 5,
    MPD = 6,
    PTD = 7,
}

impl From<ActivationType> for DissociationMethod {
    fn from(value: ActivationType) -> Self {
        match value {
            ActivationType::CollisionInducedDissociation => Self::CID,
            ActivationType::ElectronCaptureDissociation => Self::ECD,
            ActivationType::ElectronTransferDissociation => Self::ETD,
            ActivationType::HigherEnergyCollisionalDissociation => Self::HCD,
            ActivationType::NegativeElectronTransferDissociation => Self::NETD,
            ActivationType::MultiPhotonDissociation => Self::MPD,
            ActivationType::ProtonTransferReaction
            | ActivationType::NegativeProtonTransferReaction => Self::PTD,
            _ => Self::Unknown,
        }
    }
}

impl From<u8> for DissociationMethod {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::CID,
            2 => Self::ECD,
            3 => Self::ETD,
            4 => Self::HCD,
            5 => Self::NETD,
            6 => Self::MPD,
            7 => Self::PTD,
            _ => Self::Unknown,
        }
    }
}

/// The electrical polarity a scan was acquired under.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Polarity {
    Negative = -1,
    #[default]
    Unknown = 0,
    Positive = 1,
}

impl From<i8> for Polarity {
    fn from(value: i8) -> Self {
        match value {
            -1 => Self::Negative,
            1 => Self::Positive,
            _ => Self::Unknown,
        }
    }
}

/// Whether the stored signal is a continuous trace or peak-picked centroids.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SpectrumMode {
    #[default]
    Unknown = 0,
    Centroid = 1,
    Profile = 2,
}

impl From<u8> for SpectrumMode {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Centroid,
            2 => Self::Profile,
            _ => Self::Unknown,
        }
    }
}

/// The kind of summary chromatogram trace a whole-run query asks for.
///
/// Only the MS trace family is produced by this library; the remaining codes
/// of the vendor numbering are folded into [`TraceType::Other`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum TraceType {
    MassRange = 0,
    #[default]
    TIC = 1,
    BasePeak = 2,
    Fragment = 3,
    Custom = 4,
    PrecursorMass = 5,
    Other = 50,
}

impl From<i16> for TraceType {
    fn from(value: i16) -> Self {
        match value {
            0 => Self::MassRange,
            1 => Self::TIC,
            2 => Self::BasePeak,
            3 => Self::Fragment,
            4 => Self::Custom,
            5 => Self::PrecursorMass,
            _ => Self::Other,
        }
    }
}

//! Named paper sizes
//!
//! The table covers the ISO 216 A and B series, the ISO 269 C envelope
//! series, the RA/SRA untrimmed raw formats and the common North American
//! formats. Dimensions are in points, portrait order (width <= height).
//! Names are matched case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Paper Sizes
// =============================================================================

/// Standard paper sizes that a page can name in its `size` prop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PaperSize {
    /// 4A0 (1682mm x 2378mm)
    FourA0,
    /// 2A0 (1189mm x 1682mm)
    TwoA0,
    /// A0 (841mm x 1189mm)
    A0,
    /// A1 (594mm x 841mm)
    A1,
    /// A2 (420mm x 594mm)
    A2,
    /// A3 (297mm x 420mm)
    A3,
    /// A4 (210mm x 297mm)
    #[default]
    A4,
    /// A5 (148mm x 210mm)
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    /// B0 (1000mm x 1414mm)
    B0,
    B1,
    B2,
    B3,
    B4,
    /// B5 (176mm x 250mm)
    B5,
    B6,
    B7,
    B8,
    B9,
    B10,
    /// C0 envelope (917mm x 1297mm)
    C0,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
    /// RA0 untrimmed (860mm x 1220mm)
    Ra0,
    Ra1,
    Ra2,
    Ra3,
    Ra4,
    /// SRA0 untrimmed (900mm x 1280mm)
    Sra0,
    Sra1,
    Sra2,
    Sra3,
    Sra4,
    /// Executive (7.25" x 10.5")
    Executive,
    /// Folio (8.5" x 13")
    Folio,
    /// US Legal (8.5" x 14")
    Legal,
    /// US Letter (8.5" x 11")
    Letter,
    /// Tabloid (11" x 17")
    Tabloid,
    /// ID-1 card (53.98mm x 85.6mm)
    Id1,
}

impl PaperSize {
    /// Every named size, in table order
    pub const ALL: [PaperSize; 51] = [
        PaperSize::FourA0,
        PaperSize::TwoA0,
        PaperSize::A0,
        PaperSize::A1,
        PaperSize::A2,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::A7,
        PaperSize::A8,
        PaperSize::A9,
        PaperSize::A10,
        PaperSize::B0,
        PaperSize::B1,
        PaperSize::B2,
        PaperSize::B3,
        PaperSize::B4,
        PaperSize::B5,
        PaperSize::B6,
        PaperSize::B7,
        PaperSize::B8,
        PaperSize::B9,
        PaperSize::B10,
        PaperSize::C0,
        PaperSize::C1,
        PaperSize::C2,
        PaperSize::C3,
        PaperSize::C4,
        PaperSize::C5,
        PaperSize::C6,
        PaperSize::C7,
        PaperSize::C8,
        PaperSize::C9,
        PaperSize::C10,
        PaperSize::Ra0,
        PaperSize::Ra1,
        PaperSize::Ra2,
        PaperSize::Ra3,
        PaperSize::Ra4,
        PaperSize::Sra0,
        PaperSize::Sra1,
        PaperSize::Sra2,
        PaperSize::Sra3,
        PaperSize::Sra4,
        PaperSize::Executive,
        PaperSize::Folio,
        PaperSize::Legal,
        PaperSize::Letter,
        PaperSize::Tabloid,
        PaperSize::Id1,
    ];

    /// Dimensions in points (width, height), portrait order
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::FourA0 => (4767.87, 6740.79),
            PaperSize::TwoA0 => (3370.39, 4767.87),
            PaperSize::A0 => (2383.94, 3370.39),
            PaperSize::A1 => (1683.78, 2383.94),
            PaperSize::A2 => (1190.55, 1683.78),
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
            PaperSize::A6 => (297.64, 419.53),
            PaperSize::A7 => (209.76, 297.64),
            PaperSize::A8 => (147.4, 209.76),
            PaperSize::A9 => (104.88, 147.4),
            PaperSize::A10 => (73.7, 104.88),
            PaperSize::B0 => (2834.65, 4008.19),
            PaperSize::B1 => (2004.09, 2834.65),
            PaperSize::B2 => (1417.32, 2004.09),
            PaperSize::B3 => (1000.63, 1417.32),
            PaperSize::B4 => (708.66, 1000.63),
            PaperSize::B5 => (498.9, 708.66),
            PaperSize::B6 => (354.33, 498.9),
            PaperSize::B7 => (249.45, 354.33),
            PaperSize::B8 => (175.75, 249.45),
            PaperSize::B9 => (124.72, 175.75),
            PaperSize::B10 => (87.87, 124.72),
            PaperSize::C0 => (2599.37, 3676.54),
            PaperSize::C1 => (1836.85, 2599.37),
            PaperSize::C2 => (1298.27, 1836.85),
            PaperSize::C3 => (918.43, 1298.27),
            PaperSize::C4 => (649.13, 918.43),
            PaperSize::C5 => (459.21, 649.13),
            PaperSize::C6 => (323.15, 459.21),
            PaperSize::C7 => (229.61, 323.15),
            PaperSize::C8 => (161.57, 229.61),
            PaperSize::C9 => (113.39, 161.57),
            PaperSize::C10 => (79.37, 113.39),
            PaperSize::Ra0 => (2437.8, 3458.27),
            PaperSize::Ra1 => (1729.13, 2437.8),
            PaperSize::Ra2 => (1218.9, 1729.13),
            PaperSize::Ra3 => (864.57, 1218.9),
            PaperSize::Ra4 => (609.45, 864.57),
            PaperSize::Sra0 => (2551.18, 3628.35),
            PaperSize::Sra1 => (1814.17, 2551.18),
            PaperSize::Sra2 => (1275.59, 1814.17),
            PaperSize::Sra3 => (907.09, 1275.59),
            PaperSize::Sra4 => (637.8, 907.09),
            PaperSize::Executive => (521.86, 756.0),
            PaperSize::Folio => (612.0, 936.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Id1 => (153.0, 243.0),
        }
    }

    /// The name a page uses to select this size
    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::FourA0 => "4A0",
            PaperSize::TwoA0 => "2A0",
            PaperSize::A0 => "A0",
            PaperSize::A1 => "A1",
            PaperSize::A2 => "A2",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::A6 => "A6",
            PaperSize::A7 => "A7",
            PaperSize::A8 => "A8",
            PaperSize::A9 => "A9",
            PaperSize::A10 => "A10",
            PaperSize::B0 => "B0",
            PaperSize::B1 => "B1",
            PaperSize::B2 => "B2",
            PaperSize::B3 => "B3",
            PaperSize::B4 => "B4",
            PaperSize::B5 => "B5",
            PaperSize::B6 => "B6",
            PaperSize::B7 => "B7",
            PaperSize::B8 => "B8",
            PaperSize::B9 => "B9",
            PaperSize::B10 => "B10",
            PaperSize::C0 => "C0",
            PaperSize::C1 => "C1",
            PaperSize::C2 => "C2",
            PaperSize::C3 => "C3",
            PaperSize::C4 => "C4",
            PaperSize::C5 => "C5",
            PaperSize::C6 => "C6",
            PaperSize::C7 => "C7",
            PaperSize::C8 => "C8",
            PaperSize::C9 => "C9",
            PaperSize::C10 => "C10",
            PaperSize::Ra0 => "RA0",
            PaperSize::Ra1 => "RA1",
            PaperSize::Ra2 => "RA2",
            PaperSize::Ra3 => "RA3",
            PaperSize::Ra4 => "RA4",
            PaperSize::Sra0 => "SRA0",
            PaperSize::Sra1 => "SRA1",
            PaperSize::Sra2 => "SRA2",
            PaperSize::Sra3 => "SRA3",
            PaperSize::Sra4 => "SRA4",
            PaperSize::Executive => "EXECUTIVE",
            PaperSize::Folio => "FOLIO",
            PaperSize::Legal => "LEGAL",
            PaperSize::Letter => "LETTER",
            PaperSize::Tabloid => "TABLOID",
            PaperSize::Id1 => "ID1",
        }
    }

    /// Look up a size by its exact name
    pub fn from_name(name: &str) -> Option<PaperSize> {
        match name {
            "4A0" => Some(PaperSize::FourA0),
            "2A0" => Some(PaperSize::TwoA0),
            "A0" => Some(PaperSize::A0),
            "A1" => Some(PaperSize::A1),
            "A2" => Some(PaperSize::A2),
            "A3" => Some(PaperSize::A3),
            "A4" => Some(PaperSize::A4),
            "A5" => Some(PaperSize::A5),
            "A6" => Some(PaperSize::A6),
            "A7" => Some(PaperSize::A7),
            "A8" => Some(PaperSize::A8),
            "A9" => Some(PaperSize::A9),
            "A10" => Some(PaperSize::A10),
            "B0" => Some(PaperSize::B0),
            "B1" => Some(PaperSize::B1),
            "B2" => Some(PaperSize::B2),
            "B3" => Some(PaperSize::B3),
            "B4" => Some(PaperSize::B4),
            "B5" => Some(PaperSize::B5),
            "B6" => Some(PaperSize::B6),
            "B7" => Some(PaperSize::B7),
            "B8" => Some(PaperSize::B8),
            "B9" => Some(PaperSize::B9),
            "B10" => Some(PaperSize::B10),
            "C0" => Some(PaperSize::C0),
            "C1" => Some(PaperSize::C1),
            "C2" => Some(PaperSize::C2),
            "C3" => Some(PaperSize::C3),
            "C4" => Some(PaperSize::C4),
            "C5" => Some(PaperSize::C5),
            "C6" => Some(PaperSize::C6),
            "C7" => Some(PaperSize::C7),
            "C8" => Some(PaperSize::C8),
            "C9" => Some(PaperSize::C9),
            "C10" => Some(PaperSize::C10),
            "RA0" => Some(PaperSize::Ra0),
            "RA1" => Some(PaperSize::Ra1),
            "RA2" => Some(PaperSize::Ra2),
            "RA3" => Some(PaperSize::Ra3),
            "RA4" => Some(PaperSize::Ra4),
            "SRA0" => Some(PaperSize::Sra0),
            "SRA1" => Some(PaperSize::Sra1),
            "SRA2" => Some(PaperSize::Sra2),
            "SRA3" => Some(PaperSize::Sra3),
            "SRA4" => Some(PaperSize::Sra4),
            "EXECUTIVE" => Some(PaperSize::Executive),
            "FOLIO" => Some(PaperSize::Folio),
            "LEGAL" => Some(PaperSize::Legal),
            "LETTER" => Some(PaperSize::Letter),
            "TABLOID" => Some(PaperSize::Tabloid),
            "ID1" => Some(PaperSize::Id1),
            _ => None,
        }
    }

    pub fn width(&self) -> f64 {
        self.dimensions().0
    }

    pub fn height(&self) -> f64 {
        self.dimensions().1
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PaperSize> for String {
    fn from(size: PaperSize) -> Self {
        size.name().to_string()
    }
}

impl TryFrom<String> for PaperSize {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        PaperSize::from_name(&name).ok_or_else(|| format!("unknown paper size {:?}", name))
    }
}

/// Dimensions for a size name, if the table knows it
pub fn lookup_size(name: &str) -> Option<(f64, f64)> {
    PaperSize::from_name(name).map(|size| size.dimensions())
}

// =============================================================================
// Tests
// =============================================================================

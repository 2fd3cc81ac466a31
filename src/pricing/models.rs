use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface category being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum AreaType {
    Bathroom,
    Backsplash,
    Floor,
}

/// Material determining the base rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MaterialType {
    Tile,
    Porcelain,
}

/// Layout difficulty multiplier category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Complexity {
    Normal,
    Diagonal,
    LargeFormat,
    Mosaic,
}

/// The full configurable rate sheet.
///
/// Wire format is the camelCase JSON document the admin edits
/// (`extras.demolitionPerM2`, `coefficients.largeFormat`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    pub base: BaseRates,
    pub extras: ExtraRates,
    pub coefficients: Coefficients,
}

/// Per-area-type base rates (₽/m²), one entry per material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRates {
    pub bathroom: MaterialRates,
    pub backsplash: MaterialRates,
    pub floor: MaterialRates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRates {
    pub tile: f64,
    pub porcelain: f64,
}

impl BaseRates {
    /// Exhaustive lookup; a missing rate is a compile-time impossibility.
    pub fn rate(&self, area_type: AreaType, material: MaterialType) -> f64 {
        let rates = match area_type {
            AreaType::Bathroom => &self.bathroom,
            AreaType::Backsplash => &self.backsplash,
            AreaType::Floor => &self.floor,
        };
        match material {
            MaterialType::Tile => rates.tile,
            MaterialType::Porcelain => rates.porcelain,
        }
    }
}

/// Per-unit rates for optional services and the turnkey discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraRates {
    pub demolition_per_m2: f64,
    pub waterproofing_per_m2: f64,
    pub prep_per_m2: f64,
    pub adhesive_per_m2: f64,
    pub grout_per_m2: f64,
    pub miter_per_lm: f64,
    pub silicone_per_lm: f64,
    /// Package discount, percent of the subtotal (0-100)
    pub package_discount_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coefficients {
    pub normal: f64,
    pub diagonal: f64,
    pub large_format: f64,
    pub mosaic: f64,
}

impl Coefficients {
    pub fn factor(&self, complexity: Complexity) -> f64 {
        match complexity {
            Complexity::Normal => self.normal,
            Complexity::Diagonal => self.diagonal,
            Complexity::LargeFormat => self.large_format,
            Complexity::Mosaic => self.mosaic,
        }
    }
}

impl Default for PriceTable {
    /// The built-in rate sheet, also served when the store has no document.
    fn default() -> Self {
        let flat = MaterialRates {
            tile: 1800.0,
            porcelain: 1800.0,
        };
        Self {
            base: BaseRates {
                bathroom: flat.clone(),
                backsplash: flat.clone(),
                floor: flat,
            },
            extras: ExtraRates {
                demolition_per_m2: 200.0,
                waterproofing_per_m2: 250.0,
                prep_per_m2: 140.0,
                adhesive_per_m2: 220.0,
                grout_per_m2: 130.0,
                miter_per_lm: 250.0,
                silicone_per_lm: 90.0,
                package_discount_pct: 5.0,
            },
            coefficients: Coefficients {
                normal: 1.0,
                diagonal: 1.1,
                large_format: 1.15,
                mosaic: 1.2,
            },
        }
    }
}

/// One job description, constructed and discarded per calculation
#[derive(Debug, Clone)]
pub struct JobSpec {
    pub area_type: AreaType,
    pub material: MaterialType,
    /// Tiled area, m²
    pub area: f64,
    pub complexity: Complexity,
    pub demolition: bool,
    pub prep: bool,
    pub adhesive: bool,
    pub grout: bool,
    pub waterproofing: bool,
    /// Waterproofed area, m²; `None` follows `area`
    pub waterproofing_area: Option<f64>,
    /// 45° miter cuts, linear meters
    pub miter_lm: f64,
    /// Silicone sealant joints, linear meters
    pub silicone_lm: f64,
    pub turnkey: bool,
}

impl Default for JobSpec {
    fn default() -> Self {
        Self {
            area_type: AreaType::Bathroom,
            material: MaterialType::Tile,
            area: 0.0,
            complexity: Complexity::Normal,
            demolition: false,
            prep: false,
            adhesive: false,
            grout: false,
            waterproofing: false,
            waterproofing_area: None,
            miter_lm: 0.0,
            silicone_lm: 0.0,
            turnkey: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineItemKind {
    Base,
    Demolition,
    Prep,
    Adhesive,
    Grout,
    Waterproofing,
    Miter,
    Silicone,
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Base => "base",
            Self::Demolition => "demolition",
            Self::Prep => "prep",
            Self::Adhesive => "adhesive",
            Self::Grout => "grout",
            Self::Waterproofing => "waterproofing",
            Self::Miter => "miter 45°",
            Self::Silicone => "silicone",
        };
        f.write_str(label)
    }
}

/// One displayed cost line, amount in whole rubles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub kind: LineItemKind,
    pub amount: i64,
}

/// Result of one estimate. Disabled line items are omitted, not zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub items: Vec<LineItem>,
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
}

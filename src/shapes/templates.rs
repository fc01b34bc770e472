//! Unit templates stamped by the module grid pass
//!
//! Every template lives in the same 10x10 local box so one
//! scale-then-translate transform places any of them on any cell.

use std::sync::OnceLock;

use kurbo::{BezPath, Rect};

use super::rounded::{CornerRadii, rounded_rect_path};

/// Side length of the template box in local units.
pub const TEMPLATE_SIZE: f64 = 10.0;

/// Corner radius used by every rounded grid template.
pub const TEMPLATE_RADIUS: f64 = 3.0;

/// Identity of a grid rounding template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// No rounding
    Square,
    /// All four corners rounded (isolated module)
    FullRound,
    /// Top-left and bottom-left rounded
    RoundLeft,
    /// Top-right and bottom-right rounded
    RoundRight,
    /// Top-left and top-right rounded
    RoundTop,
    /// Bottom-left and bottom-right rounded
    RoundBottom,
    /// Top-left corner rounded
    TopLeft,
    /// Top-right corner rounded
    TopRight,
    /// Bottom-left corner rounded
    BottomLeft,
    /// Bottom-right corner rounded
    BottomRight,
}

impl TemplateId {
    /// Every template, in library order
    pub const ALL: [TemplateId; 10] = [
        TemplateId::Square,
        TemplateId::FullRound,
        TemplateId::RoundLeft,
        TemplateId::RoundRight,
        TemplateId::RoundTop,
        TemplateId::RoundBottom,
        TemplateId::TopLeft,
        TemplateId::TopRight,
        TemplateId::BottomLeft,
        TemplateId::BottomRight,
    ];

    /// Position in [`TemplateId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Which corners this template rounds, with the given radius
    pub fn radii(self, radius: f64) -> CornerRadii {
        let tl = CornerRadii::top_left(radius);
        let tr = CornerRadii::top_right(radius);
        let br = CornerRadii::bottom_right(radius);
        let bl = CornerRadii::bottom_left(radius);
        match self {
            TemplateId::Square => CornerRadii::SQUARE,
            TemplateId::FullRound => CornerRadii::uniform(radius),
            TemplateId::RoundLeft => tl.or(bl),
            TemplateId::RoundRight => tr.or(br),
            TemplateId::RoundTop => tl.or(tr),
            TemplateId::RoundBottom => bl.or(br),
            TemplateId::TopLeft => tl,
            TemplateId::TopRight => tr,
            TemplateId::BottomLeft => bl,
            TemplateId::BottomRight => br,
        }
    }

    /// The template whose rounded corners are these corners turned a
    /// quarter turn clockwise on screen
    pub fn rotate_cw(self) -> Self {
        match self {
            TemplateId::Square => TemplateId::Square,
            TemplateId::FullRound => TemplateId::FullRound,
            TemplateId::RoundLeft => TemplateId::RoundTop,
            TemplateId::RoundTop => TemplateId::RoundRight,
            TemplateId::RoundRight => TemplateId::RoundBottom,
            TemplateId::RoundBottom => TemplateId::RoundLeft,
            TemplateId::TopLeft => TemplateId::TopRight,
            TemplateId::TopRight => TemplateId::BottomRight,
            TemplateId::BottomRight => TemplateId::BottomLeft,
            TemplateId::BottomLeft => TemplateId::TopLeft,
        }
    }
}

/// Read-only set of prebuilt template paths.
#[derive(Debug)]
pub struct TemplateLibrary {
    paths: Vec<BezPath>,
}

impl TemplateLibrary {
    fn build() -> Self {
        let rect = Rect::new(0.0, 0.0, TEMPLATE_SIZE, TEMPLATE_SIZE);
        let paths = TemplateId::ALL
            .iter()
            .map(|id| rounded_rect_path(rect, id.radii(TEMPLATE_RADIUS)))
            .collect();
        Self { paths }
    }

    /// Geometry for a template in local units
    pub fn get(&self, id: TemplateId) -> &BezPath {
        &self.paths[id.index()]
    }
}

static TEMPLATES: OnceLock<TemplateLibrary> = OnceLock::new();

/// Process-wide template library, built on first use.
pub fn templates() -> &'static TemplateLibrary {
    TEMPLATES.get_or_init(TemplateLibrary::build)
}

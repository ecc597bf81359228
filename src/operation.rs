use crate::{
    add_dead_voxels, adjust_colors, adjust_contrast, check_contrast_factor, fill_z, lighten,
    remove_color, remove_dead_voxels, saturate, ColorAdjustment, Error, Extent, IsEmpty, Point,
    Region, Result, Rgba, Volume, MAX_COORD,
};

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A volume transform described as data, so it can be registered under a name or read from a
/// recipe file.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Brightness offset on r, g and b. Negative darkens.
    Lighten { amount: i32 },
    /// Contrast scaling around 128.
    Contrast { factor: f32 },
    /// HSV saturation offset, in 1/255ths. Negative desaturates.
    Saturate { amount: i32 },
    AdjustColors(ColorAdjustment),
    AddDeadVoxels,
    RemoveDeadVoxels,
    RemoveColor { color: Rgba },
    FillZ {
        color: Rgba,
        #[serde(default)]
        region: Option<Region>,
    },
}

/// What an operation did to a volume.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ApplyReport {
    /// Voxels in the volume when the operation started.
    pub visited: usize,
    /// Voxels recolored, added or removed.
    pub changed: usize,
}

impl Operation {
    pub fn validate(&self) -> Result<()> {
        match self {
            Operation::Contrast { factor } => check_contrast_factor(*factor),
            Operation::AdjustColors(adjustment) => adjustment.validate(),
            Operation::RemoveColor { color } | Operation::FillZ { color, .. }
                if color.is_empty() =>
            {
                Err(Error::InvalidParameter {
                    name: "color",
                    reason: format!("{} is fully transparent", color),
                })
            }
            Operation::FillZ {
                region: Some(region),
                ..
            } => {
                let corners_in_bounds = Point::from(region.min).in_bounds()
                    && Point::from(region.max).in_bounds();
                if !corners_in_bounds {
                    Err(Error::InvalidParameter {
                        name: "region",
                        reason: format!(
                            "{:?} has a corner outside [-{}, {}]",
                            region, MAX_COORD, MAX_COORD
                        ),
                    })
                } else if Extent::from(*region).is_empty() {
                    Err(Error::InvalidParameter {
                        name: "region",
                        reason: format!("{:?} contains no points", region),
                    })
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    pub fn apply<V: Volume>(&self, volume: &mut V) -> ApplyReport {
        let visited = volume.num_voxels();
        let report = match self {
            Operation::Lighten { amount } => recolor(volume, |c| lighten(c, *amount)),
            Operation::Contrast { factor } => recolor(volume, |c| adjust_contrast(c, *factor)),
            Operation::Saturate { amount } => recolor(volume, |c| saturate(c, *amount)),
            Operation::AdjustColors(adjustment) => {
                if adjustment.is_identity() {
                    ApplyReport {
                        visited,
                        changed: 0,
                    }
                } else {
                    recolor(volume, |c| adjust_colors(c, adjustment))
                }
            }
            Operation::AddDeadVoxels => ApplyReport {
                visited,
                changed: add_dead_voxels(volume),
            },
            Operation::RemoveDeadVoxels => ApplyReport {
                visited,
                changed: remove_dead_voxels(volume),
            },
            Operation::RemoveColor { color } => ApplyReport {
                visited,
                changed: remove_color(volume, *color),
            },
            Operation::FillZ { color, region } => ApplyReport {
                visited,
                changed: fill_z(volume, region.map(Extent::from), *color),
            },
        };
        debug!("{} touched {} of {} voxels", self, report.changed, report.visited);

        report
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Lighten { amount } => write!(f, "lighten({})", amount),
            Operation::Contrast { factor } => write!(f, "contrast({})", factor),
            Operation::Saturate { amount } => write!(f, "saturate({})", amount),
            Operation::AdjustColors(a) => write!(
                f,
                "adjust_colors(hue={}, lightness={}, saturation={}, contrast={})",
                a.hue, a.lightness, a.saturation, a.contrast
            ),
            Operation::AddDeadVoxels => write!(f, "add_dead_voxels"),
            Operation::RemoveDeadVoxels => write!(f, "remove_dead_voxels"),
            Operation::RemoveColor { color } => write!(f, "remove_color({})", color),
            Operation::FillZ { color, .. } => write!(f, "fill_z({})", color),
        }
    }
}

/// Maps every voxel's color through `f`, writing back only the ones that change.
pub fn recolor<V, F>(volume: &mut V, f: F) -> ApplyReport
where
    V: Volume,
    F: Fn(Rgba) -> Rgba,
{
    let voxels = volume.snapshot();
    let mut changed = 0;
    for (p, c) in voxels.iter() {
        let new_color = f(*c);
        if new_color != *c {
            volume.set_at(p, new_color);
            changed += 1;
        }
    }

    ApplyReport {
        visited: voxels.len(),
        changed,
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

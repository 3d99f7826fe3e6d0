//! All-habits intensity grid, ready for a renderer.

use serde::{Deserialize, Serialize};

use super::events::BucketedEvent;
use super::grid::{get_grid, BucketBy, Grid};
use crate::color::{qualitative_palette, ColorValue, LinearColormap, PaletteMapping};
use crate::config::StyleConfig;

/// Count shown inside one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellLabel {
    /// Column index within the row
    pub position: usize,
    pub bucket: u32,
    pub count: u32,
}

/// One habit's strip of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub habit: String,
    pub color: ColorValue,
    /// Counts per bucket with "no data" read as zero
    pub counts: Vec<u32>,
    pub colormap: LinearColormap,
    /// Cells with a positive count
    pub labels: Vec<CellLabel>,
}

impl HeatmapRow {
    /// Fill color of the cell at `position`.
    pub fn cell_color(&self, position: usize) -> Option<&ColorValue> {
        let count = *self.counts.get(position)?;
        Some(self.colormap.color_for(Some(count)))
    }
}

/// Grid plus per-habit colormaps and labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridHeatmap {
    pub by: BucketBy,
    pub buckets: Vec<u32>,
    pub rows: Vec<HeatmapRow>,
}

impl GridHeatmap {
    pub fn row(&self, habit: &str) -> Option<&HeatmapRow> {
        self.rows.iter().find(|row| row.habit == habit)
    }
}

/// Prepare the multi-habit heatmap.
///
/// Colors come from `palette` where it has the habit; otherwise from a Set3
/// palette over the grid's habits. Each row's colormap has one level per
/// possible day in the bucket (7 for weeks, 31 for months by default).
pub fn prepare_grid_heatmap(
    events: &[BucketedEvent],
    by: BucketBy,
    palette: Option<&PaletteMapping>,
    config: &StyleConfig,
) -> GridHeatmap {
    let grid = get_grid(events, by);
    heatmap_from_grid(&grid, palette, config)
}

/// Same as [`prepare_grid_heatmap`] for an already built grid.
pub fn heatmap_from_grid(
    grid: &Grid,
    palette: Option<&PaletteMapping>,
    config: &StyleConfig,
) -> GridHeatmap {
    let levels = config.colormap.levels_for(grid.by());
    let fallback = qualitative_palette(grid.n_habits());

    let rows = grid
        .columns()
        .zip(fallback)
        .map(|((habit, cells), fallback_color)| {
            let color = match palette.and_then(|p| p.get(habit)) {
                Some(color) => color.clone(),
                None => {
                    if palette.is_some() {
                        tracing::debug!(habit, "habit missing from palette, using default color");
                    }
                    fallback_color
                }
            };

            let counts: Vec<u32> = cells.iter().map(|c| c.unwrap_or(0)).collect();
            let labels = counts
                .iter()
                .zip(grid.buckets())
                .enumerate()
                .filter(|(_, (count, _))| **count > 0)
                .map(|(position, (count, bucket))| CellLabel {
                    position,
                    bucket: *bucket,
                    count: *count,
                })
                .collect();

            HeatmapRow {
                habit: habit.to_string(),
                colormap: config.linear_cmap(&color, levels),
                color,
                counts,
                labels,
            }
        })
        .collect();

    GridHeatmap {
        by: grid.by(),
        buckets: grid.buckets().to_vec(),
        rows,
    }
}

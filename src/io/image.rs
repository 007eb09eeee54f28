//! PNG export of the board with one solid square per cell

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::game::{CellView, GameSession};
use crate::io::board::visible;
use crate::io::configuration::{MAX_PNG_SIDE_PIXELS, MIN_PNG_CELL_PIXELS, PNG_CELL_PIXELS};
use crate::io::error::{GameError, Result, file_system_error};

const GRID_LINE: Rgba<u8> = Rgba([40, 40, 40, 255]);

const fn cell_color(view: CellView) -> Rgba<u8> {
    match view {
        CellView::Empty => Rgba([230, 230, 230, 255]),
        CellView::Trap => Rgba([200, 40, 40, 255]),
        CellView::Flag => Rgba([240, 200, 0, 255]),
        CellView::Player => Rgba([40, 90, 220, 255]),
    }
}

/// Cell side in pixels for a board of `grid_size` cells per side
///
/// Cells shrink from `PNG_CELL_PIXELS` so the image side stays within
/// `MAX_PNG_SIDE_PIXELS`, down to `MIN_PNG_CELL_PIXELS`.
pub fn cell_pixels(grid_size: u32) -> u32 {
    (MAX_PNG_SIDE_PIXELS / grid_size.max(1)).clamp(MIN_PNG_CELL_PIXELS, PNG_CELL_PIXELS)
}

/// Export the board as a PNG image, north-up
///
/// # Errors
///
/// Returns an error if:
/// - The board is too large for the image dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_png(session: &GameSession, reveal: bool, output_path: &Path) -> Result<()> {
    let rows = session.view_rows();
    let size = u32::try_from(rows.len()).map_err(|e| GameError::InvalidParameter {
        parameter: "grid_size",
        value: rows.len().to_string(),
        reason: e.to_string(),
    })?;
    let cell = cell_pixels(size);
    let side = size
        .checked_mul(cell)
        .filter(|&side| side <= MAX_PNG_SIDE_PIXELS)
        .ok_or_else(|| GameError::InvalidParameter {
            parameter: "grid_size",
            value: size.to_string(),
            reason: format!("too large to export within {MAX_PNG_SIDE_PIXELS} pixels"),
        })?;

    let mut img = ImageBuffer::from_pixel(side, side, GRID_LINE);

    // Row 0 is the southern edge, so it goes at the bottom of the image
    for (row_index, row) in rows.iter().rev().enumerate() {
        for (col_index, &view) in row.iter().enumerate() {
            let color = cell_color(visible(view, reveal));
            let top = row_index as u32 * cell;
            let left = col_index as u32 * cell;

            // Leave a one-pixel border so cells read as a grid
            for dy in 1..cell {
                for dx in 1..cell {
                    img.put_pixel(left + dx, top + dy, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

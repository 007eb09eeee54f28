//! Tests for PNG board export

#[cfg(test)]
mod tests {
    use crate::{classic_session, unit_config};
    use gridhunt::game::{GameSession, LayoutStrategy};
    use gridhunt::io::configuration::{MAX_GRID_SIZE, MAX_PNG_SIDE_PIXELS, PNG_CELL_PIXELS};
    use gridhunt::io::image::{cell_pixels, export_board_png};
    use image::Rgba;

    // Tests cell colors, north-up placement and trap hiding
    // Verified by placing row 0 at the top of the image
    #[test]
    fn test_export_classic_board() {
        let dir = tempfile::tempdir().unwrap();
        let hidden = dir.path().join("hidden.png");
        let revealed = dir.path().join("revealed.png");
        let session = classic_session();

        export_board_png(&session, false, &hidden).unwrap();
        export_board_png(&session, true, &revealed).unwrap();

        let hidden = image::open(&hidden).unwrap().to_rgba8();
        let revealed = image::open(&revealed).unwrap().to_rgba8();
        assert_eq!(hidden.dimensions(), (160, 160));

        // Player at (2, 2), trap at (3, 2)
        assert_eq!(*hidden.get_pixel(80, 80), Rgba([40, 90, 220, 255]));
        assert_eq!(*hidden.get_pixel(112, 80), Rgba([230, 230, 230, 255]));
        assert_eq!(*revealed.get_pixel(112, 80), Rgba([200, 40, 40, 255]));

        // Flag at (4, 3) sits on the second image row
        assert_eq!(*hidden.get_pixel(144, 48), Rgba([240, 200, 0, 255]));

        // Grid lines
        assert_eq!(*hidden.get_pixel(0, 0), Rgba([40, 40, 40, 255]));
        assert_eq!(*hidden.get_pixel(64, 80), Rgba([40, 40, 40, 255]));
    }

    // Tests missing parent directories are created
    // Verified by saving without creating the parent
    #[test]
    fn test_export_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("deeper").join("board.png");
        let session = GameSession::new(
            unit_config(3),
            LayoutStrategy::Random { traps: 2, seed: 1 },
        )
        .unwrap();

        export_board_png(&session, true, &output).unwrap();

        let img = image::open(&output).unwrap();
        assert_eq!((img.width(), img.height()), (96, 96));
    }

    // Tests the exported image stays bounded for every allowed grid size
    // Verified by shrinking cells once the full-size side would exceed the cap
    #[test]
    fn test_cell_size_caps_image_side() {
        assert_eq!(cell_pixels(5), PNG_CELL_PIXELS);
        assert_eq!(cell_pixels(128), PNG_CELL_PIXELS);
        assert_eq!(cell_pixels(200), 20);
        assert_eq!(cell_pixels(1_000), 4);

        let max_size = u32::try_from(MAX_GRID_SIZE).unwrap();
        for size in 1..=max_size {
            let cell = cell_pixels(size);
            assert!(cell >= 2, "cell for size {size} has no interior");
            assert!(size * cell <= MAX_PNG_SIDE_PIXELS, "size {size} exports too wide");
        }
    }

    // Tests a large board exports at the reduced cell size
    // Verified by the image side matching size times the shrunken cell
    #[test]
    fn test_export_large_board_shrinks_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("large.png");
        let session = GameSession::new(
            unit_config(300),
            LayoutStrategy::Random { traps: 10, seed: 3 },
        )
        .unwrap();

        export_board_png(&session, true, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (300 * 13, 300 * 13));
        assert_eq!(*img.get_pixel(0, 0), Rgba([40, 40, 40, 255]));
    }
}

//! Validates tiling geometry: steps, grid shapes, tile boxes, and recommended crops

use tileprep::geometry::grid::{GridShape, TileBox, TilingParams, compute_step};
use tileprep::geometry::{Compatibility, center_offsets, recommended_crop};

#[test]
fn test_step_is_tile_size_minus_floored_overlap() {
    assert_eq!(compute_step(512, 0.5), Some(256));
    assert_eq!(compute_step(512, 0.0), Some(512));
    // floor(0.9 * 3) = 2, leaving a single-pixel step
    assert_eq!(compute_step(3, 0.9), Some(1));
    assert_eq!(compute_step(0, 0.5), None);
}

#[test]
fn test_parameter_validation_rejects_degenerate_inputs() {
    let valid = TilingParams {
        tile_size: 512,
        overlap_ratio: 0.5,
        padding: 0,
        num_tiles: 0,
    };
    assert_eq!(valid.step().map_err(|e| e.to_string()), Ok(256));

    let zero_tile = TilingParams {
        tile_size: 0,
        ..valid
    };
    assert!(zero_tile.step().is_err());

    let full_overlap = TilingParams {
        overlap_ratio: 1.0,
        ..valid
    };
    assert!(full_overlap.step().is_err());

    let negative_overlap = TilingParams {
        overlap_ratio: -0.1,
        ..valid
    };
    assert!(negative_overlap.step().is_err());

    let nan_overlap = TilingParams {
        overlap_ratio: f64::NAN,
        ..valid
    };
    assert!(nan_overlap.step().is_err());
}

#[test]
fn test_grid_shape_matches_reference_example() {
    // 1000x1000 at tile 512, overlap 0.5: step 256, 3x3 grid
    let grid = GridShape::compute(1000, 1000, 256, 0);
    assert_eq!(grid.horizontal, 3);
    assert_eq!(grid.vertical, 3);
    assert!(!grid.is_empty());
}

#[test]
fn test_grid_degenerates_to_zero_without_a_fallback_tile() {
    // Image smaller than the padding yields no tiles at all
    assert_eq!(GridShape::compute(100, 100, 256, 200), GridShape::EMPTY);
    assert!(GridShape::compute(100, 100, 256, 200).is_empty());

    // Image smaller than the step on one axis only
    let narrow = GridShape::compute(100, 1000, 256, 0);
    assert_eq!(narrow.horizontal, 0);
    assert_eq!(narrow.vertical, 3);
    assert!(narrow.is_empty());

    // A zero step must never divide by zero
    assert_eq!(GridShape::compute(1000, 1000, 0, 0), GridShape::EMPTY);
}

#[test]
fn test_tile_boxes_stay_within_image_bounds() {
    for &(width, height, tile_size, overlap) in &[
        (1000_u32, 1000_u32, 512_u32, 0.5_f64),
        (1000, 600, 512, 0.25),
        (513, 513, 512, 0.0),
        (64, 48, 16, 0.75),
    ] {
        let step = compute_step(tile_size, overlap).unwrap();
        let grid = GridShape::compute(width, height, step, 0);
        for j in 0..grid.vertical {
            for i in 0..grid.horizontal {
                let tile_box = TileBox::at(i, j, step, tile_size, width, height);
                assert!(
                    tile_box.right <= width && tile_box.bottom <= height,
                    "box {tile_box:?} escapes {width}x{height}"
                );
                assert!(tile_box.width() > 0 && tile_box.height() > 0);
            }
        }
    }
}

#[test]
fn test_boundary_tile_of_reference_example_is_undersized() {
    // Tile (2,2) of a 1000x1000 image at tile 512 / step 256
    let tile_box = TileBox::at(2, 2, 256, 512, 1000, 1000);
    assert_eq!(
        tile_box,
        TileBox {
            left: 512,
            top: 512,
            right: 1000,
            bottom: 1000,
        }
    );
    assert_eq!(tile_box.width(), 488);
    assert!(!tile_box.is_full(512));
}

#[test]
fn test_adjusted_box_touches_the_far_boundary_at_full_size() {
    let tile_box = TileBox::at(2, 2, 256, 512, 1000, 1000).adjusted(512, 1000, 1000);
    assert_eq!(tile_box.left, 488);
    assert_eq!(tile_box.right, 1000);
    assert_eq!(tile_box.top, 488);
    assert!(tile_box.is_full(512));
}

#[test]
fn test_adjusted_box_clamps_when_image_is_narrower_than_tile() {
    // A 100-wide image cannot host a full 512 tile; the box stays clamped
    let tile_box = TileBox::at(0, 0, 51, 512, 100, 100).adjusted(512, 100, 100);
    assert_eq!(tile_box.left, 0);
    assert_eq!(tile_box.right, 100);
    assert!(!tile_box.is_full(512));
}

#[test]
fn test_recommended_crop_matches_reference_example() {
    // floor((1000-512)/256) * 256 + 512 = 768
    assert_eq!(recommended_crop(1000, 1000, 512, 256), (768, 768));
}

#[test]
fn test_recommended_crop_is_idempotent() {
    for &(width, height) in &[(1000_u32, 1000_u32), (999, 640), (513, 2000), (768, 768)] {
        let once = recommended_crop(width, height, 512, 256);
        let twice = recommended_crop(once.0, once.1, 512, 256);
        assert_eq!(once, twice, "not idempotent for {width}x{height}");
    }
}

#[test]
fn test_recommended_crop_echoes_undersized_dimensions() {
    assert_eq!(recommended_crop(300, 1000, 512, 256), (300, 1000));
    assert_eq!(recommended_crop(300, 200, 512, 256), (300, 200));
}

#[test]
fn test_grid_aligned_images_classify_compatible() {
    assert!(Compatibility::classify(768, 768, 512, 256).is_compatible());
    assert!(Compatibility::classify(512, 512, 512, 256).is_compatible());
    assert_eq!(Compatibility::classify(768, 768, 512, 256).recommended(), None);
}

#[test]
fn test_misaligned_and_undersized_images_carry_their_recommendation() {
    let misaligned = Compatibility::classify(1000, 1000, 512, 256);
    assert_eq!(
        misaligned,
        Compatibility::Misaligned {
            recommended: (768, 768)
        }
    );

    // Undersized recommendations echo the original size; the variant is the
    // only signal that no crop can repair the image
    let undersized = Compatibility::classify(300, 400, 512, 256);
    assert_eq!(
        undersized,
        Compatibility::Undersized {
            recommended: (300, 400)
        }
    );
}

#[test]
fn test_effective_tile_size_overrides_from_num_tiles() {
    let params = TilingParams {
        tile_size: 512,
        overlap_ratio: 0.5,
        padding: 0,
        num_tiles: 0,
    };
    assert_eq!(params.effective_tile_size(1000, 800), 512);

    let four = TilingParams {
        num_tiles: 4,
        ..params
    };
    assert_eq!(four.effective_tile_size(1000, 800), 400);

    // floor(sqrt(5)) = 2
    let five = TilingParams {
        num_tiles: 5,
        ..params
    };
    assert_eq!(five.effective_tile_size(1000, 800), 400);
}

#[test]
fn test_center_offsets_bias_toward_the_top_left() {
    assert_eq!(center_offsets(1000, 1000, 768, 768), (116, 116));
    // Odd margins floor toward the origin
    assert_eq!(center_offsets(11, 11, 10, 10), (0, 0));
    assert_eq!(center_offsets(13, 13, 10, 10), (1, 1));
}

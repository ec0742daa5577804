#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::VariantArray;

    use crate::builder::BoardBuilder;
    use crate::error::BoardError;
    use crate::facing::{render_rotation, RenderRotation};
    use crate::generator;
    use crate::location::Location;
    use crate::shift::{Direction, Orientation, Shift};
    use crate::tile::{Item, Rotation, Side, Tile, TileKind};
    use crate::Board;

    /// A 3×3 board of straight tiles in their reference orientation (up and
    /// down open) with a junction free tile; the worked example board.
    fn straight_board() -> Board {
        BoardBuilder::with_side_length(3)
            .tiles((0..9).map(|_| Tile::new(TileKind::Straight)))
            .free_tile(Tile::new(TileKind::Junction))
            .build()
            .unwrap()
    }

    /// Check the central invariant the hard way: every adjacent pair carries
    /// an edge exactly when the facing tile sides are mutually open.
    fn assert_graph_invariant(board: &Board) {
        let side_length = board.side_length();
        for (row, column) in (0..side_length).cartesian_product(0..side_length) {
            let location = Location(row, column);
            let vertex = board.vertex(location);
            for &side in Side::VARIANTS {
                let stepped = location.step(side);
                let expected = stepped.0 < side_length
                    && stepped.1 < side_length
                    && vertex.tile.is_connected(&board.vertex(stepped).tile, side);
                assert_eq!(
                    vertex.links.contains(&side),
                    expected,
                    "stale edge state at {location:?} toward {side:?}"
                );
            }
        }
    }

    fn kind_counts(board: &Board) -> HashMap<TileKind, usize> {
        let (tiles, free_tile) = board.tiles();
        tiles.iter().chain([&free_tile]).counts_by(|tile| tile.kind())
    }

    #[test]
    fn rotation_round_trips() {
        for kind in [TileKind::Straight, TileKind::Turn, TileKind::Junction] {
            let reference = Tile::new(kind);

            let mut tile = reference;
            for _ in 0..4 {
                tile.rotate(Rotation::Clockwise);
            }
            assert_eq!(tile, reference);

            tile.rotate(Rotation::Clockwise);
            tile.rotate(Rotation::CounterClockwise);
            assert_eq!(tile, reference);
        }
    }

    #[test]
    fn rotation_preserves_opening_count() {
        for (kind, openings) in [
            (TileKind::Straight, 2),
            (TileKind::Turn, 2),
            (TileKind::Junction, 3),
        ] {
            let mut tile = Tile::new(kind);
            assert_eq!(tile.open_side_count(), openings);

            for turn in 0..7 {
                tile.rotate(if turn % 3 == 0 {
                    Rotation::CounterClockwise
                } else {
                    Rotation::Clockwise
                });
                assert_eq!(tile.open_side_count(), openings);
            }
        }
    }

    #[test]
    fn connectivity_predicate_is_symmetric() {
        // junction opens left, straight rotated once opens left and right
        let junction = Tile::new(TileKind::Junction);
        let mut straight = Tile::new(TileKind::Straight);
        straight.rotate(Rotation::Clockwise);

        assert!(junction.is_connected(&straight, Side::Left));
        assert!(straight.is_connected(&junction, Side::Right));

        // junction's right side is closed, so the other axis fails both ways
        assert!(!junction.is_connected(&straight, Side::Right));
        assert!(!straight.is_connected(&junction, Side::Left));
    }

    #[test]
    fn tile_glyphs() {
        assert_eq!(format!("{}", Tile::new(TileKind::Straight)), "│");
        assert_eq!(format!("{}", Tile::new(TileKind::Turn)), "┐");
        assert_eq!(format!("{}", Tile::new(TileKind::Junction)), "┤");
    }

    #[test]
    fn item_ids_are_nonzero() {
        assert_eq!(Item::new(0), None);
        assert!(Item::new(24).is_some());
    }

    #[test]
    fn build_rejects_even_or_undersized_boards() {
        let mut builder = BoardBuilder::with_side_length(4);
        builder
            .tiles((0..16).map(|_| Tile::new(TileKind::Straight)))
            .free_tile(Tile::new(TileKind::Turn));
        assert_eq!(builder.build().unwrap_err(), BoardError::SideLength(4));

        let mut tiny = BoardBuilder::with_side_length(1);
        tiny.tiles([Tile::new(TileKind::Straight)])
            .free_tile(Tile::new(TileKind::Turn));
        assert_eq!(tiny.build().unwrap_err(), BoardError::SideLength(1));
    }

    #[test]
    fn build_rejects_missing_cells() {
        // eight tiles leave the last cell empty
        let mut builder = BoardBuilder::with_side_length(3);
        builder
            .tiles((0..8).map(|_| Tile::new(TileKind::Straight)))
            .free_tile(Tile::new(TileKind::Turn));
        assert_eq!(builder.build().unwrap_err(), BoardError::MissingTile(Location(2, 2)));
    }

    #[test]
    fn build_rejects_missing_free_tile() {
        let mut builder = BoardBuilder::with_side_length(3);
        builder.tiles((0..9).map(|_| Tile::new(TileKind::Straight)));
        assert_eq!(builder.build().unwrap_err(), BoardError::MissingFreeTile);
    }

    #[test]
    fn build_rejects_out_of_bounds_placement() {
        let mut builder = BoardBuilder::with_side_length(3);
        builder
            .tiles((0..9).map(|_| Tile::new(TileKind::Straight)))
            .tile(Location(3, 0), Tile::new(TileKind::Turn))
            .free_tile(Tile::new(TileKind::Turn));
        assert_eq!(builder.build().unwrap_err(), BoardError::OutOfBounds(Location(3, 0)));
    }

    #[test]
    fn reachability_on_straight_board() {
        let board = straight_board();
        assert_graph_invariant(&board);

        // vertical connections exist, horizontal ones do not
        assert!(board.is_reachable(Location(0, 0), Location(1, 0)).unwrap());
        assert!(board.is_reachable(Location(0, 0), Location(2, 0)).unwrap());
        assert!(!board.is_reachable(Location(0, 0), Location(0, 1)).unwrap());

        // a cell always reaches itself
        assert!(board.is_reachable(Location(1, 1), Location(1, 1)).unwrap());

        assert_eq!(
            board.is_reachable(Location(0, 0), Location(3, 3)).unwrap_err(),
            BoardError::OutOfBounds(Location(3, 3))
        );
    }

    #[test]
    fn board_display_dumps_glyph_grid() {
        let board = straight_board();
        assert_eq!(format!("{board}"), "│││\n│││\n│││\nfree tile: ┤\n");
    }

    #[test]
    fn shift_moves_row_and_exchanges_free_tile() {
        let mut board = straight_board();
        assert_eq!(board.free_tile().kind(), TileKind::Junction);

        board
            .shift_tiles(Shift::new(Orientation::Horizontal, Direction::Positive, 1))
            .unwrap();

        let (tiles, free_tile) = board.tiles();
        // the junction entered at the low-index border of row 1
        assert_eq!(tiles[(1, 0)].kind(), TileKind::Junction);
        assert_eq!(tiles[(1, 1)].kind(), TileKind::Straight);
        assert_eq!(tiles[(1, 2)].kind(), TileKind::Straight);
        // the expelled border tile is the new free tile
        assert_eq!(free_tile.kind(), TileKind::Straight);

        assert_graph_invariant(&board);
    }

    #[test]
    fn invalid_shifts_leave_the_board_untouched() {
        let mut board = straight_board();
        let before = format!("{board}");

        for index in [0, 2, 3] {
            let shift = Shift::new(Orientation::Vertical, Direction::Negative, index);
            assert_eq!(board.shift_tiles(shift).unwrap_err(), BoardError::ShiftIndex(index));
        }

        assert_eq!(format!("{board}"), before);
        assert_graph_invariant(&board);
    }

    #[test]
    fn shift_then_inverse_restores_the_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = generator::classic_board(&mut rng).unwrap();
        let before = format!("{board}");

        let shift = Shift::new(Orientation::Vertical, Direction::Negative, 3);
        board.shift_tiles(shift).unwrap();
        assert_ne!(format!("{board}"), before);

        board.shift_tiles(shift.inverted()).unwrap();
        assert_eq!(format!("{board}"), before);
        assert_graph_invariant(&board);
    }

    #[test]
    fn graph_invariant_survives_every_shift() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut board = generator::classic_board(&mut rng).unwrap();
        assert_graph_invariant(&board);

        let counts = kind_counts(&board);
        let (tiles_before, _) = board.tiles();
        let anchors = tiles_before
            .indexed_iter()
            .filter(|&(index, _)| Location::from(index).is_anchor())
            .map(|(index, tile)| (index, *tile))
            .collect_vec();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for direction in [Direction::Positive, Direction::Negative] {
                for index in [1, 3, 5] {
                    board
                        .shift_tiles(Shift::new(orientation, direction, index))
                        .unwrap();
                    assert_graph_invariant(&board);
                }
            }
        }

        // conservation: the tile population never changes, and no anchor moves
        assert_eq!(kind_counts(&board), counts);
        let (tiles_after, _) = board.tiles();
        for (index, tile) in anchors {
            assert_eq!(tiles_after[index], tile);
        }
    }

    #[test]
    fn free_tile_rotation_has_no_graph_effect() {
        let mut board = straight_board();
        board.rotate_free_tile(Rotation::Clockwise);

        // junction reference orientation closes the right side; one clockwise
        // turn closes the bottom
        assert!(!board.free_tile().is_open(Side::Down));
        assert_graph_invariant(&board);
    }

    #[test]
    fn snapshots_never_alias_the_live_board() {
        let board = straight_board();
        let before = format!("{board}");

        let (mut tiles, mut free_tile) = board.tiles();
        tiles[(0, 0)].rotate(Rotation::Clockwise);
        free_tile.rotate(Rotation::Clockwise);

        assert_eq!(format!("{board}"), before);
        assert_graph_invariant(&board);
    }

    #[test]
    fn vertex_adjacency_helper() {
        let board = straight_board();

        // vertical neighbors connect on the straight board, horizontal do not
        assert!(board.vertex(Location(0, 0)).is_connected(board.vertex(Location(1, 0))));
        assert!(board.vertex(Location(1, 0)).is_connected(board.vertex(Location(0, 0))));
        assert!(!board.vertex(Location(0, 0)).is_connected(board.vertex(Location(0, 1))));
        // not one step apart
        assert!(!board.vertex(Location(0, 0)).is_connected(board.vertex(Location(2, 0))));
        assert!(!board.vertex(Location(0, 0)).is_connected(board.vertex(Location(1, 1))));
    }

    #[test]
    fn render_rotation_tracks_openings() {
        let mut straight = Tile::new(TileKind::Straight);
        assert_eq!(render_rotation(&straight), RenderRotation::Deg0);
        straight.rotate(Rotation::Clockwise);
        assert_eq!(render_rotation(&straight), RenderRotation::Deg90);

        let mut turn = Tile::new(TileKind::Turn);
        assert_eq!(render_rotation(&turn), RenderRotation::Deg0);
        turn.rotate(Rotation::Clockwise);
        assert_eq!(render_rotation(&turn), RenderRotation::Deg90);
        turn.rotate(Rotation::Clockwise);
        assert_eq!(render_rotation(&turn), RenderRotation::Deg180);
        turn.rotate(Rotation::Clockwise);
        assert_eq!(render_rotation(&turn), RenderRotation::DegNeg90);

        let mut junction = Tile::new(TileKind::Junction);
        assert_eq!(render_rotation(&junction), RenderRotation::Deg0);
        junction.rotate(Rotation::Clockwise);
        assert_eq!(render_rotation(&junction), RenderRotation::Deg90);

        assert_eq!(RenderRotation::DegNeg90.degrees(), -90);
        assert_eq!(RenderRotation::Deg180.degrees(), 180);
    }

    #[test]
    fn classic_board_deals_the_standard_tile_mix() {
        let mut rng = StdRng::seed_from_u64(2026);
        let board = generator::classic_board(&mut rng).unwrap();
        assert_eq!(board.side_length(), generator::CLASSIC_SIDE_LENGTH);
        assert_graph_invariant(&board);

        // 13 straights; 15 movable turns plus 4 corner anchors; 6 movable
        // junctions plus 12 anchor junctions
        let counts = kind_counts(&board);
        assert_eq!(counts[&TileKind::Straight], 13);
        assert_eq!(counts[&TileKind::Turn], 19);
        assert_eq!(counts[&TileKind::Junction], 18);

        // corner anchors carry no item; the first non-corner anchor in
        // row-major order carries item 1
        assert_eq!(board.tile_item(Location(0, 0)).unwrap(), None);
        assert_eq!(board.tile_item(Location(0, 2)).unwrap(), Item::new(1));
        assert_eq!(
            board.tile_item(Location(7, 0)).unwrap_err(),
            BoardError::OutOfBounds(Location(7, 0))
        );

        // all 24 items are on the table (board plus free tile)
        let (tiles, free_tile) = board.tiles();
        let items = tiles
            .iter()
            .chain([&free_tile])
            .filter_map(|tile| tile.item())
            .unique()
            .count();
        assert_eq!(items, 24);
    }

    #[test]
    fn build_results_are_debug_formattable() {
        // Result inspection helpers like unwrap_err rely on this
        let board = straight_board();
        assert!(!format!("{board:?}").is_empty());

        let mut builder = BoardBuilder::with_side_length(3);
        builder.tiles((0..9).map(|_| Tile::new(TileKind::Straight)));
        assert!(format!("{:?}", builder.build()).contains("MissingFreeTile"));
    }

    #[test]
    fn shift_descriptors_compare_by_value() {
        let shift = Shift::new(Orientation::Horizontal, Direction::Positive, 1);
        assert_eq!(shift, shift.inverted().inverted());
        assert_ne!(shift, shift.inverted());
        assert_eq!(
            format!("{shift}"),
            "orientation:Horizontal, direction:Positive, line:1"
        );
    }
}

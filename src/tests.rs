#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use itertools::Itertools;
    use unordered_pair::UnorderedPair;

    use crate::builder::MapBuilder;
    use crate::color::Palette;
    use crate::coloring::Coloring;
    use crate::map::Map;
    use crate::painting::Painting;
    use crate::region::Region;
    use crate::validator::{CheckFailure, ColoringChecker, Verdict};

    #[test]
    fn pinwheel_shape() {
        let map = Map::pinwheel();
        assert_eq!(map.region_count(), 9);
        assert_eq!(map.border_count(), 20);

        // the hub touches every inner wedge and nothing else
        assert_eq!(map.borders_with(Region(8)), vec![Region(4), Region(5), Region(6), Region(7)]);
        // an outer wedge touches its outer neighbors and the two inner wedges under it
        assert_eq!(map.borders_with(Region(0)), vec![Region(1), Region(3), Region(4), Region(7)]);

        // opposite wedges meet only at a point, which is not a border
        assert!(!map.bordering(Region(0), Region(2)));
        assert!(!map.bordering(Region(0), Region(8)));
        assert!(map.bordering(Region(4), Region(8)));
    }

    #[test]
    fn blank_is_not_proper() {
        let map = Map::pinwheel();
        let coloring = Coloring::blank(9);

        assert_eq!(map.check(&coloring).unwrap(), Verdict::Unpainted { region: Region(0) });
        assert!(!map.is_proper(&coloring).unwrap());
    }

    #[test]
    fn unpainted_hub_is_not_proper() {
        // all spaces need to be painted
        let map = Map::pinwheel();
        let coloring = Coloring::from_colors(vec![1, 2, 1, 2, 3, 4, 3, 4, 0]);

        assert_eq!(map.check(&coloring).unwrap(), Verdict::Unpainted { region: Region(8) });
    }

    #[test]
    fn fifth_color_on_the_hub_is_proper() {
        let map = Map::pinwheel();
        let coloring = Coloring::from_colors(vec![1, 2, 1, 2, 3, 4, 3, 4, 5]);

        assert_eq!(map.check(&coloring).unwrap(), Verdict::Proper);
        assert!(map.is_proper(&coloring).unwrap());
    }

    #[test]
    fn four_colors_suffice() {
        // the hub only touches the inner ring, so it can reuse an outer color
        let map = Map::pinwheel();
        let coloring = Coloring::from_colors(vec![1, 2, 1, 2, 3, 4, 3, 4, 1]);

        assert_eq!(map.check(&coloring).unwrap(), Verdict::Proper);
    }

    #[test]
    fn equal_neighbors_conflict() {
        // neighboring spaces cannot have same color
        let map = Map::pinwheel();
        let coloring = Coloring::from_colors(vec![1, 1, 2, 3, 4, 3, 4, 3, 4]);

        assert!(matches!(map.check(&coloring).unwrap(), Verdict::Conflict { .. }));
        assert!(!map.is_proper(&coloring).unwrap());
    }

    #[test]
    fn conflict_names_the_offending_border() {
        let map = Map::pinwheel();
        // only regions 1 and 4 clash
        let coloring = Coloring::from_colors(vec![1, 3, 1, 2, 3, 4, 3, 4, 1]);

        assert_eq!(
            map.check(&coloring).unwrap(),
            Verdict::Conflict { regions: UnorderedPair::from((Region(1), Region(4))) },
        );
    }

    #[test]
    fn reset_returns_to_blank() {
        let mut coloring = Coloring::from_colors(vec![1, 2, 1, 2, 3, 4, 3, 4, 5]);
        coloring.reset();

        assert_eq!(coloring, Coloring::blank(9));
        assert!(!Map::pinwheel().is_proper(&coloring).unwrap());
    }

    #[test]
    fn advance_cycles_through_the_whole_palette() {
        let palette = Palette::four_color();
        assert_eq!(palette.len(), 5);
        assert!(!palette.is_empty());

        for color in 0..palette.len() {
            assert!(palette.advance(color) < palette.len());
        }

        // one full lap returns to the start
        let mut color = 3;
        for _ in 0..palette.len() {
            color = palette.advance(color);
        }
        assert_eq!(color, 3);

        // the last paint wraps to unpainted
        assert_eq!(palette.advance(4), 0);
    }

    #[test]
    fn relabeling_preserves_properness() {
        let map = Map::pinwheel();
        let colors = vec![1, 2, 1, 2, 3, 4, 3, 4, 1];
        assert!(map.is_proper(&Coloring::from_colors(colors.clone())).unwrap());

        // no paint is special; swapping them around cannot break a proper coloring
        for relabeling in (1..=4usize).permutations(4) {
            let relabeled = colors.iter().map(|color| relabeling[color - 1]).collect_vec();
            assert!(map.is_proper(&Coloring::from_colors(relabeled)).unwrap());
        }
    }

    #[test]
    fn rosette_rule_cards() {
        let map = Map::rosette();
        assert_eq!(map.region_count(), 4);
        // every pair of regions borders
        assert_eq!(map.border_count(), 6);

        // the "all spaces painted" card
        assert!(map.is_proper(&Coloring::from_colors(vec![4, 3, 2, 1])).unwrap());
        // the "same-colored neighbors" card, two wedges red and the rest unpainted
        assert_eq!(
            map.check(&Coloring::from_colors(vec![0, 4, 0, 4])).unwrap(),
            Verdict::Unpainted { region: Region(0) },
        );
        // painting its blanks green still leaves the two red wedges touching
        assert!(matches!(
            map.check(&Coloring::from_colors(vec![1, 4, 1, 4])).unwrap(),
            Verdict::Conflict { .. },
        ));
    }

    #[test]
    fn size_mismatch_is_an_error() {
        let map = Map::pinwheel();
        let checker = ColoringChecker::from(&map);

        assert_eq!(
            checker.check(&Coloring::blank(4)),
            Err(CheckFailure::ColoringSizeMismatch { expected: 9, actual: 4 }),
        );
    }

    #[test]
    fn out_of_bounds_region_is_an_error() {
        let mut coloring = Coloring::blank(9);

        assert_eq!(
            coloring.paint(Region(9), 1),
            Err(CheckFailure::RegionOutOfBounds { region: Region(9), region_count: 9 }),
        );
        assert!(coloring.get(Region(42)).is_err());
        assert!(coloring.clear(Region(9)).is_err());
    }

    #[test]
    fn builder_rejects_bad_borders() {
        let mut builder = MapBuilder::with_regions(NonZero::new(4).unwrap());
        builder.add_border(UnorderedPair::from((Region(0), Region(7))));
        assert!(builder.is_valid().is_some());
        assert!(builder.build().is_err());

        let mut looped = MapBuilder::with_regions(NonZero::new(4).unwrap());
        looped.add_border(UnorderedPair::from((Region(2), Region(2))));
        assert!(looped.build().is_err());
    }

    #[test]
    fn mirrored_borders_collapse() {
        let mut builder = MapBuilder::with_regions(NonZero::new(3).unwrap());
        builder
            .add_border(UnorderedPair::from((Region(0), Region(1))))
            .add_border(UnorderedPair::from((Region(1), Region(0))));

        let map = builder.build().unwrap();
        assert_eq!(map.border_count(), 1);
        assert!(map.bordering(Region(0), Region(1)));
        assert!(map.bordering(Region(1), Region(0)));
        assert_eq!(map.borders_with(Region(2)), vec![]);
    }

    #[test]
    fn tapping_cycles_one_region() {
        let mut painting = Painting::pinwheel();
        assert_eq!(format!("{}", painting), ".........");

        painting.tap(Region(0)).unwrap();
        assert_eq!(format!("{}", painting), "g........");

        // a full lap lands back on unpainted
        for _ in 0..4 {
            painting.tap(Region(0)).unwrap();
        }
        assert_eq!(format!("{}", painting), ".........");

        assert!(painting.tap(Region(9)).is_err());
    }

    #[test]
    fn painting_to_completion() {
        let mut painting = Painting::pinwheel();

        // green and blue alternating outside, orange and red inside, green hub
        for (index, color) in [1, 2, 1, 2, 3, 4, 3, 4, 1].into_iter().enumerate() {
            for _ in 0..color {
                painting.tap(Region(index)).unwrap();
            }
        }

        assert!(painting.is_solved());
        assert_eq!(format!("{}", painting), "gbgbororg");

        // clearing any region revokes the solve
        painting.long_press(Region(8)).unwrap();
        assert!(!painting.is_solved());

        painting.tap(Region(8)).unwrap();
        assert!(painting.is_solved());
        assert!(painting.confirm());
        // confirming a solved painting leaves it alone
        assert_eq!(format!("{}", painting), "gbgbororg");
    }

    #[test]
    fn confirming_an_unsolved_painting_wipes_it() {
        let mut painting = Painting::pinwheel();
        painting.tap(Region(0)).unwrap();
        painting.tap(Region(1)).unwrap();

        assert!(!painting.confirm());
        assert_eq!(format!("{}", painting), ".........");
        assert!(!painting.is_solved());
    }
}

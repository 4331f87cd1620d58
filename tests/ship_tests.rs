use battleship_rules::{Compass, ParseError, Position, Ship, ShipError, ShipKind};

fn cells(ship: &Ship) -> Vec<(i32, i32)> {
    ship.positions().iter().map(|p| (p.row(), p.col())).collect()
}

#[test]
fn test_footprint_sizes_and_distinct() -> Result<(), ShipError> {
    for kind in ShipKind::ALL {
        for bearing in Compass::CARDINALS {
            let ship = Ship::new(kind, bearing, Position::new(4, 4))?;
            assert_eq!(ship.size(), kind.size());
            let mut unique = cells(&ship);
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), kind.size(), "{:?} {:?}", kind, bearing);
        }
    }
    Ok(())
}

#[test]
fn test_straight_runs_follow_axis() -> Result<(), ShipError> {
    for bearing in [Compass::North, Compass::South] {
        let carrack = Ship::new(ShipKind::Carrack, bearing, Position::new(1, 2))?;
        assert_eq!(cells(&carrack), vec![(1, 2), (2, 2), (3, 2)]);
        let frigate = Ship::new(ShipKind::Frigate, bearing, Position::new(0, 0))?;
        assert_eq!(cells(&frigate), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }
    for bearing in [Compass::East, Compass::West] {
        let carrack = Ship::new(ShipKind::Carrack, bearing, Position::new(1, 2))?;
        assert_eq!(cells(&carrack), vec![(1, 2), (1, 3), (1, 4)]);
        let frigate = Ship::new(ShipKind::Frigate, bearing, Position::new(0, 0))?;
        assert_eq!(cells(&frigate), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }
    let caravel = Ship::new(ShipKind::Caravel, Compass::East, Position::new(7, 7))?;
    assert_eq!(cells(&caravel), vec![(7, 7), (7, 8)]);
    Ok(())
}

#[test]
fn test_galleon_shapes() -> Result<(), ShipError> {
    let anchor = Position::new(2, 3);
    let north = Ship::new(ShipKind::Galleon, Compass::North, anchor)?;
    assert_eq!(cells(&north), vec![(2, 3), (2, 4), (2, 5), (3, 4), (4, 4)]);
    let south = Ship::new(ShipKind::Galleon, Compass::South, anchor)?;
    assert_eq!(cells(&south), vec![(2, 3), (3, 3), (4, 2), (4, 3), (4, 4)]);
    let east = Ship::new(ShipKind::Galleon, Compass::East, anchor)?;
    assert_eq!(cells(&east), vec![(2, 3), (3, 1), (3, 2), (3, 3), (4, 3)]);
    let west = Ship::new(ShipKind::Galleon, Compass::West, anchor)?;
    assert_eq!(cells(&west), vec![(2, 3), (3, 3), (3, 4), (3, 5), (4, 3)]);

    let mut shapes: Vec<Vec<(i32, i32)>> = [&north, &south, &east, &west]
        .iter()
        .map(|s| {
            let mut c = cells(s);
            c.sort();
            c
        })
        .collect();
    shapes.sort();
    shapes.dedup();
    assert_eq!(shapes.len(), 4);
    Ok(())
}

#[test]
fn test_unknown_bearing_rejected() {
    for kind in [
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ] {
        assert_eq!(
            Ship::new(kind, Compass::Unknown, Position::new(0, 0)).unwrap_err(),
            ShipError::InvalidOrientation {
                kind,
                bearing: Compass::Unknown
            }
        );
    }
    let barge = Ship::new(ShipKind::Barge, Compass::Unknown, Position::new(5, 5)).unwrap();
    assert_eq!(barge.positions(), &[Position::new(5, 5)]);
    assert_eq!(barge.bearing(), Compass::Unknown);
}

#[test]
fn test_shoot_and_afloat() -> Result<(), ShipError> {
    let mut ship = Ship::new(ShipKind::Carrack, Compass::South, Position::new(0, 0))?;
    assert!(ship.is_afloat());
    assert!(!ship.shoot(&Position::new(0, 1)));
    assert!(ship.hits().is_empty());

    assert!(ship.shoot(&Position::new(0, 0)));
    assert!(!ship.shoot(&Position::new(0, 0)));
    assert!(ship.shoot(&Position::new(1, 0)));
    assert_eq!(ship.hits().len(), 2);
    assert!(ship.is_afloat());

    assert!(ship.shoot(&Position::new(2, 0)));
    assert!(!ship.is_afloat());
    assert!(ship.hits().iter().all(|p| ship.occupies(p)));
    Ok(())
}

#[test]
fn test_build_by_category() {
    let ship = Ship::build("Frigate", Compass::East, Position::new(3, 3)).unwrap();
    assert_eq!(ship.kind(), ShipKind::Frigate);
    assert_eq!(ship.category(), "frigate");
    assert_eq!(
        Ship::build("submarine", Compass::East, Position::new(3, 3)).unwrap_err(),
        ShipError::UnknownCategory("submarine".to_string())
    );
}

#[test]
fn test_parse_descriptor() {
    let ship: Ship = "galleon:n:0,0".parse().unwrap();
    assert_eq!(ship.kind(), ShipKind::Galleon);
    assert_eq!(ship.bearing(), Compass::North);
    assert_eq!(ship.anchor(), Position::new(0, 0));
    assert_eq!(ship.to_string(), "[galleon n (0, 0)]");

    assert_eq!("galleon:n".parse::<Ship>(), Err(ParseError::BadShip));
    assert_eq!("dinghy:n:0,0".parse::<Ship>(), Err(ParseError::BadKind));
    assert_eq!("barge:x:0,0".parse::<Ship>(), Err(ParseError::BadCompass));
    assert_eq!("barge:n:0".parse::<Ship>(), Err(ParseError::BadPosition));
    assert_eq!(
        "carrack:u:0,0".parse::<Ship>(),
        Err(ParseError::Ship(ShipError::InvalidOrientation {
            kind: ShipKind::Carrack,
            bearing: Compass::Unknown,
        }))
    );
}

#[test]
fn test_too_close_to() -> Result<(), ShipError> {
    let carrack = Ship::new(ShipKind::Carrack, Compass::East, Position::new(2, 2))?;
    let diagonal = Ship::new(ShipKind::Barge, Compass::North, Position::new(3, 5))?;
    let gap = Ship::new(ShipKind::Barge, Compass::North, Position::new(4, 5))?;
    let overlap = Ship::new(ShipKind::Frigate, Compass::North, Position::new(0, 3))?;

    assert!(carrack.too_close_to(&diagonal, 1));
    assert!(diagonal.too_close_to(&carrack, 1));
    assert!(!carrack.too_close_to(&gap, 1));
    assert!(carrack.too_close_to(&gap, 2));
    assert!(carrack.too_close_to(&overlap, 0));
    assert!(!carrack.too_close_to(&diagonal, 0));
    Ok(())
}

#[test]
fn test_anchor_at_coordinate_limit() {
    let anchor = Position::new(i32::MAX, 0);
    assert_eq!(
        Ship::new(ShipKind::Frigate, Compass::South, anchor).unwrap_err(),
        ShipError::OutOfRange {
            kind: ShipKind::Frigate,
            anchor
        }
    );
    assert!(Ship::new(ShipKind::Galleon, Compass::East, Position::new(0, i32::MIN)).is_err());
    // a run that ends exactly on the limit still fits
    let edge = Ship::new(ShipKind::Frigate, Compass::East, Position::new(0, i32::MAX - 3)).unwrap();
    assert_eq!(edge.right_most(), i32::MAX);
    assert!(matches!(
        format!("frigate:s:{},0", i32::MAX).parse::<Ship>(),
        Err(ParseError::Ship(ShipError::OutOfRange { .. }))
    ));
}

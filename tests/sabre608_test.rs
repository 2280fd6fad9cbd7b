use lpdakit::prelude::*;

fn reference_assembler(spec: &ArraySpec) -> Assembler<'_> {
    // single horizontal polarization, ground, tip coil on, mast off
    Assembler::new(spec, AssemblyBuilder::new().build())
}

#[test]
fn test_reference_model_inventory() {
    let spec = ArraySpec::sabre608();
    let m = reference_assembler(&spec).assemble().unwrap();

    assert_eq!(m.wires().len(), 60);

    // 10 dipole-arm pairs at the element radius
    let arms = m
        .wires()
        .iter()
        .filter(|w| w.radius() == inch(0.5))
        .count();
    assert_eq!(arms, 20);

    // 9 inter-element feed-line pairs: axial wires at the feed radius
    let feed_lines = m
        .wires()
        .iter()
        .filter(|w| {
            w.radius() == spec.feed_radius()
                && w.start().y == w.stop().y
                && w.start().z == w.stop().z
                && w.start().x != w.stop().x
        })
        .count();
    assert_eq!(feed_lines, 18);

    // exactly one excitation, at element 0's feed bridge
    let excited: Vec<_> = m
        .wires()
        .iter()
        .filter(|w| w.excitation().is_some())
        .collect();
    assert_eq!(excited.len(), 1);
    assert_eq!(excited[0].tag(), 3);

    // exactly one load: the boom-tip coil at element 8
    let loaded: Vec<_> = m.wires().iter().filter(|w| w.load().is_some()).collect();
    assert_eq!(loaded.len(), 1);
    let coil = spec.end_coil().load().unwrap();
    assert_eq!(loaded[0].load().unwrap(), coil);
    let x8 = spec.boom_positions()[8] + spec.boom_offset();
    assert!((loaded[0].start().x - x8).abs() < spec.feed_boom_gap());
}

#[test]
fn test_reference_deck_cards() {
    let spec = ArraySpec::sabre608();
    let deck = reference_assembler(&spec).deck().unwrap();

    let count = |prefix: &str| deck.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("GW"), 60);
    assert_eq!(count("EX"), 1);
    assert_eq!(count("LD"), 1);
    assert_eq!(count("FR"), 1);
    assert_eq!(count("GE"), 1);
    assert_eq!(count("GN"), 1);
    assert!(deck.contains("FR    0  241"));
    assert!(deck.ends_with("EN\n"));
}

#[test]
fn test_free_space_deck_has_no_ground_cards() {
    let spec = ArraySpec::sabre608();
    let deck = Assembler::new(&spec, AssemblyBuilder::new().ground(false).build())
        .deck()
        .unwrap();

    assert!(deck.contains("\nGE    0\n"));
    assert!(!deck.contains("GN"));
}

#[test]
fn test_dual_polarization_excitations() {
    let spec = ArraySpec::sabre608();

    let both = Assembler::new(
        &spec,
        AssemblyBuilder::new()
            .pols(vec![Polarization::Horizontal, Polarization::Vertical])
            .driven(vec![Polarization::Horizontal, Polarization::Vertical])
            .tip_coil(false)
            .build(),
    )
    .assemble()
    .unwrap();
    assert_eq!(
        both.wires()
            .iter()
            .filter(|w| w.excitation().is_some())
            .count(),
        2
    );
    assert_eq!(
        both.wires().iter().filter(|w| w.load().is_some()).count(),
        0
    );

    let single = Assembler::new(
        &spec,
        AssemblyBuilder::new()
            .pols(vec![Polarization::Horizontal, Polarization::Vertical])
            .driven(vec![Polarization::Vertical])
            .tip_coil(false)
            .build(),
    )
    .assemble()
    .unwrap();
    assert_eq!(
        single
            .wires()
            .iter()
            .filter(|w| w.excitation().is_some())
            .count(),
        1
    );
    let terms: Vec<_> = single
        .wires()
        .iter()
        .filter(|w| w.load().is_some())
        .collect();
    assert_eq!(terms.len(), 1);
    assert_eq!(terms[0].load().unwrap().res, spec.termination());
}

#[test]
fn test_mast_deck_grows_by_support() {
    let spec = ArraySpec::sabre608();
    let plain = reference_assembler(&spec).deck().unwrap();
    let masted = Assembler::new(&spec, AssemblyBuilder::new().mast(true).build())
        .deck()
        .unwrap();

    let gw = |d: &str| d.lines().filter(|l| l.starts_with("GW")).count();
    assert_eq!(gw(&masted), gw(&plain) + 3);
}

#[test]
fn test_assembly_is_idempotent() {
    let spec = ArraySpec::sabre608();
    let assembly = AssemblyBuilder::new()
        .pols(vec![Polarization::Horizontal, Polarization::Vertical])
        .driven(vec![Polarization::Horizontal])
        .mast(true)
        .build();

    let a = Assembler::new(&spec, assembly.clone());
    let b = Assembler::new(&spec, assembly);

    assert_eq!(a.deck().unwrap(), b.deck().unwrap());
    let ma = a.assemble().unwrap();
    let mb = b.assemble().unwrap();
    assert_eq!(ma.wires(), mb.wires());
}

#[test]
fn test_connection_pattern_never_repeats() {
    let spec = ArraySpec::sabre608();
    let m = reference_assembler(&spec).assemble().unwrap();

    // connectors drop from the feed level to the arm gap level; the first
    // of each pair leaves conductor 0, so the sign of its arm-side y
    // coordinate reads the pattern
    let h = spec.height();
    let conns: Vec<f64> = m
        .wires()
        .iter()
        .filter(|w| {
            (w.start().z - (h + 0.05)).abs() < 1e-9 && (w.stop().z - (h + 0.10)).abs() < 1e-9
        })
        .map(|w| w.stop().y)
        .collect();
    assert_eq!(conns.len(), 20);

    for i in 1..10 {
        let prev = conns[2 * (i - 1)];
        let here = conns[2 * i];
        assert!(
            prev * here < 0.0,
            "elements {} and {} share a connection pattern",
            i - 1,
            i
        );
    }
}

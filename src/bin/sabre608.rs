use lpdakit::prelude::*;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

// Emits the solver decks for every deployed sabre 608 configuration.
// Pass an output folder as the first argument (default: decks).
fn main() -> Result<(), Box<dyn Error>> {
    let out = env::args().nth(1).unwrap_or_else(|| "decks".to_string());
    fs::create_dir_all(&out)?;

    let spec = ArraySpec::sabre608();
    let sweep = Sweep::from_lin_range(8.0, 20.0, 0.05)?;

    let h = Polarization::Horizontal;
    let v = Polarization::Vertical;
    let sr = Polarization::SlantRight;
    let sl = Polarization::SlantLeft;

    let configs = vec![
        (
            "sabre608_hpol.nec",
            AssemblyBuilder::new()
                .sweep(sweep)
                .title("sabre 608 log periodic antenna, horizontal")
                .build(),
        ),
        (
            "sabre608_vpol.nec",
            AssemblyBuilder::new()
                .pols(vec![v])
                .driven(vec![v])
                .sweep(sweep)
                .title("sabre 608 log periodic antenna, vertical")
                .build(),
        ),
        (
            "sabre608_dual.nec",
            AssemblyBuilder::new()
                .pols(vec![h, v])
                .driven(vec![h, v])
                .sweep(sweep)
                .title("sabre 608 log periodic antenna, dual polarization")
                .build(),
        ),
        (
            "sabre608_slant.nec",
            AssemblyBuilder::new()
                .pols(vec![sr, sl])
                .driven(vec![sr, sl])
                .sweep(sweep)
                .title("sabre 608 log periodic antenna, slant pair")
                .build(),
        ),
        (
            "sabre608_hpol_mast.nec",
            AssemblyBuilder::new()
                .mast(true)
                .sweep(sweep)
                .title("sabre 608 log periodic antenna, horizontal with mast")
                .build(),
        ),
    ];

    for (name, assembly) in configs {
        let deck = Assembler::new(&spec, assembly).deck()?;
        let path = Path::new(&out).join(name);
        write_deck(&path, &deck)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}

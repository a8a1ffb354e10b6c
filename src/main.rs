/*
   Cartridge probe: loads a ROM image, builds its bankswitched cartridge and
   prints how the 4K window is laid out.

   Usage: vcs-emulator <ROM path> [scheme]
*/
use log::{error, info};
use std::{env, fs, process};
use vcs_core::prelude::*;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Ensure correct number of arguments
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <ROM path> [scheme]", args[0]);
        process::exit(1);
    }
    let rom_path = &args[1];

    let scheme = match args.get(2) {
        Some(name) => name_to_type(name),
        None => type_from_filename(rom_path),
    };
    if scheme == BankswitchType::Auto {
        eprintln!(
            "Error: no bankswitch scheme for '{}'. Pass one of: {}",
            rom_path,
            supported_names().join(", ")
        );
        process::exit(1);
    }

    let image = match fs::read(rom_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error: could not read '{}': {}", rom_path, e);
            process::exit(1);
        }
    };

    let mut bus = match CartBus::from_image(image, scheme, &CartridgeConfig::default()) {
        Ok(bus) => bus,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };
    info!("Loaded {}", rom_path);

    print_layout(&mut bus);
}

// Schemes the probe can actually build
fn supported_names() -> Vec<&'static str> {
    BankswitchType::all()
        .filter(|&bs_type| {
            matches!(
                create_cartridge(vec![], bs_type, &CartridgeConfig::default()),
                Err(CartridgeError::CorruptImage { .. })
            )
        })
        .map(|bs_type| bs_type.name())
        .collect()
}

fn print_layout(bus: &mut CartBus) {
    let cart = bus.cartridge();
    println!("{}", cart.scheme().desc());
    println!(
        "ROM {} bytes, RAM {} bytes, start bank {}",
        cart.image().len(),
        cart.ram().len(),
        cart.get_bank()
    );

    for (i, (segment, slice)) in cart
        .segments()
        .iter()
        .zip(cart.selection().slices())
        .enumerate()
    {
        println!(
            "Segment {} @ ${:04X}: {:?}, slice {} of {}",
            i, segment.origin, segment.kind, slice, segment.bank_count
        );
    }

    for line in bus.debugger().bank_summary() {
        println!("{}", line);
    }
}

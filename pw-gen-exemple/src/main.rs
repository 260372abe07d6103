use pw_gen_core::{Error, PasswordGenerator, PasswordGeneratorConfig, PoolRange, Preset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see drawn quotas and repair rounds
    env_logger::init();

    // The generator reads from the operating system random source
    let mut generator = PasswordGenerator::new();

    // One password per preset
    for preset in Preset::ALL {
        println!("{:>15}: {}", preset, generator.generate(&preset.config())?);
    }

    // Presets can also be looked up by name
    let preset: Preset = "human-friendly".parse()?;
    println!("{:>15}: {}", "by name", generator.generate(&preset.config())?);

    // Custom configuration: 8 to 12 lowercase, 2 to 4 uppercase,
    // exactly 3 digits, no symbols, no look-alike characters
    let config = PasswordGeneratorConfig::default()
        .with_lowercase(PoolRange::new(8, 12)?)
        .with_uppercase(PoolRange::new(2, 4)?)
        .with_numbers(PoolRange::new(3, 3)?)
        .with_symbols(PoolRange::none())
        .with_always_start_with_character(true)
        .with_do_not_use(vec!['l', '1', 'I', 'O', '0']);
    println!(
        "{:>15}: {} ({} to {} characters)",
        "custom",
        generator.generate(&config)?,
        config.total_min(),
        config.total_max()
    );

    // Invalid ranges are rejected when built
    match PoolRange::new(5, 3) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Range 5..=3 is invalid: {e}"),
    }

    // Excluding a whole pool that is still needed fails before generating
    let config = PasswordGeneratorConfig::default().with_do_not_use(('0'..='9').collect());
    match generator.generate(&config) {
        Err(Error::EmptyPool(pool)) => println!("Pool '{pool}' has nothing left to draw from"),
        Err(e) => return Err(e.into()),
        Ok(_) => println!("Should not happen"),
    }

    Ok(())
}

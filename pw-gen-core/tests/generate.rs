use anyhow::Result;
use pw_gen_core::{Error, PasswordGenerator, PasswordGeneratorConfig, PoolRange, PoolType, Preset};

#[test]
fn generate_from_every_preset() -> Result<()> {
	let mut generator = PasswordGenerator::new();
	for preset in Preset::ALL {
		let config = preset.config();
		let password = generator.generate(&config)?;
		let len = password.chars().count();
		assert!(
			(config.total_min()..=config.total_max()).contains(&len),
			"{preset}: length {len} outside bounds"
		);
		if config.always_start_with_character() {
			assert!(password.starts_with(|c: char| c.is_ascii_alphabetic()), "{preset}");
		}
	}
	Ok(())
}

#[test]
fn generate_respects_exclusions_case_insensitively() -> Result<()> {
	let config = PasswordGeneratorConfig::default()
		.with_lowercase(PoolRange::new(10, 20)?)
		.with_uppercase(PoolRange::new(10, 20)?)
		.with_do_not_use(vec!['A', 'b', 'C', '!']);
	let mut generator = PasswordGenerator::new();
	for _ in 0..100 {
		let password = generator.generate(&config)?;
		assert!(!password.chars().any(|c| "aAbBcC!".contains(c)), "{password}");
	}
	Ok(())
}

#[test]
fn generate_fails_on_excluded_lowercase_pool() {
	let config = PasswordGeneratorConfig::default()
		.with_do_not_use(('a'..='z').collect());
	let result = PasswordGenerator::new().generate(&config);
	match result {
		Err(Error::EmptyPool(pool)) => {
			assert_eq!(PoolType::Characters, pool);
			assert_eq!("the pool 'characters' is empty", Error::EmptyPool(pool).to_string());
		}
		other => panic!("expected empty pool error, got {other:?}"),
	}
}

#[test]
fn invalid_ranges_are_rejected() {
	for (min, max) in [(-1, 5), (5, 3), (-2, -1)] {
		assert!(matches!(PoolRange::new(min, max), Err(Error::InvalidRange { .. })));
	}
}

#[test]
fn generate_single_digit_only() -> Result<()> {
	let config = PasswordGeneratorConfig::new(
		PoolRange::new(0, 0)?,
		PoolRange::new(0, 0)?,
		PoolRange::new(1, 1)?,
		PoolRange::new(0, 0)?,
		false,
		Vec::new(),
	);
	let password = PasswordGenerator::new().generate(&config)?;
	assert_eq!(1, password.len());
	assert!(password.chars().all(|c| c.is_ascii_digit()));
	Ok(())
}

#[test]
fn generators_run_in_parallel() -> Result<()> {
	let config = Preset::Strong.config();
	let handles: Vec<_> = (0..4)
		.map(|_| {
			let config = config.clone();
			std::thread::spawn(move || PasswordGenerator::new().generate(&config))
		})
		.collect();
	for handle in handles {
		let password = handle.join().map_err(|_| anyhow::anyhow!("generator thread panicked"))??;
		assert!((16..=20).contains(&password.len()));
	}
	Ok(())
}

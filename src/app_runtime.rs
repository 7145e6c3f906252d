use std::cell::RefCell;

use roaring_flame_core::PresentationSettings;

const MAX_PARTICLES: usize = 500;

thread_local! {
    static SETTINGS: RefCell<Option<PresentationSettings>> = RefCell::new(None);
}

pub(crate) fn set_settings(settings: PresentationSettings) {
    SETTINGS.with(|slot| {
        *slot.borrow_mut() = Some(settings);
    });
}

pub(crate) fn settings() -> PresentationSettings {
    SETTINGS
        .with(|slot| *slot.borrow())
        .unwrap_or_else(load_settings)
}

pub(crate) fn load_settings() -> PresentationSettings {
    let mut settings = PresentationSettings::default();
    if let Some(count) = parse_particle_count(option_env!("ROARING_FLAME_PARTICLES")) {
        settings.particles.count = count;
    }
    settings
}

fn parse_particle_count(raw: Option<&str>) -> Option<usize> {
    let count = raw?.trim().parse::<usize>().ok()?;
    Some(count.min(MAX_PARTICLES))
}

/// Seed for the ember field. Fixed when `ROARING_FLAME_SEED` is set at build
/// time, otherwise drawn from the clock.
pub(crate) fn ember_seed() -> u64 {
    if let Some(seed) = option_env!("ROARING_FLAME_SEED").and_then(|raw| raw.trim().parse::<u64>().ok()) {
        return seed;
    }
    let now = js_sys::Date::now();
    let jitter = js_sys::Math::random();
    (now as u64).rotate_left(17) ^ (jitter * u32::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_override() {
        assert_eq!(parse_particle_count(None), None);
        assert_eq!(parse_particle_count(Some(" 80 ")), Some(80));
        assert_eq!(parse_particle_count(Some("lots")), None);
        assert_eq!(parse_particle_count(Some("100000")), Some(MAX_PARTICLES));
    }
}

//! Sunrise and sunset status lines.

use zoo_types::{ActivityPattern, Animal, Enclosure};

/// What happens to an animal at sunrise.
pub fn sunrise_status(animal: &Animal) -> String {
    match animal.activity_pattern {
        ActivityPattern::Diurnal => format!("{} wakes up", animal.name),
        ActivityPattern::Nocturnal => format!("{} goes to sleep", animal.name),
        ActivityPattern::Cathemeral => always_active(animal),
    }
}

/// What happens to an animal at sunset. Mirror of [`sunrise_status`].
pub fn sunset_status(animal: &Animal) -> String {
    match animal.activity_pattern {
        ActivityPattern::Diurnal => format!("{} goes to sleep", animal.name),
        ActivityPattern::Nocturnal => format!("{} wakes up", animal.name),
        ActivityPattern::Cathemeral => always_active(animal),
    }
}

fn always_active(animal: &Animal) -> String {
    format!("{} is always active", animal.name)
}

/// Sunrise line for every occupant, in occupant order.
pub fn enclosure_sunrise(enclosure: &Enclosure) -> Vec<String> {
    enclosure.animals.iter().map(sunrise_status).collect()
}

/// Sunset line for every occupant, in occupant order.
pub fn enclosure_sunset(enclosure: &Enclosure) -> Vec<String> {
    enclosure.animals.iter().map(sunset_status).collect()
}

pub const REGION_CYCLE: [&str; 4] = ["us", "eu", "kr", "tw"];

pub fn next_region(current: &str) -> &'static str {
    rotate_region(current, Rotation::Next)
}

pub fn prev_region(current: &str) -> &'static str {
    rotate_region(current, Rotation::Prev)
}

pub fn label(region: &str) -> &'static str {
    match region.to_ascii_lowercase().as_str() {
        "us" => "Americas",
        "eu" => "Europe",
        "kr" => "Korea",
        "tw" => "Taiwan",
        _ => "Unknown",
    }
}

enum Rotation {
    Next,
    Prev,
}

fn rotate_region(current: &str, direction: Rotation) -> &'static str {
    let idx = REGION_CYCLE
        .iter()
        .position(|region| region.eq_ignore_ascii_case(current))
        .unwrap_or_else(|| match direction {
            Rotation::Next => REGION_CYCLE.len().saturating_sub(1),
            Rotation::Prev => 0,
        });

    match direction {
        Rotation::Next => REGION_CYCLE[(idx + 1) % REGION_CYCLE.len()],
        Rotation::Prev => REGION_CYCLE[(idx + REGION_CYCLE.len() - 1) % REGION_CYCLE.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_known_regions() {
        assert_eq!(label("us"), "Americas");
        assert_eq!(label("EU"), "Europe");
        assert_eq!(label("kr"), "Korea");
        assert_eq!(label("tw"), "Taiwan");
        assert_eq!(label("cn"), "Unknown");
    }

    #[test]
    fn next_and_previous_regions_wrap_cycle() {
        assert_eq!(next_region("us"), "eu");
        assert_eq!(next_region("tw"), "us");
        assert_eq!(prev_region("eu"), "us");
        assert_eq!(prev_region("us"), "tw");
        assert_eq!(next_region("KR"), "tw");
    }

    #[test]
    fn unknown_regions_use_cycle_defaults() {
        assert_eq!(next_region("mars"), "us");
        assert_eq!(prev_region(""), "tw");
    }
}

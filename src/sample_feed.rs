//! Demo slate for running the terminal without a generated `picks.json`
//! (`PICKS_SOURCE=sample`). Numbers are jittered so every confidence tier
//! shows up, but each pick stays internally consistent: the recommended side
//! matches where the projection sits relative to the line.

use chrono::{Duration as ChronoDuration, Local};
use rand::Rng;

use crate::state::{Pick, PickDirection};

const SAMPLE_PLAYERS: [&str; 12] = [
    "Jayson Tatum",
    "Anthony Edwards",
    "Shai Gilgeous-Alexander",
    "Devin Booker",
    "Jalen Brunson",
    "Tyrese Maxey",
    "Donovan Mitchell",
    "De'Aaron Fox",
    "Paolo Banchero",
    "Jaylen Brown",
    "Cade Cunningham",
    "Zion Williamson",
];

pub fn sample_slate() -> Vec<Pick> {
    let mut rng = rand::thread_rng();
    let today = Local::now().date_naive();

    SAMPLE_PLAYERS
        .iter()
        .map(|player| {
            // Bookmaker-style half-point line.
            let line = rng.gen_range(18..=34) as f64 + 0.5;
            let edge = rng.gen_range(-6.0..6.0_f64);
            let predicted = ((line + edge) * 10.0).round() / 10.0;
            let pick = if predicted > line {
                PickDirection::Over
            } else {
                PickDirection::Under
            };
            let confidence = rng.gen_range(42..=92) as f64;

            let game_time = if rng.gen_bool(0.85) {
                let tip = today
                    .and_hms_opt(19, 0, 0)
                    .map(|dt| dt + ChronoDuration::days(rng.gen_range(0..3)));
                tip.map(|dt| format!("{}", dt.format("%Y-%m-%dT%H:%M:%S")))
            } else {
                None
            };

            Pick {
                player: player.to_string(),
                line,
                predicted,
                pick,
                confidence,
                game_time,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_slate_is_internally_consistent() {
        for pick in sample_slate() {
            match pick.pick {
                PickDirection::Over => assert!(pick.predicted > pick.line),
                PickDirection::Under => assert!(pick.predicted <= pick.line),
            }
            assert!((0.0..=100.0).contains(&pick.confidence));
            assert!(!pick.player.is_empty());
        }
    }
}

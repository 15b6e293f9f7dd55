//! Traffic trend samples

use serde::{Deserialize, Serialize};

/// One point of the dashboard efficiency chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSample {
    pub time: String,
    pub traffic: u8,
    pub speed: u8,
}

pub fn seed_traffic() -> Vec<TrafficSample> {
    [
        ("0600", 20, 60),
        ("0800", 65, 45),
        ("1000", 80, 30),
        ("1200", 50, 55),
        ("1400", 40, 65),
        ("1600", 70, 35),
        ("1800", 90, 20),
    ]
    .into_iter()
    .map(|(time, traffic, speed)| TrafficSample {
        time: time.to_string(),
        traffic,
        speed,
    })
    .collect()
}

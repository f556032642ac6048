use crate::zonal::target_id::TargetCandidate;
use derive_getters::Getters;
use serde::Serialize;
use std::collections::HashMap;

/// Location of a client, as found in the zonal survey.
#[derive(Debug, Clone, Getters, Serialize, PartialEq)]
pub struct ZonalCoords {
    client_number: String,
    latitude: f64,
    longitude: f64,
}

impl ZonalCoords {
    pub fn new(client_number: String, latitude: f64, longitude: f64) -> Self {
        Self {
            client_number,
            latitude,
            longitude,
        }
    }

    /// Build coordinates from raw fields.
    /// All fields must be filled in and both coordinates must be finite numbers.
    pub fn parse(client_number: &str, latitude: &str, longitude: &str) -> Option<Self> {
        let client_number = client_number.trim();
        if client_number.is_empty() {
            return None;
        }
        let latitude = parse_coordinate(latitude)?;
        let longitude = parse_coordinate(longitude)?;

        Some(Self::new(client_number.to_owned(), latitude, longitude))
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite())
}

/// [ZonalCoords] indexed by normalized client number.
/// When a client appears several times, the last row wins.
#[derive(Debug, Default)]
pub struct ZonalCoordsIndex<'a> {
    coords_by_client: HashMap<String, &'a ZonalCoords>,
}

impl<'a> ZonalCoordsIndex<'a> {
    pub fn get<C: Into<TargetCandidate>>(&self, client_number: C) -> Option<&'a ZonalCoords> {
        let key = client_number.into().parse_int()?;
        self.coords_by_client.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.coords_by_client.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords_by_client.is_empty()
    }
}

impl<'a> From<&'a [ZonalCoords]> for ZonalCoordsIndex<'a> {
    fn from(value: &'a [ZonalCoords]) -> Self {
        let coords_by_client = value
            .iter()
            .filter_map(|coords| {
                TargetCandidate::from(coords.client_number())
                    .parse_int()
                    .map(|key| (key, coords))
            })
            .collect();

        Self { coords_by_client }
    }
}

//! Railway booking records and the ticket summary report.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    error::{BookingError, InputError},
    text,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRecord {
    pub start: i64,
    pub end: i64,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCount {
    pub id: i64,
    pub name: String,
    pub tickets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCount {
    pub source: String,
    pub destination: String,
    pub passengers: usize,
}

/// The three sections of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Tickets starting at each station, by station name.
    pub entries: Vec<StationCount>,
    /// Tickets ending at each station, by ticket count.
    pub exits: Vec<StationCount>,
    /// Passengers of each route with any, by passenger count.
    pub routes: Vec<RouteCount>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for count in &self.entries {
            writeln!(f, "{} {} {}", count.id, count.name, count.tickets)?;
        }
        writeln!(f)?;
        for count in &self.exits {
            writeln!(f, "{} {} {}", count.id, count.name, count.tickets)?;
        }
        writeln!(f)?;
        for route in &self.routes {
            writeln!(f, "{} {} {}", route.source, route.destination, route.passengers)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingSystem {
    stations: Vec<Station>,
    records: Vec<BookingRecord>,
}

impl BookingSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a system from a station list (`id name` pairs) and a booking
    /// list (`start end tickets` triples). Line breaks are not significant.
    pub fn load(stations: &str, records: &str) -> Result<Self, BookingError> {
        let mut system = Self::new();

        let lines = text::read_lines(stations)?;
        let fields: Vec<_> = text::fields(&lines).collect();
        for chunk in chunks(&fields, 2, "station fields")? {
            system.insert_station(chunk[0].as_num()?, chunk[1].as_name());
        }

        let lines = text::read_lines(records)?;
        let fields: Vec<_> = text::fields(&lines).collect();
        for chunk in chunks(&fields, 3, "booking record fields")? {
            let (start, end) = (chunk[0].as_num()?, chunk[1].as_num()?);
            system.insert_record(start, end, chunk[2].as_count()?)?;
        }

        Ok(system)
    }

    /// Adds a station; a second station with the same id is ignored.
    pub fn insert_station(&mut self, id: i64, name: impl Into<String>) -> bool {
        if self.station(id).is_some() {
            debug!(id, "station already present");
            return false;
        }
        self.stations.push(Station {
            id,
            name: name.into(),
        });
        true
    }

    /// Records a booking. Bookings of zero tickets are not kept.
    pub fn insert_record(
        &mut self,
        start: i64,
        end: i64,
        tickets: usize,
    ) -> Result<bool, BookingError> {
        for id in [start, end] {
            if self.station(id).is_none() {
                warn!(id, "booking refers to an unknown station");
                return Err(BookingError::StationNotFound { id });
            }
        }
        if tickets == 0 {
            debug!(start, end, "ignoring booking without tickets");
            return Ok(false);
        }
        self.records.push(BookingRecord {
            start,
            end,
            tickets,
        });
        Ok(true)
    }

    pub fn station(&self, id: i64) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == id)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    /// Tickets starting at the station.
    pub fn entries(&self, id: i64) -> usize {
        self.tickets(|record| record.start == id)
    }

    /// Tickets ending at the station.
    pub fn exits(&self, id: i64) -> usize {
        self.tickets(|record| record.end == id)
    }

    pub fn passengers(&self, source: i64, destination: i64) -> usize {
        self.tickets(|record| record.start == source && record.end == destination)
    }

    fn tickets(&self, filter: impl Fn(&BookingRecord) -> bool) -> usize {
        self.records
            .iter()
            .filter(|record| filter(record))
            .map(|record| record.tickets)
            .sum()
    }

    pub fn summary(&self) -> Summary {
        let count = |station: &Station, tickets| StationCount {
            id: station.id,
            name: station.name.clone(),
            tickets,
        };

        let mut entries: Vec<_> = self
            .stations
            .iter()
            .map(|station| count(station, self.entries(station.id)))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut exits: Vec<_> = self
            .stations
            .iter()
            .map(|station| count(station, self.exits(station.id)))
            .collect();
        exits.sort_by_key(|count| count.tickets);

        let mut routes = vec![];
        for source in &self.stations {
            for destination in &self.stations {
                if source.id == destination.id {
                    continue;
                }
                let passengers = self.passengers(source.id, destination.id);
                if passengers > 0 {
                    routes.push(RouteCount {
                        source: source.name.clone(),
                        destination: destination.name.clone(),
                        passengers,
                    });
                }
            }
        }
        routes.sort_by_key(|route| route.passengers);

        Summary {
            entries,
            exits,
            routes,
        }
    }
}

/// Splits positional fields into records of `size` fields each.
fn chunks<'a, T>(
    fields: &'a [T],
    size: usize,
    what: &'static str,
) -> Result<std::slice::Chunks<'a, T>, InputError> {
    if fields.len() % size != 0 {
        return Err(InputError::ShapeMismatch {
            what,
            expected: fields.len().next_multiple_of(size),
            found: fields.len(),
        });
    }
    Ok(fields.chunks(size))
}

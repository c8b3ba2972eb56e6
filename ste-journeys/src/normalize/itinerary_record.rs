use super::{LegSummary, StepAggregates};

/// the attributes produced for one directions result.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryRecord {
    pub itinerary: Itinerary,
    /// empty unless a status or a data-quality flag was recorded
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Itinerary {
    Routed {
        leg: LegSummary,
        steps: StepAggregates,
    },
    /// the routing engine could not connect the pair; only the requested
    /// addresses are known
    Unrouted {
        origin: Option<String>,
        dest: Option<String>,
    },
}

impl ItineraryRecord {
    pub fn routed(leg: LegSummary, steps: StepAggregates) -> ItineraryRecord {
        ItineraryRecord {
            itinerary: Itinerary::Routed { leg, steps },
            notes: String::new(),
        }
    }

    pub fn unrouted(status: &str, origin: Option<String>, dest: Option<String>) -> ItineraryRecord {
        ItineraryRecord {
            itinerary: Itinerary::Unrouted { origin, dest },
            notes: String::from(status),
        }
    }

    pub fn is_routed(&self) -> bool {
        matches!(self.itinerary, Itinerary::Routed { .. })
    }

    pub fn origin(&self) -> Option<&str> {
        match &self.itinerary {
            Itinerary::Routed { leg, .. } => Some(&leg.origin),
            Itinerary::Unrouted { origin, .. } => origin.as_deref(),
        }
    }

    pub fn dest(&self) -> Option<&str> {
        match &self.itinerary {
            Itinerary::Routed { leg, .. } => Some(&leg.dest),
            Itinerary::Unrouted { dest, .. } => dest.as_deref(),
        }
    }

    pub fn departure_time(&self) -> Option<&str> {
        match &self.itinerary {
            Itinerary::Routed { leg, .. } => leg.departure_time.as_deref(),
            Itinerary::Unrouted { .. } => None,
        }
    }

    /// appends a note, separating it from any existing notes with "; "
    pub fn append_note(&mut self, note: &str) {
        if !self.notes.is_empty() {
            self.notes.push_str("; ");
        }
        self.notes.push_str(note);
    }
}

use super::{
    apply_period_check, decode_overview_geometry, extract_leg_summary, extract_step_aggregates,
    feature_ops, DecodeErrorPolicy, DeparturePeriodCheck, ExpectedPeriod, ItineraryRecord,
    NormalizeError, PropertyLayout, SubstringPeriodCheck, TripGeometry,
};
use crate::{directions::DirectionsResult, polyline::PolylineError};
use geojson::Feature;

/// the two parallel outputs of a batch. index `i` of both sequences is
/// derived from index `i` of the input.
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub features: Vec<Feature>,
    pub records: Vec<ItineraryRecord>,
}

impl NormalizedBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// builds the record and geometry for one result. unrouted results are not
/// errors; a malformed overview polyline is.
pub fn build_record(
    result: &DirectionsResult,
) -> Result<(ItineraryRecord, TripGeometry), PolylineError> {
    match result {
        DirectionsResult::Routed(routed) => {
            let line = decode_overview_geometry(routed)?;
            let leg = extract_leg_summary(&routed.leg);
            let steps = extract_step_aggregates(&routed.leg.steps);
            Ok((ItineraryRecord::routed(leg, steps), TripGeometry::Line(line)))
        }
        DirectionsResult::Unrouted(unrouted) => {
            let record = ItineraryRecord::unrouted(
                &unrouted.status,
                unrouted.origin.clone(),
                unrouted.destination.clone(),
            );
            Ok((record, TripGeometry::Empty))
        }
    }
}

/// normalizes a batch with the default normalizer: substring AM/PM check,
/// failing on the first undecodable polyline, coordinates in the properties.
pub fn normalize_batch(
    results: &[DirectionsResult],
    expected_period: Option<ExpectedPeriod>,
) -> Result<NormalizedBatch, NormalizeError> {
    JourneyNormalizer::default().normalize_batch(results, expected_period)
}

/// transforms directions results into GeoJSON features and itinerary records.
pub struct JourneyNormalizer {
    period_check: Box<dyn DeparturePeriodCheck>,
    decode_error_policy: DecodeErrorPolicy,
    property_layout: PropertyLayout,
}

impl Default for JourneyNormalizer {
    fn default() -> Self {
        Self {
            period_check: Box::new(SubstringPeriodCheck),
            decode_error_policy: DecodeErrorPolicy::default(),
            property_layout: PropertyLayout::default(),
        }
    }
}

impl JourneyNormalizer {
    pub fn new(decode_error_policy: DecodeErrorPolicy, property_layout: PropertyLayout) -> Self {
        Self {
            decode_error_policy,
            property_layout,
            ..Default::default()
        }
    }

    /// replaces the departure period check, see [`DeparturePeriodCheck`]
    pub fn with_period_check(mut self, period_check: Box<dyn DeparturePeriodCheck>) -> Self {
        self.period_check = period_check;
        self
    }

    /// builds every record in input order, then applies the departure period
    /// check to each. every input yields exactly one feature and one record.
    pub fn normalize_batch(
        &self,
        results: &[DirectionsResult],
        expected_period: Option<ExpectedPeriod>,
    ) -> Result<NormalizedBatch, NormalizeError> {
        let mut features = Vec::with_capacity(results.len());
        let mut records = Vec::with_capacity(results.len());
        for (index, result) in results.iter().enumerate() {
            let (record, geometry) = self.build(index, result)?;
            let record = apply_period_check(record, expected_period, self.period_check.as_ref());
            features.push(feature_ops::to_feature(
                &geometry,
                &record,
                self.property_layout,
            ));
            records.push(record);
        }
        Ok(NormalizedBatch { features, records })
    }

    fn build(
        &self,
        index: usize,
        result: &DirectionsResult,
    ) -> Result<(ItineraryRecord, TripGeometry), NormalizeError> {
        let source = match build_record(result) {
            Ok(built) => return Ok(built),
            Err(source) => source,
        };
        match (self.decode_error_policy, result) {
            (DecodeErrorPolicy::Annotate, DirectionsResult::Routed(routed)) => {
                log::warn!("result {index}: {source}, writing empty geometry");
                let leg = extract_leg_summary(&routed.leg);
                let steps = extract_step_aggregates(&routed.leg.steps);
                let mut record = ItineraryRecord::routed(leg, steps);
                record.append_note(&format!("DecodeError: {source}"));
                Ok((record, TripGeometry::Empty))
            }
            _ => Err(NormalizeError::DecodeError { index, source }),
        }
    }
}

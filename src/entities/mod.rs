use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

pub mod fabric_cut;
pub mod movement;
pub mod movement_cut;
pub mod processing_delivery;
pub mod processing_order;
pub mod processing_sent_cut;
pub mod received_fabric_cut;
pub mod sequence_counter;
pub mod wage_invoice;
pub mod wage_invoice_cut;
pub mod warp;

/// Mill sites between which fabric cuts move. Cuts are minted at the
/// production site (Veerapandi); inspection and processing dispatch happen
/// at Salem.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum Location {
    Veerapandi,
    Salem,
}

impl Location {
    /// The site where freshly generated cuts are placed.
    pub const PRODUCTION: Location = Location::Veerapandi;
    /// The site a cut must have reached before it can be inspected.
    pub const INSPECTION: Location = Location::Salem;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_round_trips_through_strings() {
        assert_eq!(Location::from_str("Salem").unwrap(), Location::Salem);
        assert_eq!(Location::from_str("veerapandi").unwrap(), Location::Veerapandi);
        assert_eq!(Location::Salem.to_string(), "Salem");
    }

    #[test]
    fn unknown_location_is_rejected() {
        assert!(Location::from_str("Erode").is_err());
    }
}

//! Reservation Model

use serde::{Deserialize, Serialize};

/// A confirmed reservation with its assigned table
///
/// `time` is the minute-precision composite `YYYY-MM-DDTHH:MM` (no seconds,
/// no timezone); see [`crate::schedule::split_time`] for taking it apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub table_number: u32,
}

/// Submit reservation payload (table not yet assigned)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub time: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ReservationRequest {
    /// Promote to a confirmed reservation once a table has been assigned
    pub fn into_reservation(self, table_number: u32) -> Reservation {
        Reservation {
            time: self.time,
            guests: self.guests,
            name: self.name,
            email: self.email,
            phone: self.phone,
            table_number,
        }
    }
}

/// Successful submission response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub message: String,
    pub data: Reservation,
}

impl ReservationConfirmation {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            message: format!(
                "Reservation confirmed! You have been assigned table {}.",
                reservation.table_number
            ),
            data: reservation,
        }
    }
}

/// `GET /api/reservations` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationList {
    pub reservations: Vec<Reservation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_wire_format() {
        let reservation = Reservation {
            time: "2025-08-23T19:00".to_string(),
            guests: 2,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("123-456-7890".to_string()),
            table_number: 15,
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["time"], "2025-08-23T19:00");
        assert_eq!(json["guests"], 2);
        assert_eq!(json["tableNumber"], 15);
        assert!(json.get("table_number").is_none());
    }

    #[test]
    fn test_reservation_phone_omitted_when_absent() {
        let reservation = Reservation {
            time: "2025-08-23T19:00".to_string(),
            guests: 4,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: None,
            table_number: 3,
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_request_into_reservation() {
        let request = ReservationRequest {
            time: "2025-09-01T18:30".to_string(),
            guests: 6,
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            phone: None,
        };

        let reservation = request.into_reservation(7);
        assert_eq!(reservation.table_number, 7);
        assert_eq!(reservation.time, "2025-09-01T18:30");
        assert_eq!(reservation.guests, 6);
    }

    #[test]
    fn test_confirmation_message() {
        let reservation = ReservationRequest {
            time: "2025-09-01T18:30".to_string(),
            guests: 2,
            name: "Dave".to_string(),
            email: "dave@example.com".to_string(),
            phone: None,
        }
        .into_reservation(12);

        let confirmation = ReservationConfirmation::new(reservation);
        assert_eq!(
            confirmation.message,
            "Reservation confirmed! You have been assigned table 12."
        );
        assert_eq!(confirmation.data.table_number, 12);
    }

    #[test]
    fn test_request_deserialize_missing_phone() {
        let body = r#"{"time":"2025-09-01T18:30","guests":2,"name":"Eve","email":"eve@example.com"}"#;
        let request: ReservationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.phone, None);
        assert_eq!(request.guests, 2);
    }
}

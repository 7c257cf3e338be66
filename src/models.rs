use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month on the balance-history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePoint {
    pub month: String,
    pub balance: f64,
}

/// A credit card shown on the dashboard. Card numbers are already masked in
/// the fixture data; nothing here re-masks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub balance: f64,
    pub card_holder: String,
    pub card_number: String,
    pub valid_thru: String,
    pub card_type: String,
}

/// Whether money moved into or out of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Credit,
    Debit,
}

/// A row in the recent-transactions list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    /// Payment channel: "card", "paypal" or "transfer".
    pub transaction_type: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub direction: TransferDirection,
}

/// Deposit/withdraw totals for one day of the weekly-activity chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDay {
    pub day: String,
    pub deposit: f64,
    pub withdraw: f64,
}

/// One wedge of the expense-breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStat {
    pub label: String,
    pub percentage: f64,
}

/// A contact offered in the quick-transfer widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferContact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// The profile edited on the settings page.
///
/// Every value is kept as the string the form submitted; validation happens
/// through the field validator, not through these types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsProfile {
    pub name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub present_address: String,
    pub permanent_address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    /// Served path of the profile picture, e.g. `/uploads/<file>`.
    pub avatar: String,
}

impl SettingsProfile {
    /// Overwrite one profile field by its form name. Returns false for a
    /// name this profile does not have (the caller decides whether to log).
    pub fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "userName" => self.user_name = value,
            "email" => self.email = value,
            "password" => self.password = value,
            "dateOfBirth" => self.date_of_birth = value,
            "presentAddress" => self.present_address = value,
            "permanentAddress" => self.permanent_address = value,
            "city" => self.city = value,
            "postalCode" => self.postal_code = value,
            "country" => self.country = value,
            _ => return false,
        }
        true
    }
}

/// Body of `PUT /api/settings`: one field name and its candidate value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheckRequest {
    pub field: String,
    pub value: String,
}

/// Echo answer for `PUT /api/settings`. `error` is omitted when valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCheckResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub field: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let card = CreditCard {
            id: "card-1".to_string(),
            balance: 5756.0,
            card_holder: "Eddy Cusuma".to_string(),
            card_number: "3778 **** **** 1234".to_string(),
            valid_thru: "12/22".to_string(),
            card_type: "primary".to_string(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["cardHolder"], "Eddy Cusuma");
        assert_eq!(json["validThru"], "12/22");
        assert!(json.get("card_holder").is_none());
    }

    #[test]
    fn set_field_updates_known_names_only() {
        let mut profile = crate::mock::default_settings();
        assert!(profile.set_field("city", "Lyon".to_string()));
        assert_eq!(profile.city, "Lyon");
        assert!(!profile.set_field("shoeSize", "44".to_string()));
    }

    #[test]
    fn field_check_response_omits_error_when_valid() {
        let response = FieldCheckResponse {
            is_valid: true,
            error: None,
            field: "email".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn transfer_direction_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_value(TransferDirection::Credit).unwrap(),
            serde_json::json!("credit")
        );
    }
}

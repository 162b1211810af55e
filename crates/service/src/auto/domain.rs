use models::auto;
use sea_orm::Set;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// JSON object body as received; anything other than an object is rejected.
type Body = Map<String, Value>;

/// Tri-state read of `parking_name`: absent (`None`), JSON `null` (`Some(None)`) or a value.
///
/// Strings are kept as-is; other scalars are stored as their JSON text.
fn name_field(body: &Body) -> Result<Option<Option<String>>, String> {
    match body.get("parking_name") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(Some(v.to_string()))),
        Some(v) => Err(format!("parking_name cannot be stored: {v}")),
    }
}

/// Tri-state read of `parking_price`.
///
/// Numbers are stored as `f64`, booleans as 1.0 / 0.0, numeric strings are
/// parsed; a string that is not a finite number is stored as NULL.
fn price_field(body: &Body) -> Result<Option<Option<f64>>, String> {
    match body.get("parking_price") {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::Number(n)) => Ok(Some(n.as_f64())),
        Some(Value::Bool(b)) => Ok(Some(Some(if *b { 1.0 } else { 0.0 }))),
        Some(Value::String(s)) => Ok(Some(s.trim().parse::<f64>().ok().filter(|p| p.is_finite()))),
        Some(v) => Err(format!("parking_price cannot be stored: {v}")),
    }
}

/// Body of `POST /auto`.
///
/// Only an absent key is an error; `null` is stored as NULL and values of
/// any scalar JSON type are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(try_from = "Body")]
pub struct CreateAutoInput {
    pub parking_name: Option<Option<String>>,
    pub parking_price: Option<Option<f64>>,
}

impl TryFrom<Body> for CreateAutoInput {
    type Error = String;

    fn try_from(body: Body) -> Result<Self, Self::Error> {
        Ok(Self { parking_name: name_field(&body)?, parking_price: price_field(&body)? })
    }
}

/// Validated create payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuto {
    pub parking_name: Option<String>,
    pub parking_price: Option<f64>,
}

impl CreateAutoInput {
    pub fn validate(self) -> Result<NewAuto, ServiceError> {
        let parking_name = self.parking_name.ok_or(ServiceError::MissingField("parking_name"))?;
        let parking_price = self.parking_price.ok_or(ServiceError::MissingField("parking_price"))?;
        Ok(NewAuto { parking_name, parking_price })
    }
}

/// Body of `PUT /auto/{id}` and `PATCH /auto/{id}`: only present keys are written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Body")]
pub struct AutoChanges {
    pub parking_name: Option<Option<String>>,
    pub parking_price: Option<Option<f64>>,
}

impl TryFrom<Body> for AutoChanges {
    type Error = String;

    fn try_from(body: Body) -> Result<Self, Self::Error> {
        Ok(Self { parking_name: name_field(&body)?, parking_price: price_field(&body)? })
    }
}

impl AutoChanges {
    pub fn is_empty(&self) -> bool {
        self.parking_name.is_none() && self.parking_price.is_none()
    }

    pub fn apply(self, am: &mut auto::ActiveModel) {
        if let Some(name) = self.parking_name {
            am.parking_name = Set(name);
        }
        if let Some(price) = self.parking_price {
            am.parking_price = Set(price);
        }
    }

    /// Same merge on a plain model; used by the in-memory repository.
    pub fn apply_to_model(self, m: &mut auto::Model) {
        if let Some(name) = self.parking_name {
            m.parking_name = name;
        }
        if let Some(price) = self.parking_price {
            m.parking_price = price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveValue, IntoActiveModel};

    fn create(v: serde_json::Value) -> CreateAutoInput {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn create_requires_both_keys() {
        let err = create(serde_json::json!({"parking_name": "A"})).validate().unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("parking_price")));
        let err = create(serde_json::json!({"parking_price": 1.0})).validate().unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("parking_name")));
    }

    #[test]
    fn create_accepts_null_and_negative_values() {
        let new = create(serde_json::json!({"parking_name": null, "parking_price": -3})).validate().unwrap();
        assert_eq!(new, NewAuto { parking_name: None, parking_price: Some(-3.0) });
    }

    #[test]
    fn changes_distinguish_absent_from_null() {
        let c: AutoChanges = serde_json::from_value(serde_json::json!({"parking_name": null})).unwrap();
        assert_eq!(c.parking_name, Some(None));
        assert_eq!(c.parking_price, None);
        assert!(!c.is_empty());
        let empty: AutoChanges = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn apply_touches_only_present_keys() {
        let existing = auto::Model { auto_id: 7, parking_name: Some("Old".into()), parking_price: Some(5.0) };
        let mut am = existing.clone().into_active_model();
        AutoChanges { parking_price: Some(Some(9.5)), ..Default::default() }.apply(&mut am);
        assert_eq!(am.parking_price, ActiveValue::Set(Some(9.5)));
        assert_eq!(am.parking_name, ActiveValue::Unchanged(Some("Old".into())));

        let mut m = existing;
        AutoChanges { parking_name: Some(Some("New".into())), ..Default::default() }.apply_to_model(&mut m);
        assert_eq!(m.parking_name.as_deref(), Some("New"));
        assert_eq!(m.parking_price, Some(5.0));
    }

    #[test]
    fn create_accepts_any_scalar_type() {
        let new = create(serde_json::json!({"parking_name": 12, "parking_price": "7.25"})).validate().unwrap();
        assert_eq!(new, NewAuto { parking_name: Some("12".into()), parking_price: Some(7.25) });

        let new = create(serde_json::json!({"parking_name": true, "parking_price": "cheap"})).validate().unwrap();
        assert_eq!(new, NewAuto { parking_name: Some("true".into()), parking_price: None });

        let c: AutoChanges = serde_json::from_value(serde_json::json!({"parking_price": false})).unwrap();
        assert_eq!(c.parking_price, Some(Some(0.0)));
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        for body in [serde_json::json!(["Arr", 2.0]), serde_json::json!("Lot"), serde_json::json!(3)] {
            assert!(serde_json::from_str::<CreateAutoInput>(&body.to_string()).is_err(), "{body}");
            assert!(serde_json::from_str::<AutoChanges>(&body.to_string()).is_err(), "{body}");
        }
    }

    #[test]
    fn nested_values_are_rejected() {
        let r: Result<CreateAutoInput, _> =
            serde_json::from_value(serde_json::json!({"parking_name": ["a"], "parking_price": 1.0}));
        assert!(r.is_err());
        let r: Result<AutoChanges, _> = serde_json::from_value(serde_json::json!({"parking_price": {"eur": 1}}));
        assert!(r.is_err());
    }
}

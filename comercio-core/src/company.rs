use serde::{Deserialize, Serialize};

/// A registered company. `nit` is the external tax/registration
/// identifier and is unique at the storage level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: i32,
    pub nit: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Write shape for company create/update. Updates replace every field;
/// there are no partial/patch semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyFields {
    pub nit: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let fields: CompanyFields =
            serde_json::from_str(r#"{"nit": "900123456", "name": "Acme"}"#).unwrap();
        assert_eq!(fields.nit, "900123456");
        assert_eq!(fields.name, "Acme");
        assert_eq!(fields.address, None);
        assert_eq!(fields.phone, None);
    }

    #[test]
    fn required_fields_are_rejected_when_missing() {
        let result = serde_json::from_str::<CompanyFields>(r#"{"name": "Acme"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn company_serializes_nulls_for_absent_optionals() {
        let company = Company {
            id: 1,
            nit: "900123456".to_string(),
            name: "Acme".to_string(),
            address: None,
            phone: None,
        };
        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "nit": "900123456",
                "name": "Acme",
                "address": null,
                "phone": null,
            })
        );
    }
}

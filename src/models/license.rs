// src/models/license.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::extract::empty_as_none,
    db::{Collection, Filter},
    models::record::{not_blank, NewRecord, RecordFilter, Resource, ResourceKind},
};

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LicenseType {
    #[serde(rename = "LP")]
    Lp, // Licença Prévia
    #[serde(rename = "LI")]
    Li, // Licença de Instalação
    #[serde(rename = "LO")]
    Lo, // Licença de Operação
    #[serde(rename = "LA")]
    La, // Licença Ambiental
    #[serde(rename = "AAF")]
    Aaf, // Autorização Ambiental de Funcionamento
}

impl LicenseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Lp => "LP",
            LicenseType::Li => "LI",
            LicenseType::Lo => "LO",
            LicenseType::La => "LA",
            LicenseType::Aaf => "AAF",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LicenseStatus {
    #[serde(rename = "Ativa")]
    Active,
    #[serde(rename = "Vencida")]
    Expired,
    #[serde(rename = "Suspensa")]
    Suspended,
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "Ativa",
            LicenseStatus::Expired => "Vencida",
            LicenseStatus::Suspended => "Suspensa",
            LicenseStatus::Pending => "Pendente",
            LicenseStatus::Cancelled => "Cancelada",
        }
    }
}

// --- LICENÇA ---

// As datas são texto livre (AAAA-MM-DD por convenção), sem validação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct License {
    pub id: Uuid,
    pub number: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub title: String,
    pub company: String,
    pub cnpj: String,
    pub status: LicenseStatus,
    pub issue_date: String,
    pub expiry_date: String,
    pub issuing_body: String,
    pub activity_type: String,
    pub description: Option<String>,
    pub tenant_id: String,
    pub created_at: DateTime<Utc>,
}

impl Resource for License {
    const COLLECTION: Collection = Collection::Licenses;
    const KIND: ResourceKind = ResourceKind::License;

    fn id(&self) -> Uuid {
        self.id
    }

    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLicensePayload {
    #[schema(example = "LP001/2024-SP")]
    pub number: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub title: String,
    pub company: String,
    #[schema(example = "12.345.678/0001-90")]
    pub cnpj: String,
    pub status: LicenseStatus,
    #[schema(example = "2024-01-15")]
    pub issue_date: String,
    #[schema(example = "2025-01-15")]
    pub expiry_date: String,
    #[schema(example = "CETESB")]
    pub issuing_body: String,
    pub activity_type: String,
    #[serde(default)]
    pub description: Option<String>,

    #[validate(custom(function = "not_blank"))]
    #[schema(example = "demo-tenant")]
    pub tenant_id: String,
}

impl NewRecord for CreateLicensePayload {
    type Record = License;

    fn into_record(self, id: Uuid, created_at: DateTime<Utc>) -> License {
        License {
            id,
            number: self.number,
            license_type: self.license_type,
            title: self.title,
            company: self.company,
            cnpj: self.cnpj,
            status: self.status,
            issue_date: self.issue_date,
            expiry_date: self.expiry_date,
            issuing_body: self.issuing_body,
            activity_type: self.activity_type,
            description: self.description,
            tenant_id: self.tenant_id,
            created_at,
        }
    }
}

// GET /api/licenses?status=Ativa&type=LP
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LicenseFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<LicenseStatus>,

    #[serde(default, rename = "type", deserialize_with = "empty_as_none")]
    pub license_type: Option<LicenseType>,
}

impl RecordFilter for LicenseFilter {
    fn apply(&self, filter: Filter) -> Filter {
        filter
            .eq_opt("status", self.status.map(|s| s.as_str()))
            .eq_opt("type", self.license_type.map(|t| t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enum_wire_strings_match_mapping_table() {
        for status in [
            LicenseStatus::Active,
            LicenseStatus::Expired,
            LicenseStatus::Suspended,
            LicenseStatus::Pending,
            LicenseStatus::Cancelled,
        ] {
            assert_eq!(serde_json::to_value(status).unwrap(), json!(status.as_str()));
        }
        for kind in [
            LicenseType::Lp,
            LicenseType::Li,
            LicenseType::Lo,
            LicenseType::La,
            LicenseType::Aaf,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = serde_json::from_value::<LicenseStatus>(json!("Active"));
        assert!(err.is_err());
        assert_eq!(
            serde_json::from_value::<LicenseStatus>(json!("Pendente")).unwrap(),
            LicenseStatus::Pending
        );
    }

    #[test]
    fn filter_adds_only_present_fields() {
        let filter = LicenseFilter {
            status: Some(LicenseStatus::Active),
            license_type: None,
        };
        assert_eq!(
            filter.apply(Filter::tenant("t1")).to_document(),
            json!({ "tenant_id": "t1", "status": "Ativa" })
        );

        let filter = LicenseFilter {
            status: Some(LicenseStatus::Active),
            license_type: Some(LicenseType::Lp),
        };
        assert_eq!(
            filter.apply(Filter::tenant("t1")).to_document(),
            json!({ "tenant_id": "t1", "status": "Ativa", "type": "LP" })
        );
    }

    #[test]
    fn payload_becomes_record_with_server_fields() {
        let payload: CreateLicensePayload = serde_json::from_value(json!({
            "number": "LP001/2024-SP",
            "type": "LP",
            "title": "Licença Prévia",
            "company": "Indústria S.A.",
            "cnpj": "12.345.678/0001-90",
            "status": "Ativa",
            "issue_date": "2024-01-15",
            "expiry_date": "2025-01-15",
            "issuing_body": "CETESB",
            "activity_type": "Indústria Química",
            "tenant_id": "t1"
        }))
        .unwrap();

        let id = Uuid::new_v4();
        let now = Utc::now();
        let license = payload.into_record(id, now);

        assert_eq!(license.id, id);
        assert_eq!(license.created_at, now);
        assert_eq!(license.description, None);
        let value = serde_json::to_value(&license).unwrap();
        assert_eq!(value["type"], "LP");
        assert_eq!(value["status"], "Ativa");
        assert_eq!(value["tenant_id"], "t1");
    }
}

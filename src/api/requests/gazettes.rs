use super::{ApiRequest, Pagination, segment};
use crate::api::fields::Field;
use crate::api::query::QueryParams;
use crate::error::ValidationError;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListGazettesRequest {
    /// 公報編號，例: 1137701
    pub gazette_id: Option<String>,
    /// 卷，例: 113
    pub volume: Option<u32>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for ListGazettesRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/gazettes".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        let query = QueryParams::new()
            .with(Field::GazetteId, self.gazette_id.as_deref())
            .with(Field::Volume, self.volume)
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetGazetteRequest {
    /// 公報編號，必填，例: 1137701
    pub gazette_id: String,
}

impl ApiRequest for GetGazetteRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/gazettes/{}",
            segment("gazette_id", &self.gazette_id)?
        ))
    }
}

/// Agenda filters shared by the gazette-scoped and global agenda listings.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct ListGazetteAgendasRequest {
    /// 公報編號
    pub gazette_id: Option<String>,
    /// 卷
    pub volume: Option<u32>,
    /// 屆期
    pub term: Option<u32>,
    /// 會議日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub meeting_date: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ListGazetteAgendasRequest {
    fn filters(&self, include_gazette_id: bool) -> Result<QueryParams, ValidationError> {
        let gazette_id = self.gazette_id.as_deref().filter(|_| include_gazette_id);
        let query = QueryParams::new()
            .with(Field::GazetteId, gazette_id)
            .with(Field::Volume, self.volume)
            .with(Field::Term, self.term)
            .with_date(Field::MeetingDate, self.meeting_date.as_deref())?
            .with_list(Field::OutputFields, &self.output_fields);
        self.pagination.apply(query)
    }
}

impl ApiRequest for ListGazetteAgendasRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok("/gazette_agendas".to_string())
    }

    fn query(&self) -> Result<QueryParams, ValidationError> {
        self.filters(true)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetGazetteAgendasRequest {
    /// 公報編號，必填，例: 1137701
    pub gazette_id: String,
    /// 卷
    pub volume: Option<u32>,
    /// 屆期
    pub term: Option<u32>,
    /// 會議日期，格式 YYYY-MM-DD，須為完整日期 (只給年或年月會被拒絕)
    pub meeting_date: Option<String>,
    /// 只回傳指定欄位
    #[serde(default)]
    pub output_fields: Vec<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ApiRequest for GetGazetteAgendasRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/gazettes/{}/agendas",
            segment("gazette_id", &self.gazette_id)?
        ))
    }

    // The gazette id is already in the path.
    fn query(&self) -> Result<QueryParams, ValidationError> {
        ListGazetteAgendasRequest {
            gazette_id: None,
            volume: self.volume,
            term: self.term,
            meeting_date: self.meeting_date.clone(),
            output_fields: self.output_fields.clone(),
            pagination: self.pagination,
        }
        .filters(false)
    }
}

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetGazetteAgendaRequest {
    /// 公報議程編號，必填，例: 1137701_00001
    pub gazette_agenda_id: String,
}

impl ApiRequest for GetGazetteAgendaRequest {
    fn path(&self) -> Result<String, ValidationError> {
        Ok(format!(
            "/gazette_agendas/{}",
            segment("gazette_agenda_id", &self.gazette_agenda_id)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gazette_agendas_keep_id_in_path_only() {
        let request = GetGazetteAgendasRequest {
            gazette_id: "1137701".to_string(),
            term: Some(11),
            ..Default::default()
        };
        assert_eq!(request.path(), Ok("/gazettes/1137701/agendas".to_string()));
        let query = request.query().expect("valid request");
        assert!(!query.contains_key("公報編號"));
        assert_eq!(query.get("屆"), Some("11"));
        assert!(query.contains_key("page"));
        assert!(query.contains_key("limit"));
    }

    #[test]
    fn test_list_gazette_agendas_filters() {
        let request = ListGazetteAgendasRequest {
            gazette_id: Some("1137701".to_string()),
            meeting_date: Some("2024-03-01".to_string()),
            ..Default::default()
        };
        let query = request.query().expect("valid request");
        assert_eq!(query.get("公報編號"), Some("1137701"));
        assert_eq!(query.get("會議日期"), Some("2024-03-01"));
    }

    #[test]
    fn test_get_gazette_agenda_path() {
        let request = GetGazetteAgendaRequest {
            gazette_agenda_id: "1137701_00001".to_string(),
        };
        assert_eq!(
            request.path(),
            Ok("/gazette_agendas/1137701_00001".to_string())
        );
    }
}

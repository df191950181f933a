use serde::{Deserialize, Serialize};

use crate::model::paging::{PageQuery, Pagination};

/// Sentinel categoryId meaning "all categories".
pub const ALL_CATEGORIES: u64 = 0;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicListEnvelope {
    pub music_pagination_response: MusicPaginationResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPaginationResponse {
    pub music_dto: Vec<MusicTrack>,
    pub music_pagination: Option<Pagination>,
}

/// The category list endpoint reuses the envelope key but carries the bare
/// category array in it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicCategoryEnvelope {
    pub music_pagination_response: Vec<MusicCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicCategory {
    pub category_id: u64,
    pub category_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicTrack {
    pub id: u64,
    pub category_id: u64,
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: Option<String>,
    pub lrc: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            OrderBy::Asc => OrderBy::Desc,
            OrderBy::Desc => OrderBy::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordType {
    #[default]
    Title,
    Artist,
}

impl KeywordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordType::Title => "TITLE",
            KeywordType::Artist => "ARTIST",
        }
    }

    pub fn next(self) -> Self {
        match self {
            KeywordType::Title => KeywordType::Artist,
            KeywordType::Artist => KeywordType::Title,
        }
    }
}

/// Full filter set for the play-list endpoint. The match mode is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicQuery {
    pub paging: PageQuery,
    pub category_id: u64,
    pub keyword: String,
    pub order_by: OrderBy,
    pub keyword_type: KeywordType,
}

impl MusicQuery {
    const SEARCH_TYPE: &'static str = "LIKE";

    pub fn as_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.paging.as_params().to_vec();
        params.push(("categoryId", self.category_id.to_string()));
        params.push(("keyword", self.keyword.clone()));
        params.push(("orderBy", self.order_by.as_str().to_string()));
        params.push(("keywordType", self.keyword_type.as_str().to_string()));
        params.push(("searchType", Self::SEARCH_TYPE.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_envelope_carries_bare_list() {
        let body = serde_json::json!({
            "musicPaginationResponse": [
                { "categoryId": 1, "categoryName": "Jazz" },
                { "categoryId": 2, "categoryName": "Rock" }
            ]
        });

        let envelope: MusicCategoryEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.music_pagination_response.len(), 2);
        assert_eq!(envelope.music_pagination_response[1].category_name, "Rock");
    }

    #[test]
    fn list_envelope_parses_tracks_and_pagination() {
        let body = serde_json::json!({
            "musicPaginationResponse": {
                "musicDto": [
                    {
                        "id": 11,
                        "categoryId": 2,
                        "title": "So What",
                        "artist": "Miles Davis",
                        "url": "https://cdn/so-what.mp3",
                        "cover": "https://cdn/so-what.jpg"
                    }
                ],
                "musicPagination": { "totalRecordCount": 9, "page": 1, "pageSize": 5 }
            }
        });

        let envelope: MusicListEnvelope = serde_json::from_value(body).unwrap();
        let response = envelope.music_pagination_response;
        assert_eq!(response.music_dto.len(), 1);
        assert_eq!(response.music_dto[0].lrc, None);
        assert_eq!(response.music_pagination.map(|p| p.total_record_count), Some(9));
    }

    #[test]
    fn query_params_carry_every_filter_and_fixed_match_mode() {
        let query = MusicQuery {
            paging: PageQuery::new(2, 5, 5),
            category_id: ALL_CATEGORIES,
            keyword: "davis".to_string(),
            order_by: OrderBy::default(),
            keyword_type: KeywordType::default(),
        };

        let params = query.as_params();
        let get = |key| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("page"), Some("2"));
        assert_eq!(get("recordSize"), Some("5"));
        assert_eq!(get("categoryId"), Some("0"));
        assert_eq!(get("orderBy"), Some("ASC"));
        assert_eq!(get("keywordType"), Some("TITLE"));
        assert_eq!(get("searchType"), Some("LIKE"));
    }
}

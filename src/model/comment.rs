use serde::{Deserialize, Serialize};

use crate::model::paging::Pagination;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListEnvelope {
    pub comment_pagination_response: CommentPaginationResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPaginationResponse {
    pub comment_summary_dto: CommentSummary,
    pub comment_pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentSummary {
    pub comment_dto_list: Vec<CommentDto>,
    pub comment_count: u64,
    pub is_blog_owner: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentDto {
    pub comment_id: u64,
    pub comment_contents: String,
    pub user_nickname: String,
    pub user_profile_image: Option<String>,
    pub comment_thumbnail_image: Option<String>,
    pub is_secret: bool,
    pub is_anonymous: bool,
    pub register_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRegisterResponse {
    pub comment_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_parses_server_shape() {
        let body = serde_json::json!({
            "commentPaginationResponse": {
                "commentSummaryDto": {
                    "commentDtoList": [
                        {
                            "commentId": 7,
                            "commentContents": "first!",
                            "userNickname": "john",
                            "isSecret": true
                        }
                    ],
                    "commentCount": 25,
                    "isBlogOwner": false
                },
                "commentPagination": {
                    "totalRecordCount": 25,
                    "page": 2,
                    "pageSize": 10
                }
            }
        });

        let envelope: CommentListEnvelope = serde_json::from_value(body).unwrap();
        let response = envelope.comment_pagination_response;
        assert_eq!(response.comment_summary_dto.comment_count, 25);
        assert_eq!(response.comment_summary_dto.comment_dto_list.len(), 1);
        assert!(response.comment_summary_dto.comment_dto_list[0].is_secret);
        assert_eq!(
            response.comment_pagination.map(|p| p.total_record_count),
            Some(25)
        );
    }

    #[test]
    fn register_response_parses_count() {
        let response: CommentRegisterResponse =
            serde_json::from_str(r#"{"commentCount": 25}"#).unwrap();
        assert_eq!(response.comment_count, 25);
    }
}
